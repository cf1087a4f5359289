mod audio_format;
mod meeting;
mod meeting_summary;

pub use audio_format::AudioFormat;
pub use meeting::{Meeting, MeetingId};
pub use meeting_summary::MeetingSummary;
