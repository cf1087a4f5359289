mod health;
mod meetings;
mod upload_meeting;

pub use health::health_handler;
pub use meetings::{get_meeting_handler, list_meetings_handler, MeetingResponse};
pub use upload_meeting::upload_meeting_handler;
