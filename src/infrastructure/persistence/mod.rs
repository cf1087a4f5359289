mod pg_meeting_repository;
mod pg_pool;

pub use pg_meeting_repository::PgMeetingRepository;
pub use pg_pool::create_pool;
