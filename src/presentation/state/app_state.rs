use std::sync::Arc;

use crate::application::services::MeetingService;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub meeting_service: Arc<MeetingService>,
    pub settings: Settings,
}
