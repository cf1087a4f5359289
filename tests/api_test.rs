use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use minutario::application::ports::{
    MeetingRepository, RepositoryError, TranscriptionEngine, TranscriptionError,
};
use minutario::application::services::MeetingService;
use minutario::domain::{Meeting, MeetingId, MeetingSummary};
use minutario::infrastructure::llm::HeuristicSummarizer;
use minutario::infrastructure::storage::LocalAudioStore;
use minutario::presentation::{create_router, AppState, Settings};

const TRANSCRIPT: &str = "We decided to launch Friday. Bob will send the report by Monday. \
                          It was a short meeting.";

struct MockTranscriptionEngine {
    reply: Result<&'static str, &'static str>,
}

#[async_trait]
impl TranscriptionEngine for MockTranscriptionEngine {
    async fn transcribe(&self, _audio_path: &Path) -> Result<String, TranscriptionError> {
        match self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(message) => Err(TranscriptionError::ApiRequestFailed(message.to_string())),
        }
    }
}

#[derive(Default)]
struct InMemoryMeetingRepository {
    meetings: Mutex<Vec<Meeting>>,
}

#[async_trait]
impl MeetingRepository for InMemoryMeetingRepository {
    async fn create(&self, meeting: &Meeting) -> Result<(), RepositoryError> {
        self.meetings.lock().unwrap().push(meeting.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: MeetingId) -> Result<Option<Meeting>, RepositoryError> {
        Ok(self
            .meetings
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Meeting>, RepositoryError> {
        let mut meetings: Vec<Meeting> = self.meetings.lock().unwrap().clone();
        meetings.reverse();
        Ok(meetings)
    }
}

fn build_app(
    engine: MockTranscriptionEngine,
    repository: Arc<InMemoryMeetingRepository>,
    upload_dir: &Path,
) -> Router {
    let store = Arc::new(LocalAudioStore::new(upload_dir.to_path_buf()).unwrap());
    let service = Arc::new(MeetingService::new(
        store,
        Arc::new(engine),
        Arc::new(HeuristicSummarizer),
        repository,
    ));
    create_router(AppState {
        meeting_service: service,
        settings: Settings::default(),
    })
}

fn upload_request(filename: Option<&str>, content: &[u8]) -> Request<Body> {
    let boundary = "meeting-upload-test";
    let disposition = match filename {
        Some(name) => format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            name
        ),
        None => "Content-Disposition: form-data; name=\"file\"\r\n".to_string(),
    };

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\n{}Content-Type: application/octet-stream\r\n\r\n",
            boundary, disposition
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    Request::builder()
        .method("POST")
        .uri("/api/meetings/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_a_running_app_when_probing_health_then_status_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let response = app
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let body = response_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn given_an_audio_upload_when_ingesting_then_meeting_is_summarized_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::default());
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::clone(&repository),
        dir.path(),
    );

    let response = app
        .oneshot(upload_request(Some("standup.wav"), b"fake audio bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["filename"], "standup.wav");
    assert_eq!(body["transcript"], TRANSCRIPT);
    assert_eq!(body["decisions"][0], "We decided to launch Friday.");
    assert_eq!(body["action_items"][0], "Bob will send the report by Monday.");

    let stored = repository.meetings.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].filename, "standup.wav");
}

#[tokio::test]
async fn given_an_unsupported_extension_when_uploading_then_415_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let response = app
        .oneshot(upload_request(Some("notes.txt"), b"hello"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Unsupported audio format"));
}

#[tokio::test]
async fn given_a_missing_filename_when_uploading_then_400_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let response = app
        .oneshot(upload_request(None, b"fake audio bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_a_failing_transcription_when_uploading_then_502_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine {
            reply: Err("status 500: upstream exploded"),
        },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let response = app
        .oneshot(upload_request(Some("standup.wav"), b"fake audio bytes"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Transcription failed"));
}

#[tokio::test]
async fn given_persisted_meetings_when_listing_then_newest_comes_first() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::default());
    for name in ["first.wav", "second.wav"] {
        let meeting = Meeting::new(
            name.to_string(),
            "transcript".to_string(),
            MeetingSummary::default(),
        );
        repository.create(&meeting).await.unwrap();
    }
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::clone(&repository),
        dir.path(),
    );

    let response = app
        .oneshot(Request::get("/api/meetings").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["filename"], "second.wav");
    assert_eq!(body[1]["filename"], "first.wav");
}

#[tokio::test]
async fn given_a_meeting_id_when_fetching_then_the_meeting_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let repository = Arc::new(InMemoryMeetingRepository::default());
    let meeting = Meeting::new(
        "sync.mp3".to_string(),
        "transcript".to_string(),
        MeetingSummary::new(
            "Short sync.".to_string(),
            vec!["Decided to ship".to_string()],
            Vec::new(),
        ),
    );
    repository.create(&meeting).await.unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::clone(&repository),
        dir.path(),
    );

    let uri = format!("/api/meetings/{}", meeting.id.as_uuid());
    let response = app
        .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["filename"], "sync.mp3");
    assert_eq!(body["summary"], "Short sync.");
    assert_eq!(body["decisions"][0], "Decided to ship");
}

#[tokio::test]
async fn given_an_unknown_meeting_id_when_fetching_then_404_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let uri = format!("/api/meetings/{}", uuid::Uuid::new_v4());
    let response = app
        .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_a_malformed_meeting_id_when_fetching_then_400_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_app(
        MockTranscriptionEngine { reply: Ok(TRANSCRIPT) },
        Arc::new(InMemoryMeetingRepository::default()),
        dir.path(),
    );

    let response = app
        .oneshot(
            Request::get("/api/meetings/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
