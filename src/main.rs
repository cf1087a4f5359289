use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use minutario::application::services::MeetingService;
use minutario::infrastructure::audio::TranscriptionEngineFactory;
use minutario::infrastructure::llm::SummarizerFactory;
use minutario::infrastructure::observability::{init_tracing, TracingConfig};
use minutario::infrastructure::persistence::{create_pool, PgMeetingRepository};
use minutario::infrastructure::storage::LocalAudioStore;
use minutario::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let pool = create_pool(&settings.database.url, settings.database.max_connections).await?;
    sqlx::migrate!().run(&pool).await?;

    let meeting_repository = Arc::new(PgMeetingRepository::new(pool));
    let audio_store = Arc::new(LocalAudioStore::new(settings.storage.upload_dir.clone())?);

    let transcription_engine = TranscriptionEngineFactory::create(
        settings.transcription.provider,
        &settings.transcription.remote_model,
        &settings.transcription.local_model,
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
    )?;

    let summarizer = SummarizerFactory::create(
        settings.summarization.provider,
        &settings.summarization.model,
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
    )?;

    let meeting_service = Arc::new(MeetingService::new(
        audio_store,
        transcription_engine,
        summarizer,
        meeting_repository,
    ));

    let state = AppState {
        meeting_service,
        settings: settings.clone(),
    };
    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::from((host, settings.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
