use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use minutario::application::ports::Summarizer;
use minutario::infrastructure::llm::{OpenAiSummarizer, QuotaFallbackSummarizer};

async fn start_mock_openai(status: StatusCode, body: String) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/chat/completions",
        post(move || {
            let body = body.clone();
            async move { (status, body).into_response() }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (format!("http://{}", addr), shutdown_tx)
}

fn chat_reply(content: &str) -> String {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn summarizer(base_url: &str) -> OpenAiSummarizer {
    OpenAiSummarizer::new(
        "test-key".to_string(),
        Some(base_url.to_string()),
        "gpt-4o-mini".to_string(),
    )
}

#[tokio::test]
async fn given_well_formed_json_reply_when_summarizing_then_all_fields_are_parsed() {
    let content = serde_json::json!({
        "summary": "Planning sync covering the Q3 launch.",
        "decisions": ["Launch moves to Friday"],
        "action_items": ["Bob sends the report"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_openai(StatusCode::OK, chat_reply(&content)).await;

    let result = summarizer(&base_url).summarize("transcript").await.unwrap();

    assert_eq!(result.summary, "Planning sync covering the Q3 launch.");
    assert_eq!(result.decisions, vec!["Launch moves to Friday"]);
    assert_eq!(result.action_items, vec!["Bob sends the report"]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_plain_text_reply_when_summarizing_then_it_becomes_the_summary() {
    let (base_url, shutdown_tx) =
        start_mock_openai(StatusCode::OK, chat_reply("Just a plain paragraph.")).await;

    let result = summarizer(&base_url).summarize("transcript").await.unwrap();

    assert_eq!(result.summary, "Just a plain paragraph.");
    assert!(result.decisions.is_empty());
    assert!(result.action_items.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_list_decisions_when_summarizing_then_only_that_field_is_coerced() {
    let content = serde_json::json!({
        "summary": "ok",
        "decisions": "not a list",
        "action_items": ["Ship v2"]
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_openai(StatusCode::OK, chat_reply(&content)).await;

    let result = summarizer(&base_url).summarize("transcript").await.unwrap();

    assert_eq!(result.summary, "ok");
    assert!(result.decisions.is_empty());
    assert_eq!(result.action_items, vec!["Ship v2"]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_empty_json_object_reply_when_summarizing_then_fields_default_to_empty() {
    let (base_url, shutdown_tx) = start_mock_openai(StatusCode::OK, chat_reply("{}")).await;

    let result = summarizer(&base_url).summarize("transcript").await.unwrap();

    assert_eq!(result.summary, "");
    assert!(result.decisions.is_empty());
    assert!(result.action_items.is_empty());
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_string_list_elements_when_summarizing_then_they_are_dropped() {
    let content = serde_json::json!({
        "summary": "ok",
        "decisions": ["keep this", 42, null],
        "action_items": []
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_openai(StatusCode::OK, chat_reply(&content)).await;

    let result = summarizer(&base_url).summarize("transcript").await.unwrap();

    assert_eq!(result.decisions, vec!["keep this"]);
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_quota_error_when_summarizing_with_fallback_then_heuristic_answers() {
    let error_body = serde_json::json!({
        "error": {
            "code": "insufficient_quota",
            "message": "You exceeded your current quota, please check your plan and billing details."
        }
    })
    .to_string();
    let (base_url, shutdown_tx) =
        start_mock_openai(StatusCode::TOO_MANY_REQUESTS, error_body).await;

    let fallback = QuotaFallbackSummarizer::new(Arc::new(summarizer(&base_url)));
    let transcript = "We agreed to ship on Friday. Dana will update the roadmap by Tuesday.";
    let result = fallback.summarize(transcript).await.unwrap();

    assert_eq!(result.decisions, vec!["We agreed to ship on Friday."]);
    assert_eq!(
        result.action_items,
        vec!["Dana will update the roadmap by Tuesday."]
    );
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_quota_error_when_summarizing_with_fallback_then_error_propagates() {
    let error_body = serde_json::json!({
        "error": {"code": "invalid_api_key", "message": "Incorrect API key provided."}
    })
    .to_string();
    let (base_url, shutdown_tx) = start_mock_openai(StatusCode::UNAUTHORIZED, error_body).await;

    let fallback = QuotaFallbackSummarizer::new(Arc::new(summarizer(&base_url)));
    let result = fallback.summarize("transcript").await;

    let err = result.unwrap_err();
    assert!(!err.is_quota_exhausted());
    assert!(err.to_string().contains("invalid_api_key"));
    shutdown_tx.send(()).ok();
}
