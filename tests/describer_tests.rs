//! Description adapter integration tests
//!
//! Run against a local wiremock server speaking the chat completions API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use alt_scribe::application::ports::{
    ClipboardError, ClipboardReader, ClipboardWriter, Describer, DescriptionError,
};
use alt_scribe::application::{
    AltTextCallbacks, AltTextInput, AltTextOutcome, GenerateAltTextUseCase,
};
use alt_scribe::domain::content::{ClipboardContent, ContentKind, ImageBitmap};
use alt_scribe::domain::description::DescriptionRequest;
use alt_scribe::infrastructure::notification::NoOpNotifier;
use alt_scribe::infrastructure::{NoOpCopyTrigger, OpenAiDescriber};

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

fn describer_for(server: &MockServer) -> OpenAiDescriber {
    OpenAiDescriber::new("test-key").with_base_url(server.uri())
}

fn text_request(text: &str) -> DescriptionRequest {
    DescriptionRequest::from_content(ClipboardContent::Text(text.to_string())).unwrap()
}

fn image_request() -> DescriptionRequest {
    let image = ImageBitmap::from_rgba(1, 1, vec![0, 128, 255, 255]).unwrap();
    DescriptionRequest::from_content(ClipboardContent::Image(image)).unwrap()
}

#[tokio::test]
async fn describe_text_returns_trimmed_first_choice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_string_contains("\"max_tokens\":100"))
        .and(body_string_contains("The quick brown fox"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  A fox jumps.  ")))
        .expect(1)
        .mount(&server)
        .await;

    let text = describer_for(&server)
        .describe(&text_request("The quick brown fox"))
        .await
        .unwrap();

    assert_eq!(text, "A fox jumps.");
}

#[tokio::test]
async fn describe_image_sends_data_uri() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("image_url"))
        .and(body_string_contains("data:image/png;base64,"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("A blue square.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = describer_for(&server)
        .describe(&image_request())
        .await
        .unwrap();

    assert_eq!(text, "A blue square.");
}

#[tokio::test]
async fn describe_uses_configured_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("\"model\":\"gpt-4o-mini\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let describer = describer_for(&server).with_model("gpt-4o-mini");
    assert_eq!(describer.describe(&text_request("hi")).await.unwrap(), "ok");
}

#[tokio::test]
async fn unauthorized_maps_to_invalid_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = describer_for(&server)
        .describe(&text_request("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, DescriptionError::InvalidApiKey));
}

#[tokio::test]
async fn too_many_requests_maps_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = describer_for(&server)
        .describe(&text_request("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, DescriptionError::RateLimited));
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = describer_for(&server)
        .describe(&text_request("hello"))
        .await
        .unwrap_err();

    match err {
        DescriptionError::ApiError(message) => assert!(message.contains("upstream exploded")),
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn no_choices_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = describer_for(&server)
        .describe(&text_request("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, DescriptionError::EmptyResponse));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = describer_for(&server)
        .describe(&text_request("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, DescriptionError::ParseError(_)));
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let describer = OpenAiDescriber::new("test-key").with_base_url("http://127.0.0.1:1");

    let err = describer.describe(&text_request("hello")).await.unwrap_err();

    assert!(matches!(err, DescriptionError::RequestFailed(_)));
}

/// In-memory clipboard shared between reader and writer
#[derive(Clone, Default)]
struct MemoryClipboard {
    content: Arc<Mutex<ClipboardContent>>,
    written: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    fn holding(content: ClipboardContent) -> Self {
        Self {
            content: Arc::new(Mutex::new(content)),
            written: Arc::default(),
        }
    }

    fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardReader for MemoryClipboard {
    async fn read(&self) -> Result<ClipboardContent, ClipboardError> {
        Ok(self.content.lock().unwrap().clone())
    }
}

#[async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.lock().unwrap().push(text.to_string());
        *self.content.lock().unwrap() = ClipboardContent::Text(text.to_string());
        Ok(())
    }
}

fn quiet_input() -> AltTextInput {
    AltTextInput {
        trigger_copy: false,
        copy_delay: Duration::ZERO,
        enable_notify: false,
    }
}

#[tokio::test]
async fn workflow_replaces_clipboard_text_with_description() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("  A fox jumps.  ")))
        .expect(1)
        .mount(&server)
        .await;

    let clipboard =
        MemoryClipboard::holding(ClipboardContent::Text("The quick brown fox".to_string()));
    let use_case = GenerateAltTextUseCase::new(
        NoOpCopyTrigger::new(),
        clipboard.clone(),
        clipboard.clone(),
        describer_for(&server),
        NoOpNotifier,
    );

    let outcome = use_case
        .execute(quiet_input(), AltTextCallbacks::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AltTextOutcome::Copied {
            kind: ContentKind::Text,
            text: "A fox jumps.".to_string(),
        }
    );
    assert_eq!(clipboard.written(), vec!["A fox jumps.".to_string()]);
}

#[tokio::test]
async fn workflow_leaves_clipboard_alone_on_api_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let clipboard = MemoryClipboard::holding(ClipboardContent::Text("keep me".to_string()));
    let use_case = GenerateAltTextUseCase::new(
        NoOpCopyTrigger::new(),
        clipboard.clone(),
        clipboard.clone(),
        describer_for(&server),
        NoOpNotifier,
    );

    let outcome = use_case
        .execute(quiet_input(), AltTextCallbacks::default())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        AltTextOutcome::DescriptionFailed {
            kind: ContentKind::Text
        }
    );
    assert!(clipboard.written().is_empty());
}

#[tokio::test]
async fn workflow_skips_request_for_empty_clipboard() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let clipboard = MemoryClipboard::default();
    let use_case = GenerateAltTextUseCase::new(
        NoOpCopyTrigger::new(),
        clipboard.clone(),
        clipboard.clone(),
        describer_for(&server),
        NoOpNotifier,
    );

    let outcome = use_case
        .execute(quiet_input(), AltTextCallbacks::default())
        .await
        .unwrap();

    assert_eq!(outcome, AltTextOutcome::NoContent);
    assert!(clipboard.written().is_empty());
}
