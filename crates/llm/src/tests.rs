use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::truncate;
use crate::prompt::{LAST_TOUCH_TEMPLATE, system_prompt};
use crate::{LlmClient, LlmError, QuerySynthesizer, SqlSynthesizer};

fn completion(content: &str) -> Value {
    json!({
        "choices": [{
            "message": { "role": "assistant", "content": content }
        }]
    })
}

#[expect(clippy::unwrap_used, reason = "test code")]
fn synthesizer_for(server: &MockServer) -> QuerySynthesizer {
    let client = LlmClient::new("test-key".to_owned(), format!("{}/", server.uri())).unwrap();
    QuerySynthesizer::new(client.with_model("test-model".to_owned()))
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn sends_deterministic_request_with_system_prompt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "temperature": 0.0,
            "max_tokens": 600
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("SELECT 1")))
        .expect(1)
        .mount(&server)
        .await;

    let sql = synthesizer_for(&server).synthesize("Top 10 markov campaigns").await.unwrap();
    assert_eq!(sql, "SELECT 1");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["role"], "system");
    assert_eq!(messages[0]["content"], system_prompt());
    assert_eq!(messages[1]["role"], "user");
    assert_eq!(messages[1]["content"], "Top 10 markov campaigns");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn max_tokens_override_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "max_tokens": 128 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("SELECT 2")))
        .expect(1)
        .mount(&server)
        .await;

    let sql = synthesizer_for(&server).with_max_tokens(128).synthesize("q").await.unwrap();
    assert_eq!(sql, "SELECT 2");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn fenced_output_is_stripped() {
    let server = MockServer::start().await;
    let fenced = format!("```sql\n{LAST_TOUCH_TEMPLATE}\n```");
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&fenced)))
        .mount(&server)
        .await;

    let sql = synthesizer_for(&server)
        .synthesize("Top 15 last-touch campaigns by revenue")
        .await
        .unwrap();
    assert_eq!(sql, LAST_TOUCH_TEMPLATE);
    assert!(!sql.contains("```"));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn prose_is_passed_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion("  I cannot answer that.  ")),
        )
        .mount(&server)
        .await;

    let sql = synthesizer_for(&server).synthesize("what's the weather").await.unwrap();
    assert_eq!(sql, "I cannot answer that.");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn unauthorized_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API Key"))
        .expect(1)
        .mount(&server)
        .await;

    let err = synthesizer_for(&server).synthesize("q").await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Invalid API Key"));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let err = synthesizer_for(&server).synthesize("q").await.unwrap_err();
    assert!(matches!(err, LlmError::HttpStatus { code: 503, .. }));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn empty_choices_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = synthesizer_for(&server).synthesize("q").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn null_content_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })))
        .mount(&server)
        .await;

    let err = synthesizer_for(&server).synthesize("q").await.unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn unparsable_body_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = synthesizer_for(&server).synthesize("q").await.unwrap_err();
    assert!(matches!(err, LlmError::JsonParse { .. }));
    assert!(err.to_string().contains("<html>gateway</html>"));
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn unreachable_endpoint_is_a_request_error() {
    let client = LlmClient::new("k".to_owned(), "http://127.0.0.1:1".to_owned()).unwrap();
    let err = QuerySynthesizer::new(client).synthesize("q").await.unwrap_err();
    assert!(matches!(err, LlmError::HttpRequest(_)));
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn debug_output_hides_api_key() {
    let client = LlmClient::new("secret-key".to_owned(), "http://localhost:1".to_owned()).unwrap();
    let rendered = format!("{client:?}");
    assert!(!rendered.contains("secret-key"));
    assert!(rendered.contains("***"));
}

#[test]
#[expect(clippy::unwrap_used, reason = "test code")]
fn base_url_trailing_slash_is_trimmed() {
    let client = LlmClient::new("k".to_owned(), "https://api.groq.com/openai/".to_owned()).unwrap();
    assert_eq!(client.base_url(), "https://api.groq.com/openai");
    assert_eq!(client.model(), subintel_core::DEFAULT_MODEL);
}

#[test]
fn test_truncate_within_limit() {
    assert_eq!(truncate("hello", 10), "hello");
}

#[test]
fn test_truncate_exceeds_limit() {
    assert_eq!(truncate("hello world", 5), "hello");
}

#[test]
fn test_truncate_unicode_boundary() {
    let result = truncate("привет", 3);
    assert_eq!(result, "п");
}
