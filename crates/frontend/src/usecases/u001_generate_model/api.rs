//! Request client for the generation service

use crate::shared::api_utils::api_url;
use contracts::usecases::u001_generate_model::{GenerateReply, GenerateRequest, GENERATE_PATH};
use gloo_net::http::Request;
use thiserror::Error;

/// Why a generation attempt produced no reply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Request could not be sent or the response never arrived
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    /// Body of a successful response is not valid JSON
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl GenerateError {
    /// Text of the bot message shown in place of a reply
    pub fn user_message(&self) -> String {
        format!("⚠️ Generation failed ({})", self)
    }
}

/// Anything able to turn a prompt into a reply.
///
/// Stateless from the caller's point of view; the chat screen decides how many
/// requests run at once.
#[allow(async_fn_in_trait)]
pub trait GenerateClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateReply, GenerateError>;
}

/// `POST {base}/chat` over the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpGenerateClient {
    base: String,
}

impl HttpGenerateClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn endpoint(&self) -> String {
        api_url(&self.base, GENERATE_PATH)
    }
}

impl GenerateClient for HttpGenerateClient {
    async fn generate(&self, prompt: &str) -> Result<GenerateReply, GenerateError> {
        let url = self.endpoint();
        log::debug!("POST {} ({} chars)", url, prompt.len());

        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(&GenerateRequest::new(prompt))
            .map_err(|e| GenerateError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| GenerateError::Network(format!("Failed to fetch: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerateError::Network(format!("Failed to read response: {}", e)))?;

        log::debug!("POST {} -> {}", url, status);
        interpret_response(status, &body)
    }
}

/// Map a raw HTTP status and body onto a reply or a failure.
///
/// Only a success body that is not JSON at all is malformed. Any other shape
/// is read leniently: non-object values give an empty reply.
pub fn interpret_response(status: u16, body: &str) -> Result<GenerateReply, GenerateError> {
    if !(200..300).contains(&status) {
        return Err(GenerateError::Server {
            status,
            body: body.trim().to_string(),
        });
    }

    if body.trim().is_empty() {
        return Ok(GenerateReply::default());
    }

    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| GenerateError::MalformedReply(format!("Failed to parse response: {}", e)))?;

    match value {
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| GenerateError::MalformedReply(format!("Unexpected reply shape: {}", e))),
        serde_json::Value::Null => Ok(GenerateReply::default()),
        other => {
            log::warn!("reply is {}, not an object; treated as empty", json_kind(&other));
            Ok(GenerateReply::default())
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_model() {
        let reply =
            interpret_response(200, r#"{ "text": "done", "stlUrl": "https://x/y.stl" }"#).unwrap();
        assert_eq!(reply.text, "done");
        assert_eq!(reply.stl_url.as_deref(), Some("https://x/y.stl"));
        assert!(reply.image.is_none());
    }

    #[test]
    fn test_server_failure_keeps_status_and_body() {
        let err = interpret_response(500, "boom").unwrap_err();
        assert_eq!(
            err,
            GenerateError::Server {
                status: 500,
                body: "boom".into()
            }
        );
        let text = err.user_message();
        assert!(text.contains("500"));
        assert!(text.contains("boom"));
    }

    #[test]
    fn test_lenient_missing_fields() {
        let reply = interpret_response(200, r#"{ "image": "https://x/p.png" }"#).unwrap();
        assert_eq!(reply.text, "");
        assert_eq!(reply.image.as_deref(), Some("https://x/p.png"));
        assert!(reply.stl_url.is_none());
    }

    #[test]
    fn test_blank_and_null_bodies_are_empty_replies() {
        assert_eq!(interpret_response(200, "  ").unwrap(), GenerateReply::default());
        assert_eq!(interpret_response(204, "null").unwrap(), GenerateReply::default());
    }

    #[test]
    fn test_unparseable_body_is_malformed() {
        assert!(matches!(
            interpret_response(200, "<html>oops</html>"),
            Err(GenerateError::MalformedReply(_))
        ));
        assert!(matches!(
            interpret_response(200, r#"{ "text": "done""#),
            Err(GenerateError::MalformedReply(_))
        ));
    }

    #[test]
    fn test_non_object_json_is_empty_reply() {
        for body in [r#"[{"text":"done"}]"#, "[1, 2]", r#""done""#, "42", "true"] {
            assert_eq!(interpret_response(200, body).unwrap(), GenerateReply::default());
        }
    }

    #[test]
    fn test_wrongly_typed_field_keeps_model_url() {
        let reply = interpret_response(
            200,
            r#"{ "text": "done", "stlUrl": "https://x/y.stl", "image": 123 }"#,
        )
        .unwrap();
        assert_eq!(reply.text, "done");
        assert_eq!(reply.stl_url.as_deref(), Some("https://x/y.stl"));
        assert!(reply.image.is_none());

        let reply = interpret_response(
            200,
            r#"{ "text": 42, "stlUrl": "https://x/y.stl", "image": { "url": "https://x/p.png" } }"#,
        )
        .unwrap();
        assert_eq!(reply.text, "");
        assert_eq!(reply.stl_url.as_deref(), Some("https://x/y.stl"));
        assert!(reply.image.is_none());
    }

    #[test]
    fn test_endpoint() {
        let client = HttpGenerateClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint(), "http://localhost:8000/chat");
    }
}
