use crate::{
    config::Config,
    errors::{TalkError, TalkResult},
};
use log::{debug, info};
use reqwest::header::CONTENT_TYPE;
use serde_json::json;

/// One-shot request/response exchange with the configured chat endpoint.
/// No retries, no coalescing, no cancellation: each `send` issues exactly
/// one request and runs it to completion or failure.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    message_url: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            message_url: config.message_url(),
        }
    }

    /// Posts `{"message": text}` and resolves with the raw response body as
    /// UTF-8 text. The body is deliberately not validated against any schema:
    /// whatever the server sends back, including its own error pages, is the
    /// bot's reply verbatim.
    pub async fn send(&self, text: &str) -> TalkResult<String> {
        let payload = json!({ "message": text });

        debug!("POST {} ({} chars)", self.message_url, text.len());
        let response = self
            .client
            .post(&self.message_url)
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(payload.to_string())
            .send()
            .await
            .map_err(|e| TalkError::network_error(format!("request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TalkError::network_error(format!("failed to read response: {}", e)))?;

        info!("chat endpoint answered {} ({} bytes)", status, body.len());

        String::from_utf8(body.to_vec())
            .map_err(|e| TalkError::decode_error(format!("response is not valid UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> ChatClient {
        let config = Config {
            base_url: server.uri(),
            ..Config::default()
        };
        ChatClient::new(&config)
    }

    #[tokio::test]
    async fn test_request_shape() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/message"))
            .and(header("content-type", "application/json; charset=utf-8"))
            .and(body_json(serde_json::json!({ "message": "hello" })))
            .respond_with(ResponseTemplate::new(200).set_body_string("hi back"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server).send("hello").await.unwrap();
        assert_eq!(reply, "hi back");
    }

    #[tokio::test]
    async fn test_non_json_body_returned_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/message"))
            .respond_with(ResponseTemplate::new(200).set_body_string("plain text, not JSON {"))
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server).send("anything").await.unwrap();
        assert_eq!(reply, "plain text, not JSON {");
    }

    #[tokio::test]
    async fn test_server_error_page_is_still_the_reply() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/message"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        // Status is not inspected: the body text is the reply, full stop.
        let reply = client_for(&mock_server).send("anything").await.unwrap();
        assert_eq!(reply, "<html>oops</html>");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_a_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/message"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0x80]))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).send("anything").await.unwrap_err();
        assert!(matches!(err, TalkError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_network_error() {
        let config = Config {
            // Port 1 is reserved and closed on any sane host.
            base_url: "http://127.0.0.1:1".to_string(),
            ..Config::default()
        };
        let client = ChatClient::new(&config);

        let err = client.send("test").await.unwrap_err();
        assert!(matches!(err, TalkError::Network(_)));
    }
}
