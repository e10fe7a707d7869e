//! Recommendation HTTP Client
//!
//! `POST`s the candidate payload as JSON and parses the item list.

use std::error::Error as _;

use async_trait::async_trait;
use recommend_core::{parse_recommendations, Recommendation, RecommendError, RecommendationApi, RecommendationRequest};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpRecommendationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRecommendationApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into() }
    }
}

/// reqwest's message plus its source chain; in the browser the fetch
/// failure text ("Failed to fetch") only lives in the source.
fn transport_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[async_trait(?Send)]
impl RecommendationApi for HttpRecommendationApi {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        debug!(endpoint = %self.endpoint, "posting recommendation request");

        // `.json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(self.endpoint.as_str())
            .json(request)
            .send()
            .await
            .map_err(|e| RecommendError::Network(transport_message(&e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::RequestFailed { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecommendError::Network(transport_message(&e)))?;
        parse_recommendations(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recommend_core::CandidateForm;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// True once the headers and `content-length` bytes of body have arrived
    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    /// One-shot HTTP server: answers the first request with `status` and
    /// `body`, and hands back the raw request it received.
    async fn serve_once(
        status: &'static str,
        content_type: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&raw) {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: {}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                content_type,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&raw).into_owned()
        });

        (format!("http://{}/recommend", addr), handle)
    }

    fn make_request() -> RecommendationRequest {
        CandidateForm {
            education: "b.tech".to_string(),
            skills: "python, sql".to_string(),
            sector_interests: "IT".to_string(),
            location: "Pune".to_string(),
        }
        .to_request()
    }

    #[tokio::test]
    async fn test_posts_json_and_parses_items() {
        let (endpoint, server) = serve_once(
            "200 OK",
            "application/json",
            r#"[{"title": "Data Intern", "stipend": 1500}]"#,
        )
        .await;
        let api = HttpRecommendationApi::new(endpoint);

        let items = api.recommend(&make_request()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Data Intern"));
        assert_eq!(items[0].stipend, Some(1500.0));

        let raw = server.await.unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let head = head.to_ascii_lowercase();
        assert!(head.starts_with("post /recommend http/1.1"));
        assert!(head.contains("content-type: application/json"));

        let body: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "qualification": "b.tech",
                "skills": "python, sql",
                "sector_interested": "IT",
                "location_interested": "Pune",
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_request_failed() {
        let (endpoint, server) =
            serve_once("500 Internal Server Error", "application/json", r#"{"detail": "boom"}"#).await;
        let api = HttpRecommendationApi::new(endpoint);

        let err = api.recommend(&make_request()).await.unwrap_err();
        assert_eq!(err, RecommendError::RequestFailed { status: 500 });
        assert_eq!(err.display_text(), "Error: Something went wrong with the request.");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_html_success_body_is_malformed() {
        let (endpoint, server) =
            serve_once("200 OK", "text/html", "<html><body>Maintenance</body></html>").await;
        let api = HttpRecommendationApi::new(endpoint);

        let err = api.recommend(&make_request()).await.unwrap_err();
        assert!(matches!(err, RecommendError::MalformedResponse(_)));
        assert!(err.display_text().starts_with("Error: "));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_invalid_endpoint_reports_cause() {
        let api = HttpRecommendationApi::new("not a url");

        let err = api.recommend(&make_request()).await.unwrap_err();
        let RecommendError::Network(message) = &err else {
            panic!("expected a network error, got {:?}", err);
        };
        // url's parse error sits in the source chain, not in reqwest's own text
        assert!(message.contains("relative URL without a base"), "{}", message);
    }
}
