// SPDX-License-Identifier: MPL-2.0
//! Live scoring client.
//!
//! [`ScoringClient`] is the seam between the resolver and the network;
//! [`MeaningCloudClient`] is the production implementation.

use crate::config::AnalysisConfig;
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Provider status code for a successful request.
const STATUS_OK: &str = "0";

/// Classifies text through an external provider.
#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Returns the raw `score_tag` field, or `None` when the provider omits it.
    async fn classify(&self, text: &str) -> Result<Option<String>>;
}

/// Provider status block.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProviderStatus {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub msg: String,
}

/// The subset of the provider response we read.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoreResponse {
    #[serde(default)]
    pub score_tag: Option<String>,
    #[serde(default)]
    pub status: Option<ProviderStatus>,
}

impl ScoreResponse {
    /// Converts a decoded response into the `score_tag`, surfacing a
    /// non-zero provider status as [`Error::Api`].
    pub fn into_score_tag(self) -> Result<Option<String>> {
        if let Some(status) = self.status {
            if !status.code.is_empty() && status.code != STATUS_OK {
                return Err(Error::Api {
                    code: status.code,
                    message: status.msg,
                });
            }
        }
        Ok(self.score_tag)
    }
}

/// Parses a raw response body.
pub fn parse_response(body: &str) -> Result<Option<String>> {
    let response: ScoreResponse = serde_json::from_str(body)?;
    response.into_score_tag()
}

/// MeaningCloud sentiment-2.1 client.
pub struct MeaningCloudClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
}

impl MeaningCloudClient {
    /// Builds a client from the analysis settings.
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
        })
    }
}

#[async_trait]
impl ScoringClient for MeaningCloudClient {
    async fn classify(&self, text: &str) -> Result<Option<String>> {
        if self.api_key.is_empty() {
            tracing::warn!("no API key configured, the provider will likely reject the request");
        }

        let form = [
            ("key", self.api_key.as_str()),
            ("txt", text),
            ("lang", self.language.as_str()),
        ];

        tracing::debug!(endpoint = %self.endpoint, chars = text.chars().count(), "posting text for scoring");

        let response = self
            .http
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_has_no_score_tag() {
        assert_eq!(parse_response("{}").unwrap(), None);
    }

    #[test]
    fn score_tag_is_extracted() {
        let body = r#"{"status":{"code":"0","msg":"OK"},"score_tag":"P+","agreement":"AGREEMENT"}"#;
        assert_eq!(parse_response(body).unwrap(), Some("P+".to_string()));
    }

    #[test]
    fn non_zero_status_is_api_error() {
        let body = r#"{"status":{"code":"100","msg":"Operation denied"}}"#;
        match parse_response(body) {
            Err(Error::Api { code, message }) => {
                assert_eq!(code, "100");
                assert_eq!(message, "Operation denied");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn non_json_body_is_parse_error() {
        assert!(matches!(parse_response("<html>"), Err(Error::Parse(_))));
    }

    #[test]
    fn non_object_json_is_parse_error() {
        assert!(matches!(parse_response("[1, 2]"), Err(Error::Parse(_))));
    }

    #[test]
    fn client_builds_from_default_config() {
        let client = MeaningCloudClient::new(&AnalysisConfig::default());
        assert!(client.is_ok());
    }

    mod over_http {
        use super::*;
        use crate::sentiment::{RandomPicker, Resolver, Sentiment};
        use std::sync::Arc;
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;
        use tokio::task::JoinHandle;

        /// Serves a single HTTP request with a canned response and yields
        /// the raw request it received.
        async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
            let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
            let addr = listener.local_addr().expect("local addr");

            let handle = tokio::spawn(async move {
                let (mut socket, _) = listener.accept().await.expect("accept");
                let mut raw = Vec::new();
                let mut chunk = [0u8; 1024];
                loop {
                    let read = socket.read(&mut chunk).await.expect("read request");
                    if read == 0 {
                        break;
                    }
                    raw.extend_from_slice(&chunk[..read]);
                    if request_complete(&raw) {
                        break;
                    }
                }

                let response = format!(
                    "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(response.as_bytes()).await.expect("write response");
                socket.shutdown().await.ok();
                String::from_utf8_lossy(&raw).into_owned()
            });

            (format!("http://{addr}/sentiment-2.1"), handle)
        }

        /// Headers received and the body is as long as `content-length` says.
        fn request_complete(raw: &[u8]) -> bool {
            let text = String::from_utf8_lossy(raw);
            let Some((head, body)) = text.split_once("\r\n\r\n") else {
                return false;
            };
            let length = head
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            body.len() >= length
        }

        fn live_config(endpoint: String) -> AnalysisConfig {
            AnalysisConfig {
                test_mode: false,
                api_key: "k1".into(),
                endpoint,
                ..AnalysisConfig::default()
            }
        }

        #[tokio::test]
        async fn classify_posts_form_and_reads_score_tag() {
            let (endpoint, server) =
                serve_once("HTTP/1.1 200 OK", r#"{"status":{"code":"0","msg":"OK"},"score_tag":"P"}"#).await;
            let client = MeaningCloudClient::new(&live_config(endpoint)).expect("client");

            let tag = client.classify("I love this").await.expect("classify");
            assert_eq!(tag.as_deref(), Some("P"));

            let request = server.await.expect("server task");
            assert!(request.starts_with("POST /sentiment-2.1 HTTP/1.1\r\n"), "{request}");
            assert!(request
                .to_ascii_lowercase()
                .contains("content-type: application/x-www-form-urlencoded"));
            assert!(request.ends_with("\r\n\r\nkey=k1&txt=I+love+this&lang=en"), "{request}");
        }

        #[tokio::test]
        async fn server_error_status_is_http_error() {
            let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
            let client = MeaningCloudClient::new(&live_config(endpoint)).expect("client");

            let result = client.classify("anything").await;
            assert!(matches!(result, Err(Error::Http(_))), "{result:?}");
            server.await.expect("server task");
        }

        #[tokio::test]
        async fn resolver_turns_server_error_into_undetermined() {
            let (endpoint, server) = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
            let config = live_config(endpoint);
            let client = MeaningCloudClient::new(&config).expect("client");
            let resolver = Resolver::new(&config, Arc::new(client), Arc::new(RandomPicker::seeded(7)));

            assert_eq!(resolver.resolve("anything").await, Sentiment::Undetermined);
            server.await.expect("server task");
        }

        #[tokio::test]
        async fn resolver_maps_live_score_tag() {
            let (endpoint, server) =
                serve_once("HTTP/1.1 200 OK", r#"{"status":{"code":"0","msg":"OK"},"score_tag":"N+"}"#).await;
            let config = live_config(endpoint);
            let client = MeaningCloudClient::new(&config).expect("client");
            let resolver = Resolver::new(&config, Arc::new(client), Arc::new(RandomPicker::seeded(7)));

            assert_eq!(resolver.resolve("awful").await, Sentiment::VeryNegative);
            server.await.expect("server task");
        }
    }
}
