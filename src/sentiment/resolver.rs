// SPDX-License-Identifier: MPL-2.0
//! Sentiment resolution.
//!
//! [`Resolver::resolve`] always yields a [`Sentiment`]: transport, parse,
//! provider and timeout failures are logged and degrade to
//! [`Sentiment::Undetermined`].

use super::client::{MeaningCloudClient, ScoringClient};
use super::mock::{MockPicker, RandomPicker};
use super::Sentiment;
use crate::config::{AnalysisConfig, Config};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Where a resolution is answered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Call the external provider.
    Live,
    /// Sleep, then draw a random determinate sentiment.
    Mock,
}

impl Mode {
    #[must_use]
    pub fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Mode::Mock
        } else {
            Mode::Live
        }
    }
}

/// Mode-aware sentiment resolution. Cheap to clone.
#[derive(Clone)]
pub struct Resolver {
    mode: Mode,
    client: Arc<dyn ScoringClient>,
    picker: Arc<dyn MockPicker>,
    mock_latency: Duration,
    request_timeout: Duration,
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("mode", &self.mode)
            .field("mock_latency", &self.mock_latency)
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Builds a resolver with injected collaborators.
    pub fn new(
        config: &AnalysisConfig,
        client: Arc<dyn ScoringClient>,
        picker: Arc<dyn MockPicker>,
    ) -> Self {
        Self {
            mode: Mode::from_test_mode(config.test_mode),
            client,
            picker,
            mock_latency: config.mock_latency(),
            request_timeout: config.request_timeout(),
        }
    }

    /// Builds the production resolver: MeaningCloud client and an
    /// entropy-seeded random picker.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = MeaningCloudClient::new(&config.analysis)?;
        Ok(Self::new(
            &config.analysis,
            Arc::new(client),
            Arc::new(RandomPicker::from_entropy()),
        ))
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn mock_latency(&self) -> Duration {
        self.mock_latency
    }

    /// Resolves `text` into a sentiment. Never fails.
    pub async fn resolve(&self, text: &str) -> Sentiment {
        match self.mode {
            Mode::Mock => {
                tokio::time::sleep(self.mock_latency).await;
                let sentiment = self.picker.pick();
                tracing::debug!(%sentiment, "mock sentiment drawn");
                sentiment
            }
            Mode::Live => match self.resolve_live(text).await {
                Ok(sentiment) => {
                    tracing::info!(%sentiment, "sentiment resolved");
                    sentiment
                }
                Err(err) => {
                    tracing::warn!(kind = err.kind(), error = %err, "sentiment resolution failed");
                    Sentiment::Undetermined
                }
            },
        }
    }

    async fn resolve_live(&self, text: &str) -> Result<Sentiment> {
        let tag = tokio::time::timeout(self.request_timeout, self.client.classify(text))
            .await
            .map_err(|_| Error::Timeout(self.request_timeout))??;
        Ok(Sentiment::from_score_tag(tag.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticClient(Result<Option<String>>);

    #[async_trait]
    impl ScoringClient for StaticClient {
        async fn classify(&self, _text: &str) -> Result<Option<String>> {
            self.0.clone()
        }
    }

    struct StalledClient;

    #[async_trait]
    impl ScoringClient for StalledClient {
        async fn classify(&self, _text: &str) -> Result<Option<String>> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Some("P".into()))
        }
    }

    struct CountingPicker {
        calls: AtomicUsize,
        value: Sentiment,
    }

    impl MockPicker for CountingPicker {
        fn pick(&self) -> Sentiment {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.value
        }
    }

    fn live_config() -> AnalysisConfig {
        AnalysisConfig {
            test_mode: false,
            ..AnalysisConfig::default()
        }
    }

    fn live(client: impl ScoringClient + 'static) -> Resolver {
        Resolver::new(
            &live_config(),
            Arc::new(client),
            Arc::new(RandomPicker::seeded(0)),
        )
    }

    #[test]
    fn test_mode_selects_mock() {
        assert_eq!(Mode::from_test_mode(true), Mode::Mock);
        assert_eq!(Mode::from_test_mode(false), Mode::Live);
    }

    #[tokio::test]
    async fn live_tag_is_mapped() {
        let resolver = live(StaticClient(Ok(Some("N".into()))));
        assert_eq!(resolver.resolve("meh").await, Sentiment::Negative);
    }

    #[tokio::test]
    async fn live_missing_tag_is_undetermined() {
        let resolver = live(StaticClient(Ok(None)));
        assert_eq!(resolver.resolve("").await, Sentiment::Undetermined);
    }

    #[tokio::test]
    async fn live_unrecognized_tag_is_undetermined() {
        let resolver = live(StaticClient(Ok(Some("MAYBE".into()))));
        assert_eq!(resolver.resolve("hm").await, Sentiment::Undetermined);
    }

    #[tokio::test]
    async fn transport_failure_is_undetermined() {
        let resolver = live(StaticClient(Err(Error::Http("connection refused".into()))));
        assert_eq!(resolver.resolve("hello").await, Sentiment::Undetermined);
    }

    #[tokio::test]
    async fn provider_error_is_undetermined() {
        let resolver = live(StaticClient(Err(Error::Api {
            code: "100".into(),
            message: "Operation denied".into(),
        })));
        assert_eq!(resolver.resolve("hello").await, Sentiment::Undetermined);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_request_times_out_to_undetermined() {
        let resolver = live(StalledClient);
        let started = tokio::time::Instant::now();
        assert_eq!(resolver.resolve("hello").await, Sentiment::Undetermined);
        assert!(started.elapsed() >= live_config().request_timeout());
        assert!(started.elapsed() < Duration::from_secs(3600));
    }

    #[tokio::test(start_paused = true)]
    async fn mock_waits_for_latency_then_picks() {
        let picker = Arc::new(CountingPicker {
            calls: AtomicUsize::new(0),
            value: Sentiment::Positive,
        });
        let resolver = Resolver::new(
            &AnalysisConfig::default(),
            Arc::new(StaticClient(Ok(Some("N+".into())))),
            picker.clone(),
        );

        let started = tokio::time::Instant::now();
        let sentiment = resolver.resolve("I love this").await;

        assert_eq!(sentiment, Sentiment::Positive);
        assert!(started.elapsed() >= resolver.mock_latency());
        assert_eq!(picker.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn mock_never_consults_the_client() {
        let resolver = Resolver::new(
            &AnalysisConfig::default(),
            Arc::new(StaticClient(Err(Error::Http("must not be called".into())))),
            Arc::new(RandomPicker::seeded(3)),
        );
        for _ in 0..50 {
            assert!(resolver.resolve("text").await.is_determinate());
        }
    }
}
