// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Provider**: Scoring endpoint and request language
//! - **Timeout**: Live request timeout bounds
//! - **Mock**: Simulated latency for test mode

// ==========================================================================
// Provider Defaults
// ==========================================================================

/// MeaningCloud sentiment analysis endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.meaningcloud.com/sentiment-2.1";

/// Language code sent with every analysis request.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Test mode is on unless explicitly disabled.
pub const DEFAULT_TEST_MODE: bool = true;

// ==========================================================================
// Timeout Defaults
// ==========================================================================

/// Default live request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum live request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum live request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Mock Defaults
// ==========================================================================

/// Simulated latency before a mock result is produced (in milliseconds).
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 800;

/// Minimum simulated latency (in milliseconds).
pub const MIN_MOCK_LATENCY_MS: u64 = 0;

/// Maximum simulated latency (in milliseconds).
pub const MAX_MOCK_LATENCY_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_REQUEST_TIMEOUT_SECS > 0);
    assert!(MAX_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS >= MIN_REQUEST_TIMEOUT_SECS);
    assert!(DEFAULT_REQUEST_TIMEOUT_SECS <= MAX_REQUEST_TIMEOUT_SECS);

    assert!(MAX_MOCK_LATENCY_MS >= MIN_MOCK_LATENCY_MS);
    assert!(DEFAULT_MOCK_LATENCY_MS >= MIN_MOCK_LATENCY_MS);
    assert!(DEFAULT_MOCK_LATENCY_MS <= MAX_MOCK_LATENCY_MS);
};
