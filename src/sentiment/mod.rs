// SPDX-License-Identifier: MPL-2.0
//! Sentiment classification: the result enumeration, its display tables,
//! and the service that resolves text into a [`Sentiment`].
//!
//! # Components
//!
//! - [`display`] - Static emphasis and label/icon/color tables
//! - [`client`] - Live scoring client (MeaningCloud over HTTPS)
//! - [`mock`] - Randomized picker used in test mode
//! - [`resolver`] - Mode-aware resolution that never fails

pub mod client;
pub mod display;
pub mod mock;
pub mod resolver;

pub use client::{MeaningCloudClient, ScoringClient};
pub use display::{details, emphasis, result_message, Emphasis, SentimentDisplayEntry};
pub use mock::{MockPicker, RandomPicker};
pub use resolver::{Mode, Resolver};

use std::fmt;

/// Classification result of one analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
    /// No usable classification (empty result, failure, unknown tag).
    Undetermined,
}

impl Sentiment {
    /// All values in display order.
    pub const ALL: [Sentiment; 6] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::VeryNegative,
        Sentiment::Undetermined,
    ];

    /// Values a mock draw may produce.
    pub const DETERMINATE: [Sentiment; 5] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::VeryNegative,
    ];

    /// Provider `score_tag` for this value.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "P+",
            Sentiment::Positive => "P",
            Sentiment::Neutral => "NEU",
            Sentiment::Negative => "N",
            Sentiment::VeryNegative => "N+",
            Sentiment::Undetermined => "NONE",
        }
    }

    /// Parses a provider `score_tag`. Returns `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "P+" => Some(Sentiment::VeryPositive),
            "P" => Some(Sentiment::Positive),
            "NEU" => Some(Sentiment::Neutral),
            "N" => Some(Sentiment::Negative),
            "N+" => Some(Sentiment::VeryNegative),
            "NONE" => Some(Sentiment::Undetermined),
            _ => None,
        }
    }

    /// Maps an optional `score_tag` field to a sentiment.
    ///
    /// Absent, empty, `NONE` and unrecognized tags all resolve to
    /// [`Sentiment::Undetermined`].
    #[must_use]
    pub fn from_score_tag(tag: Option<&str>) -> Self {
        match tag {
            None => Sentiment::Undetermined,
            Some(raw) if raw.trim().is_empty() => Sentiment::Undetermined,
            Some(raw) => Self::from_tag(raw).unwrap_or_else(|| {
                tracing::warn!(score_tag = raw, "unrecognized score_tag, treating as undetermined");
                Sentiment::Undetermined
            }),
        }
    }

    #[must_use]
    pub fn is_determinate(self) -> bool {
        self != Sentiment::Undetermined
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_round_trips_through_its_tag() {
        for sentiment in Sentiment::ALL {
            assert_eq!(Sentiment::from_tag(sentiment.tag()), Some(sentiment));
        }
    }

    #[test]
    fn determinate_excludes_only_undetermined() {
        assert_eq!(Sentiment::DETERMINATE.len(), Sentiment::ALL.len() - 1);
        assert!(!Sentiment::DETERMINATE.contains(&Sentiment::Undetermined));
        assert!(Sentiment::DETERMINATE.iter().all(|s| s.is_determinate()));
    }

    #[test]
    fn from_tag_trims_but_is_case_sensitive() {
        assert_eq!(Sentiment::from_tag(" P+ "), Some(Sentiment::VeryPositive));
        assert_eq!(Sentiment::from_tag("neu"), None);
    }

    #[test]
    fn missing_or_none_score_tag_is_undetermined() {
        assert_eq!(Sentiment::from_score_tag(None), Sentiment::Undetermined);
        assert_eq!(Sentiment::from_score_tag(Some("")), Sentiment::Undetermined);
        assert_eq!(Sentiment::from_score_tag(Some("NONE")), Sentiment::Undetermined);
    }

    #[test]
    fn unrecognized_score_tag_is_undetermined() {
        assert_eq!(Sentiment::from_score_tag(Some("P++")), Sentiment::Undetermined);
    }

    #[test]
    fn known_score_tag_is_parsed() {
        assert_eq!(Sentiment::from_score_tag(Some("N+")), Sentiment::VeryNegative);
    }

    #[test]
    fn display_prints_tag() {
        assert_eq!(Sentiment::Neutral.to_string(), "NEU");
    }
}
