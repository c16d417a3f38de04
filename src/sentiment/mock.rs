// SPDX-License-Identifier: MPL-2.0
//! Randomized sentiment source used in test mode.

use super::Sentiment;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Mutex;

/// Produces a sentiment without looking at the text.
pub trait MockPicker: Send + Sync {
    fn pick(&self) -> Sentiment;
}

/// Uniform draw over [`Sentiment::DETERMINATE`].
pub struct RandomPicker {
    rng: Mutex<StdRng>,
}

impl RandomPicker {
    /// Seeds from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic sequence for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl MockPicker for RandomPicker {
    fn pick(&self) -> Sentiment {
        // A poisoned lock only means another draw panicked; the RNG state is still usable.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Sentiment::DETERMINATE
            .choose(&mut *rng)
            .copied()
            .unwrap_or(Sentiment::Neutral)
    }
}
