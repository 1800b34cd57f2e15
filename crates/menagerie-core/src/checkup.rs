//! Status sources for zoo-wide health checkups
//!
//! A checkup pass asks a [`StatusSource`] which of the candidate statuses each
//! creature receives. [`RandomStatus`] picks uniformly (optionally seeded);
//! [`ScriptedStatus`] replays a fixed sequence so callers can pin the outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Candidate statuses used when configuration supplies none
pub fn default_candidate_statuses() -> Vec<String> {
    vec![
        "healthy".to_string(),
        "healthy".to_string(),
        "healthy".to_string(),
        "mild cold".to_string(),
        "healthy".to_string(),
    ]
}

/// Chooses a status for one creature
pub trait StatusSource {
    /// Pick one entry of `candidates`. Never called with an empty slice.
    fn choose(&mut self, candidates: &[String]) -> String;
}

/// Uniform random choice over the candidate set
pub struct RandomStatus {
    rng: StdRng,
}

impl RandomStatus {
    /// Seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSource for RandomStatus {
    fn choose(&mut self, candidates: &[String]) -> String {
        let idx = self.rng.random_range(0..candidates.len());
        candidates[idx].clone()
    }
}

/// Replays a fixed list of statuses, falling back to the first candidate once
/// the script runs out
///
/// Scripted entries are not checked here; [`crate::Zoo::checkup_all`] rejects
/// any that fall outside its candidate set.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStatus {
    script: VecDeque<String>,
}

impl ScriptedStatus {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl StatusSource for ScriptedStatus {
    fn choose(&mut self, candidates: &[String]) -> String {
        self.script
            .pop_front()
            .unwrap_or_else(|| candidates[0].clone())
    }
}
