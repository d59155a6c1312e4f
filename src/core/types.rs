use serde::{Deserialize, Serialize};

use crate::core::combination::Combination;
use crate::core::size_range::MIN_COMBINATION_SIZE;

/// A newly generated combination paired with its unique ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationRecord {
    pub id: String,
    pub size: usize,
    pub combination: String,
}

impl CombinationRecord {
    #[must_use]
    pub fn new(id: String, combination: &Combination) -> Self {
        Self {
            id,
            size: combination.size(),
            combination: combination.canonical().to_string(),
        }
    }
}

/// How combinations are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Every subset inside the size range
    Exhaustive,
    /// `runs` distinct random subsets inside the size range
    Random { runs: usize },
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "exhaustive"),
            Self::Random { runs } => write!(f, "random ({runs} runs)"),
        }
    }
}

/// Search budgets for random sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Maximum identifier draws while filling one candidate
    pub draw_budget: usize,
    /// Attempts allowed per requested combination
    pub escape_factor: usize,
}

impl SamplerConfig {
    pub const DEFAULT_DRAW_BUDGET: usize = 10_000;
    pub const DEFAULT_ESCAPE_FACTOR: usize = 1_000;

    /// Total attempts allowed when `runs` combinations are requested.
    #[must_use]
    pub fn escape_budget(&self, runs: usize) -> usize {
        runs.saturating_mul(self.escape_factor)
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            draw_budget: Self::DEFAULT_DRAW_BUDGET,
            escape_factor: Self::DEFAULT_ESCAPE_FACTOR,
        }
    }
}

/// Settings for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Requested smallest size (inclusive, before adjustment)
    pub min_size: usize,
    /// Requested largest size (inclusive, before adjustment); `None` is unbounded
    pub max_size: Option<usize>,
    pub strategy: Strategy,
    pub sampler: SamplerConfig,
}

impl GenerationConfig {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            min_size: MIN_COMBINATION_SIZE,
            max_size: None,
            strategy,
            sampler: SamplerConfig::default(),
        }
    }

    #[must_use]
    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, max_size: Option<usize>) -> Self {
        self.max_size = max_size;
        self
    }

    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }
}
