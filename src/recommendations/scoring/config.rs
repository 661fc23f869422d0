use serde::{Deserialize, Serialize};

/// Number of recommendations returned when a request does not ask for more.
pub const DEFAULT_TOP_K: usize = 10;
/// Smallest accepted top-K.
pub const MIN_TOP_K: usize = 1;
/// Hard ceiling on recommendations per request.
pub const MAX_TOP_K: usize = 50;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Dimension weights applied during aggregation.
///
/// The five fit weights must sum to 1.0. `penalty` scales the subtracted
/// penalty term and sits outside that sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub tags: f64,
    pub audience: f64,
    pub performance: f64,
    pub budget: f64,
    pub reliability: f64,
    pub penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tags: 0.35,
            audience: 0.25,
            performance: 0.15,
            budget: 0.15,
            reliability: 0.10,
            penalty: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let dimensions = [
            self.tags,
            self.audience,
            self.performance,
            self.budget,
            self.reliability,
        ];
        if dimensions.iter().any(|weight| *weight < 0.0) {
            return Err(ScoringConfigError::NegativeWeight);
        }
        let sum: f64 = dimensions.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringConfigError::WeightSum { sum });
        }
        if self.penalty < 0.0 {
            return Err(ScoringConfigError::NegativeWeight);
        }
        Ok(())
    }
}

/// Error raised when a scoring configuration cannot be applied.
#[derive(Debug, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("fit weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },
    #[error("weights must be non-negative")]
    NegativeWeight,
}

/// Clamp a requested top-K into the supported bounds.
pub fn clamp_top_k(requested: usize) -> usize {
    requested.clamp(MIN_TOP_K, MAX_TOP_K)
}
