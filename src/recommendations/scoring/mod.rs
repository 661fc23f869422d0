//! Deterministic, explainable scoring pipeline over an in-memory roster.
//!
//! The pipeline runs in five steps: collect population statistics, compute
//! the per-creator fit dimensions, shape penalties, aggregate with the
//! configured weights, then sort descending. Truncation and the response
//! envelope belong to the service layer.

pub mod config;
pub(crate) mod explain;
pub(crate) mod fit;
pub(crate) mod penalty;
pub(crate) mod stats;

pub use config::{clamp_top_k, ScoringConfigError, ScoringWeights, DEFAULT_TOP_K, MAX_TOP_K};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recommendations::domain::{CampaignBrief, Creator, CreatorId, FitBreakdown};
use stats::PopulationStats;

/// Version tag advertised in response metadata.
pub const SCORING_VERSION: &str = "1.0";

/// Stateless engine applying a validated weight configuration to a roster.
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Result<Self, ScoringConfigError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every creator and return them ordered by descending score.
    ///
    /// The sort is stable, so exact ties keep their roster order. An empty
    /// roster yields an empty vector. `scored_on` anchors the recency window
    /// used by the competitor-exclusivity penalty.
    pub fn score_roster(
        &self,
        roster: &[Creator],
        campaign: &CampaignBrief,
        scored_on: NaiveDate,
    ) -> Vec<ScoredCreator> {
        let population = PopulationStats::collect(roster);

        let mut scored: Vec<ScoredCreator> = roster
            .iter()
            .map(|creator| self.score_creator(creator, campaign, &population, scored_on))
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    fn score_creator(
        &self,
        creator: &Creator,
        campaign: &CampaignBrief,
        population: &PopulationStats,
        scored_on: NaiveDate,
    ) -> ScoredCreator {
        let (tags, tag_reason) = fit::tag_fit(&campaign.tags_required, &creator.tags);
        let (audience, audience_reason) = fit::audience_fit(&campaign.audience_target, creator);
        let performance = fit::performance(creator, population);
        let budget = fit::budget_fit(
            campaign.budget_cents,
            creator.price_min_cents,
            creator.price_max_cents,
        );
        let (reliability, reliability_reason) = fit::reliability(creator);
        let penalty = penalty::penalty(creator, campaign, population, scored_on);

        let weights = &self.weights;
        let aggregate = weights.tags * tags
            + weights.audience * audience
            + weights.performance * performance
            + weights.budget * budget
            + weights.reliability * reliability
            - weights.penalty * penalty;

        let breakdown = FitBreakdown {
            tags: round4(tags),
            audience_overlap: round4(audience),
            performance: round4(performance),
            budget_fit: round4(budget),
            reliability: round4(reliability),
            penalty: round4(penalty),
        };

        let why = explain::synthesize_why(&[tag_reason, audience_reason, reliability_reason]);

        ScoredCreator {
            creator_id: creator.id.clone(),
            score: round4(aggregate),
            breakdown,
            why,
        }
    }
}

/// Scored roster entry before top-K truncation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCreator {
    pub creator_id: CreatorId,
    pub score: f64,
    pub breakdown: FitBreakdown,
    pub why: String,
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
