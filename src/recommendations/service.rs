use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{
    CampaignBrief, Creator, RankedRecommendations, Recommendation, RecommendationMetadata,
};
use super::scoring::{
    clamp_top_k, ScoringConfigError, ScoringEngine, ScoringWeights, SCORING_VERSION,
};

/// One scoring request: a brief, the roster snapshot, and optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub campaign: CampaignBrief,
    pub roster: Vec<Creator>,
    #[serde(default)]
    pub top_k: Option<usize>,
    /// Reference date for recency penalties; defaults to today.
    #[serde(default)]
    pub scored_on: Option<NaiveDate>,
}

/// Service facade turning a scoring request into the response envelope.
///
/// The caller is responsible for fetching the roster and validating the
/// brief; the service only clamps top-K, runs the engine, and truncates.
pub struct RecommendationService {
    engine: ScoringEngine,
    default_top_k: usize,
}

impl RecommendationService {
    pub fn new(weights: ScoringWeights, default_top_k: usize) -> Result<Self, ScoringConfigError> {
        Ok(Self {
            engine: ScoringEngine::new(weights)?,
            default_top_k: clamp_top_k(default_top_k),
        })
    }

    pub fn recommend(&self, request: RecommendationRequest) -> RankedRecommendations {
        let RecommendationRequest {
            campaign,
            roster,
            top_k,
            scored_on,
        } = request;

        let top_k = clamp_top_k(top_k.unwrap_or(self.default_top_k));
        let scored_on = scored_on.unwrap_or_else(|| Local::now().date_naive());
        let total_creators = roster.len();

        info!(
            goal = %campaign.goal,
            tags = ?campaign.tags_required,
            country = %campaign.audience_target.country,
            budget_cents = campaign.budget_cents,
            total_creators,
            top_k,
            "processing recommendation request"
        );

        let ranked = self.engine.score_roster(&roster, &campaign, scored_on);

        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .take(top_k)
            .map(|entry| Recommendation {
                creator_id: entry.creator_id,
                score: entry.score,
                fit_breakdown: entry.breakdown,
                why: entry.why,
            })
            .collect();

        match recommendations.first() {
            Some(top) => info!(
                returned = recommendations.len(),
                top_score = top.score,
                "recommendations generated"
            ),
            None => warn!("no creators available to recommend"),
        }

        RankedRecommendations {
            recommendations,
            metadata: RecommendationMetadata {
                total_creators,
                scoring_version: SCORING_VERSION.to_string(),
            },
        }
    }
}
