use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for creators in a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CreatorId(pub String);

/// Creator record scored against a campaign brief.
///
/// All fields are read-only inputs materialized once per request; the engine
/// never mutates or caches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub name: String,
    pub tags: Vec<String>,
    /// ISO country codes the creator's audience is spread across.
    pub audience_countries: Vec<String>,
    pub audience_age_min: u8,
    pub audience_age_max: u8,
    pub avg_views: u64,
    pub ctr: f64,
    pub cvr: f64,
    pub price_min_cents: u32,
    pub price_max_cents: u32,
    /// Static reliability rating on a 0-10 scale.
    pub reliability_score: f64,
    #[serde(default)]
    pub past_engagements: Vec<PastEngagement>,
}

/// Completed engagement used for reliability blending and exclusivity checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastEngagement {
    #[serde(default)]
    pub brand: Option<String>,
    pub delivered_on_time: bool,
    pub performance_score: f64,
    pub delivered_on: NaiveDate,
}

/// Targeting and budget parameters a roster is scored against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignBrief {
    #[serde(default)]
    pub brand: Option<String>,
    pub goal: String,
    pub tags_required: Vec<String>,
    pub audience_target: AudienceTarget,
    pub budget_cents: u32,
    pub deadline: NaiveDate,
}

/// Audience the campaign wants to reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudienceTarget {
    pub country: String,
    /// Inclusive `[min, max]` age band.
    pub age_range: [u8; 2],
}

impl AudienceTarget {
    pub fn age_min(&self) -> u8 {
        self.age_range[0]
    }

    pub fn age_max(&self) -> u8 {
        self.age_range[1]
    }
}

/// Ranked output envelope returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendations {
    pub recommendations: Vec<Recommendation>,
    pub metadata: RecommendationMetadata,
}

/// One recommended creator with its score, breakdown, and justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub creator_id: CreatorId,
    pub score: f64,
    pub fit_breakdown: FitBreakdown,
    pub why: String,
}

/// Per-dimension contributions, each rounded to four decimal places.
///
/// Every fit value lies in `[0, 1]`; `penalty` is the clamped combined
/// penalty before weighting, not a fit dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitBreakdown {
    pub tags: f64,
    pub audience_overlap: f64,
    pub performance: f64,
    pub budget_fit: f64,
    pub reliability: f64,
    pub penalty: f64,
}

/// Request-level metadata echoed with every response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub total_creators: usize,
    pub scoring_version: String,
}
