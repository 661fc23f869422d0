//! Creator recommendation workflow: domain types, scoring, and the facade.

pub mod domain;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AudienceTarget, CampaignBrief, Creator, CreatorId, FitBreakdown, PastEngagement,
    RankedRecommendations, Recommendation, RecommendationMetadata,
};
pub use scoring::{
    ScoredCreator, ScoringConfigError, ScoringEngine, ScoringWeights, SCORING_VERSION,
};
pub use service::{RecommendationRequest, RecommendationService};
