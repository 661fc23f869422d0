use chrono::NaiveDate;

use crate::recommendations::domain::{
    AudienceTarget, CampaignBrief, Creator, CreatorId, PastEngagement,
};
use crate::recommendations::scoring::{ScoringEngine, ScoringWeights};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn scored_on() -> NaiveDate {
    date(2026, 9, 1)
}

pub(super) fn campaign() -> CampaignBrief {
    CampaignBrief {
        brand: Some("Aurora Fitness".to_string()),
        goal: "Drive spring app installs".to_string(),
        tags_required: vec!["fitness".to_string(), "wellness".to_string()],
        audience_target: AudienceTarget {
            country: "BR".to_string(),
            age_range: [18, 34],
        },
        budget_cents: 500_000,
        deadline: date(2026, 10, 15),
    }
}

pub(super) fn creator(id: &str, tags: &[&str]) -> Creator {
    Creator {
        id: CreatorId(id.to_string()),
        name: id.to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        audience_countries: vec!["BR".to_string()],
        audience_age_min: 18,
        audience_age_max: 34,
        avg_views: 120_000,
        ctr: 2.4,
        cvr: 0.8,
        price_min_cents: 100_000,
        price_max_cents: 300_000,
        reliability_score: 8.0,
        past_engagements: Vec::new(),
    }
}

pub(super) fn engagement(brand: Option<&str>, on_time: bool, delivered_on: NaiveDate) -> PastEngagement {
    PastEngagement {
        brand: brand.map(str::to_string),
        delivered_on_time: on_time,
        performance_score: 0.7,
        delivered_on,
    }
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(ScoringWeights::default()).expect("default weights are valid")
}

pub(super) fn tag_list(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|tag| tag.to_string()).collect()
}
