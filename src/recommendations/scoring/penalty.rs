use chrono::{Duration, NaiveDate};

use super::stats::PopulationStats;
use crate::recommendations::domain::{CampaignBrief, Creator};

const COMPETITOR_WINDOW_DAYS: i64 = 90;
const COMPETITOR_PENALTY_STEP: f64 = 0.15;
const COMPETITOR_PENALTY_CAP: f64 = 0.5;
const SATURATION_THRESHOLD: f64 = 0.1;
const SATURATION_PENALTY_SLOPE: f64 = 2.0;
const SATURATION_PENALTY_CAP: f64 = 0.3;

/// Competitor-exclusivity and tag-saturation penalties.
///
/// Applied against the aggregate score only, never against individual fit
/// dimensions. The combined value is clamped to `[0, 1]` before weighting.
pub(crate) fn penalty(
    creator: &Creator,
    campaign: &CampaignBrief,
    population: &PopulationStats,
    scored_on: NaiveDate,
) -> f64 {
    let mut penalty = 0.0;

    if let Some(brand) = campaign.brand.as_deref() {
        let window_start = scored_on - Duration::days(COMPETITOR_WINDOW_DAYS);
        let competitor_deals = creator
            .past_engagements
            .iter()
            .filter(|engagement| engagement.delivered_on >= window_start)
            .filter(|engagement| {
                engagement
                    .brand
                    .as_deref()
                    .is_some_and(|past| !past.eq_ignore_ascii_case(brand))
            })
            .count();
        if competitor_deals > 0 {
            penalty += COMPETITOR_PENALTY_CAP.min(competitor_deals as f64 * COMPETITOR_PENALTY_STEP);
        }
    }

    let saturation = population.saturation(&creator.tags);
    if saturation > SATURATION_THRESHOLD {
        penalty +=
            SATURATION_PENALTY_CAP.min((saturation - SATURATION_THRESHOLD) * SATURATION_PENALTY_SLOPE);
    }

    penalty.clamp(0.0, 1.0)
}
