use std::collections::BTreeSet;

use super::stats::PopulationStats;
use crate::recommendations::domain::{AudienceTarget, Creator};

const VIEWS_BLEND_WEIGHT: f64 = 0.4;
const CTR_BLEND_WEIGHT: f64 = 0.3;
const CVR_BLEND_WEIGHT: f64 = 0.3;
const RELIABILITY_HISTORY_WEIGHT: f64 = 0.6;
const RELIABILITY_RATING_WEIGHT: f64 = 0.4;
const RELIABILITY_NOTE_THRESHOLD: f64 = 0.75;
const RELIABILITY_RATING_SCALE: f64 = 10.0;

pub(crate) fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Union-based Jaccard similarity over case-normalized tag sets.
///
/// An empty union scores 0. The reason lists the intersecting tags when the
/// intersection is non-empty, else it is empty.
pub(crate) fn tag_fit(required: &[String], tags: &[String]) -> (f64, String) {
    let required = normalize_tags(required);
    let creator = normalize_tags(tags);

    let intersection: Vec<&str> = required
        .intersection(&creator)
        .map(String::as_str)
        .collect();
    let union = required.union(&creator).count();

    let score = if union == 0 {
        0.0
    } else {
        intersection.len() as f64 / union as f64
    };
    let reason = if intersection.is_empty() {
        String::new()
    } else {
        format!("covers {}", intersection.join(", "))
    };

    (score, reason)
}

fn normalize_tags(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Half country match, half age-band overlap against the campaign window.
///
/// When the creator serves multiple countries, the reason reports the implied
/// per-country audience share. No reason is produced without a country match.
pub(crate) fn audience_fit(target: &AudienceTarget, creator: &Creator) -> (f64, String) {
    let country_match = creator
        .audience_countries
        .iter()
        .any(|country| country.eq_ignore_ascii_case(&target.country));
    let country_score = if country_match { 1.0 } else { 0.0 };

    let width = i32::from(target.age_max()) - i32::from(target.age_min());
    let overlap_min = target.age_min().max(creator.audience_age_min);
    let overlap_max = target.age_max().min(creator.audience_age_max);
    let overlap = i32::from(overlap_max) - i32::from(overlap_min);

    let age_score = if width <= 0 {
        0.0
    } else {
        clamp01(f64::from(overlap.max(0)) / f64::from(width))
    };

    let score = 0.5 * country_score + 0.5 * age_score;

    let reason = if country_match {
        let share = 100.0 / creator.audience_countries.len() as f64;
        if overlap > 0 {
            format!(
                "~{share:.0}% audience in {}, ages {overlap_min}-{overlap_max}",
                target.country
            )
        } else {
            format!("~{share:.0}% audience in {}", target.country)
        }
    } else {
        String::new()
    };

    (score, reason)
}

/// Population-relative performance blend.
///
/// Views carry the largest share; CTR and CVR split the remainder. Each raw
/// metric is min-max normalized against the current roster's range.
pub(crate) fn performance(creator: &Creator, population: &PopulationStats) -> f64 {
    let views = population.views.normalize(creator.avg_views as f64);
    let ctr = population.ctr.normalize(creator.ctr);
    let cvr = population.cvr.normalize(creator.cvr);

    VIEWS_BLEND_WEIGHT * views + CTR_BLEND_WEIGHT * ctr + CVR_BLEND_WEIGHT * cvr
}

/// Graduated budget fit.
///
/// 1.0 once the budget covers the price ceiling, linear interpolation inside
/// the price band, and a graceful decay below the floor. A degenerate band
/// (`price_max <= price_min`) that the budget does not cover scores 0.
pub(crate) fn budget_fit(budget_cents: u32, price_min_cents: u32, price_max_cents: u32) -> f64 {
    if budget_cents >= price_max_cents {
        return 1.0;
    }
    if price_max_cents <= price_min_cents {
        return 0.0;
    }
    if budget_cents >= price_min_cents {
        return f64::from(budget_cents - price_min_cents)
            / f64::from(price_max_cents - price_min_cents);
    }

    let shortfall = f64::from(price_min_cents - budget_cents);
    clamp01(1.0 - shortfall / f64::from(price_min_cents.max(1)))
}

/// Blend of the historical on-time delivery rate with the static rating.
///
/// Without history the normalized static rating stands alone. The reason
/// notes the on-time percentage when history exists and the blend is strong.
pub(crate) fn reliability(creator: &Creator) -> (f64, String) {
    let rating = clamp01(creator.reliability_score / RELIABILITY_RATING_SCALE);
    if creator.past_engagements.is_empty() {
        return (rating, String::new());
    }

    let on_time = creator
        .past_engagements
        .iter()
        .filter(|engagement| engagement.delivered_on_time)
        .count();
    let total = creator.past_engagements.len();
    let on_time_rate = on_time as f64 / total as f64;
    let score = clamp01(RELIABILITY_HISTORY_WEIGHT * on_time_rate + RELIABILITY_RATING_WEIGHT * rating);

    let reason = if score >= RELIABILITY_NOTE_THRESHOLD {
        format!(
            "{:.0}% on-time across {total} past deliveries",
            on_time_rate * 100.0
        )
    } else {
        String::new()
    };

    (score, reason)
}
