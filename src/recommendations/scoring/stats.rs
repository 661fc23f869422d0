use std::collections::HashMap;

use crate::recommendations::domain::Creator;

/// Observed range of a raw metric across the roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MetricRange {
    min: f64,
    max: f64,
}

impl MetricRange {
    fn observe(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            min = min.min(value);
            max = max.max(value);
        }
        Self { min, max }
    }

    /// Min-max normalization into `[0, 1]`; a flat range is neutral (0.5)
    /// rather than undefined.
    pub(crate) fn normalize(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.5;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Roster-wide statistics recomputed fresh for every scoring request.
///
/// Never cache these across requests: the ranges are relative to the roster
/// that was passed in, so a stale snapshot would silently skew scores.
#[derive(Debug, Clone)]
pub(crate) struct PopulationStats {
    pub(crate) views: MetricRange,
    pub(crate) ctr: MetricRange,
    pub(crate) cvr: MetricRange,
    tag_saturation: HashMap<String, f64>,
}

impl PopulationStats {
    pub(crate) fn collect(roster: &[Creator]) -> Self {
        let views = MetricRange::observe(roster.iter().map(|creator| creator.avg_views as f64));
        let ctr = MetricRange::observe(roster.iter().map(|creator| creator.ctr));
        let cvr = MetricRange::observe(roster.iter().map(|creator| creator.cvr));

        let mut counts: HashMap<String, usize> = HashMap::new();
        for creator in roster {
            *counts.entry(tag_set_key(&creator.tags)).or_default() += 1;
        }
        let total = roster.len().max(1) as f64;
        let tag_saturation = counts
            .into_iter()
            .map(|(key, count)| (key, count as f64 / total))
            .collect();

        Self {
            views,
            ctr,
            cvr,
            tag_saturation,
        }
    }

    /// Share of the roster carrying exactly this normalized tag set.
    pub(crate) fn saturation(&self, tags: &[String]) -> f64 {
        self.tag_saturation
            .get(&tag_set_key(tags))
            .copied()
            .unwrap_or(0.0)
    }
}

fn tag_set_key(tags: &[String]) -> String {
    let mut normalized: Vec<String> = tags
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized.join(",")
}
