use super::common::*;
use crate::recommendations::scoring::{ScoringConfigError, ScoringEngine, ScoringWeights};

#[test]
fn roster_is_sorted_descending_by_score() {
    let engine = engine();
    let campaign = campaign();
    let roster = vec![
        creator("off-topic", &["travel", "food"]),
        creator("on-topic", &["fitness", "wellness"]),
        creator("partial", &["fitness", "gaming"]),
    ];

    let ranked = engine.score_roster(&roster, &campaign, scored_on());

    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|pair| pair[0].score >= pair[1].score));
    assert_eq!(ranked[0].creator_id.0, "on-topic");
}

#[test]
fn empty_roster_scores_to_empty_ranking() {
    let engine = engine();
    let ranked = engine.score_roster(&[], &campaign(), scored_on());
    assert!(ranked.is_empty());
}

#[test]
fn exact_ties_preserve_roster_order() {
    let engine = engine();
    let campaign = campaign();
    let roster = vec![
        creator("first", &["fitness", "wellness"]),
        creator("second", &["fitness", "wellness"]),
    ];

    let ranked = engine.score_roster(&roster, &campaign, scored_on());

    assert_eq!(ranked[0].score, ranked[1].score);
    assert_eq!(ranked[0].creator_id.0, "first");
    assert_eq!(ranked[1].creator_id.0, "second");
}

#[test]
fn score_is_reproducible_from_breakdown() {
    let engine = engine();
    let campaign = campaign();
    let mut rival_friend = creator("rival-friend", &["fitness"]);
    rival_friend.past_engagements = vec![engagement(Some("Rival"), true, scored_on())];
    let roster = vec![creator("clean", &["fitness", "wellness"]), rival_friend];

    let weights = ScoringWeights::default();
    for entry in engine.score_roster(&roster, &campaign, scored_on()) {
        let breakdown = entry.breakdown;
        let recomputed = weights.tags * breakdown.tags
            + weights.audience * breakdown.audience_overlap
            + weights.performance * breakdown.performance
            + weights.budget * breakdown.budget_fit
            + weights.reliability * breakdown.reliability
            - weights.penalty * breakdown.penalty;
        assert!(
            (entry.score - recomputed).abs() < 1e-3,
            "score {} diverges from breakdown ({recomputed})",
            entry.score
        );
    }
}

#[test]
fn breakdown_values_are_rounded_to_four_places() {
    let engine = engine();
    let campaign = campaign();
    let roster = vec![
        creator("a", &["fitness", "gaming", "tech"]),
        creator("b", &["wellness"]),
        creator("c", &["food"]),
    ];

    for entry in engine.score_roster(&roster, &campaign, scored_on()) {
        for value in [
            entry.score,
            entry.breakdown.tags,
            entry.breakdown.audience_overlap,
            entry.breakdown.performance,
            entry.breakdown.budget_fit,
            entry.breakdown.reliability,
            entry.breakdown.penalty,
        ] {
            let scaled = value * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{value} carries more than four decimal places"
            );
        }
    }
}

#[test]
fn invalid_weight_sum_is_rejected() {
    let weights = ScoringWeights {
        tags: 0.5,
        audience: 0.5,
        performance: 0.5,
        budget: 0.1,
        reliability: 0.1,
        penalty: 0.1,
    };
    assert!(matches!(
        ScoringEngine::new(weights),
        Err(ScoringConfigError::WeightSum { .. })
    ));
}

#[test]
fn negative_weights_are_rejected() {
    let weights = ScoringWeights {
        tags: -0.1,
        audience: 0.5,
        performance: 0.3,
        budget: 0.2,
        reliability: 0.1,
        penalty: 0.1,
    };
    assert!(matches!(
        ScoringEngine::new(weights),
        Err(ScoringConfigError::NegativeWeight)
    ));
}

#[test]
fn alternate_weightings_shift_the_ranking() {
    let campaign = campaign();
    let mut expensive_match = creator("expensive-match", &["fitness", "wellness"]);
    expensive_match.price_min_cents = 600_000;
    expensive_match.price_max_cents = 900_000;
    let mut cheap_miss = creator("cheap-miss", &["travel"]);
    cheap_miss.price_min_cents = 50_000;
    cheap_miss.price_max_cents = 100_000;
    let roster = vec![expensive_match, cheap_miss];

    let tag_heavy = ScoringEngine::new(ScoringWeights {
        tags: 0.9,
        audience: 0.025,
        performance: 0.025,
        budget: 0.025,
        reliability: 0.025,
        penalty: 0.0,
    })
    .expect("valid weights");
    let budget_heavy = ScoringEngine::new(ScoringWeights {
        tags: 0.025,
        audience: 0.025,
        performance: 0.025,
        budget: 0.9,
        reliability: 0.025,
        penalty: 0.0,
    })
    .expect("valid weights");

    let by_tags = tag_heavy.score_roster(&roster, &campaign, scored_on());
    let by_budget = budget_heavy.score_roster(&roster, &campaign, scored_on());

    assert_eq!(by_tags[0].creator_id.0, "expensive-match");
    assert_eq!(by_budget[0].creator_id.0, "cheap-miss");
}
