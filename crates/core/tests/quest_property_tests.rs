//! Property-based integration tests for quest progress scoring.
//!
//! These tests verify that scoring properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use liftoff_core::{
    ChallengeCompletion, DailyBoostCompletion, ProgressWeights, Quest, QuestEvaluator,
    QuestRequirements, UserProgress,
};
use proptest::prelude::*;

// =============================================================================
// Generators
// =============================================================================

const CHALLENGE_POOL: [&str; 6] = ["walk", "run", "swim", "stretch", "hydrate", "sleep"];

/// Generates a quest over a subset of the challenge pool.
fn arb_quest() -> impl Strategy<Value = Quest> {
    (
        1i32..5,
        proptest::sample::subsequence(CHALLENGE_POOL.to_vec(), 0..=CHALLENGE_POOL.len()),
        0i32..10,
        0i32..10,
    )
        .prop_map(|(tier, ids, challenges, boosts)| Quest {
            id: format!("quest-{}", tier),
            title: String::new(),
            tier,
            challenge_ids: ids.into_iter().map(String::from).collect(),
            requirements: QuestRequirements {
                challenges_required: challenges,
                daily_boosts_required: boosts,
            },
            weights: None,
        })
}

/// Generates a snapshot drawing completions from the same pool.
fn arb_progress() -> impl Strategy<Value = UserProgress> {
    (
        proptest::collection::vec(proptest::sample::select(CHALLENGE_POOL.to_vec()), 0..20),
        0usize..20,
    )
        .prop_map(|(challenges, boosts)| UserProgress {
            user_id: "user-1".to_string(),
            completed_challenges: challenges
                .into_iter()
                .map(|id| ChallengeCompletion::new(id))
                .collect(),
            completed_daily_boosts: vec![DailyBoostCompletion::default(); boosts],
        })
}

/// Generates valid weights summing to 1.0.
fn arb_weights() -> impl Strategy<Value = ProgressWeights> {
    (0u32..=100).prop_map(|pct| {
        let challenge_weight = f64::from(pct) / 100.0;
        ProgressWeights::new(challenge_weight, 1.0 - challenge_weight)
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_compute_progress_is_pure(quest in arb_quest(), progress in arb_progress()) {
        let evaluator = QuestEvaluator::new();

        let first = evaluator.compute_progress(&quest, Some(&progress)).unwrap();
        let second = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        prop_assert_eq!(
            first.overall_progress_percent.to_bits(),
            second.overall_progress_percent.to_bits()
        );
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_zero_requirement_scores_full(mut quest in arb_quest(), progress in arb_progress()) {
        quest.requirements.challenges_required = 0;
        let evaluator = QuestEvaluator::new();

        let result = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        prop_assert_eq!(result.challenge_progress_percent, 100.0);
    }

    #[test]
    fn prop_percent_scales_with_count(quest in arb_quest(), progress in arb_progress()) {
        prop_assume!(quest.requirements.daily_boosts_required > 0);
        let evaluator = QuestEvaluator::new();

        let result = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        let expected = 100.0 * progress.completed_daily_boosts.len() as f64
            / f64::from(quest.requirements.daily_boosts_required);
        prop_assert_eq!(result.boost_progress_percent, expected);
    }

    #[test]
    fn prop_overall_is_weighted_sum(
        mut quest in arb_quest(),
        progress in arb_progress(),
        weights in arb_weights(),
    ) {
        quest.weights = Some(weights);
        let evaluator = QuestEvaluator::new();

        let result = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        let expected = result.challenge_progress_percent * weights.challenge_weight
            + result.boost_progress_percent * weights.boost_weight;
        prop_assert!((result.overall_progress_percent - expected).abs() < 1e-9);
    }

    #[test]
    fn prop_relevant_count_never_exceeds_total(quest in arb_quest(), progress in arb_progress()) {
        let evaluator = QuestEvaluator::new();

        let result = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        prop_assert!(result.relevant_challenge_count <= progress.completed_challenges.len());
    }

    #[test]
    fn prop_thresholds_agree_with_percentages(quest in arb_quest(), progress in arb_progress()) {
        let evaluator = QuestEvaluator::new();

        let met = evaluator.meets_thresholds(&quest, &progress).unwrap();
        let result = evaluator.compute_progress(&quest, Some(&progress)).unwrap();

        prop_assert_eq!(met, result.is_complete());
    }
}
