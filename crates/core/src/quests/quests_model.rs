//! Quest domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::ValidationError;

use super::quests_constants::{
    DEFAULT_BOOST_WEIGHT, DEFAULT_CHALLENGE_WEIGHT, FULL_PROGRESS_PERCENT, TIER_ONE,
    WEIGHT_SUM_TOLERANCE,
};

/// Domain model representing a quest definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub tier: i32,
    pub challenge_ids: HashSet<String>,
    pub requirements: QuestRequirements,
    /// Per-quest override of the evaluator's progress weights
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<ProgressWeights>,
}

impl Quest {
    /// Whether this quest is gated on the user having finished every tier-one quest.
    pub fn requires_tier_one(&self) -> bool {
        self.tier > TIER_ONE
    }
}

/// Completion thresholds for a quest
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct QuestRequirements {
    pub challenges_required: i32,
    pub daily_boosts_required: i32,
}

/// A record that the user finished a specific challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCompletion {
    pub challenge_id: String,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ChallengeCompletion {
    pub fn new(challenge_id: impl Into<String>) -> Self {
        Self {
            challenge_id: challenge_id.into(),
            completed_at: None,
        }
    }
}

/// A record that the user completed a daily boost
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyBoostCompletion {
    #[serde(default)]
    pub boost_id: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Read-only snapshot of a user's completions, assembled by the data layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    #[serde(default)]
    pub completed_challenges: Vec<ChallengeCompletion>,
    #[serde(default)]
    pub completed_daily_boosts: Vec<DailyBoostCompletion>,
}

impl UserProgress {
    /// Counts completions whose challenge belongs to the given quest.
    ///
    /// Repeated completions of the same challenge each count.
    pub fn relevant_challenge_count(&self, quest: &Quest) -> usize {
        self.completed_challenges
            .iter()
            .filter(|c| quest.challenge_ids.contains(&c.challenge_id))
            .count()
    }

    pub fn daily_boost_count(&self) -> usize {
        self.completed_daily_boosts.len()
    }
}

/// Relative weight of each progress dimension in the overall score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressWeights {
    pub challenge_weight: f64,
    pub boost_weight: f64,
}

impl Default for ProgressWeights {
    fn default() -> Self {
        Self {
            challenge_weight: DEFAULT_CHALLENGE_WEIGHT,
            boost_weight: DEFAULT_BOOST_WEIGHT,
        }
    }
}

impl ProgressWeights {
    pub fn new(challenge_weight: f64, boost_weight: f64) -> Self {
        Self {
            challenge_weight,
            boost_weight,
        }
    }

    /// Checks that both weights are finite, non-negative, and sum to 1.0.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (field, value) in [
            ("challengeWeight", self.challenge_weight),
            ("boostWeight", self.boost_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidNumber { field, value });
            }
        }

        let sum = self.challenge_weight + self.boost_weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ValidationError::InvalidSum {
                fields: "progress weights",
                expected: 1.0,
                actual: sum,
            });
        }

        Ok(())
    }
}

/// Evaluator configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub weights: ProgressWeights,
}

/// Progress scores for one quest against one snapshot.
///
/// Percentages are not clamped: a value above 100 means the requirement
/// was exceeded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    pub relevant_challenge_count: usize,
    pub daily_boost_count: usize,
    pub challenge_progress_percent: f64,
    pub boost_progress_percent: f64,
    pub overall_progress_percent: f64,
}

impl QuestProgress {
    /// Both dimensions have reached their requirement.
    pub fn is_complete(&self) -> bool {
        self.challenge_progress_percent >= FULL_PROGRESS_PERCENT
            && self.boost_progress_percent >= FULL_PROGRESS_PERCENT
    }
}

/// Per-quest summary returned to callers of the quest service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuestStatus {
    pub quest_id: String,
    pub user_id: String,
    pub tier: i32,
    pub requirements_met: bool,
    pub progress: QuestProgress,
}
