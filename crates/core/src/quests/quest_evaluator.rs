//! Quest requirement validation and progress scoring.
//!
//! The evaluator is stateless apart from its weights and reads nothing but its
//! arguments, so one instance can be shared freely across tasks.

use crate::errors::Result;

use super::quests_constants::{FULL_PROGRESS_PERCENT, TIER_ONE};
use super::quests_errors::QuestError;
use super::quests_model::{EvaluatorConfig, ProgressWeights, Quest, QuestProgress, UserProgress};
use super::quests_traits::TierCompletionChecker;

/// Decides whether a quest is satisfied and how far along a user is.
#[derive(Debug, Clone, Default)]
pub struct QuestEvaluator {
    config: EvaluatorConfig,
}

impl QuestEvaluator {
    /// Creates an evaluator with the default 0.6 / 0.4 weighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an evaluator with custom configuration.
    pub fn with_config(config: EvaluatorConfig) -> Result<Self> {
        config.weights.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Rejects quests with an unrecognized tier, negative thresholds, or bad weights.
    pub fn validate_quest(quest: &Quest) -> Result<()> {
        if quest.tier < TIER_ONE {
            let reason = format!("unrecognized tier {}", quest.tier);
            return Err(QuestError::invalid_definition(&quest.id, reason).into());
        }

        let requirements = &quest.requirements;
        if requirements.challenges_required < 0 {
            let reason = format!(
                "challengesRequired is negative ({})",
                requirements.challenges_required
            );
            return Err(QuestError::invalid_definition(&quest.id, reason).into());
        }
        if requirements.daily_boosts_required < 0 {
            let reason = format!(
                "dailyBoostsRequired is negative ({})",
                requirements.daily_boosts_required
            );
            return Err(QuestError::invalid_definition(&quest.id, reason).into());
        }

        if let Some(weights) = &quest.weights {
            weights
                .validate()
                .map_err(|e| QuestError::invalid_definition(&quest.id, e.to_string()))?;
        }

        Ok(())
    }

    /// Checks whether the quest's requirements are currently met.
    ///
    /// Above tier one the checker is consulted first; a `false` answer ends the
    /// evaluation without looking at any counts. Tier-one quests never reach
    /// the checker.
    pub async fn meets_requirements(
        &self,
        quest: &Quest,
        progress: Option<&UserProgress>,
        checker: &dyn TierCompletionChecker,
    ) -> Result<bool> {
        Self::validate_quest(quest)?;
        let progress = require_snapshot(quest, progress)?;

        if quest.requires_tier_one() {
            let tier_one_done = checker
                .has_completed_tier_one(&progress.user_id)
                .await
                .map_err(|e| QuestError::dependency_failure(&progress.user_id, e))?;
            if !tier_one_done {
                return Ok(false);
            }
        }

        Ok(thresholds_met(quest, progress))
    }

    /// Threshold checks only, without the tier gate.
    pub fn meets_thresholds(&self, quest: &Quest, progress: &UserProgress) -> Result<bool> {
        Self::validate_quest(quest)?;
        Ok(thresholds_met(quest, progress))
    }

    /// Scores progress on each dimension and combines them with the active weights.
    ///
    /// A zero requirement scores exactly 100. Results are left unclamped.
    pub fn compute_progress(
        &self,
        quest: &Quest,
        progress: Option<&UserProgress>,
    ) -> Result<QuestProgress> {
        Self::validate_quest(quest)?;
        let progress = require_snapshot(quest, progress)?;
        let weights = self.weights_for(quest);

        let relevant_challenge_count = progress.relevant_challenge_count(quest);
        let daily_boost_count = progress.daily_boost_count();

        let challenge_progress_percent = percent_of(
            relevant_challenge_count,
            quest.requirements.challenges_required,
        );
        let boost_progress_percent =
            percent_of(daily_boost_count, quest.requirements.daily_boosts_required);
        let overall_progress_percent = challenge_progress_percent * weights.challenge_weight
            + boost_progress_percent * weights.boost_weight;

        Ok(QuestProgress {
            relevant_challenge_count,
            daily_boost_count,
            challenge_progress_percent,
            boost_progress_percent,
            overall_progress_percent,
        })
    }

    /// Quest-level weights win over the evaluator's.
    fn weights_for(&self, quest: &Quest) -> ProgressWeights {
        quest.weights.unwrap_or(self.config.weights)
    }
}

fn require_snapshot<'a>(
    quest: &Quest,
    progress: Option<&'a UserProgress>,
) -> Result<&'a UserProgress> {
    progress.ok_or_else(|| QuestError::MissingProgressSnapshot(quest.id.clone()).into())
}

// Assumes a validated quest (non-negative thresholds).
fn thresholds_met(quest: &Quest, progress: &UserProgress) -> bool {
    let requirements = &quest.requirements;

    if progress.relevant_challenge_count(quest) < requirements.challenges_required as usize {
        return false;
    }

    progress.daily_boost_count() >= requirements.daily_boosts_required as usize
}

fn percent_of(count: usize, required: i32) -> f64 {
    if required == 0 {
        return FULL_PROGRESS_PERCENT;
    }
    FULL_PROGRESS_PERCENT * count as f64 / f64::from(required)
}
