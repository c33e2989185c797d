//! Repository-backed tier-one completion lookup.

use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use crate::errors::Result;

use super::quest_evaluator::QuestEvaluator;
use super::quests_constants::TIER_ONE;
use super::quests_traits::{ProgressRepositoryTrait, QuestRepositoryTrait, TierCompletionChecker};

/// Answers the tier-one prerequisite by evaluating every tier-one quest
/// against the user's current snapshot.
pub struct TierOneCompletionService {
    quest_repository: Arc<dyn QuestRepositoryTrait>,
    progress_repository: Arc<dyn ProgressRepositoryTrait>,
    evaluator: QuestEvaluator,
}

impl TierOneCompletionService {
    pub fn new(
        quest_repository: Arc<dyn QuestRepositoryTrait>,
        progress_repository: Arc<dyn ProgressRepositoryTrait>,
    ) -> Self {
        Self {
            quest_repository,
            progress_repository,
            evaluator: QuestEvaluator::new(),
        }
    }
}

#[async_trait]
impl TierCompletionChecker for TierOneCompletionService {
    async fn has_completed_tier_one(&self, user_id: &str) -> Result<bool> {
        let tier_one_quests = self.quest_repository.list_quests_by_tier(TIER_ONE)?;
        if tier_one_quests.is_empty() {
            debug!(
                "No tier-one quests defined; prerequisite satisfied for {}",
                user_id
            );
            return Ok(true);
        }

        let Some(progress) = self.progress_repository.get_user_progress(user_id).await? else {
            debug!("No progress recorded for {}; tier one incomplete", user_id);
            return Ok(false);
        };

        for quest in &tier_one_quests {
            if !self.evaluator.meets_thresholds(quest, &progress)? {
                debug!(
                    "User {} has not completed tier-one quest {}",
                    user_id,
                    quest.id
                );
                return Ok(false);
            }
        }

        debug!(
            "User {} completed all {} tier-one quests",
            user_id,
            tier_one_quests.len()
        );
        Ok(true)
    }
}
