use async_trait::async_trait;

use crate::errors::Result;
use crate::quests::quests_model::{Quest, QuestStatus, UserProgress};

/// Answers whether a user has completed every tier-one quest.
///
/// Implementations may hit a database or remote service. The evaluator calls
/// this only for quests above tier one and treats an `Err` as its own failure.
#[async_trait]
pub trait TierCompletionChecker: Send + Sync {
    async fn has_completed_tier_one(&self, user_id: &str) -> Result<bool>;
}

/// Trait for quest definition lookups
pub trait QuestRepositoryTrait: Send + Sync {
    fn get_quest(&self, quest_id: &str) -> Result<Quest>;
    fn list_quests(&self) -> Result<Vec<Quest>>;
    fn list_quests_by_tier(&self, tier: i32) -> Result<Vec<Quest>>;
}

/// Trait for assembling a user's progress snapshot
#[async_trait]
pub trait ProgressRepositoryTrait: Send + Sync {
    /// Returns `None` when nothing is recorded for the user.
    async fn get_user_progress(&self, user_id: &str) -> Result<Option<UserProgress>>;
}

/// Trait for quest service operations
#[async_trait]
pub trait QuestServiceTrait: Send + Sync {
    async fn get_quest_status(&self, quest_id: &str, user_id: &str) -> Result<QuestStatus>;
    async fn get_quest_statuses(&self, user_id: &str) -> Result<Vec<QuestStatus>>;
    async fn get_available_quests(&self, user_id: &str) -> Result<Vec<Quest>>;
}
