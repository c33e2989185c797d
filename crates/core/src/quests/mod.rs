//! Quests module - quest models, evaluator, services, and traits.

mod quest_evaluator;
mod quests_constants;
mod quests_errors;
mod quests_model;
mod quests_service;
mod quests_traits;
mod tier_completion;

pub use quest_evaluator::QuestEvaluator;
pub use quests_constants::*;
pub use quests_errors::QuestError;
pub use quests_model::{
    ChallengeCompletion, DailyBoostCompletion, EvaluatorConfig, ProgressWeights, Quest,
    QuestProgress, QuestRequirements, QuestStatus, UserProgress,
};
pub use quests_service::QuestService;
pub use quests_traits::{
    ProgressRepositoryTrait, QuestRepositoryTrait, QuestServiceTrait, TierCompletionChecker,
};
pub use tier_completion::TierOneCompletionService;
