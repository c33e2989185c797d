//! Quest evaluation error types.

use thiserror::Error;

/// Errors raised while validating or evaluating a quest.
#[derive(Error, Debug)]
pub enum QuestError {
    /// The quest definition has a malformed threshold, weight, or tier.
    #[error("Invalid quest definition '{quest_id}': {reason}")]
    InvalidQuestDefinition { quest_id: String, reason: String },

    /// No progress snapshot was supplied for the quest being evaluated.
    #[error("No progress snapshot supplied for quest '{0}'")]
    MissingProgressSnapshot(String),

    /// The injected tier-completion lookup failed.
    #[error("Tier completion lookup failed for user '{user_id}': {source}")]
    DependencyFailure {
        user_id: String,
        #[source]
        source: Box<crate::errors::Error>,
    },
}

impl QuestError {
    /// Creates an InvalidQuestDefinition error.
    pub fn invalid_definition(quest_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidQuestDefinition {
            quest_id: quest_id.into(),
            reason: reason.into(),
        }
    }

    /// Wraps a failure raised by the tier-completion capability.
    pub fn dependency_failure(user_id: impl Into<String>, source: crate::errors::Error) -> Self {
        Self::DependencyFailure {
            user_id: user_id.into(),
            source: Box::new(source),
        }
    }
}
