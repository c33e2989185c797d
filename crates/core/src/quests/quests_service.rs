//! Quest service: wires repositories, the evaluator, and the tier lookup together.

use async_trait::async_trait;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::errors::{Error, Result};

use super::quest_evaluator::QuestEvaluator;
use super::quests_errors::QuestError;
use super::quests_model::{Quest, QuestStatus, UserProgress};
use super::quests_traits::{
    ProgressRepositoryTrait, QuestRepositoryTrait, QuestServiceTrait, TierCompletionChecker,
};

/// A tier-one answer already fetched for the current request.
struct ResolvedTierGate(bool);

#[async_trait]
impl TierCompletionChecker for ResolvedTierGate {
    async fn has_completed_tier_one(&self, _user_id: &str) -> Result<bool> {
        Ok(self.0)
    }
}

pub struct QuestService {
    quest_repository: Arc<dyn QuestRepositoryTrait>,
    progress_repository: Arc<dyn ProgressRepositoryTrait>,
    tier_checker: Arc<dyn TierCompletionChecker>,
    evaluator: QuestEvaluator,
}

impl QuestService {
    pub fn new(
        quest_repository: Arc<dyn QuestRepositoryTrait>,
        progress_repository: Arc<dyn ProgressRepositoryTrait>,
        tier_checker: Arc<dyn TierCompletionChecker>,
    ) -> Self {
        Self::with_evaluator(
            quest_repository,
            progress_repository,
            tier_checker,
            QuestEvaluator::new(),
        )
    }

    /// Creates a quest service with a preconfigured evaluator.
    pub fn with_evaluator(
        quest_repository: Arc<dyn QuestRepositoryTrait>,
        progress_repository: Arc<dyn ProgressRepositoryTrait>,
        tier_checker: Arc<dyn TierCompletionChecker>,
        evaluator: QuestEvaluator,
    ) -> Self {
        QuestService {
            quest_repository,
            progress_repository,
            tier_checker,
            evaluator,
        }
    }

    async fn load_progress(&self, user_id: &str) -> Result<Option<UserProgress>> {
        debug!("Loading progress snapshot for {}", user_id);
        self.progress_repository.get_user_progress(user_id).await
    }

    /// Asks the injected checker once and wraps a failure as a dependency error.
    async fn resolve_tier_gate(&self, user_id: &str) -> Result<bool> {
        self.tier_checker
            .has_completed_tier_one(user_id)
            .await
            .map_err(|e| {
                warn!("Tier lookup failed for {}: {}", user_id, e);
                QuestError::dependency_failure(user_id, e).into()
            })
    }

    async fn evaluate(
        &self,
        quest: &Quest,
        user_id: &str,
        progress: Option<&UserProgress>,
        checker: &dyn TierCompletionChecker,
    ) -> Result<QuestStatus> {
        let requirements_met = self
            .evaluator
            .meets_requirements(quest, progress, checker)
            .await
            .inspect_err(|e| {
                if matches!(e, Error::Quest(QuestError::DependencyFailure { .. })) {
                    warn!("Tier lookup failed for quest {}: {}", quest.id, e);
                }
            })?;
        let progress = self.evaluator.compute_progress(quest, progress)?;

        debug!(
            "Quest {} for {}: met={}, overall={:.1}%",
            quest.id,
            user_id,
            requirements_met,
            progress.overall_progress_percent
        );

        Ok(QuestStatus {
            quest_id: quest.id.clone(),
            user_id: user_id.to_string(),
            tier: quest.tier,
            requirements_met,
            progress,
        })
    }
}

fn sort_by_tier_then_id(quests: &mut [Quest]) {
    quests.sort_by(|a, b| a.tier.cmp(&b.tier).then_with(|| a.id.cmp(&b.id)));
}

#[async_trait]
impl QuestServiceTrait for QuestService {
    async fn get_quest_status(&self, quest_id: &str, user_id: &str) -> Result<QuestStatus> {
        let quest = self.quest_repository.get_quest(quest_id)?;
        let progress = self.load_progress(user_id).await?;
        self.evaluate(&quest, user_id, progress.as_ref(), self.tier_checker.as_ref())
            .await
    }

    async fn get_quest_statuses(&self, user_id: &str) -> Result<Vec<QuestStatus>> {
        let mut quests = self.quest_repository.list_quests()?;
        for quest in &quests {
            QuestEvaluator::validate_quest(quest)?;
        }
        sort_by_tier_then_id(&mut quests);

        let progress = self.load_progress(user_id).await?;

        // Without a snapshot the evaluator fails before it would consult the gate.
        let resolved_gate = match progress.as_ref() {
            Some(snapshot) if quests.iter().any(Quest::requires_tier_one) => {
                Some(ResolvedTierGate(self.resolve_tier_gate(&snapshot.user_id).await?))
            }
            _ => None,
        };
        let checker: &dyn TierCompletionChecker = match &resolved_gate {
            Some(gate) => gate,
            None => self.tier_checker.as_ref(),
        };

        let mut statuses = Vec::with_capacity(quests.len());
        for quest in &quests {
            statuses.push(self.evaluate(quest, user_id, progress.as_ref(), checker).await?);
        }

        info!(
            "Evaluated {} quests for {} ({} met)",
            statuses.len(),
            user_id,
            statuses.iter().filter(|s| s.requirements_met).count()
        );
        Ok(statuses)
    }

    async fn get_available_quests(&self, user_id: &str) -> Result<Vec<Quest>> {
        let quests = self.quest_repository.list_quests()?;
        for quest in &quests {
            QuestEvaluator::validate_quest(quest)?;
        }

        let (mut available, gated): (Vec<Quest>, Vec<Quest>) =
            quests.into_iter().partition(|q| !q.requires_tier_one());

        if !gated.is_empty() {
            if self.resolve_tier_gate(user_id).await? {
                available.extend(gated);
            } else {
                debug!(
                    "{} higher-tier quests locked for {}",
                    gated.len(),
                    user_id
                );
            }
        }

        sort_by_tier_then_id(&mut available);
        Ok(available)
    }
}
