//! Fact-change pipeline
//!
//! The controller calls `resolve` after every fact mutation:
//!
//! 1. compute the active set from catalog and facts
//! 2. prune answers that no longer name an active item or sub-item
//! 3. compute completion and progress from the pruned answers
//!
//! Pruning always happens before completion so stale answers never count.

use crate::catalog::Catalog;

use super::active::{compute_active_items, ActiveChecklist};
use super::answers::AnswerRecord;
use super::completion::{is_complete, progress, Progress};
use super::facts::FactSet;

/// Outcome of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'c> {
    pub active: ActiveChecklist<'c>,
    /// Answers restricted to the active set
    pub answers: AnswerRecord,
    /// Keys dropped by reconciliation, in key order
    pub pruned: Vec<String>,
    pub complete: bool,
    pub progress: Progress,
}

/// Drops every answer whose key is not an active item or sub-item.
pub fn reconcile_answers(previous: &AnswerRecord, active: &ActiveChecklist<'_>) -> AnswerRecord {
    let mut answers = previous.clone();
    answers.retain(|key| active.accepts(key));
    answers
}

pub fn resolve<'c>(catalog: &'c Catalog, facts: &FactSet, answers: &AnswerRecord) -> Resolution<'c> {
    let active = compute_active_items(catalog, facts);
    let reconciled = reconcile_answers(answers, &active);
    let pruned = answers
        .keys()
        .filter(|key| !reconciled.contains(key))
        .map(str::to_string)
        .collect();
    let complete = is_complete(&active, &reconciled);
    let progress = progress(&active, &reconciled);

    Resolution {
        active,
        answers: reconciled,
        pruned,
        complete,
        progress,
    }
}
