//! Completion tracking over the active set
//!
//! A single-answer item is complete when its key has an answer. A
//! multi-part item is complete when every active sub-item has one. The
//! checklist is complete when the active set is non-empty, every item is
//! complete, and at least one active answer is recorded.

use serde::Serialize;

use super::active::{ActiveChecklist, ActiveItem};
use super::answers::{sub_item_key, AnswerRecord};

/// Answered versus required answer keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub answered: usize,
    pub required: usize,
}

impl Progress {
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.answered)
    }
}

/// Position in the incomplete list reached by "jump to next incomplete"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteCursor {
    pub index: usize,
    pub key: String,
    pub total: usize,
}

pub fn item_is_complete(active: &ActiveItem<'_>, answers: &AnswerRecord) -> bool {
    if active.is_multi_part() {
        active
            .sub_items
            .iter()
            .all(|sub| answers.contains(&sub_item_key(active.key(), &sub.title)))
    } else {
        answers.contains(active.key())
    }
}

/// Number of recorded answers that name an active item or sub-item
pub fn active_answer_count(active: &ActiveChecklist<'_>, answers: &AnswerRecord) -> usize {
    answers.keys().filter(|key| active.accepts(key)).count()
}

pub fn is_complete(active: &ActiveChecklist<'_>, answers: &AnswerRecord) -> bool {
    !active.is_empty()
        && active_answer_count(active, answers) > 0
        && active.iter().all(|item| item_is_complete(item, answers))
}

/// Keys of incomplete items in catalog order
pub fn find_incomplete<'c>(active: &ActiveChecklist<'c>, answers: &AnswerRecord) -> Vec<&'c str> {
    active
        .iter()
        .filter(|item| !item_is_complete(item, answers))
        .map(ActiveItem::key)
        .collect()
}

pub fn progress(active: &ActiveChecklist<'_>, answers: &AnswerRecord) -> Progress {
    let required = active
        .iter()
        .map(|item| {
            if item.is_multi_part() {
                item.sub_items.len()
            } else {
                1
            }
        })
        .sum();

    Progress {
        answered: active_answer_count(active, answers),
        required,
    }
}

/// Advances a cyclic cursor over the incomplete items.
///
/// With no previous position the first incomplete item is returned;
/// otherwise the one after `previous`, wrapping around. Returns `None`
/// when nothing is incomplete.
pub fn next_incomplete(
    active: &ActiveChecklist<'_>,
    answers: &AnswerRecord,
    previous: Option<usize>,
) -> Option<IncompleteCursor> {
    let incomplete = find_incomplete(active, answers);
    if incomplete.is_empty() {
        return None;
    }

    let len = incomplete.len();
    let index = previous.map_or(0, |p| (p % len + 1) % len);
    Some(IncompleteCursor {
        index,
        key: incomplete[index].to_string(),
        total: incomplete.len(),
    })
}
