//! Form controller
//!
//! Owns the form snapshot and runs the resolver pipeline after every
//! fact change, so stored answers always belong to the active set.
//! All state changes are logged here; the resolver itself stays pure.

use serde::Serialize;

use crate::catalog::{Catalog, Choice};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::resolver::{
    compute_active_items, find_incomplete, is_complete, next_incomplete, progress, resolve,
    ActiveChecklist, CheckOutcome, Fact, IncompleteCursor, Progress,
};
use crate::submit::{SubmissionPayload, SubmissionReceipt, Submitter};

use super::errors::{FormError, FormResult};
use super::inspector::InspectorField;
use super::snapshot::FormSnapshot;

/// Result of a fact change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactChange {
    pub fact: &'static str,
    pub value: &'static str,
    pub pruned: Vec<String>,
    pub complete: bool,
    pub progress: Progress,
}

/// Readiness of each form section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormStatus {
    pub preview: bool,
    pub construction_complete: bool,
    pub checklist_complete: bool,
    pub inspector_complete: bool,
    pub ready: bool,
    pub progress: Progress,
    pub active_items: usize,
    pub incomplete: Vec<String>,
}

impl FormStatus {
    /// Sections still blocking submission
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.construction_complete {
            missing.push("construction conditions");
        }
        if !self.checklist_complete {
            missing.push("checklist");
        }
        if !self.inspector_complete {
            missing.push("inspector details");
        }
        missing
    }
}

pub struct FormController<'c> {
    catalog: &'c Catalog,
    snapshot: FormSnapshot,
    cursor: Option<usize>,
}

impl<'c> FormController<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            snapshot: FormSnapshot::default(),
            cursor: None,
        }
    }

    /// Restores a stored snapshot, dropping answers the current catalog
    /// no longer accepts under the stored facts.
    pub fn from_snapshot(catalog: &'c Catalog, mut snapshot: FormSnapshot) -> Self {
        let resolution = resolve(catalog, &snapshot.facts, &snapshot.answers);
        if !resolution.pruned.is_empty() {
            let count = resolution.pruned.len().to_string();
            log_event_with_fields(
                Event::AnswersPruned,
                &[("count", count.as_str()), ("reason", "restore")],
            );
        }
        snapshot.answers = resolution.answers;

        Self {
            catalog,
            snapshot,
            cursor: None,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> FormSnapshot {
        self.snapshot
    }

    pub fn active(&self) -> ActiveChecklist<'c> {
        compute_active_items(self.catalog, &self.snapshot.facts)
    }

    /// Sets one fact and reconciles answers against the new active set.
    ///
    /// Unknown values unset the fact rather than failing.
    pub fn set_fact(&mut self, fact: Fact, raw: &str) -> FactChange {
        self.snapshot.facts.set(fact, raw);
        let value = self.snapshot.facts.label_of(fact);
        log_event_with_fields(
            Event::FactChanged,
            &[("fact", fact.field_name()), ("value", value)],
        );

        let resolution = resolve(self.catalog, &self.snapshot.facts, &self.snapshot.answers);
        self.snapshot.answers = resolution.answers;
        self.cursor = None;

        if !resolution.pruned.is_empty() {
            let count = resolution.pruned.len().to_string();
            let keys = resolution.pruned.join(",");
            log_event_with_fields(
                Event::AnswersPruned,
                &[("count", count.as_str()), ("keys", keys.as_str())],
            );
        }
        if resolution.complete {
            log_event(Event::ChecklistComplete);
        }

        FactChange {
            fact: fact.field_name(),
            value,
            pruned: resolution.pruned,
            complete: resolution.complete,
            progress: resolution.progress,
        }
    }

    /// Records an outcome for an active item or sub-item.
    pub fn record_answer(&mut self, key: &str, outcome: CheckOutcome) -> FormResult<Progress> {
        let active = self.active();
        if !active.accepts(key) {
            log_event_with_fields(Event::AnswerRejected, &[("key", key)]);
            return Err(FormError::InactiveKey(key.to_string()));
        }

        let was_complete = is_complete(&active, &self.snapshot.answers);
        self.snapshot.answers.insert(key, outcome);
        log_event_with_fields(
            Event::AnswerRecorded,
            &[("key", key), ("outcome", outcome.slug())],
        );

        if !was_complete && is_complete(&active, &self.snapshot.answers) {
            log_event(Event::ChecklistComplete);
        }

        Ok(progress(&active, &self.snapshot.answers))
    }

    /// Removes a recorded answer; returns whether one existed
    pub fn clear_answer(&mut self, key: &str) -> bool {
        let cleared = self.snapshot.answers.remove(key).is_some();
        if cleared {
            log_event_with_fields(Event::AnswerCleared, &[("key", key)]);
        }
        cleared
    }

    pub fn set_inspector(&mut self, field: InspectorField, raw: &str) -> FormResult<()> {
        self.snapshot.inspector.set(field, raw)?;
        let value = self.snapshot.inspector.display(field);
        log_event_with_fields(
            Event::InspectorUpdated,
            &[("field", field.field_name()), ("value", value.as_str())],
        );
        Ok(())
    }

    /// Moves the internal cursor to the next incomplete item, cycling.
    pub fn next_incomplete(&mut self) -> Option<IncompleteCursor> {
        let cursor = self.next_incomplete_after(self.cursor);
        self.cursor = cursor.as_ref().map(|c| c.index);
        cursor
    }

    /// Next incomplete item after an explicit cursor position
    pub fn next_incomplete_after(&self, previous: Option<usize>) -> Option<IncompleteCursor> {
        next_incomplete(&self.active(), &self.snapshot.answers, previous)
    }

    pub fn status(&self) -> FormStatus {
        let active = self.active();
        let construction_complete = self.snapshot.facts.is_fully_set();
        let checklist_complete = is_complete(&active, &self.snapshot.answers);
        let inspector_complete = self.snapshot.inspector.is_complete();

        FormStatus {
            preview: active.is_preview(),
            construction_complete,
            checklist_complete,
            inspector_complete,
            ready: construction_complete && checklist_complete && inspector_complete,
            progress: progress(&active, &self.snapshot.answers),
            active_items: active.len(),
            incomplete: find_incomplete(&active, &self.snapshot.answers)
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn payload(&self) -> SubmissionPayload {
        SubmissionPayload::build(&self.snapshot, &self.active())
    }

    /// Clears facts, answers and inspector details.
    pub fn reset(&mut self) {
        self.snapshot = FormSnapshot::default();
        self.cursor = None;
        log_event(Event::FormReset);
    }

    /// Submits a ready form. On success the form is reset.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> FormResult<SubmissionReceipt> {
        let status = self.status();
        if !status.ready {
            return Err(FormError::NotReady(status.missing_sections().join(", ")));
        }

        let payload = self.payload();
        let answers = payload.answer_count().to_string();
        log_event_with_fields(Event::SubmissionAttempted, &[("answers", answers.as_str())]);

        match submitter.submit(&payload) {
            Ok(receipt) => {
                self.reset();
                Ok(receipt)
            }
            Err(err) => {
                log_event_with_fields(
                    Event::SubmissionFailed,
                    &[("code", err.code()), ("error", err.to_string().as_str())],
                );
                Err(err.into())
            }
        }
    }
}
