//! Flattened answer rows
//!
//! Rows follow catalog order, then sub-item order within an item, and are
//! numbered from 1. Answers outside the active set never appear.

use serde::Serialize;

use crate::catalog::Choice;
use crate::resolver::{sub_item_key, ActiveChecklist, AnswerRecord, CheckOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub number: usize,
    pub item: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_item: Option<String>,
    pub outcome: CheckOutcome,
}

impl ReportRow {
    /// `"{n}. {item}"` or `"{n}. {item} - {sub}"`
    pub fn label(&self) -> String {
        match &self.sub_item {
            Some(sub) => format!("{}. {} - {}", self.number, self.item, sub),
            None => format!("{}. {}", self.number, self.item),
        }
    }
}

/// Outcome counts over the flattened rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeSummary {
    pub complied: usize,
    pub not_complied: usize,
    pub not_applicable: usize,
}

impl OutcomeSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            match row.outcome {
                CheckOutcome::Complied => summary.complied += 1,
                CheckOutcome::NotComplied => summary.not_complied += 1,
                CheckOutcome::NotApplicable => summary.not_applicable += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.complied + self.not_complied + self.not_applicable
    }

    /// `(이행: n건, 불이행: n건, 해당없음: n건)`
    pub fn line(&self) -> String {
        format!(
            "({}: {}건, {}: {}건, {}: {}건)",
            CheckOutcome::Complied.label(),
            self.complied,
            CheckOutcome::NotComplied.label(),
            self.not_complied,
            CheckOutcome::NotApplicable.label(),
            self.not_applicable
        )
    }
}

pub fn flatten(active: &ActiveChecklist<'_>, answers: &AnswerRecord) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for entry in active {
        if entry.is_multi_part() {
            for sub in &entry.sub_items {
                if let Some(outcome) = answers.get(&sub_item_key(entry.key(), &sub.title)) {
                    rows.push(ReportRow {
                        number: rows.len() + 1,
                        item: entry.key().to_string(),
                        sub_item: Some(sub.title.clone()),
                        outcome,
                    });
                }
            }
        } else if let Some(outcome) = answers.get(entry.key()) {
            rows.push(ReportRow {
                number: rows.len() + 1,
                item: entry.key().to_string(),
                sub_item: None,
                outcome,
            });
        }
    }

    rows
}
