//! Inspection report
//!
//! `flatten` projects active answers into numbered rows; `render_text`
//! turns a snapshot and its rows into the plain-text report.

mod flatten;
mod render;

pub use flatten::{flatten, OutcomeSummary, ReportRow};
pub use render::{render_text, report_file_name, REPORT_TITLE};

use serde::Serialize;

use crate::catalog::Catalog;
use crate::form::FormSnapshot;
use crate::resolver::compute_active_items;

/// Rows, counts and rendered text for one snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: OutcomeSummary,
    pub text: String,
}

impl Report {
    pub fn build(catalog: &Catalog, snapshot: &FormSnapshot) -> Self {
        let active = compute_active_items(catalog, &snapshot.facts);
        let rows = flatten(&active, &snapshot.answers);
        let summary = OutcomeSummary::from_rows(&rows);
        let text = render_text(snapshot, &rows);
        Self {
            rows,
            summary,
            text,
        }
    }
}
