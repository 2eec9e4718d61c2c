//! Plain-text inspection report

use std::fmt::Write;

use crate::catalog::Choice;
use crate::form::{FormSnapshot, InspectorField};
use crate::resolver::Fact;

use super::flatten::{OutcomeSummary, ReportRow};

pub const REPORT_TITLE: &str = "안전서류 점검 결과";

const INSPECTOR_ROWS: [InspectorField; 5] = [
    InspectorField::Headquarters,
    InspectorField::Branch,
    InspectorField::Affiliation,
    InspectorField::InspectorName,
    InspectorField::InspectionDate,
];

pub fn render_text(snapshot: &FormSnapshot, rows: &[ReportRow]) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", REPORT_TITLE);
    let _ = writeln!(out, "[{}]", snapshot.inspector.project_name);
    if !snapshot.inspector.district.is_empty() {
        let _ = writeln!(
            out,
            "{}: {}",
            InspectorField::District.label(),
            snapshot.inspector.district
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "■ 공사 여건");
    for fact in Fact::ALL {
        let _ = writeln!(out, "• {} : {}", fact.label(), snapshot.facts.label_of(fact));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "■ 점검자 정보");
    for field in INSPECTOR_ROWS {
        let _ = writeln!(out, "• {} : {}", field.label(), snapshot.inspector.display(field));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "■ 체크리스트 결과 {}",
        OutcomeSummary::from_rows(rows).line()
    );
    for row in rows {
        let _ = writeln!(out, "{} : {}", row.label(), row.outcome.label());
    }

    out
}

/// `안전서류_점검결과_<project>.txt`, with path separators replaced
pub fn report_file_name(project_name: &str) -> String {
    let project: String = project_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("안전서류_점검결과_{}.txt", project)
}
