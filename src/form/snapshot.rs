//! Persisted form state

use serde::{Deserialize, Serialize};

use crate::resolver::{AnswerRecord, FactSet};

use super::inspector::InspectorInfo;

/// Everything the user has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSnapshot {
    pub facts: FactSet,
    pub answers: AnswerRecord,
    pub inspector: InspectorInfo,
}

impl FormSnapshot {
    /// True when there is nothing worth keeping
    pub fn is_blank(&self) -> bool {
        self.facts.is_unset() && self.answers.is_empty() && self.inspector.is_blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InspectorField;
    use crate::resolver::{CheckOutcome, Fact};

    #[test]
    fn test_default_is_blank() {
        assert!(FormSnapshot::default().is_blank());
    }

    #[test]
    fn test_any_entry_makes_it_non_blank() {
        let mut snapshot = FormSnapshot::default();
        snapshot.facts.set(Fact::Cost, "1-5");
        assert!(!snapshot.is_blank());

        let mut snapshot = FormSnapshot::default();
        snapshot.answers.insert("TBM실시여부", CheckOutcome::Complied);
        assert!(!snapshot.is_blank());

        let mut snapshot = FormSnapshot::default();
        snapshot
            .inspector
            .set(InspectorField::InspectionDate, "2023-11-20")
            .unwrap();
        assert!(!snapshot.is_blank());
    }

    #[test]
    fn test_missing_sections_deserialize_to_defaults() {
        let snapshot: FormSnapshot =
            serde_json::from_str(r#"{"facts":{"constructionStatus":"공사중"}}"#).unwrap();
        assert!(snapshot.answers.is_empty());
        assert!(snapshot.inspector.headquarters.is_none());
        assert!(snapshot.facts.construction_status.is_some());
    }
}
