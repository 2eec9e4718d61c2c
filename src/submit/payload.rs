//! Submission payload
//!
//! Flat, ordered name/value pairs: the construction conditions and
//! inspector metadata as display labels, then one entry per active answer
//! in catalog order. Unset values are empty strings.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::Choice;
use crate::form::{FormSnapshot, InspectorField};
use crate::resolver::{ActiveChecklist, Fact};

/// Inspector fields in payload order
const INSPECTOR_FIELDS: [InspectorField; 6] = [
    InspectorField::Headquarters,
    InspectorField::Branch,
    InspectorField::InspectionDate,
    InspectorField::InspectorName,
    InspectorField::ProjectName,
    InspectorField::Affiliation,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionPayload {
    fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    /// Builds the payload. Answers outside `active` are left out.
    pub fn build(snapshot: &FormSnapshot, active: &ActiveChecklist<'_>) -> Self {
        let mut fields = Vec::new();

        for fact in Fact::ALL {
            fields.push((
                fact.field_name().to_string(),
                snapshot.facts.label_of(fact).to_string(),
            ));
        }

        for field in INSPECTOR_FIELDS {
            fields.push((field.field_name().to_string(), snapshot.inspector.display(field)));
        }

        for key in active.answer_keys() {
            if let Some(outcome) = snapshot.answers.get(&key) {
                fields.push((key, outcome.label().to_string()));
            }
        }

        Self { fields }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of checklist entries carried
    pub fn answer_count(&self) -> usize {
        self.fields.len() - Fact::ALL.len() - INSPECTOR_FIELDS.len()
    }
}

impl Serialize for SubmissionPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::form::InspectorInfo;
    use crate::resolver::{compute_active_items, AnswerRecord, CheckOutcome, FactSet};

    fn snapshot() -> FormSnapshot {
        let facts = FactSet::unset()
            .with(Fact::Status, "in-progress")
            .with(Fact::Cost, "50-120")
            .with(Fact::HazardPlan, "no")
            .with(Fact::SafetyPlan, "yes");
        let answers: AnswerRecord = [
            ("TBM실시여부", CheckOutcome::Complied),
            ("안전보건교육.정기교육", CheckOutcome::NotComplied),
            ("시공안전계획서 수립 여부", CheckOutcome::Complied),
        ]
        .into_iter()
        .collect();
        let mut inspector = InspectorInfo::default();
        inspector.set(InspectorField::ProjectName, "천안 용수로 공사").unwrap();

        FormSnapshot {
            facts,
            answers,
            inspector,
        }
    }

    #[test]
    fn test_base_fields_first_and_labelled() {
        let snapshot = snapshot();
        let active = compute_active_items(Catalog::builtin(), &snapshot.facts);
        let payload = SubmissionPayload::build(&snapshot, &active);

        assert_eq!(payload.fields()[0].0, "constructionStatus");
        assert_eq!(payload.get("constructionStatus"), Some("공사중"));
        assert_eq!(payload.get("constructionCost"), Some("50억 이상 ~ 120억 미만"));
        assert_eq!(payload.get("hasSpecialConstruction2"), Some("예"));
        assert_eq!(payload.get("headquarters"), Some(""));
        assert_eq!(payload.get("projectName"), Some("천안 용수로 공사"));
    }

    #[test]
    fn test_inactive_answers_omitted() {
        let snapshot = snapshot();
        let active = compute_active_items(Catalog::builtin(), &snapshot.facts);
        let payload = SubmissionPayload::build(&snapshot, &active);

        assert_eq!(payload.get("TBM실시여부"), Some("이행"));
        assert_eq!(payload.get("안전보건교육.정기교육"), Some("불이행"));
        assert_eq!(payload.get("시공안전계획서 수립 여부"), None);
        assert_eq!(payload.answer_count(), 2);
    }

    #[test]
    fn test_serializes_in_field_order() {
        let snapshot = snapshot();
        let active = compute_active_items(Catalog::builtin(), &snapshot.facts);
        let payload = SubmissionPayload::build(&snapshot, &active);
        let json = serde_json::to_string(&payload).unwrap();

        let status = json.find("constructionStatus").unwrap();
        let affiliation = json.find("inspectorAffiliation").unwrap();
        let answer = json.find("TBM실시여부").unwrap();
        assert!(status < affiliation);
        assert!(affiliation < answer);
    }
}
