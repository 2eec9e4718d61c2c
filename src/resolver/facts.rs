//! Project fact set
//!
//! Four independent categorical facts drive applicability. A value outside
//! its enumeration is treated as unset, both when set through
//! `FactSet::set` and when a stored snapshot is deserialized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::catalog::{Choice, ConstructionCost, ConstructionStatus, SpecialFlag, YesNo};

/// The project's construction conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    #[serde(default, deserialize_with = "lenient")]
    pub construction_status: Option<ConstructionStatus>,
    #[serde(default, deserialize_with = "lenient")]
    pub construction_cost: Option<ConstructionCost>,
    #[serde(default, deserialize_with = "lenient", rename = "hasSpecialConstruction1")]
    pub hazard_plan: Option<YesNo>,
    #[serde(default, deserialize_with = "lenient", rename = "hasSpecialConstruction2")]
    pub safety_plan: Option<YesNo>,
}

impl FactSet {
    /// A fact set with every fact unset
    pub fn unset() -> Self {
        Self::default()
    }

    /// True when no fact has been chosen (catalog preview)
    pub fn is_unset(&self) -> bool {
        self.construction_status.is_none()
            && self.construction_cost.is_none()
            && self.hazard_plan.is_none()
            && self.safety_plan.is_none()
    }

    /// True when every fact has been chosen
    pub fn is_fully_set(&self) -> bool {
        self.construction_status.is_some()
            && self.construction_cost.is_some()
            && self.hazard_plan.is_some()
            && self.safety_plan.is_some()
    }

    /// Value of a special-construction flag
    pub fn flag(&self, flag: SpecialFlag) -> Option<YesNo> {
        match flag {
            SpecialFlag::HazardPlan => self.hazard_plan,
            SpecialFlag::SafetyPlan => self.safety_plan,
        }
    }

    /// Sets one fact from raw input. Unknown or empty input unsets it.
    pub fn set(&mut self, fact: Fact, raw: &str) {
        match fact {
            Fact::Status => self.construction_status = ConstructionStatus::parse(raw),
            Fact::Cost => self.construction_cost = ConstructionCost::parse(raw),
            Fact::HazardPlan => self.hazard_plan = YesNo::parse(raw),
            Fact::SafetyPlan => self.safety_plan = YesNo::parse(raw),
        }
    }

    /// Builder form of `set`
    pub fn with(mut self, fact: Fact, raw: &str) -> Self {
        self.set(fact, raw);
        self
    }

    /// Display label of one fact, empty when unset
    pub fn label_of(&self, fact: Fact) -> &'static str {
        match fact {
            Fact::Status => self.construction_status.map_or("", |v| v.label()),
            Fact::Cost => self.construction_cost.map_or("", |v| v.label()),
            Fact::HazardPlan => self.hazard_plan.map_or("", |v| v.label()),
            Fact::SafetyPlan => self.safety_plan.map_or("", |v| v.label()),
        }
    }
}

/// Names one of the four facts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    Status,
    Cost,
    HazardPlan,
    SafetyPlan,
}

impl Fact {
    pub const ALL: [Fact; 4] = [Fact::Status, Fact::Cost, Fact::HazardPlan, Fact::SafetyPlan];

    /// Field name used in snapshots and submission payloads
    pub fn field_name(&self) -> &'static str {
        match self {
            Fact::Status => "constructionStatus",
            Fact::Cost => "constructionCost",
            Fact::HazardPlan => "hasSpecialConstruction1",
            Fact::SafetyPlan => "hasSpecialConstruction2",
        }
    }

    /// Report label
    pub fn label(&self) -> &'static str {
        match self {
            Fact::Status => "공사 상태",
            Fact::Cost => "총공사비 규모",
            Fact::HazardPlan => SpecialFlag::HazardPlan.label(),
            Fact::SafetyPlan => SpecialFlag::SafetyPlan.label(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for Fact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "status" | "constructionStatus" => Ok(Fact::Status),
            "cost" | "constructionCost" => Ok(Fact::Cost),
            "hazard-plan" | "hasSpecialConstruction1" => Ok(Fact::HazardPlan),
            "safety-plan" | "hasSpecialConstruction2" => Ok(Fact::SafetyPlan),
            other => Err(other.to_string()),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Choice,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(T::parse))
}
