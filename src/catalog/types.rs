//! Catalog type definitions
//!
//! Fact enumerations (construction status, cost bracket, yes/no flags),
//! applicability rules and the checklist item/sub-item definitions.
//!
//! Every enumeration has a stable slug (used in snapshots and on the
//! command line) and a display label (used in reports and payloads).
//! Parsing accepts either form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed set of named values with a slug and a display label.
pub trait Choice: Copy + Sized + 'static {
    /// All values in declaration order
    const ALL: &'static [Self];

    /// Machine-facing identifier
    fn slug(&self) -> &'static str;

    /// Human-facing label
    fn label(&self) -> &'static str;

    /// Parses a slug or a label. Unknown input yields `None`.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.slug() == raw || v.label() == raw)
    }
}

/// Construction progress of the inspected project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionStatus {
    /// 착공전
    NotStarted,
    /// 공사중
    InProgress,
    /// 공사중지
    Halted,
}

impl Choice for ConstructionStatus {
    const ALL: &'static [Self] = &[Self::NotStarted, Self::InProgress, Self::Halted];

    fn slug(&self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::InProgress => "in-progress",
            Self::Halted => "halted",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::NotStarted => "착공전",
            Self::InProgress => "공사중",
            Self::Halted => "공사중지",
        }
    }
}

/// Total construction cost bracket, in units of 억 원 (100M KRW).
///
/// Declaration order is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstructionCost {
    #[serde(rename = "under-1")]
    Under1,
    #[serde(rename = "1-5")]
    From1To5,
    #[serde(rename = "5-20")]
    From5To20,
    #[serde(rename = "20-50")]
    From20To50,
    #[serde(rename = "50-120")]
    From50To120,
    /// Building works only
    #[serde(rename = "120-150-building")]
    From120To150Building,
    /// Civil works only
    #[serde(rename = "150-plus-civil")]
    Over150Civil,
}

impl ConstructionCost {
    /// Brackets from `self` upward, inclusive
    pub fn and_above(self) -> Vec<ConstructionCost> {
        Self::ALL.iter().copied().filter(|c| *c >= self).collect()
    }
}

impl Choice for ConstructionCost {
    const ALL: &'static [Self] = &[
        Self::Under1,
        Self::From1To5,
        Self::From5To20,
        Self::From20To50,
        Self::From50To120,
        Self::From120To150Building,
        Self::Over150Civil,
    ];

    fn slug(&self) -> &'static str {
        match self {
            Self::Under1 => "under-1",
            Self::From1To5 => "1-5",
            Self::From5To20 => "5-20",
            Self::From20To50 => "20-50",
            Self::From50To120 => "50-120",
            Self::From120To150Building => "120-150-building",
            Self::Over150Civil => "150-plus-civil",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Under1 => "1억 미만",
            Self::From1To5 => "1억 이상 ~ 5억 미만",
            Self::From5To20 => "5억 이상 ~ 20억 미만",
            Self::From20To50 => "20억 이상 ~ 50억 미만",
            Self::From50To120 => "50억 이상 ~ 120억 미만",
            Self::From120To150Building => "120억 이상 ~ 150억 미만(건축)",
            Self::Over150Civil => "150억 이상(토목)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YesNo {
    Yes,
    No,
}

impl Choice for YesNo {
    const ALL: &'static [Self] = &[Self::Yes, Self::No];

    fn slug(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Yes => "예",
            Self::No => "아니오",
        }
    }
}

/// The two independent special-construction classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialFlag {
    /// Works subject to a hazard-prevention plan (유해위험방지계획서 대상)
    HazardPlan,
    /// Works subject to a safety-management plan (안전관리계획서 대상)
    SafetyPlan,
}

impl SpecialFlag {
    /// Display label of the classification
    pub fn label(&self) -> &'static str {
        match self {
            SpecialFlag::HazardPlan => "유해위험방지계획서",
            SpecialFlag::SafetyPlan => "안전관리계획서",
        }
    }

    /// Work types that place a project under this classification
    pub fn qualifying_works(&self) -> &'static [&'static str] {
        match self {
            SpecialFlag::HazardPlan => &[
                "31m이상 건축물",
                "연면적 3만제곱미터 이상 건축물",
                "연면적 5천제곱미터 이상 창고외시설",
                "교량(최대지간50m 이상)",
                "터널공사",
                "저수용량 2천만톤이상댐",
                "10m이상 굴착공사",
            ],
            SpecialFlag::SafetyPlan => &[
                "1,2종 시설물 건설공사",
                "지하 10m 이상 굴착 공사",
                "폭발물 사용",
                "10층 이상,16층 미만 건축물 공사",
                "10층 이상 건축물 리모델링 공사",
                "수직증축형 리모델링",
                "천공기, 항타항발기, 타워크레인 사용 공사",
                "가설구조물(31m이상 비계, 5m이상 거푸집, 동바리, 갱폼, 2m 이상 흙막이, 10m이상 외부작업용 가설구조물) 사용공사",
            ],
        }
    }
}

/// Cost applicability of an item or sub-item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostRule {
    /// Applies regardless of cost
    All,
    /// Applies only to the listed brackets
    Only(Vec<ConstructionCost>),
}

impl CostRule {
    pub fn only(costs: &[ConstructionCost]) -> Self {
        CostRule::Only(costs.to_vec())
    }
}

/// Dependency on the special-construction classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Dependency {
    /// The named flag must be answered "yes"
    Requires { flag: SpecialFlag },
    /// The safety-plan flag must hold exactly this value
    SafetyPlanIs { value: YesNo },
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependency::Requires { flag } => write!(f, "{} = {}", flag.label(), YesNo::Yes.label()),
            Dependency::SafetyPlanIs { value } => {
                write!(f, "{} = {}", SpecialFlag::SafetyPlan.label(), value.label())
            }
        }
    }
}

/// A sub-item of a multi-part checklist item.
///
/// Every rule is optional; an absent rule passes that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statuses: Option<Vec<ConstructionStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<Dependency>,
}

impl SubItem {
    /// Create an unrestricted sub-item
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            statuses: None,
            costs: None,
            dependency: None,
        }
    }

    /// Restrict to the given statuses
    pub fn with_statuses(mut self, statuses: &[ConstructionStatus]) -> Self {
        self.statuses = Some(statuses.to_vec());
        self
    }

    /// Restrict to the given cost rule
    pub fn with_costs(mut self, costs: CostRule) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn depends_on(mut self, dependency: Dependency) -> Self {
        self.dependency = Some(dependency);
        self
    }
}

/// A checklist item and its applicability rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique, human-readable key
    pub key: String,
    /// Statuses for which the item applies (non-empty)
    pub statuses: Vec<ConstructionStatus>,
    pub costs: CostRule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<Dependency>,
    /// Ordered sub-items; empty for a single-answer item
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<SubItem>,
}

impl ChecklistItem {
    /// Create an item without dependency or sub-items
    pub fn new(key: impl Into<String>, statuses: &[ConstructionStatus], costs: CostRule) -> Self {
        Self {
            key: key.into(),
            statuses: statuses.to_vec(),
            costs,
            dependency: None,
            sub_items: Vec::new(),
        }
    }

    pub fn depends_on(mut self, dependency: Dependency) -> Self {
        self.dependency = Some(dependency);
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<SubItem>) -> Self {
        self.sub_items = sub_items;
        self
    }

    /// Whether answers are recorded per sub-item instead of per item
    pub fn is_multi_part(&self) -> bool {
        !self.sub_items.is_empty()
    }

    /// Look up a sub-item by title
    pub fn sub_item(&self, title: &str) -> Option<&SubItem> {
        self.sub_items.iter().find(|s| s.title == title)
    }
}
