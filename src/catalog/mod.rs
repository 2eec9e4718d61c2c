//! Checklist catalog
//!
//! The catalog is the static, ordered rule table of checklist items.
//! Each item carries its applicability rules: construction statuses, cost
//! brackets, an optional special-construction dependency and optional
//! sub-items that narrow the parent's rules.
//!
//! # Invariants
//!
//! - Item keys are unique and non-empty
//! - Keys and sub-item titles never contain the `.` compound-key separator
//! - Iteration order is insertion order
//! - The catalog is never mutated after construction

mod data;
mod errors;
mod types;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use errors::{CatalogError, CatalogResult};
pub use types::{
    ChecklistItem, Choice, ConstructionCost, ConstructionStatus, CostRule, Dependency, SpecialFlag,
    SubItem, YesNo,
};

/// Separator between an item key and a sub-item title in answer keys
pub const KEY_SEPARATOR: char = '.';

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Immutable ordered table of checklist items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ChecklistItem>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from an ordered item list, validating its invariants.
    pub fn new(items: Vec<ChecklistItem>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            validate_item(item)?;
            if index.insert(item.key.clone(), position).is_some() {
                return Err(CatalogError::DuplicateKey(item.key.clone()));
            }
        }

        Ok(Self { items, index })
    }

    /// The compiled-in catalog.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Catalog::from_trusted(data::builtin_items()))
    }

    /// Builds a catalog from items known to satisfy the invariants.
    fn from_trusted(items: Vec<ChecklistItem>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.key.clone(), position))
            .collect();
        Self { items, index }
    }

    /// Look up an item by key
    pub fn get(&self, key: &str) -> Option<&ChecklistItem> {
        self.index.get(key).map(|&position| &self.items[position])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Position of an item in display order
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Items in display order
    pub fn iter(&self) -> std::slice::Iter<'_, ChecklistItem> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ChecklistItem;
    type IntoIter = std::slice::Iter<'a, ChecklistItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_item(item: &ChecklistItem) -> CatalogResult<()> {
    if item.key.trim().is_empty() {
        return Err(CatalogError::EmptyKey);
    }
    if item.key.contains(KEY_SEPARATOR) {
        return Err(CatalogError::SeparatorInKey(item.key.clone()));
    }
    if item.statuses.is_empty() {
        return Err(CatalogError::NoStatuses(item.key.clone()));
    }
    if matches!(&item.costs, CostRule::Only(costs) if costs.is_empty()) {
        return Err(CatalogError::EmptyCosts(item.key.clone()));
    }

    for (position, sub) in item.sub_items.iter().enumerate() {
        if sub.title.trim().is_empty() || sub.title.contains(KEY_SEPARATOR) {
            return Err(CatalogError::InvalidSubItemTitle {
                item: item.key.clone(),
                title: sub.title.clone(),
            });
        }
        if item.sub_items[..position].iter().any(|s| s.title == sub.title) {
            return Err(CatalogError::DuplicateSubItem {
                item: item.key.clone(),
                title: sub.title.clone(),
            });
        }
        let empty_statuses = matches!(&sub.statuses, Some(s) if s.is_empty());
        let empty_costs = matches!(&sub.costs, Some(CostRule::Only(c)) if c.is_empty());
        if empty_statuses || empty_costs {
            return Err(CatalogError::EmptySubItemRule {
                item: item.key.clone(),
                title: sub.title.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATUSES: &[ConstructionStatus] = &[
        ConstructionStatus::NotStarted,
        ConstructionStatus::InProgress,
        ConstructionStatus::Halted,
    ];

    #[test]
    fn test_builtin_satisfies_invariants() {
        let rebuilt = Catalog::new(data::builtin_items());
        assert!(rebuilt.is_ok(), "{:?}", rebuilt.err());
        assert_eq!(Catalog::builtin().len(), 20);
    }

    #[test]
    fn test_builtin_preserves_insertion_order() {
        let keys: Vec<&str> = Catalog::builtin().keys().collect();
        assert_eq!(keys.first(), Some(&"시공안전계획서 수립 여부"));
        assert_eq!(keys.last(), Some(&"MSDS(물질안전보건자료) 게시 및 교육 여부"));
        for (position, key) in keys.iter().enumerate() {
            assert_eq!(Catalog::builtin().position(key), Some(position));
        }
    }

    const EVERY: &[&str] = &["착공전", "공사중", "공사중지"];
    const RUNNING: &[&str] = &["공사중"];
    const RUNNING_OR_HALTED: &[&str] = &["공사중", "공사중지"];
    const FROM_20: &[&str] = &[
        "20억 이상 ~ 50억 미만",
        "50억 이상 ~ 120억 미만",
        "120억 이상 ~ 150억 미만(건축)",
        "150억 이상(토목)",
    ];
    const FROM_50: &[&str] = &[
        "50억 이상 ~ 120억 미만",
        "120억 이상 ~ 150억 미만(건축)",
        "150억 이상(토목)",
    ];
    const TECHNICAL_GUIDANCE: &[&str] = &[
        "1억 이상 ~ 5억 미만",
        "5억 이상 ~ 20억 미만",
        "20억 이상 ~ 50억 미만",
        "50억 이상 ~ 120억 미만",
    ];
    const SAFETY_PLAN_YES: &str = "안전관리계획서 = 예";

    /// (key, statuses, costs or `None` for every bracket, dependency)
    type Rule = (
        &'static str,
        &'static [&'static str],
        Option<&'static [&'static str]>,
        Option<&'static str>,
    );

    const RULES: &[Rule] = &[
        ("시공안전계획서 수립 여부", EVERY, None, Some("안전관리계획서 = 아니오")),
        ("공사안전보건대장 작성여부", EVERY, Some(FROM_50), None),
        ("안전관리계획서작성여부", EVERY, None, Some(SAFETY_PLAN_YES)),
        ("가설구조물 구조적 안전성 검토", &["착공전", "공사중"], None, Some(SAFETY_PLAN_YES)),
        ("일일안전점검여부", RUNNING, None, None),
        ("위험성평가실시여부", RUNNING, None, None),
        ("작업계획서작성 여부", RUNNING, None, None),
        ("위험공종 작업허가제 작성 여부", RUNNING, None, None),
        ("TBM실시여부", RUNNING, None, None),
        ("근로자 작업장 출입 전,후 체크", RUNNING, None, None),
        ("안전보건조정자 선임 및 회의 여부", RUNNING, Some(FROM_50), None),
        ("안전보건협의체 실시 여부", RUNNING, Some(FROM_50), None),
        ("재해예방기술지도 실시 여부", RUNNING, Some(TECHNICAL_GUIDANCE), None),
        ("유해위험방지계획서 수립여부", EVERY, None, Some("유해위험방지계획서 = 예")),
        ("산업안전보건관리비 사용내역 기록 여부", RUNNING_OR_HALTED, None, None),
        ("건진법 안전관리비 사용내역 기록 여부", RUNNING_OR_HALTED, None, None),
        ("휴게시설 구축 여부", RUNNING, Some(FROM_20), None),
        ("안전보건총괄책임자/관리책임자 선임여부", EVERY, Some(FROM_20), None),
        ("안전보건교육", RUNNING_OR_HALTED, None, None),
        ("MSDS(물질안전보건자료) 게시 및 교육 여부", RUNNING_OR_HALTED, None, None),
    ];

    #[test]
    fn test_builtin_rules_match_reference_table() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), RULES.len());

        for (item, (key, statuses, costs, dependency)) in catalog.iter().zip(RULES) {
            assert_eq!(item.key, *key);

            let item_statuses: Vec<&str> = item.statuses.iter().map(|s| s.label()).collect();
            assert_eq!(item_statuses, *statuses, "statuses of {}", key);

            match (&item.costs, costs) {
                (CostRule::All, None) => {}
                (CostRule::Only(brackets), Some(expected)) => {
                    let labels: Vec<&str> = brackets.iter().map(|c| c.label()).collect();
                    assert_eq!(labels, *expected, "costs of {}", key);
                }
                (actual, expected) => panic!("costs of {}: {:?} vs {:?}", key, actual, expected),
            }

            let item_dependency = item.dependency.map(|d| d.to_string());
            assert_eq!(item_dependency.as_deref(), *dependency, "dependency of {}", key);
        }
    }

    #[test]
    fn test_builtin_has_multi_part_items() {
        let education = Catalog::builtin().get("안전보건교육").unwrap();
        assert!(education.is_multi_part());
        assert!(education.sub_item("정기교육").is_some());
        assert!(!Catalog::builtin().get("TBM실시여부").unwrap().is_multi_part());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let items = vec![
            ChecklistItem::new("A", ALL_STATUSES, CostRule::All),
            ChecklistItem::new("A", ALL_STATUSES, CostRule::All),
        ];
        assert_eq!(Catalog::new(items).unwrap_err(), CatalogError::DuplicateKey("A".into()));
    }

    #[test]
    fn test_separator_in_key_rejected() {
        let items = vec![ChecklistItem::new("A.B", ALL_STATUSES, CostRule::All)];
        assert_eq!(
            Catalog::new(items).unwrap_err(),
            CatalogError::SeparatorInKey("A.B".into())
        );
    }

    #[test]
    fn test_empty_rules_rejected() {
        let no_status = vec![ChecklistItem::new("A", &[], CostRule::All)];
        assert_eq!(Catalog::new(no_status).unwrap_err(), CatalogError::NoStatuses("A".into()));

        let no_cost = vec![ChecklistItem::new("A", ALL_STATUSES, CostRule::Only(vec![]))];
        assert_eq!(Catalog::new(no_cost).unwrap_err(), CatalogError::EmptyCosts("A".into()));

        let empty_sub = vec![ChecklistItem::new("A", ALL_STATUSES, CostRule::All)
            .with_sub_items(vec![SubItem::new("x").with_statuses(&[])])];
        assert!(matches!(
            Catalog::new(empty_sub).unwrap_err(),
            CatalogError::EmptySubItemRule { .. }
        ));
    }

    #[test]
    fn test_duplicate_sub_item_rejected() {
        let items = vec![ChecklistItem::new("A", ALL_STATUSES, CostRule::All)
            .with_sub_items(vec![SubItem::new("x"), SubItem::new("x")])];
        assert_eq!(
            Catalog::new(items).unwrap_err(),
            CatalogError::DuplicateSubItem {
                item: "A".into(),
                title: "x".into()
            }
        );
    }

    #[test]
    fn test_empty_catalog_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get("anything").is_none());
    }
}
