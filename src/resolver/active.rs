//! Active set computation
//!
//! An item or sub-item is active when each of its three rules admits the
//! current facts:
//!
//! - status: fact unset, or listed
//! - cost: rule is `All`, fact unset, or listed
//! - dependency: absent, or satisfied
//!
//! With every fact unset the whole catalog is active and rules are
//! presented as unconstrained (preview).

use crate::catalog::{
    Catalog, ChecklistItem, ConstructionStatus, CostRule, Dependency, SubItem, YesNo,
};

use super::answers::{sub_item_key, AnswerKey};
use super::facts::FactSet;

/// An active checklist item and its active sub-items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveItem<'c> {
    pub item: &'c ChecklistItem,
    /// Active sub-items in catalog order; empty for single-answer items
    pub sub_items: Vec<&'c SubItem>,
    /// Included unconditionally because no fact is set
    pub preview: bool,
}

impl<'c> ActiveItem<'c> {
    pub fn key(&self) -> &'c str {
        &self.item.key
    }

    pub fn is_multi_part(&self) -> bool {
        self.item.is_multi_part()
    }

    /// Whether a sub-item of this item is currently active
    pub fn has_active_sub_item(&self, title: &str) -> bool {
        self.sub_items.iter().any(|s| s.title == title)
    }

    /// Keys that take an answer: active sub-item keys, or the item key
    pub fn answer_keys(&self) -> Vec<String> {
        if self.is_multi_part() {
            self.sub_items
                .iter()
                .map(|s| sub_item_key(&self.item.key, &s.title))
                .collect()
        } else {
            vec![self.item.key.clone()]
        }
    }
}

/// The ordered active subset of a catalog under one fact set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveChecklist<'c> {
    items: Vec<ActiveItem<'c>>,
    preview: bool,
}

impl<'c> ActiveChecklist<'c> {
    pub fn get(&self, key: &str) -> Option<&ActiveItem<'c>> {
        self.items.iter().find(|active| active.key() == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether an answer key names an active item or active sub-item.
    ///
    /// A bare item key only counts for single-answer items; multi-part
    /// items are answered per sub-item.
    pub fn accepts(&self, answer_key: &str) -> bool {
        match AnswerKey::parse(answer_key) {
            AnswerKey::Item(key) => self.get(key).is_some_and(|a| !a.is_multi_part()),
            AnswerKey::SubItem { item, title } => self
                .get(item)
                .is_some_and(|a| a.is_multi_part() && a.has_active_sub_item(title)),
        }
    }

    /// Every answer key in display order
    pub fn answer_keys(&self) -> Vec<String> {
        self.items.iter().flat_map(ActiveItem::answer_keys).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActiveItem<'c>> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'c str> + '_ {
        self.items.iter().map(ActiveItem::key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when computed from a fully unset fact set
    pub fn is_preview(&self) -> bool {
        self.preview
    }
}

impl<'a, 'c> IntoIterator for &'a ActiveChecklist<'c> {
    type Item = &'a ActiveItem<'c>;
    type IntoIter = std::slice::Iter<'a, ActiveItem<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Computes the active items of `catalog` under `facts`, in catalog order.
pub fn compute_active_items<'c>(catalog: &'c Catalog, facts: &FactSet) -> ActiveChecklist<'c> {
    let preview = facts.is_unset();

    let items = catalog
        .iter()
        .filter(|item| preview || item_is_active(item, facts))
        .map(|item| ActiveItem {
            item,
            sub_items: compute_active_sub_items(item, facts),
            preview,
        })
        .collect();

    ActiveChecklist { items, preview }
}

/// Computes the active sub-items of `item` under the current facts.
pub fn compute_active_sub_items<'c>(item: &'c ChecklistItem, facts: &FactSet) -> Vec<&'c SubItem> {
    if facts.is_unset() {
        return item.sub_items.iter().collect();
    }

    item.sub_items
        .iter()
        .filter(|sub| sub_item_is_active(sub, facts))
        .collect()
}

/// Item-level predicate
pub fn item_is_active(item: &ChecklistItem, facts: &FactSet) -> bool {
    status_admits(Some(item.statuses.as_slice()), facts)
        && cost_admits(Some(&item.costs), facts)
        && dependency_admits(item.dependency.as_ref(), facts)
}

/// Sub-item predicate; absent rules pass
pub fn sub_item_is_active(sub: &SubItem, facts: &FactSet) -> bool {
    status_admits(sub.statuses.as_deref(), facts)
        && cost_admits(sub.costs.as_ref(), facts)
        && dependency_admits(sub.dependency.as_ref(), facts)
}

fn status_admits(statuses: Option<&[ConstructionStatus]>, facts: &FactSet) -> bool {
    match (statuses, facts.construction_status) {
        (Some(statuses), Some(status)) => statuses.contains(&status),
        _ => true,
    }
}

fn cost_admits(costs: Option<&CostRule>, facts: &FactSet) -> bool {
    match (costs, facts.construction_cost) {
        (Some(CostRule::Only(costs)), Some(cost)) => costs.contains(&cost),
        _ => true,
    }
}

fn dependency_admits(dependency: Option<&Dependency>, facts: &FactSet) -> bool {
    match dependency {
        None => true,
        Some(Dependency::Requires { flag }) => facts.flag(*flag) == Some(YesNo::Yes),
        Some(Dependency::SafetyPlanIs { value }) => facts.safety_plan == Some(*value),
    }
}
