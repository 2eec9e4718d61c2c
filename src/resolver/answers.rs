//! Answer record
//!
//! Maps an answer key to the recorded check outcome. A key is either an
//! item key or the compound `item.subItemTitle` key of a sub-item.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{Choice, KEY_SEPARATOR};

/// Outcome of checking one item or sub-item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckOutcome {
    /// 이행
    Complied,
    /// 불이행
    NotComplied,
    /// 해당없음
    NotApplicable,
}

impl Choice for CheckOutcome {
    const ALL: &'static [Self] = &[Self::Complied, Self::NotComplied, Self::NotApplicable];

    fn slug(&self) -> &'static str {
        match self {
            Self::Complied => "complied",
            Self::NotComplied => "not-complied",
            Self::NotApplicable => "not-applicable",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Complied => "이행",
            Self::NotComplied => "불이행",
            Self::NotApplicable => "해당없음",
        }
    }
}

/// A parsed answer key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey<'a> {
    Item(&'a str),
    SubItem { item: &'a str, title: &'a str },
}

impl<'a> AnswerKey<'a> {
    /// Splits on the first separator
    pub fn parse(key: &'a str) -> Self {
        match key.split_once(KEY_SEPARATOR) {
            Some((item, title)) => AnswerKey::SubItem { item, title },
            None => AnswerKey::Item(key),
        }
    }

    /// Key of the owning item
    pub fn item(&self) -> &'a str {
        match self {
            AnswerKey::Item(item) => item,
            AnswerKey::SubItem { item, .. } => item,
        }
    }
}

/// Builds the compound answer key of a sub-item
pub fn sub_item_key(item: &str, title: &str) -> String {
    format!("{}{}{}", item, KEY_SEPARATOR, title)
}

/// Recorded outcomes keyed by answer key.
///
/// Deserialization drops entries whose outcome is not a known value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<String, CheckOutcome>"
)]
pub struct AnswerRecord {
    entries: BTreeMap<String, CheckOutcome>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<CheckOutcome> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Records an outcome, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, outcome: CheckOutcome) -> Option<CheckOutcome> {
        self.entries.insert(key.into(), outcome)
    }

    pub fn remove(&mut self, key: &str) -> Option<CheckOutcome> {
        self.entries.remove(key)
    }

    /// Keeps only entries for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.entries.retain(|key, _| keep(key));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, CheckOutcome)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, Value>> for AnswerRecord {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let outcome = value.as_str().and_then(CheckOutcome::parse)?;
                Some((key, outcome))
            })
            .collect();
        Self { entries }
    }
}

impl From<AnswerRecord> for BTreeMap<String, CheckOutcome> {
    fn from(record: AnswerRecord) -> Self {
        record.entries
    }
}

impl<K: Into<String>> FromIterator<(K, CheckOutcome)> for AnswerRecord {
    fn from_iter<I: IntoIterator<Item = (K, CheckOutcome)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
