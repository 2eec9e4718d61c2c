//! Catalog construction errors
//!
//! The built-in catalog never produces these; they guard catalogs
//! assembled at runtime through `Catalog::new`.

use thiserror::Error;

/// Result type for catalog construction
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Checklist item key is empty")]
    EmptyKey,

    #[error("Duplicate checklist item key: {0}")]
    DuplicateKey(String),

    #[error("Checklist item key contains the '.' separator: {0}")]
    SeparatorInKey(String),

    #[error("Checklist item '{0}' has no applicable statuses")]
    NoStatuses(String),

    #[error("Checklist item '{0}' lists an empty cost set")]
    EmptyCosts(String),

    #[error("Checklist item '{item}' has an invalid sub-item title '{title}'")]
    InvalidSubItemTitle { item: String, title: String },

    #[error("Checklist item '{item}' repeats sub-item '{title}'")]
    DuplicateSubItem { item: String, title: String },

    #[error("Sub-item '{title}' of '{item}' declares an empty rule")]
    EmptySubItemRule { item: String, title: String },
}

impl CatalogError {
    /// Returns the string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::EmptyKey => "SITECHECK_CATALOG_EMPTY_KEY",
            CatalogError::DuplicateKey(_) => "SITECHECK_CATALOG_DUPLICATE_KEY",
            CatalogError::SeparatorInKey(_) => "SITECHECK_CATALOG_SEPARATOR_IN_KEY",
            CatalogError::NoStatuses(_) => "SITECHECK_CATALOG_NO_STATUSES",
            CatalogError::EmptyCosts(_) => "SITECHECK_CATALOG_EMPTY_COSTS",
            CatalogError::InvalidSubItemTitle { .. } => "SITECHECK_CATALOG_INVALID_SUB_ITEM",
            CatalogError::DuplicateSubItem { .. } => "SITECHECK_CATALOG_DUPLICATE_SUB_ITEM",
            CatalogError::EmptySubItemRule { .. } => "SITECHECK_CATALOG_EMPTY_SUB_ITEM_RULE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_item() {
        let err = CatalogError::DuplicateSubItem {
            item: "안전보건교육".into(),
            title: "정기교육".into(),
        };
        let display = err.to_string();
        assert!(display.contains("안전보건교육"));
        assert!(display.contains("정기교육"));
        assert_eq!(err.code(), "SITECHECK_CATALOG_DUPLICATE_SUB_ITEM");
    }
}
