//! Form Store Integrity Tests
//!
//! The saved form is checksummed; any damage is reported as corruption
//! rather than loaded, and a blank form leaves nothing on disk.

use std::fs;

use serde_json::{json, Value};
use sitecheck::catalog::Catalog;
use sitecheck::form::{FormController, FormSnapshot, InspectorField};
use sitecheck::resolver::{CheckOutcome, Fact};
use sitecheck::store::{compute_checksum, FormStore, StoreErrorCode, FORMAT_VERSION};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn filled_snapshot() -> FormSnapshot {
    let mut form = FormController::new(Catalog::builtin());
    form.set_fact(Fact::Status, "in-progress");
    form.set_fact(Fact::Cost, "20-50");
    form.record_answer("안전보건교육.관리감독자 교육", CheckOutcome::Complied)
        .unwrap();
    form.set_inspector(InspectorField::Headquarters, "충남본부").unwrap();
    form.set_inspector(InspectorField::ProjectName, "천안 저수지 정비").unwrap();
    form.into_snapshot()
}

fn store_in(temp_dir: &TempDir) -> FormStore {
    FormStore::in_dir(temp_dir.path())
}

// =============================================================================
// Round Trip
// =============================================================================

#[test]
fn test_restored_form_matches_saved_form() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let snapshot = filled_snapshot();

    store.save(&snapshot).unwrap();
    let restored = store.load().unwrap().unwrap();
    assert_eq!(restored, snapshot);

    let form = FormController::from_snapshot(Catalog::builtin(), restored);
    assert_eq!(form.status().progress.answered, 1);
}

#[test]
fn test_save_replaces_previous_form() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    store.save(&filled_snapshot()).unwrap();
    let mut second = filled_snapshot();
    second.answers.clear();
    second.facts.set(Fact::Cost, "");
    store.save(&second).unwrap();

    assert_eq!(store.load().unwrap(), Some(second));
    let leftovers: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(leftovers.len(), 1);
}

#[test]
fn test_blank_form_leaves_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    store.save(&filled_snapshot()).unwrap();
    store.save(&FormSnapshot::default()).unwrap();

    assert!(!store.path().exists());
    assert_eq!(store.load().unwrap(), None);
    store.clear().unwrap();
}

// =============================================================================
// Corruption
// =============================================================================

#[test]
fn test_flipped_byte_in_body_detected() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.save(&filled_snapshot()).unwrap();

    let mut envelope: Value = serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
    let body = envelope["body"].as_str().unwrap().replace("20-50", "50-120");
    envelope["body"] = json!(body);
    fs::write(store.path(), envelope.to_string()).unwrap();

    let err = store.load().unwrap_err();
    assert_eq!(err.code(), StoreErrorCode::Corrupted);
    assert!(err.message().contains("Checksum"));
}

#[test]
fn test_truncated_file_detected() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    store.save(&filled_snapshot()).unwrap();

    let bytes = fs::read(store.path()).unwrap();
    fs::write(store.path(), &bytes[..bytes.len() / 2]).unwrap();

    assert!(store.load().unwrap_err().is_corruption());
}

#[test]
fn test_unknown_version_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let body = serde_json::to_string(&filled_snapshot()).unwrap();
    let envelope = json!({
        "version": FORMAT_VERSION + 1,
        "checksum": compute_checksum(body.as_bytes()),
        "body": body,
    });
    fs::write(store.path(), envelope.to_string()).unwrap();

    assert!(store.load().unwrap_err().is_corruption());
}

#[test]
fn test_checksummed_body_with_unknown_values_loads_leniently() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let body = json!({
        "facts": {"constructionStatus": "paused", "constructionCost": "1-5"},
        "answers": {"TBM실시여부": "maybe", "일일안전점검여부": "complied"},
    })
    .to_string();
    let envelope = json!({
        "version": FORMAT_VERSION,
        "checksum": compute_checksum(body.as_bytes()),
        "body": body,
    });
    fs::write(store.path(), envelope.to_string()).unwrap();

    let snapshot = store.load().unwrap().unwrap();
    assert!(snapshot.facts.construction_status.is_none());
    assert!(snapshot.facts.construction_cost.is_some());
    assert_eq!(snapshot.answers.len(), 1);
}
