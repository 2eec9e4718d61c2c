//! Resolver Invariant Tests
//!
//! Properties of the active-set computation, answer reconciliation and
//! completion tracking, checked against the built-in catalog over every
//! combination of fact values (unset included), plus the hand-built
//! catalogs the scenarios call for.

use sitecheck::catalog::{
    Catalog, ChecklistItem, Choice, ConstructionCost, ConstructionStatus, CostRule, Dependency,
    SubItem, YesNo,
};
use sitecheck::form::FormController;
use sitecheck::resolver::{
    compute_active_items, compute_active_sub_items, find_incomplete, is_complete, item_is_active,
    progress, reconcile_answers, sub_item_is_active, AnswerRecord, CheckOutcome, Fact, FactSet,
};

// =============================================================================
// Test Utilities
// =============================================================================

fn options<T: Choice>() -> Vec<Option<T>> {
    std::iter::once(None)
        .chain(T::ALL.iter().copied().map(Some))
        .collect()
}

/// Every fact combination, each fact unset or set to any value
fn all_fact_sets() -> Vec<FactSet> {
    let mut sets = Vec::new();
    for status in options::<ConstructionStatus>() {
        for cost in options::<ConstructionCost>() {
            for hazard in options::<YesNo>() {
                for safety in options::<YesNo>() {
                    sets.push(FactSet {
                        construction_status: status,
                        construction_cost: cost,
                        hazard_plan: hazard,
                        safety_plan: safety,
                    });
                }
            }
        }
    }
    sets
}

fn answer_all(keys: &[String]) -> AnswerRecord {
    keys.iter()
        .map(|key| (key.clone(), CheckOutcome::Complied))
        .collect()
}

fn concrete_facts() -> FactSet {
    FactSet::unset()
        .with(Fact::Status, "in-progress")
        .with(Fact::Cost, "50-120")
        .with(Fact::HazardPlan, "no")
        .with(Fact::SafetyPlan, "yes")
}

const ALL_STATUSES: &[ConstructionStatus] = &[
    ConstructionStatus::NotStarted,
    ConstructionStatus::InProgress,
    ConstructionStatus::Halted,
];

// =============================================================================
// Active Set
// =============================================================================

#[test]
fn test_unset_facts_activate_whole_catalog() {
    let catalog = Catalog::builtin();
    let active = compute_active_items(catalog, &FactSet::unset());

    let active_keys: Vec<&str> = active.keys().collect();
    let catalog_keys: Vec<&str> = catalog.keys().collect();
    assert_eq!(active_keys, catalog_keys);

    for entry in &active {
        assert_eq!(entry.sub_items.len(), entry.item.sub_items.len());
    }
}

#[test]
fn test_no_false_positives_for_any_fact_set() {
    let catalog = Catalog::builtin();

    for facts in all_fact_sets() {
        let active = compute_active_items(catalog, &facts);
        if facts.is_unset() {
            continue;
        }

        for entry in &active {
            assert!(catalog.contains(entry.key()));
            assert!(item_is_active(entry.item, &facts), "{} under {:?}", entry.key(), facts);
            for sub in &entry.sub_items {
                assert!(sub_item_is_active(sub, &facts));
            }
        }

        // and no false negatives
        for item in catalog {
            assert_eq!(active.contains(&item.key), item_is_active(item, &facts));
        }
    }
}

#[test]
fn test_active_items_follow_catalog_order() {
    let catalog = Catalog::builtin();

    for facts in all_fact_sets() {
        let positions: Vec<usize> = compute_active_items(catalog, &facts)
            .keys()
            .map(|key| catalog.position(key).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn test_fact_round_trip_has_no_hysteresis() {
    let catalog = Catalog::builtin();
    let base = concrete_facts();
    let original: Vec<&str> = compute_active_items(catalog, &base).keys().collect();

    for fact in Fact::ALL {
        for detour in ["not-started", "halted", "under-1", "150-plus-civil", "yes", "no", ""] {
            let mut facts = base;
            let restore = facts.label_of(fact).to_string();
            facts.set(fact, detour);
            let _ = compute_active_items(catalog, &facts);
            facts.set(fact, &restore);

            let again: Vec<&str> = compute_active_items(catalog, &facts).keys().collect();
            assert_eq!(again, original, "{} via {:?}", fact, detour);
        }
    }
}

// =============================================================================
// Reconciliation
// =============================================================================

#[test]
fn test_reconcile_is_idempotent() {
    let catalog = Catalog::builtin();
    let everything = answer_all(&compute_active_items(catalog, &FactSet::unset()).answer_keys());

    for facts in all_fact_sets() {
        let active = compute_active_items(catalog, &facts);
        let once = reconcile_answers(&everything, &active);
        let twice = reconcile_answers(&once, &active);
        assert_eq!(once, twice);
        assert!(once.keys().all(|key| active.accepts(key)));
    }
}

// =============================================================================
// Completion
// =============================================================================

#[test]
fn test_empty_answers_never_complete() {
    let catalog = Catalog::builtin();
    for facts in all_fact_sets() {
        let active = compute_active_items(catalog, &facts);
        assert!(!is_complete(&active, &AnswerRecord::new()));
    }
}

#[test]
fn test_concrete_facts_complete_iff_every_active_unit_answered() {
    let catalog = Catalog::builtin();
    let active = compute_active_items(catalog, &concrete_facts());
    let keys = active.answer_keys();

    // flag 2 = yes activates the safety plan items and the temporary
    // structure risk assessment; flag 1 = no keeps the hazard plan out
    assert!(keys.iter().any(|k| k == "안전관리계획서작성여부"));
    assert!(keys.iter().any(|k| k == "위험성평가실시여부.가설구조물 설치·해체 위험성평가"));
    assert!(!keys.iter().any(|k| k == "유해위험방지계획서 수립여부"));
    assert!(!keys.iter().any(|k| k == "시공안전계획서 수립 여부"));

    let full = answer_all(&keys);
    assert!(is_complete(&active, &full));

    for missing in &keys {
        let mut partial = full.clone();
        partial.remove(missing);
        assert!(!is_complete(&active, &partial), "complete without {}", missing);
    }
}

#[test]
fn test_bare_parent_answer_does_not_complete_multi_part_item() {
    let catalog = Catalog::builtin();
    let active = compute_active_items(catalog, &concrete_facts());

    let mut answers = answer_all(
        &active
            .answer_keys()
            .into_iter()
            .filter(|key| !key.starts_with("안전보건교육."))
            .collect::<Vec<_>>(),
    );
    answers.insert("안전보건교육", CheckOutcome::Complied);

    assert!(!is_complete(&active, &answers));
    assert_eq!(find_incomplete(&active, &answers), vec!["안전보건교육"]);
}

#[test]
fn test_find_incomplete_properties() {
    let catalog = Catalog::builtin();

    for facts in all_fact_sets() {
        let active = compute_active_items(catalog, &facts);
        let keys = active.answer_keys();

        let every_other: AnswerRecord = keys
            .iter()
            .step_by(2)
            .map(|key| (key.clone(), CheckOutcome::NotComplied))
            .collect();

        for answers in [AnswerRecord::new(), every_other, answer_all(&keys)] {
            let incomplete = find_incomplete(&active, &answers);

            let positions: Vec<usize> = incomplete
                .iter()
                .map(|key| catalog.position(key).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            for key in &incomplete {
                let entry = active.get(key).unwrap();
                assert!(!entry.answer_keys().iter().all(|k| answers.contains(k)));
            }

            let complete = is_complete(&active, &answers);
            if progress(&active, &answers).required > 0 {
                assert_eq!(incomplete.is_empty(), complete, "{:?}", facts);
            } else {
                // nothing to answer: never complete
                assert!(!complete);
            }
        }
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_safety_plan_dependency_scenario() {
    let catalog = Catalog::new(vec![ChecklistItem::new("시공안전계획서", ALL_STATUSES, CostRule::All)
        .depends_on(Dependency::SafetyPlanIs { value: YesNo::No })])
    .unwrap();
    let mut form = FormController::new(&catalog);

    form.set_fact(Fact::SafetyPlan, "no");
    form.record_answer("시공안전계획서", CheckOutcome::Complied).unwrap();

    let change = form.set_fact(Fact::SafetyPlan, "yes");
    assert!(form.active().is_empty());
    assert_eq!(change.pruned, vec!["시공안전계획서".to_string()]);

    form.set_fact(Fact::SafetyPlan, "no");
    assert!(form.active().contains("시공안전계획서"));
    assert!(!form.snapshot().answers.contains("시공안전계획서"));
    assert!(!form.status().checklist_complete);
}

#[test]
fn test_cost_restricted_sub_item_scenario() {
    let catalog = Catalog::new(vec![ChecklistItem::new("교육", ALL_STATUSES, CostRule::All)
        .with_sub_items(vec![
            SubItem::new("정기"),
            SubItem::new("대규모").with_costs(CostRule::only(&[ConstructionCost::Over150Civil])),
            SubItem::new("특별"),
        ])])
    .unwrap();
    let item = catalog.get("교육").unwrap();
    let facts = FactSet::unset().with(Fact::Cost, "5-20");

    let titles: Vec<&str> = compute_active_sub_items(item, &facts)
        .iter()
        .map(|sub| sub.title.as_str())
        .collect();
    assert_eq!(titles, vec!["정기", "특별"]);

    let active = compute_active_items(&catalog, &facts);
    let answers: AnswerRecord = [
        ("교육.정기", CheckOutcome::Complied),
        ("교육.특별", CheckOutcome::NotApplicable),
    ]
    .into_iter()
    .collect();
    assert!(is_complete(&active, &answers));

    let mut partial = answers.clone();
    partial.remove("교육.특별");
    assert!(!is_complete(&active, &partial));
}
