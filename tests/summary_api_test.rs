// ==========================================
// Summary API integration tests
// ==========================================
// Target: the load/save boundary - derived fields recomputed on
// load, weight-sum gate keeping invalid sets out of storage,
// scorecard reads.
// ==========================================


use std::sync::Arc;

use srv_planner::config::EngineSettings;
use srv_planner::domain::{MonthField, ObjectiveStatus};
use srv_planner::repository::ObjectiveRepository;
use srv_planner::{ApiError, SummaryApi};
use test_helpers::{create_test_db, flat_objective, insert_test_area, open_shared_connection,
    open_test_connection};

const EPS: f64 = 1e-9;

fn api_on(db_path: &str) -> SummaryApi {
    let conn = open_shared_connection(db_path).expect("conn");
    SummaryApi::new(
        Arc::new(ObjectiveRepository::new(conn)),
        EngineSettings::default(),
    )
}

fn setup() -> (tempfile::NamedTempFile, String) {
    let (tmp, db_path) = create_test_db().expect("test db");
    let conn = open_test_connection(&db_path).expect("conn");
    insert_test_area(&conn).expect("area");
    (tmp, db_path)
}

#[test]
fn test_save_and_reload_recomputes_derived_fields() {
    let (_tmp, db_path) = setup();
    let api = api_on(&db_path);

    let objectives = vec![
        flat_objective("obj-1", "Disponibilidad", 40.0, 99.9, 99.9),
        flat_objective("obj-2", "Incidencias P1", 30.0, 100.0, 90.0),
        flat_objective("obj-3", "Eficiencia CAPEX", 30.0, 50.0, 35.0),
    ];

    api.save_objectives("area-infra", 2025, &objectives)
        .expect("save");

    let summary = api.get_summary("area-infra", 2025).expect("load");
    assert_eq!(summary.len(), 3);

    // Derived fields were not persisted; they come back recomputed
    let by_id = |id: &str| {
        summary
            .objectives
            .iter()
            .find(|o| o.id == id)
            .expect("objective present")
    };
    assert!((by_id("obj-1").compliance - 100.0).abs() < EPS);
    assert_eq!(by_id("obj-1").status, ObjectiveStatus::Green);
    assert!((by_id("obj-2").compliance - 90.0).abs() < EPS);
    assert_eq!(by_id("obj-2").status, ObjectiveStatus::Yellow);
    assert!((by_id("obj-3").compliance - 70.0).abs() < EPS);
    assert_eq!(by_id("obj-3").status, ObjectiveStatus::Red);
}

#[test]
fn test_save_rejects_invalid_weight_sum_before_persisting() {
    let (_tmp, db_path) = setup();
    let api = api_on(&db_path);

    let valid = vec![
        flat_objective("obj-1", "a", 60.0, 100.0, 100.0),
        flat_objective("obj-2", "b", 40.0, 100.0, 100.0),
    ];
    api.save_objectives("area-infra", 2025, &valid).expect("save");

    // Invalid edit: weights now total 99
    let editor = api.editor();
    let invalid: Vec<_> = valid
        .iter()
        .map(|o| {
            if o.id == "obj-2" {
                editor.reweight(o, 39.0)
            } else {
                o.clone()
            }
        })
        .collect();

    let err = api
        .save_objectives("area-infra", 2025, &invalid)
        .expect_err("must reject");
    assert!(matches!(err, ApiError::WeightSumInvalid { .. }));

    // The rejected save never reached the repository
    let summary = api.get_summary("area-infra", 2025).expect("load");
    let obj2 = summary
        .objectives
        .iter()
        .find(|o| o.id == "obj-2")
        .expect("still there");
    assert_eq!(obj2.annual_weight, 40.0);
}

#[test]
fn test_scorecard_over_persisted_scope() {
    let (_tmp, db_path) = setup();
    let api = api_on(&db_path);

    let objectives = vec![
        flat_objective("obj-1", "a", 40.0, 100.0, 100.0), // 100 -> green
        flat_objective("obj-2", "b", 30.0, 100.0, 90.0),  // 90 -> yellow
        flat_objective("obj-3", "c", 30.0, 100.0, 70.0),  // 70 -> red
    ];
    api.save_objectives("area-infra", 2025, &objectives)
        .expect("save");

    let scorecard = api.get_scorecard("area-infra", 2025).expect("scorecard");
    assert!((scorecard.area_score - 88.0).abs() < EPS);
    assert!((scorecard.total_weight - 100.0).abs() < EPS);
    assert_eq!(scorecard.green_count, 1);
    assert_eq!(scorecard.objective_count, 3);
}

#[test]
fn test_empty_scope_scorecard() {
    let (_tmp, db_path) = setup();
    let api = api_on(&db_path);

    let scorecard = api.get_scorecard("area-infra", 2025).expect("scorecard");
    assert_eq!(scorecard.area_score, 0.0);
    assert_eq!(scorecard.average_compliance, 0.0);
    assert_eq!(scorecard.objective_count, 0);
}

#[test]
fn test_full_edit_cycle_through_editor_and_save() {
    let (_tmp, db_path) = setup();
    let api = api_on(&db_path);
    let editor = api.editor();

    // Create, plan the year, report two months, save
    let mut obj = editor.create("Nuevo Objetivo Estrategico");
    obj = editor.reweight(&obj, 100.0);
    for idx in 0..12 {
        obj = editor.set_month(&obj, MonthField::Plan, idx, 100.0);
    }
    obj = editor.set_month(&obj, MonthField::Exec, 0, 100.0);
    obj = editor.set_month(&obj, MonthField::Exec, 1, 95.0);

    // YTD window is Jan-Feb: 195/200 = 97.5 -> yellow
    assert!((obj.compliance - 97.5).abs() < EPS);
    assert_eq!(obj.status, ObjectiveStatus::Yellow);

    api.save_objectives("area-infra", 2025, &[obj.clone()])
        .expect("save");

    let summary = api.get_summary("area-infra", 2025).expect("load");
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.objectives[0].id, obj.id);
    assert!((summary.objectives[0].compliance - 97.5).abs() < EPS);
}
