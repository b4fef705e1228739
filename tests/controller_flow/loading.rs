use geo_quiz::{AppController, AppIntent, AppState, RegionRecord};
use glam::DVec2;

use super::fixtures::{click, drag_box, europe_records, loaded_state, square, FRANCE, GERMANY};

#[test]
fn test_selection_before_load_is_discarded_not_queued() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(&mut controller, &mut state, FRANCE);
    drag_box(
        &mut controller,
        &mut state,
        DVec2::new(-1.0, -1.0),
        DVec2::new(9.0, 3.0),
    );

    assert!(state.command_log.is_empty());
    assert!(state.selection.last_result.is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoaded {
                records: europe_records(),
            },
        )
        .expect("GeometryLoaded sollte ohne Fehler durchlaufen");

    // Frühe Klicks werden nicht nachträglich ausgewertet
    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 0);
    assert_eq!(snapshot.resolved_count, 0);
    assert_eq!(snapshot.active_target.as_deref(), Some("France"));
}

#[test]
fn test_load_failure_is_non_fatal_and_creates_no_session() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.ui.loading = true;

    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoadFailed {
                message: "connection refused".to_string(),
            },
        )
        .expect("GeometryLoadFailed sollte ohne Fehler durchlaufen");

    assert_eq!(state.ui.load_error.as_deref(), Some("connection refused"));
    assert!(!state.ui.loading);
    assert!(state.session.is_none());
    assert!(controller.snapshot(&state).is_none());

    click(&mut controller, &mut state, FRANCE);
    assert!(state.session.is_none());
}

#[test]
fn test_failed_reload_keeps_running_session() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    click(&mut controller, &mut state, GERMANY);

    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoadFailed {
                message: "connection refused".to_string(),
            },
        )
        .expect("GeometryLoadFailed sollte ohne Fehler durchlaufen");

    let snapshot = controller.snapshot(&state).expect("Session bleibt bestehen");
    assert_eq!(snapshot.active_target.as_deref(), Some("France"));
    assert_eq!(snapshot.attempts_used, 1);
    assert_eq!(state.region_count(), 3);
    assert_eq!(
        state.ui.status_message.as_deref(),
        Some("Reload failed: previous regions stay active")
    );

    let line = geo_quiz::ui::render_status_line(&state, Some(&snapshot));
    assert!(line.starts_with("Find: France"));
    assert!(line.ends_with("reload failed: connection refused"));
}

#[test]
fn test_load_missing_file_reports_error_and_skips_session_start() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadGeometryFileRequested {
            path: "/definitely/missing/countries.geojson".to_string(),
        },
    );

    assert!(result.is_err());
    assert!(state.ui.load_error.is_some());
    assert!(state.session.is_none());
    assert!(!state.command_log.entries().contains(&"StartSession"));
}

#[test]
fn test_scenario_d_record_without_geometry_is_dropped() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let mut records = europe_records();
    records.insert(
        1,
        RegionRecord {
            name: Some("Atlantis".to_string()),
            geometry: None,
        },
    );

    controller
        .handle_intent(&mut state, AppIntent::GeometryLoaded { records })
        .expect("GeometryLoaded sollte ohne Fehler durchlaufen");

    let index = state.geometry.as_ref().expect("Index erwartet");
    assert_eq!(index.len(), 3);
    assert_eq!(index.dropped_records(), 1);
    assert!(index.region("Atlantis").is_none());

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.remaining_targets, 3);
}

#[test]
fn test_reload_replaces_index_and_session() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    click(&mut controller, &mut state, FRANCE);
    assert_eq!(state.take_tier_updates().len(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoaded {
                records: vec![square("Solo", DVec2::new(10.0, 10.0), 1.0)],
            },
        )
        .expect("GeometryLoaded sollte ohne Fehler durchlaufen");

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.active_target.as_deref(), Some("Solo"));
    assert_eq!(snapshot.resolved_count, 0);
    assert_eq!(state.region_count(), 1);
}

#[test]
fn test_restart_before_load_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::RestartSessionRequested)
        .expect("RestartSessionRequested sollte ohne Fehler durchlaufen");

    assert!(state.session.is_none());
}
