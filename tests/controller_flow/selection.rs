use std::f64::consts::{FRAC_PI_4, SQRT_2};

use approx::assert_relative_eq;
use geo_quiz::ui::selected_regions_line;
use geo_quiz::{AppController, AppIntent};
use glam::DVec2;

use super::fixtures::{click, drag_box, loaded_state, GERMANY};

#[test]
fn test_scenario_c_box_over_two_regions_is_ambiguous() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    drag_box(
        &mut controller,
        &mut state,
        DVec2::new(-0.5, 0.5),
        DVec2::new(3.5, 1.5),
    );

    assert_eq!(
        state.selection.last_result.ids(),
        &["France".to_string(), "Germany".to_string()]
    );
    assert_eq!(
        selected_regions_line(&state.selection.last_result),
        "Selected regions: France, Germany"
    );

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 0);
    assert_eq!(snapshot.active_target.as_deref(), Some("France"));
    assert!(state.take_tier_updates().is_empty());
}

#[test]
fn test_new_selection_replaces_previous_one() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    click(&mut controller, &mut state, GERMANY);
    assert_eq!(state.selection.last_result.len(), 1);

    drag_box(
        &mut controller,
        &mut state,
        DVec2::new(20.0, 20.0),
        DVec2::new(21.0, 21.0),
    );

    assert!(state.selection.last_result.is_empty());
    assert_eq!(
        selected_regions_line(&state.selection.last_result),
        "Selected regions: None"
    );
}

#[test]
fn test_rotated_view_click_maps_into_rotated_frame() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RotateViewRequested { steps: 2 })
        .expect("RotateViewRequested sollte ohne Fehler durchlaufen");
    assert_relative_eq!(state.view.view.rotation, FRAC_PI_4, epsilon = 1e-12);

    // View-Position, die bei 45° Drehung auf das Zentrum von Germany fällt
    let view_pos = DVec2::from_angle(-FRAC_PI_4).rotate(GERMANY);
    click(&mut controller, &mut state, view_pos);

    assert_eq!(state.selection.last_result.ids(), &["Germany".to_string()]);
}

#[test]
fn test_oblique_box_excludes_region_only_touched_by_its_extent() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::RotateViewRequested { steps: 2 })
        .expect("RotateViewRequested sollte ohne Fehler durchlaufen");

    // Bei 45° wird die View-Box zur Raute um (3, 3) mit Radius 1.5:
    // Germany-Ecke (3, 2) liegt darin, France-Ecke (2, 2) nur in der Bounding-Box
    let center = DVec2::from_angle(-FRAC_PI_4).rotate(DVec2::new(3.0, 3.0));
    let half = DVec2::splat(1.5 / SQRT_2);
    let (corner_a, corner_b) = (center - half, center + half);

    let extent = state.view.view.drag_box(corner_a, corner_b).extent();
    let coarse = state
        .geometry
        .as_ref()
        .expect("Index erwartet")
        .regions_intersecting(&extent);
    assert!(coarse.ids().contains(&"France".to_string()));

    drag_box(&mut controller, &mut state, corner_a, corner_b);

    assert_eq!(state.selection.last_result.ids(), &["Germany".to_string()]);

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 1);
}

#[test]
fn test_centered_view_click_at_origin_selects_target_region() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::CenterViewRequested { target: GERMANY })
        .expect("CenterViewRequested sollte ohne Fehler durchlaufen");
    click(&mut controller, &mut state, DVec2::ZERO);

    assert_eq!(
        selected_regions_line(&state.selection.last_result),
        "Selected regions: Germany"
    );
    assert!(state.command_log.entries().contains(&"CenterView"));
}
