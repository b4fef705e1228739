use geo_quiz::{AppController, AppIntent, SessionStatus, Tier, TierAssignment};
use geo_quiz::{GuessOutcome, QuizOptions};

use super::fixtures::{click, europe_records, loaded_state, FRANCE, GERMANY, ITALY};

#[test]
fn test_scenario_a_wrong_then_correct_yields_middle_tier() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    click(&mut controller, &mut state, GERMANY);

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 1);
    assert_eq!(snapshot.status, SessionStatus::AwaitingGuess);
    assert_eq!(snapshot.active_target.as_deref(), Some("France"));

    click(&mut controller, &mut state, FRANCE);

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 0);
    assert_eq!(snapshot.active_target.as_deref(), Some("Germany"));

    let session = state.session.as_ref().expect("Session erwartet");
    assert_eq!(session.tier_of("France"), Some(Tier::Middle));
    assert_eq!(
        state.take_tier_updates(),
        vec![TierAssignment {
            region: "France".to_string(),
            tier: Tier::Middle,
        }]
    );
}

#[test]
fn test_scenario_b_four_wrong_guesses_give_up_last_target() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    click(&mut controller, &mut state, FRANCE);
    click(&mut controller, &mut state, GERMANY);
    assert_eq!(
        controller
            .snapshot(&state)
            .and_then(|snapshot| snapshot.active_target),
        Some("Italy".to_string())
    );
    state.take_tier_updates();

    for attempt in 1..=3 {
        click(&mut controller, &mut state, FRANCE);
        let snapshot = controller.snapshot(&state).expect("Session erwartet");
        assert_eq!(snapshot.attempts_used, attempt);
        assert_eq!(snapshot.status, SessionStatus::AwaitingGuess);
    }
    click(&mut controller, &mut state, FRANCE);

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.status, SessionStatus::SessionComplete);
    assert_eq!(snapshot.attempts_used, 0);
    assert!(snapshot.active_target.is_none());

    let session = state.session.as_ref().expect("Session erwartet");
    assert_eq!(session.tier_of("Italy"), Some(Tier::Worst));
    // France bleibt beim ersten Tier, nachträgliche Klicks ändern nichts
    assert_eq!(session.tier_of("France"), Some(Tier::Best));
    assert!(matches!(
        state.last_outcome,
        Some(GuessOutcome::GaveUp { .. })
    ));
    assert_eq!(
        state.take_tier_updates(),
        vec![TierAssignment {
            region: "Italy".to_string(),
            tier: Tier::Worst,
        }]
    );
}

#[test]
fn test_clicks_after_completion_are_noops() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    for target in [FRANCE, GERMANY, ITALY] {
        click(&mut controller, &mut state, target);
    }
    let before = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(before.status, SessionStatus::SessionComplete);
    state.take_tier_updates();

    click(&mut controller, &mut state, ITALY);

    assert_eq!(controller.snapshot(&state), Some(before));
    assert!(state.take_tier_updates().is_empty());
}

#[test]
fn test_empty_clicks_do_not_consume_attempts() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    for _ in 0..10 {
        click(&mut controller, &mut state, glam::DVec2::new(2.5, 1.0));
    }

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.attempts_used, 0);
    assert_eq!(snapshot.resolved_count, 0);
}

#[test]
fn test_restart_builds_fresh_session() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    click(&mut controller, &mut state, FRANCE);
    click(&mut controller, &mut state, FRANCE);

    controller
        .handle_intent(&mut state, AppIntent::RestartSessionRequested)
        .expect("RestartSessionRequested sollte ohne Fehler durchlaufen");

    let snapshot = controller.snapshot(&state).expect("Session erwartet");
    assert_eq!(snapshot.active_target.as_deref(), Some("France"));
    assert_eq!(snapshot.attempts_used, 0);
    assert_eq!(snapshot.resolved_count, 0);
    assert!(state.selection.last_result.is_empty());
    assert!(state.take_tier_updates().is_empty());
}

#[test]
fn test_configured_attempt_budget_is_respected() {
    let mut controller = AppController::new();
    let mut state = geo_quiz::AppState::with_options(QuizOptions {
        max_attempts: 2,
        ..QuizOptions::default()
    });
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoaded {
                records: europe_records(),
            },
        )
        .expect("GeometryLoaded sollte ohne Fehler durchlaufen");

    click(&mut controller, &mut state, ITALY);
    click(&mut controller, &mut state, ITALY);

    let session = state.session.as_ref().expect("Session erwartet");
    assert_eq!(session.tier_of("France"), Some(Tier::Worst));
    assert_eq!(session.active_target().map(String::as_str), Some("Germany"));
}
