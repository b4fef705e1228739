//! Use-Case-Funktionen für die Quiz-Session.

use crate::app::state::TierAssignment;
use crate::app::AppState;
use crate::core::{GuessOutcome, GuessSession, IgnoreReason};

/// Startet eine neue Session über allen geladenen Regionen.
///
/// Vor dem Laden (oder nach einem Ladefehler) passiert nichts.
pub fn start_session(state: &mut AppState) {
    let Some(index) = state.geometry.as_ref() else {
        log::info!("Keine Geometrie geladen, Session wird nicht gestartet");
        return;
    };

    let session = GuessSession::new(index.region_ids().cloned(), state.options.session_config());
    state.ui.status_message = session
        .active_target()
        .map(|target| format!("Find: {}", target));

    state.session = Some(session);
    state.last_outcome = None;
    state.tier_updates.clear();
}

/// Wertet die aktuelle Auswahl gegen das aktive Ziel aus.
///
/// Tier-Zuweisungen werden für die UI in `AppState::tier_updates` abgelegt.
pub fn submit_guess(state: &mut AppState) {
    let Some(session) = state.session.as_mut() else {
        log::debug!("Keine aktive Session, Auswahl wird nicht gewertet");
        return;
    };

    let outcome = session.evaluate(&state.selection.last_result);

    if let Some((region, tier)) = outcome.tier_assignment() {
        state.tier_updates.push(TierAssignment {
            region: region.clone(),
            tier,
        });
        if session.is_complete() {
            log::info!(
                "Session abgeschlossen: {} Regionen, {} Versuche",
                session.resolved_tiers().len(),
                session.total_attempts()
            );
        }
    }

    state.ui.status_message = Some(describe_outcome(&outcome, session.active_target()));
    state.last_outcome = Some(outcome);
}

fn describe_outcome(outcome: &GuessOutcome, next_target: Option<&String>) -> String {
    let next = match next_target {
        Some(target) => format!("Find: {}", target),
        None => "All regions resolved".to_string(),
    };

    match outcome {
        GuessOutcome::Ignored(IgnoreReason::EmptySelection) => "No region selected".to_string(),
        GuessOutcome::Ignored(IgnoreReason::Ambiguous { candidates }) => format!(
            "{} regions selected, narrow your selection to one",
            candidates
        ),
        GuessOutcome::Ignored(IgnoreReason::SessionComplete) => "Session complete".to_string(),
        GuessOutcome::Wrong {
            guessed,
            attempts_left,
            ..
        } => format!("{} is wrong, {} attempt(s) left", guessed, attempts_left),
        GuessOutcome::Correct { region, tier, .. } => {
            format!("Correct: {} ({}). {}", region, tier.label(), next)
        }
        GuessOutcome::GaveUp { region, tier } => {
            format!("Out of attempts: {} ({}). {}", region, tier.label(), next)
        }
    }
}
