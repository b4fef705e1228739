//! Status-Ausgabe und Info-Panel.

use crate::app::{AppState, TierAssignment};
use crate::core::{SelectionResult, SessionSnapshot, SessionStatus};

/// Info-Panel: "Selected regions: A, B" bzw. "Selected regions: None".
pub fn selected_regions_line(selection: &SelectionResult) -> String {
    if selection.is_empty() {
        "Selected regions: None".to_string()
    } else {
        format!("Selected regions: {}", selection.ids().join(", "))
    }
}

/// Rendert die Status-Zeile
pub fn render_status_line(state: &AppState, snapshot: Option<&SessionSnapshot>) -> String {
    match (&state.ui.load_error, state.is_loaded()) {
        (Some(error), false) => format!("Cannot start session: {}", error),
        (Some(error), true) => format!(
            "{} | reload failed: {}",
            render_loaded_status(state, snapshot),
            error
        ),
        (None, _) => render_loaded_status(state, snapshot),
    }
}

fn render_loaded_status(state: &AppState, snapshot: Option<&SessionSnapshot>) -> String {
    if state.ui.loading || !state.is_loaded() {
        return "Loading regions...".to_string();
    }

    let Some(snapshot) = snapshot else {
        return format!("{} regions loaded, no session", state.region_count());
    };

    match (snapshot.status, &snapshot.active_target) {
        (SessionStatus::AwaitingGuess, Some(target)) => format!(
            "Find: {} | attempt {}/{} | {} remaining | {} resolved | rotation {:.1}°",
            target,
            snapshot.attempts_used + 1,
            snapshot.max_attempts,
            snapshot.remaining_targets,
            snapshot.resolved_count,
            state.view.view.rotation.to_degrees()
        ),
        _ => format!("Session complete: {} regions resolved", snapshot.resolved_count),
    }
}

/// Rendert eine Tier-Zuweisung für die Ausgabe (Umfärben der Region).
pub fn render_tier_update(update: &TierAssignment) -> String {
    format!("{} -> {}", update.region, update.tier.label())
}
