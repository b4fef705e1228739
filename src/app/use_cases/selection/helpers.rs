//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::AppState;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}
