//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SelectionQuery;

/// Löst eine Klick- oder Drag-Box-Abfrage auf.
pub fn resolve(state: &mut AppState, query: &SelectionQuery, rotation: f64) {
    use_cases::selection::resolve_selection(state, query, rotation);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}
