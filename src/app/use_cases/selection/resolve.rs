use crate::core::{SelectionQuery, SelectionResolver};
use crate::AppState;

/// Löst eine Klick- oder Drag-Box-Abfrage gegen den geladenen Index auf.
///
/// Ohne geladene Geometrie bleibt die Auswahl leer.
pub fn resolve_selection(state: &mut AppState, query: &SelectionQuery, rotation: f64) {
    let Some(index) = state.geometry.as_ref() else {
        log::debug!("Keine Geometrie geladen, Auswahl bleibt leer");
        state.selection.clear();
        return;
    };

    let result = SelectionResolver::new(index).resolve(query, rotation);
    log::debug!(
        "Auswahl aufgelöst: {} Region(en) bei Drehung {:.3} rad",
        result.len(),
        rotation
    );
    state.selection.last_result = result;
}
