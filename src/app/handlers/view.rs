//! Handler für die Kartenansicht.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Ansicht auf den Standardzustand zurück.
pub fn reset(state: &mut AppState) {
    use_cases::view::reset_view(state);
}

/// Dreht die Ansicht (mit Einrasten).
pub fn rotate(state: &mut AppState, delta: f64) {
    use_cases::view::rotate(state, delta);
}

/// Verschiebt die Ansicht um ein View-Delta.
pub fn pan(state: &mut AppState, delta: glam::DVec2) {
    use_cases::view::pan(state, delta);
}

/// Zoomt die Ansicht.
pub fn zoom(state: &mut AppState, factor: f64) {
    use_cases::view::zoom(state, factor);
}

/// Zentriert die Ansicht auf einen Kartenpunkt.
pub fn center(state: &mut AppState, target: glam::DVec2) {
    use_cases::view::center_on(state, target);
}
