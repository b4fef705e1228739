//! Use-Case-Funktionen für die Kartenansicht.

use crate::app::AppState;
use glam::DVec2;

/// Setzt die Ansicht auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.view.reset();
}

/// Dreht die Ansicht und rastet auf die konfigurierten Drehstufen ein.
pub fn rotate(state: &mut AppState, delta: f64) {
    state
        .view
        .view
        .rotate_by(delta, state.options.rotation_steps);
    log::debug!("Ansicht gedreht auf {:.4} rad", state.view.view.rotation);
}

/// Verschiebt die Ansicht um ein Delta in View-Koordinaten.
pub fn pan(state: &mut AppState, delta: DVec2) {
    state.view.view.pan(delta);
}

/// Zentriert die Ansicht auf einen Punkt in Kartenkoordinaten.
pub fn center_on(state: &mut AppState, target: DVec2) {
    state.view.view.look_at(target);
}

/// Zoomt die Ansicht um einen Faktor.
pub fn zoom(state: &mut AppState, factor: f64) {
    state.view.view.zoom_by(factor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_8;

    #[test]
    fn rotate_snaps_to_configured_steps() {
        let mut state = AppState::new();
        rotate(&mut state, 0.35);
        assert_relative_eq!(state.view.view.rotation, FRAC_PI_8);
    }

    #[test]
    fn center_keeps_rotation() {
        let mut state = AppState::new();
        rotate(&mut state, FRAC_PI_8);
        zoom(&mut state, 2.0);

        center_on(&mut state, DVec2::new(4.0, 1.0));

        assert_eq!(state.view.view.center, DVec2::new(4.0, 1.0));
        assert_relative_eq!(state.view.view.rotation, FRAC_PI_8);
    }

    #[test]
    fn reset_restores_default_view() {
        let mut state = AppState::new();
        pan(&mut state, DVec2::new(3.0, 4.0));
        zoom(&mut state, 2.0);
        rotate(&mut state, FRAC_PI_8);

        reset_view(&mut state);

        assert_eq!(state.view.view.center, DVec2::ZERO);
        assert_relative_eq!(state.view.view.zoom, 1.0);
        assert_relative_eq!(state.view.view.rotation, 0.0);
    }
}
