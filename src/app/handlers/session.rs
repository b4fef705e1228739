//! Handler für die Quiz-Session.

use crate::app::use_cases;
use crate::app::AppState;

/// Startet eine neue Session über dem geladenen Index.
pub fn start(state: &mut AppState) {
    use_cases::session::start_session(state);
}

/// Wertet die aktuelle Auswahl als Tipp aus.
pub fn submit_guess(state: &mut AppState) {
    use_cases::session::submit_guess(state);
}
