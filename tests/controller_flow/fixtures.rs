use geo_quiz::{AppController, AppIntent, AppState, RegionGeometry, RegionRecord};
use glam::DVec2;

/// Achsen-paralleles Quadrat als Region.
pub fn square(name: &str, min: DVec2, size: f64) -> RegionRecord {
    let ring = vec![
        min,
        min + DVec2::new(size, 0.0),
        min + DVec2::new(size, size),
        min + DVec2::new(0.0, size),
    ];
    RegionRecord::new(name, RegionGeometry::from_ring(ring).expect("gültiger Ring"))
}

/// France [0,2]², Germany [3,5]×[0,2], Italy [6,8]×[0,2].
pub fn europe_records() -> Vec<RegionRecord> {
    vec![
        square("France", DVec2::new(0.0, 0.0), 2.0),
        square("Germany", DVec2::new(3.0, 0.0), 2.0),
        square("Italy", DVec2::new(6.0, 0.0), 2.0),
    ]
}

/// Zentren der Regionen (Standardansicht: View = Karte).
pub const FRANCE: DVec2 = DVec2::new(1.0, 1.0);
pub const GERMANY: DVec2 = DVec2::new(4.0, 1.0);
pub const ITALY: DVec2 = DVec2::new(7.0, 1.0);

/// State mit geladenen Regionen und gestarteter Session.
pub fn loaded_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::GeometryLoaded {
                records: europe_records(),
            },
        )
        .expect("GeometryLoaded sollte ohne Fehler durchlaufen");
    state
}

/// Klick an einer View-Position.
pub fn click(controller: &mut AppController, state: &mut AppState, view_pos: DVec2) {
    controller
        .handle_intent(state, AppIntent::RegionPickRequested { view_pos })
        .expect("RegionPickRequested sollte ohne Fehler durchlaufen");
}

/// Drag-Box zwischen zwei View-Positionen.
pub fn drag_box(
    controller: &mut AppController,
    state: &mut AppState,
    corner_a: DVec2,
    corner_b: DVec2,
) {
    controller
        .handle_intent(
            state,
            AppIntent::RegionBoxSelectRequested { corner_a, corner_b },
        )
        .expect("RegionBoxSelectRequested sollte ohne Fehler durchlaufen");
}
