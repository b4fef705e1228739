//! 2D-Kartenansicht mit Pan, Zoom und (gerasteter) Drehung.

use std::f64::consts::TAU;

use glam::DVec2;

use super::SelectionQuery;

/// Kartenansicht: View-Koordinaten sind Offsets relativ zur Bildmitte,
/// achsen-aligniert zum Bildschirm.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Mittelpunkt der Ansicht in Kartenkoordinaten
    pub center: DVec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f64,
    /// Drehung in Radiant, normalisiert auf `[0, 2π)`
    pub rotation: f64,
}

impl MapView {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f64 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f64 = 100.0;

    /// Erstellt eine Ansicht im Ursprung ohne Drehung.
    pub fn new() -> Self {
        Self {
            center: DVec2::ZERO,
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// Setzt Mittelpunkt, Zoom und Drehung zurück.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Zentriert die Ansicht auf einen Punkt.
    pub fn look_at(&mut self, target: DVec2) {
        self.center = target;
    }

    /// Verschiebt die Ansicht um ein Delta in View-Koordinaten.
    pub fn pan(&mut self, delta: DVec2) {
        self.center += self.view_vector_to_map(delta);
    }

    /// Ändert den Zoom-Level.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Dreht die Ansicht um `delta` und rastet auf `steps` Stufen pro Umdrehung ein.
    ///
    /// `steps == 0` deaktiviert das Einrasten.
    pub fn rotate_by(&mut self, delta: f64, steps: u32) {
        if !delta.is_finite() {
            return;
        }
        self.rotation = constrain_rotation(self.rotation + delta, steps);
    }

    /// Wandelt einen View-Offset (relativ zur Bildmitte) in Kartenkoordinaten.
    pub fn view_to_map(&self, view_pos: DVec2) -> DVec2 {
        self.center + self.view_vector_to_map(view_pos)
    }

    /// Drag-Box aus zwei View-Eckpunkten als (ggf. schräge) Karten-Abfrage.
    pub fn drag_box(&self, corner_a: DVec2, corner_b: DVec2) -> SelectionQuery {
        let min = corner_a.min(corner_b);
        let max = corner_a.max(corner_b);
        let corners = [
            min,
            DVec2::new(max.x, min.y),
            max,
            DVec2::new(min.x, max.y),
        ]
        .map(|corner| self.view_to_map(corner));

        SelectionQuery::Rectangle(corners)
    }

    /// Klick an einem View-Offset als Karten-Abfrage.
    pub fn click(&self, view_pos: DVec2) -> SelectionQuery {
        SelectionQuery::Point(self.view_to_map(view_pos))
    }

    fn view_vector_to_map(&self, vector: DVec2) -> DVec2 {
        DVec2::from_angle(self.rotation).rotate(vector / self.zoom)
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalisiert auf `[0, 2π)` und rastet auf ganzzahlige Vielfache von `2π / steps` ein.
pub fn constrain_rotation(rotation: f64, steps: u32) -> f64 {
    let snapped = if steps == 0 {
        rotation
    } else {
        let step = TAU / f64::from(steps);
        (rotation / step).round() * step
    };

    let normalized = snapped.rem_euclid(TAU);
    // rem_euclid kann bei Rundung exakt TAU oder -0.0 liefern
    if normalized >= TAU || normalized == 0.0 {
        0.0
    } else {
        normalized
    }
}
