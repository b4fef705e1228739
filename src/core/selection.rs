//! Auflösung einer räumlichen Auswahl (Klick oder Drag-Box) zu Regions-IDs.
//!
//! Bei achsen-alignierter Ansicht ist der Extent einer Drag-Box identisch mit
//! ihrer Geometrie. Bei schräger Drehung ist der Extent größer als die Box;
//! dann werden Box und Kandidaten um `-rotation` um den Koordinatenursprung
//! gedreht und im ausgerichteten Rahmen erneut geprüft.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use super::{Extent, GeometryIndex, RegionId};

/// Toleranz für "Drehung ist ein Vielfaches von π/2".
const AXIS_ALIGNED_EPSILON: f64 = 1e-9;

/// Gemeinsamer Drehpunkt für Box und Kandidaten.
const ROTATION_ANCHOR: DVec2 = DVec2::ZERO;

/// Geordnete Menge von Regions-IDs (Datensatz-Reihenfolge).
///
/// Leer ist ein gültiges Ergebnis und nie ein Tippversuch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionResult {
    ids: Vec<RegionId>,
}

impl SelectionResult {
    /// Leeres Ergebnis.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Alle IDs in Datensatz-Reihenfolge.
    pub fn ids(&self) -> &[RegionId] {
        &self.ids
    }

    /// Anzahl der Kandidaten.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Gibt `true` zurück, wenn keine Region getroffen wurde.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Die eindeutige Region, falls genau ein Kandidat vorliegt.
    pub fn single(&self) -> Option<&RegionId> {
        match self.ids.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }
}

impl FromIterator<RegionId> for SelectionResult {
    fn from_iter<T: IntoIterator<Item = RegionId>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Räumliche Auswahl in Kartenkoordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionQuery {
    /// Einzelklick
    Point(DVec2),
    /// Drag-Box: vier Ecken in Kartenkoordinaten (bei gedrehter Ansicht schräg)
    Rectangle([DVec2; 4]),
}

impl SelectionQuery {
    /// Achsen-alignierte Box aus zwei Eckpunkten.
    pub fn axis_aligned_rect(a: DVec2, b: DVec2) -> Self {
        let extent = Extent::from_corners(a, b);
        SelectionQuery::Rectangle([
            extent.min,
            DVec2::new(extent.max.x, extent.min.y),
            extent.max,
            DVec2::new(extent.min.x, extent.max.y),
        ])
    }

    /// Bounding-Box der Abfrage (bei schräger Box größer als die Box selbst).
    pub fn extent(&self) -> Extent {
        match self {
            SelectionQuery::Point(point) => Extent::from_point(*point),
            SelectionQuery::Rectangle(corners) => corners
                .iter()
                .copied()
                .fold(Extent::from_point(corners[0]), |mut extent, corner| {
                    extent.extend(corner);
                    extent
                }),
        }
    }
}

/// Prüft ob die Drehung ein Vielfaches von π/2 ist.
pub fn is_axis_aligned(rotation: f64) -> bool {
    let remainder = rotation.rem_euclid(FRAC_PI_2);
    remainder < AXIS_ALIGNED_EPSILON || FRAC_PI_2 - remainder < AXIS_ALIGNED_EPSILON
}

/// Übersetzt Auswahl-Abfragen mit Ansichtsdrehung in ein `SelectionResult`.
#[derive(Debug, Clone, Copy)]
pub struct SelectionResolver<'a> {
    index: &'a GeometryIndex,
}

impl<'a> SelectionResolver<'a> {
    /// Erstellt einen Resolver über einem fertig geladenen Index.
    pub fn new(index: &'a GeometryIndex) -> Self {
        Self { index }
    }

    /// Löst die Abfrage auf. Seiteneffektfrei.
    pub fn resolve(&self, query: &SelectionQuery, view_rotation: f64) -> SelectionResult {
        match query {
            SelectionQuery::Point(point) => self.index.regions_containing(*point),
            SelectionQuery::Rectangle(corners) => self.resolve_rect(corners, view_rotation),
        }
    }

    fn resolve_rect(&self, corners: &[DVec2; 4], view_rotation: f64) -> SelectionResult {
        let extent = SelectionQuery::Rectangle(*corners).extent();
        if extent.is_point() {
            return self.index.regions_containing(extent.min);
        }

        if is_axis_aligned(view_rotation) {
            return self.index.regions_intersecting(&extent);
        }

        // Obliquer Fall: Extent-Treffer sind eine Obermenge, im gedrehten Rahmen nachprüfen
        let candidates = self.index.regions_intersecting(&extent);
        let Some(aligned_extent) = Extent::from_points(
            corners
                .iter()
                .map(|&corner| rotate_about(corner, -view_rotation, ROTATION_ANCHOR)),
        ) else {
            return SelectionResult::empty();
        };

        candidates
            .ids()
            .iter()
            .filter(|id| {
                self.index.region(id).is_some_and(|region| {
                    region
                        .geometry
                        .rotated(-view_rotation, ROTATION_ANCHOR)
                        .intersects_extent(&aligned_extent)
                })
            })
            .cloned()
            .collect()
    }
}

fn rotate_about(point: DVec2, angle: f64, anchor: DVec2) -> DVec2 {
    anchor + DVec2::from_angle(angle).rotate(point - anchor)
}
