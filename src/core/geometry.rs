//! Flächengeometrie einer Region: ein oder mehrere Polygone aus Ringen.

use glam::DVec2;

use super::Extent;

/// Toleranz für "Punkt liegt auf Kante".
const ON_SEGMENT_EPSILON: f64 = 1e-9;

/// Einzelnes Polygon: erster Ring = Außenring, weitere Ringe = Löcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    rings: Vec<Vec<DVec2>>,
    extent: Extent,
}

impl Polygon {
    /// Erstellt ein Polygon aus Ringen. Ringe mit weniger als 3 Punkten werden
    /// verworfen; ist danach kein Außenring übrig, gibt es kein Polygon.
    pub fn new(rings: Vec<Vec<DVec2>>) -> Option<Self> {
        let mut rings = rings.into_iter();
        let exterior = rings.find(|ring| ring.len() >= 3)?;
        let extent = Extent::from_points(exterior.iter().copied())?;

        let mut all_rings = vec![exterior];
        all_rings.extend(rings.filter(|ring| ring.len() >= 3));

        Some(Self {
            rings: all_rings,
            extent,
        })
    }

    /// Außenring des Polygons.
    pub fn exterior(&self) -> &[DVec2] {
        &self.rings[0]
    }

    /// Löcher des Polygons.
    pub fn holes(&self) -> &[Vec<DVec2>] {
        &self.rings[1..]
    }

    /// Bounding-Box des Außenrings.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Punkt-in-Polygon: im Außenring (Rand zählt) und nicht im Inneren eines Lochs.
    pub fn contains_point(&self, point: DVec2) -> bool {
        if !self.extent.contains(point) {
            return false;
        }
        if !ring_contains_point(self.exterior(), point, true) {
            return false;
        }
        !self
            .holes()
            .iter()
            .any(|hole| ring_contains_point(hole, point, false))
    }

    /// Prüft ob das Polygon den Extent schneidet.
    ///
    /// Schneidet keine Kante den Extent, liegt der Extent vollständig in einer
    /// Fläche; dann entscheidet ein einzelner Punkttest.
    pub fn intersects_extent(&self, extent: &Extent) -> bool {
        if !self.extent.intersects(extent) {
            return false;
        }

        let edge_hit = self.rings.iter().any(|ring| {
            ring_segments(ring).any(|(a, b)| extent.intersects_segment(a, b))
        });

        edge_hit || self.contains_point(extent.center())
    }

    /// Dreht alle Ringe um `angle` (Radiant, gegen den Uhrzeigersinn) um `anchor`.
    pub fn rotated(&self, angle: f64, anchor: DVec2) -> Self {
        let rotation = DVec2::from_angle(angle);
        let rings: Vec<Vec<DVec2>> = self
            .rings
            .iter()
            .map(|ring| {
                ring.iter()
                    .map(|&p| anchor + rotation.rotate(p - anchor))
                    .collect()
            })
            .collect();
        let extent = Extent::from_points(rings[0].iter().copied()).unwrap_or(self.extent);

        Self { rings, extent }
    }
}

/// Geometrie einer Region (Polygon oder MultiPolygon).
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGeometry {
    polygons: Vec<Polygon>,
    extent: Extent,
}

impl RegionGeometry {
    /// Erstellt die Geometrie aus Polygonen. `None`, wenn keine Polygone vorhanden sind.
    pub fn new(polygons: Vec<Polygon>) -> Option<Self> {
        let extent = polygons
            .iter()
            .map(|polygon| *polygon.extent())
            .reduce(|acc, extent| acc.union(&extent))?;

        Some(Self { polygons, extent })
    }

    /// Bequemer Konstruktor für ein Polygon ohne Löcher.
    pub fn from_ring(ring: Vec<DVec2>) -> Option<Self> {
        Self::new(vec![Polygon::new(vec![ring])?])
    }

    /// Alle Polygone der Region.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Bounding-Box über alle Polygone.
    pub fn extent(&self) -> &Extent {
        &self.extent
    }

    /// Prüft ob ein Punkt in einem der Polygone liegt.
    pub fn contains_point(&self, point: DVec2) -> bool {
        self.extent.contains(point) && self.polygons.iter().any(|p| p.contains_point(point))
    }

    /// Prüft ob eines der Polygone den Extent schneidet.
    pub fn intersects_extent(&self, extent: &Extent) -> bool {
        self.extent.intersects(extent) && self.polygons.iter().any(|p| p.intersects_extent(extent))
    }

    /// Gedrehte Kopie der Geometrie (Rotation um `anchor`).
    pub fn rotated(&self, angle: f64, anchor: DVec2) -> Self {
        let polygons: Vec<Polygon> = self
            .polygons
            .iter()
            .map(|polygon| polygon.rotated(angle, anchor))
            .collect();
        let extent = polygons
            .iter()
            .map(|polygon| *polygon.extent())
            .reduce(|acc, extent| acc.union(&extent))
            .unwrap_or(self.extent);

        Self { polygons, extent }
    }
}

/// Iteriert über alle Kanten eines (implizit geschlossenen) Rings.
fn ring_segments(ring: &[DVec2]) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
    let previous = ring.iter().copied().cycle().skip(ring.len().saturating_sub(1));
    previous.zip(ring.iter().copied())
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let scale = ab.length().max(1.0);
    if ab.perp_dot(ap).abs() > ON_SEGMENT_EPSILON * scale {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Ray-Casting gegen einen Ring. `boundary_inside` legt fest, ob Randpunkte zählen.
fn ring_contains_point(ring: &[DVec2], point: DVec2, boundary_inside: bool) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    for (previous, current) in ring_segments(ring) {
        if point_on_segment(point, previous, current) {
            return boundary_inside;
        }

        let crosses = (current.y > point.y) != (previous.y > point.y)
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x;

        if crosses {
            inside = !inside;
        }
    }

    inside
}
