//! Achsen-alignierte Bounding-Box (Extent) in Kartenkoordinaten.

use glam::DVec2;

/// Achsen-alignierter Extent `[min, max]` (Rand inklusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Untere linke Ecke
    pub min: DVec2,
    /// Obere rechte Ecke
    pub max: DVec2,
}

impl Extent {
    /// Erstellt einen Extent aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerierter Extent, der genau einen Punkt umfasst.
    pub fn from_point(point: DVec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Kleinster Extent, der alle Punkte umschließt. `None` bei leerer Eingabe.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = DVec2>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut extent = Self::from_point(first);
        for point in iter {
            extent.extend(point);
        }
        Some(extent)
    }

    /// Vergrößert den Extent, sodass `point` enthalten ist.
    pub fn extend(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Vereinigung zweier Extents.
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Mittelpunkt des Extents.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Halbe Diagonale (Radius des umschließenden Kreises).
    pub fn half_diagonal(&self) -> f64 {
        (self.max - self.min).length() * 0.5
    }

    /// Gibt `true` zurück, wenn der Extent keine Fläche hat (Klick).
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Prüft ob ein Punkt im Extent liegt (inkl. Rand).
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Prüft ob sich zwei Extents überlappen oder berühren.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Prüft ob die Strecke `a`–`b` den Extent schneidet oder darin liegt.
    ///
    /// Liang-Barsky-Clipping gegen die vier Kanten.
    pub fn intersects_segment(&self, a: DVec2, b: DVec2) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }

        let delta = b - a;
        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        let checks = [
            (-delta.x, a.x - self.min.x),
            (delta.x, self.max.x - a.x),
            (-delta.y, a.y - self.min.y),
            (delta.y, self.max.y - a.y),
        ];

        for (p, q) in checks {
            if p == 0.0 {
                // Parallel zur Kante und außerhalb
                if q < 0.0 {
                    return false;
                }
                continue;
            }

            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_exit = t_exit.min(t);
            }

            if t_enter > t_exit {
                return false;
            }
        }

        true
    }
}
