//! Spatial-Index (KD-Tree) über die Extents der geladenen Regionen.

use std::collections::HashMap;

use kiddo::{KdTree, SquaredEuclidean};

use super::Extent;

/// Zusatz-Radius, damit Treffer exakt auf dem Suchradius nicht herausfallen.
const RADIUS_PADDING: f64 = 1e-6;

/// Read-only Spatial-Index über den Bounding-Boxen aller Regionen.
///
/// Der KD-Tree enthält die Mittelpunkte der Extents. Eine Extent-Abfrage wird
/// als Kreisabfrage um den Mittelpunkt des Such-Extents gestellt (Radius =
/// halbe Diagonale der Suche + größte halbe Diagonale einer Region) und danach
/// exakt gegen die Bounding-Boxen gefiltert.
///
/// Gleiche Mittelpunkte (z.B. konzentrische Regionen) teilen sich einen
/// Tree-Eintrag; die Leaf-Buckets des KD-Trees fassen nur begrenzt viele
/// identische Punkte.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    /// Tree-Eintrag → Indizes der Extents mit diesem Mittelpunkt
    buckets: Vec<Vec<usize>>,
    extents: Vec<Extent>,
    max_half_diagonal: f64,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            buckets: Vec::new(),
            extents: Vec::new(),
            max_half_diagonal: 0.0,
        }
    }

    /// Baut einen neuen Index; Eintrag `i` entspricht `extents[i]`.
    pub fn from_extents(extents: Vec<Extent>) -> Self {
        let mut entries: Vec<[f64; 2]> = Vec::new();
        let mut buckets: Vec<Vec<usize>> = Vec::new();
        let mut bucket_by_center: HashMap<(u64, u64), usize> = HashMap::new();

        for (index, extent) in extents.iter().enumerate() {
            let center = extent.center();
            // + 0.0 normalisiert -0.0 auf 0.0
            let key = ((center.x + 0.0).to_bits(), (center.y + 0.0).to_bits());
            let bucket = *bucket_by_center.entry(key).or_insert_with(|| {
                entries.push([center.x, center.y]);
                buckets.push(Vec::new());
                buckets.len() - 1
            });
            buckets[bucket].push(index);
        }

        let tree: KdTree<f64, 2> = (&entries).into();

        let max_half_diagonal = extents
            .iter()
            .map(Extent::half_diagonal)
            .fold(0.0_f64, f64::max);

        Self {
            tree,
            buckets,
            extents,
            max_half_diagonal,
        }
    }

    /// Gibt die Anzahl indexierter Extents zurück.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Gibt `true` zurück, wenn keine Extents im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Findet alle Einträge, deren Extent den Such-Extent schneidet.
    ///
    /// Ergebnis ist aufsteigend nach Eintragsindex sortiert (= Datensatz-Reihenfolge).
    pub fn within_extent(&self, query: &Extent) -> Vec<usize> {
        if self.is_empty() {
            return Vec::new();
        }

        let center = query.center();
        let radius = query.half_diagonal() + self.max_half_diagonal + RADIUS_PADDING;

        let mut hits: Vec<usize> = self
            .tree
            .within::<SquaredEuclidean>(&[center.x, center.y], radius * radius)
            .into_iter()
            .filter_map(|entry| self.buckets.get(entry.item as usize))
            .flatten()
            .copied()
            // Exakte Bounding-Box-Prüfung nach dem KD-Tree-Vorfilter
            .filter(|&index| {
                self.extents
                    .get(index)
                    .is_some_and(|extent| extent.intersects(query))
            })
            .collect();

        hits.sort_unstable();
        hits
    }
}
