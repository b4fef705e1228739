//! GeometryIndex: Container aller geladenen Regionen inkl. Spatial-Index.

use std::collections::HashMap;

use glam::DVec2;

use super::{Extent, Region, RegionId, RegionRecord, SelectionResult, SpatialIndex};

/// Unveränderliche Menge geladener Regionen in Datensatz-Reihenfolge.
#[derive(Debug, Clone)]
pub struct GeometryIndex {
    regions: Vec<Region>,
    positions: HashMap<RegionId, usize>,
    spatial_index: SpatialIndex,
    dropped_records: usize,
}

impl Default for GeometryIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl GeometryIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            regions: Vec::new(),
            positions: HashMap::new(),
            spatial_index: SpatialIndex::empty(),
            dropped_records: 0,
        }
    }

    /// Übernimmt geparste Datensätze.
    ///
    /// Datensätze ohne Name oder Geometrie werden übersprungen, ebenso doppelte
    /// Namen (der erste Eintrag gewinnt). Die Anzahl verworfener Datensätze wird
    /// geloggt und ist über [`GeometryIndex::dropped_records`] abrufbar.
    pub fn load<I>(records: I) -> Self
    where
        I: IntoIterator<Item = RegionRecord>,
    {
        let mut regions = Vec::new();
        let mut positions = HashMap::new();
        let mut dropped_records = 0usize;

        for record in records {
            let (Some(name), Some(geometry)) = (record.name, record.geometry) else {
                dropped_records += 1;
                continue;
            };

            if positions.contains_key(&name) {
                log::debug!("Doppelter Regionsname verworfen: {}", name);
                dropped_records += 1;
                continue;
            }

            positions.insert(name.clone(), regions.len());
            regions.push(Region { id: name, geometry });
        }

        let spatial_index = SpatialIndex::from_extents(
            regions
                .iter()
                .map(|region| *region.geometry.extent())
                .collect(),
        );

        log::info!("{} Regionen indexiert", regions.len());
        if dropped_records > 0 {
            log::warn!(
                "{} fehlerhafte Datensätze verworfen (Name oder Geometrie fehlt)",
                dropped_records
            );
        }

        Self {
            regions,
            positions,
            spatial_index,
            dropped_records,
        }
    }

    /// Anzahl indexierter Regionen.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Gibt `true` zurück, wenn keine Region geladen ist.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Anzahl der beim Laden verworfenen Datensätze.
    pub fn dropped_records(&self) -> usize {
        self.dropped_records
    }

    /// Alle Regionen in Datensatz-Reihenfolge.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region per ID.
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.positions.get(id).and_then(|&i| self.regions.get(i))
    }

    /// IDs aller Regionen in Datensatz-Reihenfolge.
    pub fn region_ids(&self) -> impl Iterator<Item = &RegionId> + '_ {
        self.regions.iter().map(|region| &region.id)
    }

    /// Bounding-Box über alle Regionen.
    pub fn extent(&self) -> Option<Extent> {
        self.regions
            .iter()
            .map(|region| *region.geometry.extent())
            .reduce(|acc, extent| acc.union(&extent))
    }

    /// Grober Vorfilter: Regionen, deren Bounding-Box den Extent schneidet.
    pub fn regions_in_extent(&self, extent: &Extent) -> Vec<&Region> {
        self.spatial_index
            .within_extent(extent)
            .into_iter()
            .filter_map(|index| self.regions.get(index))
            .collect()
    }

    /// Regionen, deren Geometrie den Extent tatsächlich schneidet.
    pub fn regions_intersecting(&self, extent: &Extent) -> SelectionResult {
        self.regions_in_extent(extent)
            .into_iter()
            .filter(|region| region.geometry.intersects_extent(extent))
            .map(|region| region.id.clone())
            .collect()
    }

    /// Regionen, deren Geometrie den Punkt enthält.
    pub fn regions_containing(&self, point: DVec2) -> SelectionResult {
        self.regions_in_extent(&Extent::from_point(point))
            .into_iter()
            .filter(|region| region.geometry.contains_point(point))
            .map(|region| region.id.clone())
            .collect()
    }
}
