//! Region: benannte Fläche, die kleinste erratbare Einheit.

use super::RegionGeometry;

/// Kanonische Identität einer Region (eindeutiger Name aus dem Datensatz).
pub type RegionId = String;

/// Roh-Datensatz aus dem Geometrie-Import.
///
/// Fehlende Felder bleiben `None`; `GeometryIndex::load` verwirft solche Datensätze.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionRecord {
    /// Name der Region (Property aus dem Datensatz)
    pub name: Option<String>,
    /// Geparste Geometrie
    pub geometry: Option<RegionGeometry>,
}

impl RegionRecord {
    /// Erstellt einen vollständigen Datensatz.
    pub fn new(name: impl Into<String>, geometry: RegionGeometry) -> Self {
        Self {
            name: Some(name.into()),
            geometry: Some(geometry),
        }
    }
}

/// Geladene Region mit unveränderlicher Geometrie.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Eindeutige ID (Name)
    pub id: RegionId,
    /// Geometrie in Kartenkoordinaten
    pub geometry: RegionGeometry,
}
