//! Parser für GeoJSON-FeatureCollections mit Regionsgeometrie.

use anyhow::{bail, Context, Result};
use glam::DVec2;
use serde::Deserialize;
use serde_json::Value;

use super::Projection;
use crate::core::{Polygon, RegionGeometry, RegionRecord};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    /// Rohe Features; jedes wird einzeln und fehlertolerant ausgewertet
    #[serde(default)]
    features: Vec<Value>,
}

/// Positionen eines Rings; zusätzliche Dimensionen (Höhe) werden ignoriert.
type RawRing = Vec<Vec<f64>>;

/// Parsed eine GeoJSON-FeatureCollection in Regions-Datensätze.
///
/// Features ohne verwertbaren Namen oder ohne (Multi-)Polygon-Geometrie
/// erzeugen Datensätze mit `None` im fehlenden Feld; sie brechen den Import
/// nicht ab. Strukturell ungültiges JSON ist ein Fehler.
pub fn parse_region_records(
    content: &str,
    name_property: &str,
    projection: Projection,
) -> Result<Vec<RegionRecord>> {
    let collection: FeatureCollection =
        serde_json::from_str(content).context("GeoJSON konnte nicht gelesen werden")?;

    if collection.kind != "FeatureCollection" {
        bail!(
            "GeoJSON-Typ '{}' wird nicht unterstützt (erwartet: FeatureCollection)",
            collection.kind
        );
    }

    let records = collection
        .features
        .into_iter()
        .map(|feature| RegionRecord {
            name: feature_name(&feature, name_property),
            geometry: feature
                .get("geometry")
                .and_then(|geometry| parse_geometry(geometry, projection)),
        })
        .collect::<Vec<_>>();

    log::debug!("{} Features aus GeoJSON gelesen", records.len());
    Ok(records)
}

fn feature_name(feature: &Value, name_property: &str) -> Option<String> {
    let properties = feature.get("properties")?.as_object()?;
    let name = properties.get(name_property)?.as_str()?.trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn parse_geometry(geometry: &Value, projection: Projection) -> Option<RegionGeometry> {
    let Some(kind) = geometry.get("type").and_then(Value::as_str) else {
        if !geometry.is_null() {
            log::debug!("Geometrie ohne gültigen Typ wird übersprungen");
        }
        return None;
    };
    let coordinates = geometry.get("coordinates")?;

    let polygons = match kind {
        "Polygon" => {
            let rings: Vec<RawRing> = Vec::deserialize(coordinates).ok()?;
            vec![build_polygon(rings, projection)?]
        }
        "MultiPolygon" => {
            let parts: Vec<Vec<RawRing>> = Vec::deserialize(coordinates).ok()?;
            parts
                .into_iter()
                .filter_map(|rings| build_polygon(rings, projection))
                .collect()
        }
        other => {
            log::debug!("Geometrietyp '{}' wird übersprungen", other);
            return None;
        }
    };

    RegionGeometry::new(polygons)
}

fn build_polygon(rings: Vec<RawRing>, projection: Projection) -> Option<Polygon> {
    let rings = rings
        .into_iter()
        .map(|ring| {
            let mut points: Vec<DVec2> = ring
                .iter()
                .filter_map(|position| match position.as_slice() {
                    [lon, lat, ..] if lon.is_finite() && lat.is_finite() => {
                        Some(projection.project(*lon, *lat))
                    }
                    _ => None,
                })
                .collect();
            // GeoJSON-Ringe sind explizit geschlossen
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            points
        })
        .collect();

    Polygon::new(rings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "NAME": "Squareland" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [2, 0], [2, 2], [0, 2], [0, 0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Islands" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[5, 5], [6, 5], [6, 6], [5, 5]]],
                        [[[8, 8, 100], [9, 8, 100], [9, 9, 100], [8, 8, 100]]]
                    ]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Nowhere" },
                "geometry": null
            },
            {
                "type": "Feature",
                "properties": { "NAME": "   " },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "NAME": "Pointy" },
                "geometry": { "type": "Point", "coordinates": [1, 1] }
            }
        ]
    }"#;

    #[test]
    fn parses_polygons_and_multipolygons() {
        let records = parse_region_records(SAMPLE, "NAME", Projection::Geographic)
            .expect("GeoJSON sollte parsebar sein");

        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name.as_deref(), Some("Squareland"));

        let square = records[0].geometry.as_ref().expect("Geometrie erwartet");
        // Schließender Punkt wird entfernt
        assert_eq!(square.polygons()[0].exterior().len(), 4);

        let islands = records[1].geometry.as_ref().expect("Geometrie erwartet");
        assert_eq!(islands.polygons().len(), 2);
        assert!(islands.contains_point(DVec2::new(8.9, 8.5)));
    }

    #[test]
    fn incomplete_features_become_partial_records() {
        let records = parse_region_records(SAMPLE, "NAME", Projection::Geographic)
            .expect("GeoJSON sollte parsebar sein");

        assert!(records[2].geometry.is_none());
        assert_eq!(records[2].name.as_deref(), Some("Nowhere"));
        assert!(records[3].name.is_none());
        assert!(records[3].geometry.is_some());
        assert!(records[4].geometry.is_none());
    }

    #[test]
    fn custom_name_property_is_used() {
        let records = parse_region_records(SAMPLE, "ADMIN", Projection::Geographic)
            .expect("GeoJSON sollte parsebar sein");
        assert!(records.iter().all(|record| record.name.is_none()));
    }

    #[test]
    fn non_feature_collection_is_rejected() {
        let err = parse_region_records(
            r#"{ "type": "Feature", "properties": {}, "geometry": null }"#,
            "NAME",
            Projection::Geographic,
        );
        assert!(err.is_err());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_region_records("{ nope", "NAME", Projection::WebMercator).is_err());
    }

    #[test]
    fn malformed_feature_does_not_discard_dataset() {
        let content = r#"{
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "NAME": "A" },
                  "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] } },
                { "type": "Feature", "properties": { "NAME": "B" },
                  "geometry": { "coordinates": [[[2, 0], [3, 0], [3, 1], [2, 0]]] } },
                { "type": "Feature", "properties": [],
                  "geometry": { "type": "Polygon", "coordinates": [[[4, 0], [5, 0], [5, 1], [4, 0]]] } },
                "kein Feature",
                { "type": "Feature", "properties": { "NAME": "C" },
                  "geometry": { "type": "Polygon", "coordinates": "kaputt" } },
                { "type": "Feature", "properties": { "NAME": "D" },
                  "geometry": { "type": "Polygon", "coordinates": [[[6, 0], [7, 0], [7, 1], [6, 0]]] } }
            ]
        }"#;

        let records = parse_region_records(content, "NAME", Projection::Geographic)
            .expect("einzelne fehlerhafte Features sind kein Fehler");

        assert_eq!(records.len(), 6);
        assert!(records[0].name.is_some() && records[0].geometry.is_some());
        // Geometrie ohne "type"
        assert_eq!(records[1].name.as_deref(), Some("B"));
        assert!(records[1].geometry.is_none());
        // "properties" ist kein Objekt
        assert!(records[2].name.is_none());
        assert!(records[2].geometry.is_some());
        // Feature ist kein Objekt
        assert!(records[3].name.is_none() && records[3].geometry.is_none());
        // Ungültige Koordinaten
        assert!(records[4].geometry.is_none());
        assert_eq!(records[5].name.as_deref(), Some("D"));
        assert!(records[5].geometry.is_some());
    }
}
