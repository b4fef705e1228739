//! Projektion von Längen-/Breitengraden in Kartenkoordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Erdradius der sphärischen Web-Mercator-Projektion (EPSG:3857) in Metern.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Maximale Breite, bei der Web-Mercator abgeschnitten wird.
pub const MAX_MERCATOR_LAT_DEG: f64 = 85.051_128_779_806_59;

/// Koordinatenraum der geladenen Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Projection {
    /// Unverändert Längen-/Breitengrad
    Geographic,
    /// Sphärisches Web-Mercator in Metern
    #[default]
    WebMercator,
}

impl Projection {
    /// Projiziert `(lon, lat)` in Grad.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> DVec2 {
        match self {
            Projection::Geographic => DVec2::new(lon_deg, lat_deg),
            Projection::WebMercator => {
                let lat = lat_deg.clamp(-MAX_MERCATOR_LAT_DEG, MAX_MERCATOR_LAT_DEG);
                let x = EARTH_RADIUS_M * lon_deg.to_radians();
                let y = EARTH_RADIUS_M
                    * (std::f64::consts::FRAC_PI_4 + lat.to_radians() * 0.5)
                        .tan()
                        .ln();
                DVec2::new(x, y)
            }
        }
    }
}
