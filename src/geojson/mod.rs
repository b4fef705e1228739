//! GeoJSON-Import für Regionsgeometrie.
//!
//! Liest eine `FeatureCollection` (z.B. Natural-Earth-Länder) und liefert
//! `RegionRecord`s, die `GeometryIndex::load` übernimmt.

pub mod parser;
pub mod projection;

pub use parser::parse_region_records;
pub use projection::Projection;
