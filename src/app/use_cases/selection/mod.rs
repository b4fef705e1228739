//! Use-Case-Funktionen für Regions-Selektion.
//!
//! Aufgeteilt nach Aufgabe:
//! - `resolve`: Klick/Drag-Box über den `SelectionResolver` auflösen
//! - `helpers`: Gemeinsame Hilfsfunktionen
mod helpers;
mod resolve;

pub use helpers::clear_selection;
pub use resolve::resolve_selection;
