//! UI-Komponenten: Text-Eingabe und Status-Ausgabe.

pub mod input;
/// Status-Zeile, Info-Panel und Tier-Ausgabe
pub mod status;

pub use input::{parse_line, InputAction, USAGE};
pub use status::{render_status_line, render_tier_update, selected_regions_line};
