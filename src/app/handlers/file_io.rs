//! Handler für Datei-Operationen (Geometrie laden, Ladefehler, Optionen).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::RegionRecord;
use crate::shared::QuizOptions;

/// Lädt die Geometrie aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_geometry_file(state, path)
}

/// Installiert bereits geparste Datensätze (Ergebnis des Hintergrund-Loaders).
pub fn install(state: &mut AppState, records: Vec<RegionRecord>) {
    use_cases::file_io::install_geometry(state, records);
}

/// Vermerkt einen Ladefehler.
pub fn record_failure(state: &mut AppState, message: String) {
    use_cases::file_io::record_load_failure(state, message);
}

/// Persistiert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::file_io::save_options(state, &QuizOptions::config_path())
}
