//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use anyhow::Context;

use crate::app::AppState;
use crate::core::{GeometryIndex, RegionRecord};
use crate::geojson::parse_region_records;
use crate::shared::QuizOptions;
use std::path::Path;
use std::sync::Arc;

/// Liest und parst eine GeoJSON-Datei zu Regions-Datensätzen.
///
/// Läuft ohne AppState, damit der Hintergrund-Loader sie aufrufen kann.
pub fn read_geometry_records(path: &str, options: &QuizOptions) -> anyhow::Result<Vec<RegionRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Geometrie-Datei '{}' konnte nicht gelesen werden", path))?;
    parse_region_records(&content, &options.name_property, options.projection)
        .with_context(|| format!("Geometrie-Datei '{}' ist ungültig", path))
}

/// Lädt die Geometrie-Datei synchron in den AppState.
///
/// Ein Fehler wird als Ladefehler vermerkt und zusätzlich an den Aufrufer gereicht.
pub fn load_geometry_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    state.ui.geometry_path = Some(path.clone());
    state.ui.loading = true;

    match read_geometry_records(&path, &state.options) {
        Ok(records) => {
            install_geometry(state, records);
            Ok(())
        }
        Err(e) => {
            record_load_failure(state, format!("{:#}", e));
            Err(e)
        }
    }
}

/// Baut den GeometryIndex aus den Datensätzen und ersetzt den bisherigen.
///
/// Eine laufende Session gehört zum alten Index und wird verworfen.
pub fn install_geometry(state: &mut AppState, records: Vec<RegionRecord>) {
    let index = GeometryIndex::load(records);

    state.ui.status_message = Some(if index.dropped_records() > 0 {
        format!(
            "Loaded {} regions ({} records skipped)",
            index.len(),
            index.dropped_records()
        )
    } else {
        format!("Loaded {} regions", index.len())
    });
    state.ui.loading = false;
    state.ui.load_error = None;

    state.session = None;
    state.last_outcome = None;
    state.tier_updates.clear();
    state.selection.clear();
    state.geometry = Some(Arc::new(index));
}

/// Vermerkt einen fehlgeschlagenen Ladevorgang. Es wird keine Session erzeugt.
///
/// Ist bereits Geometrie installiert, bleiben Index und Session unverändert.
pub fn record_load_failure(state: &mut AppState, message: String) {
    state.ui.loading = false;
    state.ui.status_message = Some(if state.is_loaded() {
        log::warn!(
            "Neuladen fehlgeschlagen, bisherige Regionen bleiben aktiv: {}",
            message
        );
        "Reload failed: previous regions stay active".to_string()
    } else {
        log::error!("Geometrie konnte nicht geladen werden: {}", message);
        "Cannot start session: geometry failed to load".to_string()
    });
    state.ui.load_error = Some(message);
}

/// Schreibt die aktuellen Optionen als TOML nach `path`.
pub fn save_options(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path).with_context(|| {
        format!("Optionen konnten nicht nach '{}' geschrieben werden", path.display())
    })?;
    state.ui.status_message = Some(format!("Options saved to {}", path.display()));
    Ok(())
}
