//! Zentrale Konfiguration für das Geo-Quiz.
//!
//! `QuizOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{QueueOrdering, SessionConfig, DEFAULT_MAX_ATTEMPTS};
use crate::geojson::Projection;

// ── Datensatz ───────────────────────────────────────────────────────

/// GeoJSON-Property mit dem Regionsnamen (Natural-Earth-Länderdatensatz).
pub const DEFAULT_NAME_PROPERTY: &str = "NAME";
/// Standard-Pfad des Geometrie-Datensatzes.
pub const DEFAULT_GEOMETRY_PATH: &str = "countries.geojson";

// ── Ansicht ─────────────────────────────────────────────────────────

/// Anzahl erlaubter Drehstufen pro Umdrehung (0 = frei drehbar).
pub const DEFAULT_ROTATION_STEPS: u32 = 16;
/// Zoom-Schritt bei stufenweisem Zoom.
pub const DEFAULT_ZOOM_STEP: f64 = 1.2;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Quiz-Optionen.
/// Wird als `geo_quiz.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizOptions {
    // ── Session ─────────────────────────────────────────────────
    /// Versuche pro Zielregion, bevor sie aufgegeben wird
    pub max_attempts: u32,
    /// Reihenfolge der Ziel-Queue
    pub queue_ordering: QueueOrdering,
    /// Seed für die gemischte Reihenfolge (reproduzierbar)
    pub shuffle_seed: Option<u64>,

    // ── Datensatz ───────────────────────────────────────────────
    /// Property mit dem Regionsnamen
    pub name_property: String,
    /// Projektion der Koordinaten beim Import
    pub projection: Projection,

    // ── Ansicht ─────────────────────────────────────────────────
    /// Drehstufen pro Umdrehung
    pub rotation_steps: u32,
    /// Zoom-Schritt
    pub zoom_step: f64,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            queue_ordering: QueueOrdering::Dataset,
            shuffle_seed: None,

            name_property: DEFAULT_NAME_PROPERTY.to_string(),
            projection: Projection::WebMercator,

            rotation_steps: DEFAULT_ROTATION_STEPS,
            zoom_step: DEFAULT_ZOOM_STEP,
        }
    }
}

impl QuizOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fällt bei Fehler auf Standardwerte zurück.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geo_quiz"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geo_quiz.toml")
    }

    /// Session-Konfiguration aus den Optionen.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            max_attempts: self.max_attempts,
            ordering: self.queue_ordering,
            shuffle_seed: self.shuffle_seed,
        }
    }
}
