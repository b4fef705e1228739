//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{
    GeometryIndex, GuessOutcome, GuessSession, MapView, RegionId, SelectionResult, Tier,
};
use crate::shared::QuizOptions;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Zuletzt aufgelöste Auswahl (für Info-Panel und Tipp-Auswertung)
    pub last_result: SelectionResult,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verwirft die aktuelle Auswahl.
    pub fn clear(&mut self) {
        self.last_result = SelectionResult::empty();
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Kartenansicht (Mittelpunkt, Zoom, Drehung)
    pub view: MapView,
}

impl ViewState {
    /// Erstellt den Standard-View-State.
    pub fn new() -> Self {
        Self::default()
    }
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Pfad des zuletzt angeforderten Geometrie-Datensatzes
    pub geometry_path: Option<String>,
    /// Geometrie wird gerade geladen
    pub loading: bool,
    /// Nicht-fataler Ladefehler ("Session kann nicht gestartet werden")
    pub load_error: Option<String>,
    /// Statusnachricht für die Anzeige
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Tier-Zuweisung, die die UI zum Umfärben der Region abholt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierAssignment {
    /// Aufgelöste Region
    pub region: RegionId,
    /// Zugewiesener Tier
    pub tier: Tier,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Geladene Regionen (None bis das Laden abgeschlossen ist)
    pub geometry: Option<Arc<GeometryIndex>>,
    /// Aktive Quiz-Session (existiert nur nach erfolgreichem Laden)
    pub session: Option<GuessSession>,
    /// Auswahlbezogener Zustand
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: QuizOptions,
    /// Ergebnis der letzten Tipp-Auswertung
    pub last_outcome: Option<GuessOutcome>,
    /// Noch nicht abgeholte Tier-Zuweisungen
    pub tier_updates: Vec<TierAssignment>,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Signal zum Beenden der Anwendung
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(QuizOptions::default())
    }

    /// Erstellt einen App-State mit den übergebenen Optionen.
    pub fn with_options(options: QuizOptions) -> Self {
        Self {
            geometry: None,
            session: None,
            selection: SelectionState::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            options,
            last_outcome: None,
            tier_updates: Vec::new(),
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Gibt `true` zurück, sobald Geometrie geladen ist.
    pub fn is_loaded(&self) -> bool {
        self.geometry.is_some()
    }

    /// Gibt die Anzahl geladener Regionen zurück.
    pub fn region_count(&self) -> usize {
        self.geometry.as_ref().map_or(0, |index| index.len())
    }

    /// Holt alle seit dem letzten Aufruf angefallenen Tier-Zuweisungen ab.
    pub fn take_tier_updates(&mut self) -> Vec<TierAssignment> {
        std::mem::take(&mut self.tier_updates)
    }
}
