use crate::core::{RegionRecord, SelectionQuery};
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Geometrie-Datei lesen und installieren
    LoadGeometryFile { path: String },
    /// Geparste Datensätze als neuen GeometryIndex installieren
    InstallGeometry { records: Vec<RegionRecord> },
    /// Ladefehler als "Session kann nicht gestartet werden" vermerken
    RecordLoadFailure { message: String },
    /// Neue Session über dem geladenen Index erzeugen
    StartSession,
    /// Aktuelle Auswahl verwerfen
    ClearSelection,
    /// Abfrage gegen den Index auflösen
    ResolveSelection {
        query: SelectionQuery,
        rotation: f64,
    },
    /// Aktuelle Auswahl als Tipp auswerten
    SubmitGuess,
    /// Ansicht um einen Winkel drehen (wird eingerastet)
    RotateView { delta: f64 },
    /// Ansicht verschieben
    PanCamera { delta: DVec2 },
    /// Ansicht zoomen
    ZoomCamera { factor: f64 },
    /// Ansicht auf einen Kartenpunkt zentrieren
    CenterView { target: DVec2 },
    /// Ansicht zurücksetzen
    ResetView,
    /// Optionen als TOML speichern
    SaveOptions,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für Command-Log und Debug-Ausgaben.
    pub fn name(&self) -> &'static str {
        match self {
            AppCommand::LoadGeometryFile { .. } => "LoadGeometryFile",
            AppCommand::InstallGeometry { .. } => "InstallGeometry",
            AppCommand::RecordLoadFailure { .. } => "RecordLoadFailure",
            AppCommand::StartSession => "StartSession",
            AppCommand::ClearSelection => "ClearSelection",
            AppCommand::ResolveSelection { .. } => "ResolveSelection",
            AppCommand::SubmitGuess => "SubmitGuess",
            AppCommand::RotateView { .. } => "RotateView",
            AppCommand::PanCamera { .. } => "PanCamera",
            AppCommand::ZoomCamera { .. } => "ZoomCamera",
            AppCommand::CenterView { .. } => "CenterView",
            AppCommand::ResetView => "ResetView",
            AppCommand::SaveOptions => "SaveOptions",
            AppCommand::RequestExit => "RequestExit",
        }
    }
}
