use crate::core::RegionRecord;
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Geometrie-Datei synchron laden und Session starten
    LoadGeometryFileRequested { path: String },
    /// Hintergrund-Laden abgeschlossen: geparste Regions-Datensätze
    GeometryLoaded { records: Vec<RegionRecord> },
    /// Hintergrund-Laden fehlgeschlagen
    GeometryLoadFailed { message: String },
    /// Region per Klick wählen (View-Koordinaten relativ zur Bildmitte)
    RegionPickRequested { view_pos: DVec2 },
    /// Regionen per Drag-Box wählen (zwei View-Eckpunkte)
    RegionBoxSelectRequested { corner_a: DVec2, corner_b: DVec2 },
    /// Ansicht um ganze Drehstufen drehen (negativ = gegen den Uhrzeigersinn)
    RotateViewRequested { steps: i32 },
    /// Ansicht um Delta verschieben (View-Einheiten)
    CameraPan { delta: DVec2 },
    /// Ansicht zoomen
    CameraZoom { factor: f64 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf einen Kartenpunkt zentrieren
    CenterViewRequested { target: DVec2 },
    /// Ansicht auf Standard zurücksetzen
    ResetViewRequested,
    /// Neue Session über den geladenen Regionen starten
    RestartSessionRequested,
    /// Aktuelle Optionen in die Konfigurationsdatei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
