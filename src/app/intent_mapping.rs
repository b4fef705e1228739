//! Mapping von UI-Intents auf mutierende App-Commands.

use std::f64::consts::TAU;

use super::{AppCommand, AppIntent, AppState};
use crate::shared::DEFAULT_ROTATION_STEPS;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LoadGeometryFileRequested { path } => vec![
            AppCommand::LoadGeometryFile { path },
            AppCommand::StartSession,
        ],
        AppIntent::GeometryLoaded { records } => vec![
            AppCommand::InstallGeometry { records },
            AppCommand::StartSession,
        ],
        AppIntent::GeometryLoadFailed { message } => {
            vec![AppCommand::RecordLoadFailure { message }]
        }
        AppIntent::RegionPickRequested { view_pos } => {
            if !state.is_loaded() {
                log::debug!("Auswahl vor Abschluss des Ladens verworfen");
                return Vec::new();
            }
            let view = &state.view.view;
            vec![
                AppCommand::ClearSelection,
                AppCommand::ResolveSelection {
                    query: view.click(view_pos),
                    rotation: view.rotation,
                },
                AppCommand::SubmitGuess,
            ]
        }
        AppIntent::RegionBoxSelectRequested { corner_a, corner_b } => {
            if !state.is_loaded() {
                log::debug!("Drag-Box vor Abschluss des Ladens verworfen");
                return Vec::new();
            }
            let view = &state.view.view;
            vec![
                AppCommand::ClearSelection,
                AppCommand::ResolveSelection {
                    query: view.drag_box(corner_a, corner_b),
                    rotation: view.rotation,
                },
                AppCommand::SubmitGuess,
            ]
        }
        AppIntent::RotateViewRequested { steps } => {
            let stops = match state.options.rotation_steps {
                0 => DEFAULT_ROTATION_STEPS,
                n => n,
            };
            vec![AppCommand::RotateView {
                delta: f64::from(steps) * TAU / f64::from(stops),
            }]
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            factor: state.options.zoom_step,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            factor: 1.0 / state.options.zoom_step,
        }],
        AppIntent::CenterViewRequested { target } => vec![AppCommand::CenterView { target }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::RestartSessionRequested => {
            vec![AppCommand::ClearSelection, AppCommand::StartSession]
        }
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
