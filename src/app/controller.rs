//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::SessionSnapshot;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Verbindet Auswahl-Events über den `SelectionResolver` mit der
/// `GuessSession` und legt Tier-Zuweisungen für die UI ab.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadGeometryFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::InstallGeometry { records } => handlers::file_io::install(state, records),
            AppCommand::RecordLoadFailure { message } => {
                handlers::file_io::record_failure(state, message)
            }
            AppCommand::SaveOptions => handlers::file_io::save_options(state)?,

            // === Session ===
            AppCommand::StartSession => handlers::session::start(state),
            AppCommand::SubmitGuess => handlers::session::submit_guess(state),

            // === Selektion ===
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::ResolveSelection { query, rotation } => {
                handlers::selection::resolve(state, &query, rotation)
            }

            // === Ansicht ===
            AppCommand::RotateView { delta } => handlers::view::rotate(state, delta),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::CenterView { target } => handlers::view::center(state, target),
            AppCommand::ResetView => handlers::view::reset(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }

    /// Momentaufnahme der Session für die UI (None vor dem Laden).
    pub fn snapshot(&self, state: &AppState) -> Option<SessionSnapshot> {
        state.session.as_ref().map(|session| session.snapshot())
    }
}
