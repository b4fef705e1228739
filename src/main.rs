//! Geo-Quiz.
//!
//! Text-Frontend: Regionen per Klick oder Drag-Box erraten, auch bei
//! gedrehter Kartenansicht. Die Geometrie wird im Hintergrund geladen.

use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

use geo_quiz::app::use_cases;
use geo_quiz::shared::DEFAULT_GEOMETRY_PATH;
use geo_quiz::{ui, AppController, AppIntent, AppState, QuizOptions};

/// Ereignisse der Haupt-Schleife.
enum LoopEvent {
    /// Intent aus Loader oder Eingabe
    Intent(AppIntent),
    /// Status-Ausgabe angefordert
    ShowStatus,
    /// Hinweis für unbekannte Eingaben
    Usage(String),
    /// Eingabe geschlossen (EOF)
    InputClosed,
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Geo-Quiz v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let options = QuizOptions::load_from_file(&QuizOptions::config_path());
    let geometry_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_GEOMETRY_PATH.to_string());

    let mut runner = QuizRunner::new(options);
    runner.run(geometry_path);
}

/// Haupt-Anwendungsstruktur
struct QuizRunner {
    state: AppState,
    controller: AppController,
}

impl QuizRunner {
    fn new(options: QuizOptions) -> Self {
        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
        }
    }

    fn run(&mut self, geometry_path: String) {
        let (sender, receiver) = mpsc::channel();

        self.state.ui.geometry_path = Some(geometry_path.clone());
        self.state.ui.loading = true;
        spawn_loader(geometry_path, self.state.options.clone(), sender.clone());
        spawn_input_reader(sender);

        println!("{}", ui::USAGE);

        for event in receiver {
            match event {
                LoopEvent::Intent(intent) => self.process_intent(intent),
                LoopEvent::ShowStatus => self.print_status(),
                LoopEvent::Usage(message) => println!("{}\n{}", message, ui::USAGE),
                LoopEvent::InputClosed => break,
            }

            if self.state.should_exit {
                break;
            }
        }

        log::info!("Geo-Quiz beendet");
    }

    fn process_intent(&mut self, intent: AppIntent) {
        let is_selection = matches!(
            intent,
            AppIntent::RegionPickRequested { .. } | AppIntent::RegionBoxSelectRequested { .. }
        );

        if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }

        for update in self.state.take_tier_updates() {
            println!("{}", ui::render_tier_update(&update));
        }
        if is_selection && self.state.is_loaded() {
            println!(
                "{}",
                ui::selected_regions_line(&self.state.selection.last_result)
            );
        }
        if let Some(message) = self.state.ui.status_message.take() {
            println!("{}", message);
        }
    }

    fn print_status(&self) {
        let snapshot = self.controller.snapshot(&self.state);
        println!("{}", ui::render_status_line(&self.state, snapshot.as_ref()));
        println!(
            "{}",
            ui::selected_regions_line(&self.state.selection.last_result)
        );
    }
}

/// Lädt die Geometrie im Hintergrund und meldet das Ergebnis als Intent.
fn spawn_loader(path: String, options: QuizOptions, sender: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let intent = match use_cases::file_io::read_geometry_records(&path, &options) {
            Ok(records) => AppIntent::GeometryLoaded { records },
            Err(e) => AppIntent::GeometryLoadFailed {
                message: format!("{:#}", e),
            },
        };
        if sender.send(LoopEvent::Intent(intent)).is_err() {
            log::debug!("Haupt-Schleife beendet, Ladeergebnis verworfen");
        }
    });
}

/// Liest Eingabezeilen von stdin und übersetzt sie in Loop-Events.
fn spawn_input_reader(sender: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::error!("Eingabe konnte nicht gelesen werden: {}", e);
                    break;
                }
            };

            let event = match ui::parse_line(&line) {
                Some(ui::InputAction::Intent(intent)) => LoopEvent::Intent(intent),
                Some(ui::InputAction::ShowStatus) => LoopEvent::ShowStatus,
                Some(ui::InputAction::Usage(message)) => LoopEvent::Usage(message),
                None => continue,
            };
            if sender.send(event).is_err() {
                return;
            }
        }
        let _ = sender.send(LoopEvent::InputClosed);
    });
}
