//! Text-Input-Handling: Eingabezeilen → AppIntent.
//!
//! Koordinaten sind View-Koordinaten relativ zur Bildmitte; die Umrechnung
//! in Kartenkoordinaten übernimmt das Intent-Mapping anhand der Ansicht.

use crate::app::AppIntent;
use glam::DVec2;

/// Hilfetext für unbekannte Eingaben.
pub const USAGE: &str = "commands: click X Y | box X1 Y1 X2 Y2 | rotate STEPS | pan DX DY | \
zoom FACTOR | center X Y | reset | restart | save | status | quit";

/// Ergebnis einer geparsten Eingabezeile.
#[derive(Debug, Clone)]
pub enum InputAction {
    /// An den Controller weiterzureichender Intent
    Intent(AppIntent),
    /// Status und Info-Panel ausgeben
    ShowStatus,
    /// Eingabe nicht verstanden
    Usage(String),
}

/// Parsed eine Eingabezeile. Leere Zeilen ergeben `None`.
pub fn parse_line(line: &str) -> Option<InputAction> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_ascii_lowercase();
    let args: Vec<&str> = tokens.collect();

    let action = match (command.as_str(), args.as_slice()) {
        ("click", [x, y]) => parse_point(x, y).map(|view_pos| {
            InputAction::Intent(AppIntent::RegionPickRequested { view_pos })
        }),
        ("box", [x1, y1, x2, y2]) => parse_point(x1, y1)
            .zip(parse_point(x2, y2))
            .map(|(corner_a, corner_b)| {
                InputAction::Intent(AppIntent::RegionBoxSelectRequested { corner_a, corner_b })
            }),
        ("rotate", [steps]) => steps
            .parse::<i32>()
            .ok()
            .map(|steps| InputAction::Intent(AppIntent::RotateViewRequested { steps })),
        ("pan", [dx, dy]) => {
            parse_point(dx, dy).map(|delta| InputAction::Intent(AppIntent::CameraPan { delta }))
        }
        ("zoom", [factor]) => parse_number(factor)
            .map(|factor| InputAction::Intent(AppIntent::CameraZoom { factor })),
        ("zoom", []) | ("+", []) => Some(InputAction::Intent(AppIntent::ZoomInRequested)),
        ("-", []) => Some(InputAction::Intent(AppIntent::ZoomOutRequested)),
        ("center", [x, y]) => parse_point(x, y)
            .map(|target| InputAction::Intent(AppIntent::CenterViewRequested { target })),
        ("save", []) => Some(InputAction::Intent(AppIntent::SaveOptionsRequested)),
        ("reset", []) => Some(InputAction::Intent(AppIntent::ResetViewRequested)),
        ("restart", []) => Some(InputAction::Intent(AppIntent::RestartSessionRequested)),
        ("status", []) => Some(InputAction::ShowStatus),
        ("quit", []) | ("exit", []) => Some(InputAction::Intent(AppIntent::ExitRequested)),
        _ => None,
    };

    Some(action.unwrap_or_else(|| InputAction::Usage(format!("unknown input '{}'", line.trim()))))
}

fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_point(x: &str, y: &str) -> Option<DVec2> {
    Some(DVec2::new(parse_number(x)?, parse_number(y)?))
}
