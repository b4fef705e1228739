//! Ergebnis-Stufe (Tier) einer aufgelösten Region.

use serde::{Deserialize, Serialize};

/// Diskrete Ergebnis-Klassifikation. Reihenfolge: `Best < Middle < Worst`,
/// d.h. ein kleinerer Wert ist ein besseres Ergebnis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Im ersten Versuch erraten
    Best,
    /// Im zweiten Versuch erraten
    Middle,
    /// Im dritten/vierten Versuch erraten oder aufgegeben
    Worst,
}

impl Tier {
    /// Tier für einen erfolgreichen Tipp nach `attempts_used` Versuchen.
    ///
    /// `0` wird wie der erste Versuch behandelt, damit die Abbildung total bleibt.
    pub fn for_attempts(attempts_used: u32) -> Self {
        match attempts_used {
            0 | 1 => Tier::Best,
            2 => Tier::Middle,
            _ => Tier::Worst,
        }
    }

    /// Tier für eine aufgegebene Region (Versuchsbudget erschöpft).
    pub fn given_up() -> Self {
        Tier::Worst
    }

    /// Kurzes Label für die Anzeige.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Best => "best",
            Tier::Middle => "middle",
            Tier::Worst => "worst",
        }
    }
}
