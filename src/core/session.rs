//! GuessSession: Runden-Zustandsmaschine des Quiz.
//!
//! Die Session kennt nur die Ziel-Queue aus Regions-IDs und ist damit von der
//! Geometrie entkoppelt. Einziger Mutationspfad ist [`GuessSession::evaluate`].

use std::collections::VecDeque;

use indexmap::{IndexMap, IndexSet};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::{RegionId, SelectionResult, Tier};

/// Standard-Versuchsbudget pro Zielregion.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Reihenfolge, in der die Ziel-Queue aus dem Datensatz gebildet wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueOrdering {
    /// Datensatz-Reihenfolge
    #[default]
    Dataset,
    /// Zufällig gemischt (reproduzierbar mit Seed)
    Shuffled,
}

/// Konfiguration einer Session, fix ab Erstellung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximale Anzahl an Versuchen pro Ziel (mindestens 1)
    pub max_attempts: u32,
    /// Reihenfolge der Ziel-Queue
    pub ordering: QueueOrdering,
    /// Seed für `QueueOrdering::Shuffled`; `None` = Entropie des Systems
    pub shuffle_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            ordering: QueueOrdering::Dataset,
            shuffle_seed: None,
        }
    }
}

/// Status der Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Aktives Ziel, Auswahl wird erwartet
    AwaitingGuess,
    /// Terminal: Queue ist leer
    SessionComplete,
}

/// Grund, warum eine Auswahl nicht als Versuch gewertet wurde.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Keine Region getroffen
    EmptySelection,
    /// Mehrere Regionen getroffen; Auswahl muss enger werden
    Ambiguous {
        /// Anzahl der getroffenen Regionen
        candidates: usize,
    },
    /// Session ist bereits abgeschlossen
    SessionComplete,
}

/// Ergebnis eines `evaluate`-Aufrufs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Keine Zustandsänderung
    Ignored(IgnoreReason),
    /// Falsche Region, Budget noch nicht erschöpft
    Wrong {
        /// Gewählte Region
        guessed: RegionId,
        /// Bisher verbrauchte Versuche auf dem aktiven Ziel
        attempts_used: u32,
        /// Verbleibende Versuche
        attempts_left: u32,
    },
    /// Ziel erraten
    Correct {
        /// Aufgelöste Region
        region: RegionId,
        /// Zugewiesener Tier
        tier: Tier,
        /// Benötigte Versuche (inkl. des richtigen)
        attempts: u32,
    },
    /// Budget erschöpft, Ziel wurde aufgegeben
    GaveUp {
        /// Aufgelöste (aufgegebene) Region
        region: RegionId,
        /// Zugewiesener Tier
        tier: Tier,
    },
}

impl GuessOutcome {
    /// Tier-Zuweisung `(region, tier)`, falls dieser Schritt eine Region aufgelöst hat.
    pub fn tier_assignment(&self) -> Option<(&RegionId, Tier)> {
        match self {
            GuessOutcome::Correct { region, tier, .. } | GuessOutcome::GaveUp { region, tier } => {
                Some((region, *tier))
            }
            _ => None,
        }
    }

    /// Gibt `true` zurück, wenn der Aufruf als Versuch gezählt wurde.
    pub fn is_attempt(&self) -> bool {
        !matches!(self, GuessOutcome::Ignored(_))
    }
}

/// Read-only Sicht auf den Session-Zustand für die UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Aktives Ziel (Kopf der Queue)
    pub active_target: Option<RegionId>,
    /// Verbrauchte Versuche auf dem aktiven Ziel
    pub attempts_used: u32,
    /// Versuchsbudget
    pub max_attempts: u32,
    /// Noch offene Ziele (inkl. aktivem)
    pub remaining_targets: usize,
    /// Bereits aufgelöste Regionen
    pub resolved_count: usize,
    /// Status
    pub status: SessionStatus,
}

/// Runden-Zustandsmaschine.
#[derive(Debug, Clone)]
pub struct GuessSession {
    target_queue: VecDeque<RegionId>,
    attempts_used: u32,
    max_attempts: u32,
    resolved_tiers: IndexMap<RegionId, Tier>,
    total_attempts: u64,
    status: SessionStatus,
}

impl GuessSession {
    /// Erstellt eine Session aus den Regions-IDs (Datensatz-Reihenfolge) und der Konfiguration.
    ///
    /// Doppelte IDs werden verworfen (erstes Vorkommen zählt).
    /// Leere Queue ergibt direkt `SessionComplete`.
    pub fn new<I>(region_ids: I, config: SessionConfig) -> Self
    where
        I: IntoIterator<Item = RegionId>,
    {
        let mut seed_count = 0usize;
        let unique: IndexSet<RegionId> = region_ids
            .into_iter()
            .inspect(|_| seed_count += 1)
            .collect();
        if unique.len() < seed_count {
            log::warn!(
                "{} doppelte Ziel-IDs verworfen",
                seed_count - unique.len()
            );
        }
        let mut targets: Vec<RegionId> = unique.into_iter().collect();

        if config.ordering == QueueOrdering::Shuffled {
            let mut rng = match config.shuffle_seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            targets.shuffle(&mut rng);
        }

        let max_attempts = if config.max_attempts == 0 {
            log::warn!(
                "max_attempts = 0 ist ungültig, verwende {}",
                DEFAULT_MAX_ATTEMPTS
            );
            DEFAULT_MAX_ATTEMPTS
        } else {
            config.max_attempts
        };

        let status = if targets.is_empty() {
            SessionStatus::SessionComplete
        } else {
            SessionStatus::AwaitingGuess
        };

        log::info!(
            "Neue Session: {} Ziele, {} Versuche pro Ziel, Reihenfolge {:?}",
            targets.len(),
            max_attempts,
            config.ordering
        );

        Self {
            target_queue: targets.into(),
            attempts_used: 0,
            max_attempts,
            resolved_tiers: IndexMap::new(),
            total_attempts: 0,
            status,
        }
    }

    /// Aktives Ziel (Kopf der Queue).
    pub fn active_target(&self) -> Option<&RegionId> {
        self.target_queue.front()
    }

    /// Noch offene Ziele, Kopf zuerst.
    pub fn remaining_targets(&self) -> impl Iterator<Item = &RegionId> + '_ {
        self.target_queue.iter()
    }

    /// Verbrauchte Versuche auf dem aktiven Ziel.
    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    /// Versuchsbudget pro Ziel.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Summe aller gewerteten Versuche über die gesamte Session.
    pub fn total_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Status der Session.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Gibt `true` zurück, wenn die Session abgeschlossen ist.
    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::SessionComplete
    }

    /// Alle aufgelösten Regionen in Auflösungsreihenfolge.
    pub fn resolved_tiers(&self) -> &IndexMap<RegionId, Tier> {
        &self.resolved_tiers
    }

    /// Tier einer Region, falls bereits aufgelöst.
    pub fn tier_of(&self, region: &str) -> Option<Tier> {
        self.resolved_tiers.get(region).copied()
    }

    /// Momentaufnahme für die UI.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            active_target: self.active_target().cloned(),
            attempts_used: self.attempts_used,
            max_attempts: self.max_attempts,
            remaining_targets: self.target_queue.len(),
            resolved_count: self.resolved_tiers.len(),
            status: self.status,
        }
    }

    /// Wertet eine aufgelöste Auswahl gegen das aktive Ziel aus.
    ///
    /// Leere und mehrdeutige Auswahlen sowie Aufrufe nach Abschluss sind No-ops.
    pub fn evaluate(&mut self, selection: &SelectionResult) -> GuessOutcome {
        if self.status == SessionStatus::SessionComplete {
            return GuessOutcome::Ignored(IgnoreReason::SessionComplete);
        }

        if selection.is_empty() {
            return GuessOutcome::Ignored(IgnoreReason::EmptySelection);
        }

        let Some(guessed) = selection.single() else {
            log::debug!("Mehrdeutige Auswahl mit {} Regionen", selection.len());
            return GuessOutcome::Ignored(IgnoreReason::Ambiguous {
                candidates: selection.len(),
            });
        };

        let Some(target) = self.target_queue.front() else {
            // Status und Queue sind gekoppelt
            self.status = SessionStatus::SessionComplete;
            return GuessOutcome::Ignored(IgnoreReason::SessionComplete);
        };

        let attempts = self.attempts_used + 1;
        self.total_attempts += 1;

        if guessed == target {
            let tier = Tier::for_attempts(attempts);
            let region = self.resolve_head(tier);
            log::info!(
                "Richtig: {} nach {} Versuch(en) -> {}",
                region,
                attempts,
                tier.label()
            );
            return GuessOutcome::Correct {
                region,
                tier,
                attempts,
            };
        }

        if attempts < self.max_attempts {
            self.attempts_used = attempts;
            return GuessOutcome::Wrong {
                guessed: guessed.clone(),
                attempts_used: attempts,
                attempts_left: self.max_attempts - attempts,
            };
        }

        let tier = Tier::given_up();
        let region = self.resolve_head(tier);
        log::info!(
            "Aufgegeben: {} nach {} Fehlversuchen -> {}",
            region,
            attempts,
            tier.label()
        );
        GuessOutcome::GaveUp { region, tier }
    }

    /// Löst den Kopf der Queue mit `tier` auf und rückt zum nächsten Ziel vor.
    fn resolve_head(&mut self, tier: Tier) -> RegionId {
        let region = self.target_queue.pop_front().unwrap_or_default();

        self.resolved_tiers.entry(region.clone()).or_insert(tier);
        self.attempts_used = 0;

        if self.target_queue.is_empty() {
            self.status = SessionStatus::SessionComplete;
            log::info!(
                "Session abgeschlossen: {} Regionen aufgelöst",
                self.resolved_tiers.len()
            );
        }

        region
    }
}
