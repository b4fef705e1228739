//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `app`, `ui` und der Binary
//! gemeinsam gelesen wird.

pub mod options;

pub use options::QuizOptions;
pub use options::{DEFAULT_GEOMETRY_PATH, DEFAULT_NAME_PROPERTY, DEFAULT_ROTATION_STEPS};
