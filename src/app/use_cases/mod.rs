//! Use-Cases der Application-Layer-Orchestrierung.

pub mod file_io;
pub mod selection;
pub mod session;
pub mod view;
