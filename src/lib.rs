//! Geo-Quiz Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geojson;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, TierAssignment, UiState, ViewState};
pub use core::{
    Extent, GeometryIndex, GuessOutcome, GuessSession, MapView, Region, RegionGeometry,
    RegionId, RegionRecord, SelectionQuery, SelectionResolver, SelectionResult, SessionSnapshot,
    SessionStatus, Tier,
};
pub use geojson::{parse_region_records, Projection};
pub use shared::QuizOptions;
