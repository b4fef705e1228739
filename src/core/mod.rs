//! Core-Domänentypen: Geometrie, Regionen, Spatial-Index, Auswahl, Session, Ansicht.

pub mod extent;
pub mod geometry;
pub mod geometry_index;
pub mod region;
pub mod selection;
/// Runden-Zustandsmaschine des Quiz
pub mod session;
pub mod spatial;
pub mod tier;
pub mod view;

pub use extent::Extent;
pub use geometry::{Polygon, RegionGeometry};
pub use geometry_index::GeometryIndex;
pub use region::{Region, RegionId, RegionRecord};
pub use selection::{is_axis_aligned, SelectionQuery, SelectionResolver, SelectionResult};
pub use session::{
    GuessOutcome, GuessSession, IgnoreReason, QueueOrdering, SessionConfig, SessionSnapshot,
    SessionStatus, DEFAULT_MAX_ATTEMPTS,
};
pub use spatial::SpatialIndex;
pub use tier::Tier;
pub use view::{constrain_rotation, MapView};
