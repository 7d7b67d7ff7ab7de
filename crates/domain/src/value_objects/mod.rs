//! Value Objects - Immutable, identity-less domain primitives

mod ceiling;
mod flight_category;
mod report_kind;
mod sky;
mod station_id;
mod wind;

pub use ceiling::Ceiling;
pub use flight_category::FlightCategory;
pub use report_kind::ReportKind;
pub use sky::{SkyCover, SkyLayer};
pub use station_id::StationId;
pub use wind::Wind;
