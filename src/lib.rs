//! Five-competency assessment wheel: state model, radial geometry, rubric text
//! and the export boundary that turns a finished assessment into artifacts.

pub mod error;
pub mod events;
pub mod export;
pub mod geometry;
pub mod logging;
pub mod model;
pub mod render;
pub mod report;
pub mod rubric;
