//! chartspec: adaptive chart-spec pipeline for analytics dashboards.
//!
//! Raw datasets plus a display profile and theme go in; a fully resolved,
//! renderer-agnostic `ChartSpec` comes out. The crate is split into pure data
//! transforms (`core`), spec assembly and input coordination (`api`), and the
//! renderer seam (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartPipeline, ChartSpec, ChartSpecBuilder, PipelineConfig};
pub use error::{ChartError, ChartResult, DataShapeError};
