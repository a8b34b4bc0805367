//! Spec-building surface: config, formatting, styling, caching and the
//! observer-facing pipeline coordinator.

mod builder;
mod cache;
mod chart_spec;
mod config;
mod json_contract;
mod pipeline;
mod profile;
mod style;
mod value_format;

pub use builder::ChartSpecBuilder;
pub use cache::{ChartSpecCache, SpecCacheKey, SpecCacheStats};
pub use chart_spec::{ChartOptions, ChartSpec, ResolvedSeries, SeriesColor};
pub use config::PipelineConfig;
pub use json_contract::{CHART_SPEC_JSON_SCHEMA_V1, ChartSpecJsonContractV1};
pub use pipeline::{ChartPipeline, PendingSpec, PipelineEvent};
pub use profile::{ViewportDebouncer, resolve_profile};
pub use style::{LegendPosition, OTHER_SLICE_COLOR, StyleOptions, ThemePalette, resolve_style};
pub use value_format::{
    AxisLabelRule, TickFormatter, TooltipFormatter, ValueFormat, format_value, truncate_label,
};
