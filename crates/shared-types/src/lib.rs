//! Shared types for the memory overview chart.
//!
//! This crate contains the sample data model, the typed chart
//! configuration, and the error type shared between the fetch layer and
//! the wasm bridge.

pub mod chart_config;
pub mod data_types;
pub mod errors;
pub mod tooltip;

pub use chart_config::{
    AreaStyle, AxisConfig, AxisKind, GradientConfig, GradientDirection, LegendMode, MarkerStyle,
    OverviewChartConfig, ZoomMode, SERIES_COLOR, ZOOM_HINT_POINTER, ZOOM_HINT_TOUCH,
};
pub use data_types::MemorySample;
pub use errors::{OverviewError, OverviewResult};
pub use tooltip::format_tooltip;
