//! Typed configuration for the memory overview chart.
//!
//! The original page described the chart with a loose options literal;
//! here every choice is a named field with a documented default, and the
//! bridge translates the whole structure into the widget's options object
//! in one place.

use serde::{Deserialize, Serialize};

/// Default series color, the widget's palette head (#7cb5ec).
pub const SERIES_COLOR: [f32; 4] = [0.486, 0.710, 0.925, 1.0];

/// Zoom hint shown under the title on pointer displays.
pub const ZOOM_HINT_POINTER: &str = "Click and drag in the plot area to zoom in";

/// Zoom hint shown under the title on touch displays.
pub const ZOOM_HINT_TOUCH: &str = "Pinch the chart to zoom in";

/// Axis scale selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    /// Time axis fed with epoch milliseconds, auto-scaled by the widget.
    Timestamp,
    /// Plain linear axis.
    Linear,
}

/// Zoom gesture wired into the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomMode {
    /// Drag (or pinch, on touch displays) along the x-axis.
    X,
    /// Drag along both axes.
    Xy,
    /// Zooming disabled.
    None,
}

/// Legend visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendMode {
    Enabled,
    Disabled,
}

/// Axis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub kind: AxisKind,
    pub title: Option<String>,
}

/// Gradient direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    Vertical,
    Horizontal,
}

/// Gradient fill configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    pub start_color: [f32; 4],
    pub end_color: [f32; 4],
    pub direction: GradientDirection,
}

impl GradientConfig {
    /// Single-tone fade: the given color at full strength at the top of
    /// the plot area, fully transparent at the bottom.
    pub fn fade_out(color: [f32; 4]) -> Self {
        Self {
            start_color: color,
            end_color: [color[0], color[1], color[2], 0.0],
            direction: GradientDirection::Vertical,
        }
    }
}

/// Point marker style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub radius: f32,
}

/// Area series style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaStyle {
    pub gradient: GradientConfig,
    pub line_width: f32,
    /// Line width while a point is hovered.
    pub hover_line_width: f32,
    pub marker: MarkerStyle,
    /// Fill baseline; `None` fills down to the bottom of the plot area.
    pub threshold: Option<f64>,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            gradient: GradientConfig::fade_out(SERIES_COLOR),
            line_width: 1.0,
            hover_line_width: 1.0,
            marker: MarkerStyle { radius: 2.0 },
            threshold: None,
        }
    }
}

/// Complete configuration for the memory overview chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewChartConfig {
    pub title: String,
    /// Zoom hint under the title; the bridge swaps in the touch variant
    /// when the display supports it.
    pub subtitle: String,
    pub x_axis: AxisConfig,
    pub y_axis: AxisConfig,
    pub zoom: ZoomMode,
    pub legend: LegendMode,
    pub area: AreaStyle,
    pub series_name: String,
}

impl Default for OverviewChartConfig {
    fn default() -> Self {
        Self {
            title: "Memory usage rate over time".to_string(),
            subtitle: ZOOM_HINT_POINTER.to_string(),
            x_axis: AxisConfig {
                kind: AxisKind::Timestamp,
                title: None,
            },
            y_axis: AxisConfig {
                kind: AxisKind::Linear,
                title: Some("Memory usage, MB".to_string()),
            },
            zoom: ZoomMode::X,
            legend: LegendMode::Disabled,
            area: AreaStyle::default(),
            series_name: "Size".to_string(),
        }
    }
}
