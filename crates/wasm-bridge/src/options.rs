//! Translation from the typed chart configuration to the declarative
//! options object the charting widget consumes.

use memory_overview_shared::{
    format_tooltip, AxisConfig, AxisKind, GradientDirection, LegendMode, MemorySample,
    OverviewChartConfig, ZoomMode,
};
use serde_json::{json, Map, Value};

/// Builds the widget options for one overview chart.
///
/// The sample sequence becomes the single area series verbatim, in input
/// order, with the tooltip markup attached to each point.
pub fn chart_options(config: &OverviewChartConfig, samples: &[MemorySample]) -> Value {
    let data: Vec<Value> = samples.iter().map(point_value).collect();

    let mut chart = Map::new();
    if let Some(zoom) = zoom_type(config.zoom) {
        chart.insert("zoomType".to_string(), Value::String(zoom.to_string()));
    }

    json!({
        "chart": chart,
        "title": { "text": config.title },
        "subtitle": { "text": config.subtitle },
        "xAxis": axis_value(&config.x_axis),
        "yAxis": axis_value(&config.y_axis),
        "legend": { "enabled": config.legend == LegendMode::Enabled },
        "plotOptions": {
            "area": {
                "fillColor": {
                    "linearGradient": gradient_vector(config.area.gradient.direction),
                    "stops": [
                        [0, css_color(config.area.gradient.start_color)],
                        [1, css_color(config.area.gradient.end_color)]
                    ]
                },
                "marker": { "radius": config.area.marker.radius },
                "lineWidth": config.area.line_width,
                "states": { "hover": { "lineWidth": config.area.hover_line_width } },
                "threshold": config.area.threshold
            }
        },
        "tooltip": {
            "headerFormat": "",
            "pointFormat": "{point.tooltipHtml}"
        },
        "series": [{
            "type": "area",
            "name": config.series_name,
            "data": data
        }]
    })
}

/// One series point: the sample's fields plus its precomputed tooltip.
fn point_value(sample: &MemorySample) -> Value {
    json!({
        "x": sample.x,
        "y": sample.y,
        "bt": sample.bt,
        "tooltipHtml": format_tooltip(sample)
    })
}

fn zoom_type(zoom: ZoomMode) -> Option<&'static str> {
    match zoom {
        ZoomMode::X => Some("x"),
        ZoomMode::Xy => Some("xy"),
        ZoomMode::None => None,
    }
}

fn axis_value(axis: &AxisConfig) -> Value {
    let mut out = Map::new();
    out.insert(
        "type".to_string(),
        Value::String(axis_type(axis.kind).to_string()),
    );
    if let Some(title) = &axis.title {
        out.insert("title".to_string(), json!({ "text": title }));
    }
    Value::Object(out)
}

fn axis_type(kind: AxisKind) -> &'static str {
    match kind {
        AxisKind::Timestamp => "datetime",
        AxisKind::Linear => "linear",
    }
}

fn gradient_vector(direction: GradientDirection) -> Value {
    match direction {
        GradientDirection::Vertical => json!({ "x1": 0, "y1": 0, "x2": 0, "y2": 1 }),
        GradientDirection::Horizontal => json!({ "x1": 0, "y1": 0, "x2": 1, "y2": 0 }),
    }
}

/// CSS `rgba(...)` color from unit-range components.
fn css_color(color: [f32; 4]) -> String {
    format!(
        "rgba({},{},{},{})",
        (color[0] * 255.0).round() as u8,
        (color[1] * 255.0).round() as u8,
        (color[2] * 255.0).round() as u8,
        color[3]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: u64, y: f64, bt: &[&str]) -> MemorySample {
        MemorySample {
            x,
            y,
            bt: bt.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_series_preserves_length_and_order() {
        let samples = vec![
            sample(3000, 1.0, &[]),
            sample(1000, 2.0, &[]),
            sample(2000, 3.0, &[]),
        ];
        let options = chart_options(&OverviewChartConfig::default(), &samples);

        let data = options["series"][0]["data"].as_array().unwrap();
        assert_eq!(data.len(), samples.len());
        let xs: Vec<u64> = data.iter().map(|p| p["x"].as_u64().unwrap()).collect();
        assert_eq!(xs, vec![3000, 1000, 2000]);
    }

    #[test]
    fn test_default_chart_shape() {
        let options = chart_options(&OverviewChartConfig::default(), &[]);

        assert_eq!(options["chart"]["zoomType"], "x");
        assert_eq!(options["title"]["text"], "Memory usage rate over time");
        assert_eq!(options["xAxis"]["type"], "datetime");
        assert_eq!(options["yAxis"]["type"], "linear");
        assert_eq!(options["yAxis"]["title"]["text"], "Memory usage, MB");
        assert_eq!(options["legend"]["enabled"], false);

        let series = &options["series"][0];
        assert_eq!(series["type"], "area");
        assert_eq!(series["name"], "Size");
        assert_eq!(series["data"].as_array().unwrap().len(), 0);

        let area = &options["plotOptions"]["area"];
        assert_eq!(area["marker"]["radius"].as_f64().unwrap(), 2.0);
        assert_eq!(area["lineWidth"].as_f64().unwrap(), 1.0);
        assert_eq!(area["states"]["hover"]["lineWidth"].as_f64().unwrap(), 1.0);
        assert!(area["threshold"].is_null());
    }

    #[test]
    fn test_gradient_stops_fade_out() {
        let options = chart_options(&OverviewChartConfig::default(), &[]);

        let fill = &options["plotOptions"]["area"]["fillColor"];
        assert_eq!(fill["linearGradient"]["x2"], 0);
        assert_eq!(fill["linearGradient"]["y2"], 1);

        let stops = fill["stops"].as_array().unwrap();
        assert_eq!(stops[0][0], 0);
        assert_eq!(stops[0][1], "rgba(124,181,236,1)");
        assert_eq!(stops[1][0], 1);
        assert_eq!(stops[1][1], "rgba(124,181,236,0)");
    }

    #[test]
    fn test_point_carries_tooltip_markup() {
        let samples = vec![sample(1000, 5.0, &["main", "alloc"])];
        let options = chart_options(&OverviewChartConfig::default(), &samples);

        assert_eq!(options["tooltip"]["headerFormat"], "");
        assert_eq!(options["tooltip"]["pointFormat"], "{point.tooltipHtml}");

        let point = &options["series"][0]["data"][0];
        assert_eq!(point["y"].as_f64().unwrap(), 5.0);
        assert_eq!(point["bt"][0], "main");
        assert_eq!(point["bt"][1], "alloc");
        assert_eq!(
            point["tooltipHtml"],
            "Total: <b>5MB</b><br/>main<br/>alloc<br/>"
        );
    }

    #[test]
    fn test_zoom_disabled_omits_key() {
        let config = OverviewChartConfig {
            zoom: ZoomMode::None,
            ..Default::default()
        };
        let options = chart_options(&config, &[]);
        assert!(options["chart"].get("zoomType").is_none());
    }
}
