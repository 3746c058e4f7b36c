//! Binding to the host page's charting widget.

use memory_overview_shared::OverviewError;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The widget's declarative entry point: draws the chart described by
    /// `options` into the element with id `container_id`.
    #[wasm_bindgen(catch, js_namespace = Highcharts, js_name = chart)]
    fn highcharts_chart(container_id: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Hands the options object to the widget, bound to the container.
pub fn draw(container_id: &str, options: &Value) -> Result<(), OverviewError> {
    // Plain JS objects, not ES Maps, on the other side of the boundary
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_options = options
        .serialize(&serializer)
        .map_err(|e| OverviewError::JsInterop {
            message: e.to_string(),
        })?;

    highcharts_chart(container_id, &js_options)
        .map(|_| ())
        .map_err(OverviewError::from)
}
