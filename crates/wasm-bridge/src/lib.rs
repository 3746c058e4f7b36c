//! Browser bridge for the memory overview chart.
//!
//! On page load this crate fetches the profiler's memory-overview JSON,
//! builds the typed chart configuration, and hands the resulting options
//! object to the host page's charting widget, bound to the overview
//! container element.

pub mod options;

#[cfg(target_arch = "wasm32")]
mod panel;
#[cfg(target_arch = "wasm32")]
mod widget;

/// Element id the chart binds to on page load.
pub const CONTAINER_ID: &str = "memory-overview-container";

/// Relative path of the memory overview document.
pub const DATA_URL: &str = "test/json/memory-overview.json";

#[cfg(target_arch = "wasm32")]
pub use wasm::{start, MemoryOverviewChart};

#[cfg(target_arch = "wasm32")]
mod wasm {
    use memory_overview_shared::{
        MemorySample, OverviewChartConfig, OverviewError, ZOOM_HINT_POINTER, ZOOM_HINT_TOUCH,
    };
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use crate::{options, panel, widget, CONTAINER_ID, DATA_URL};

    #[wasm_bindgen]
    pub struct MemoryOverviewChart {
        container_id: Option<String>,
    }

    #[wasm_bindgen]
    impl MemoryOverviewChart {
        #[wasm_bindgen(constructor)]
        pub fn new() -> MemoryOverviewChart {
            MemoryOverviewChart { container_id: None }
        }

        /// Fetch the overview document and draw the chart into
        /// `container_id`.
        ///
        /// Load and draw failures stay inside the page: they render an
        /// error panel in the container instead of rejecting. Only a
        /// missing container is reported to the caller.
        #[wasm_bindgen]
        pub async fn init(&mut self, container_id: &str) -> Result<(), JsValue> {
            let window = web_sys::window().ok_or("No window")?;
            let document = window.document().ok_or("No document")?;
            let container = document.get_element_by_id(container_id).ok_or_else(|| {
                let err = OverviewError::ContainerNotFound {
                    id: container_id.to_string(),
                };
                JsValue::from_str(&err.to_string())
            })?;

            match load_samples().await {
                Ok(samples) => {
                    log::info!("Loaded {} memory samples", samples.len());

                    let config = OverviewChartConfig {
                        subtitle: zoom_hint(&document).to_string(),
                        ..Default::default()
                    };
                    let chart_options = options::chart_options(&config, &samples);

                    if let Err(err) = widget::draw(container_id, &chart_options) {
                        log::error!("Chart draw failed: {err}");
                        panel::show_error(&document, &container, &err);
                        return Ok(());
                    }
                    self.container_id = Some(container_id.to_string());
                }
                Err(err) => {
                    log::error!("Memory overview load failed: {err}");
                    panel::show_error(&document, &container, &err);
                }
            }

            Ok(())
        }

        /// Id of the container the chart was drawn into, if any.
        #[wasm_bindgen(getter)]
        pub fn container_id(&self) -> Option<String> {
            self.container_id.clone()
        }
    }

    /// Fetches and parses the fixed-path overview document.
    async fn load_samples() -> Result<Vec<MemorySample>, OverviewError> {
        let client = wasm_fetch::FetchClient::new();
        let body = client
            .fetch_text(DATA_URL, "application/json")
            .await
            .map_err(|e| OverviewError::DataFetch {
                message: js_message(&e),
            })?;
        let samples: Vec<MemorySample> = serde_json::from_str(&body)?;
        Ok(samples)
    }

    /// Zoom hint matching the display: drag on pointer devices, pinch
    /// where touch events exist.
    fn zoom_hint(document: &Document) -> &'static str {
        let has_touch = js_sys::Reflect::has(document.as_ref(), &JsValue::from_str("ontouchstart"))
            .unwrap_or(false);
        if has_touch {
            ZOOM_HINT_TOUCH
        } else {
            ZOOM_HINT_POINTER
        }
    }

    fn js_message(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        std::panic::set_hook(Box::new(console_error_panic_hook::hook));
        let _ = console_log::init_with_level(log::Level::Info);

        wasm_bindgen_futures::spawn_local(async {
            let mut chart = MemoryOverviewChart::new();
            if let Err(err) = chart.init(CONTAINER_ID).await {
                log::error!("Memory overview init failed: {err:?}");
            }
        });
    }
}
