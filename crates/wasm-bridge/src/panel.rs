//! Error panel shown in the chart container when loading fails.

use memory_overview_shared::OverviewError;
use web_sys::{Document, Element};

/// Class name of the error panel element.
pub const ERROR_CLASS: &str = "memory-overview-error";

/// Replaces the container's content with a visible error message.
pub fn show_error(document: &Document, container: &Element, error: &OverviewError) {
    container.set_inner_html("");

    let panel = match document.create_element("div") {
        Ok(el) => el,
        Err(err) => {
            log::error!("Failed to create error panel: {err:?}");
            return;
        }
    };
    panel.set_class_name(ERROR_CLASS);
    panel.set_text_content(Some(&format!("Failed to load memory overview: {error}")));

    if let Err(err) = container.append_child(&panel) {
        log::error!("Failed to attach error panel: {err:?}");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn test_error_panel_replaces_container_content() {
        let document = test_document();
        let container = document.create_element("div").unwrap();
        container.set_inner_html("<svg></svg>");

        let error = OverviewError::DataFetch {
            message: "HTTP error! status: 404".to_string(),
        };
        show_error(&document, &container, &error);

        let panel = container.first_element_child().unwrap();
        assert_eq!(panel.class_name(), ERROR_CLASS);
        let text = container.text_content().unwrap();
        assert!(text.contains("Failed to load memory overview"));
        assert!(text.contains("404"));
        assert_eq!(container.child_element_count(), 1);
    }
}
