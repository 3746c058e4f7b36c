//! Browser HTTP client for fetching the chart's JSON resources.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

/// WASM-compatible HTTP client using the browser's fetch API.
pub struct FetchClient {
    timeout_ms: u32,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// Fetch a resource and return its body as text.
    ///
    /// Non-2xx statuses are reported as errors. The request is aborted
    /// once the configured timeout elapses.
    pub async fn fetch_text(&self, url: &str, accept: &str) -> Result<String, JsValue> {
        let opts = RequestInit::new();
        opts.set_method("GET");

        // Abort controller so the timeout cancels the request
        let abort_controller = AbortController::new()?;
        let signal = abort_controller.signal();
        opts.set_signal(Some(&signal));

        let headers = Headers::new()?;
        headers.set("Accept", accept)?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;

        // Timeout promise that loses the race unless the fetch stalls
        let timeout_window = window.clone();
        let timeout_ms = self.timeout_ms;
        let timeout_promise = js_sys::Promise::new(&mut |_, reject| {
            let abort_controller_clone = abort_controller.clone();
            let timeout_closure = Closure::once(Box::new(move || {
                abort_controller_clone.abort();
                let _ = reject.call1(&JsValue::null(), &JsValue::from_str("Request timeout"));
            }) as Box<dyn FnOnce()>);

            let _ = timeout_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                timeout_closure.as_ref().unchecked_ref(),
                timeout_ms as i32,
            );

            timeout_closure.forget();
        });

        let fetch_promise = window.fetch_with_request(&request);
        let result = js_sys::Promise::race(&js_sys::Array::of2(&fetch_promise, &timeout_promise));

        let resp_value = JsFuture::from(result).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            return Err(JsValue::from_str(&format!(
                "HTTP error! status: {}",
                resp.status()
            )));
        }

        let text_value = JsFuture::from(resp.text()?).await?;
        text_value
            .as_string()
            .ok_or_else(|| JsValue::from_str("Response body is not text"))
    }

    /// Fetch a JSON resource and deserialize it.
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<T, JsValue> {
        let body = self.fetch_text(url, "application/json").await?;
        serde_json::from_str(&body)
            .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))
    }
}

/// Convenience function for quick JSON fetches.
pub async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, JsValue> {
    FetchClient::new().fetch_json(url).await
}
