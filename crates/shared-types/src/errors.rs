//! Error types shared across the memory overview crates.

use thiserror::Error;

/// Failures on the way from the JSON resource to a drawn chart.
#[derive(Error, Debug, Clone)]
pub enum OverviewError {
    #[error("data fetch failed: {message}")]
    DataFetch { message: String },

    #[error("data parse error: {message}")]
    DataParse { message: String },

    #[error("container element not found: {id}")]
    ContainerNotFound { id: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for memory overview operations.
pub type OverviewResult<T> = Result<T, OverviewError>;

impl From<serde_json::Error> for OverviewError {
    fn from(err: serde_json::Error) -> Self {
        OverviewError::DataParse {
            message: err.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for OverviewError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        OverviewError::JsInterop {
            message: format!("{err:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = OverviewError::DataFetch {
            message: "HTTP error! status: 404".to_string(),
        };
        assert_eq!(err.to_string(), "data fetch failed: HTTP error! status: 404");

        let err = OverviewError::ContainerNotFound {
            id: "memory-overview-container".to_string(),
        };
        assert!(err.to_string().contains("memory-overview-container"));
    }

    #[test]
    fn test_parse_error_conversion() {
        let parse_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: OverviewError = parse_err.into();
        match err {
            OverviewError::DataParse { message } => assert!(!message.is_empty()),
            _ => panic!("wrong error variant"),
        }
    }
}
