use wasm_bindgen::JsValue;

/// Errors produced when checking props handed over by the host.
///
/// `AddressView` itself never fails, these only come out of
/// [`AddressProps::from_json`](crate::AddressProps::from_json) and
/// [`AddressProps::from_js`](crate::AddressProps::from_js).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    #[error("missing required prop `addr`")]
    MissingAddr,
    /// `addr` was there but not a string, holds the JSON type found instead
    #[error("invalid prop `addr`: expected a string, got {0}")]
    InvalidAddr(String),
    #[error("props must be an object, got {0}")]
    NotAnObject(String),
    #[error("deserialize error: {0}")]
    Deserialize(String),
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl From<JsValue> for PropsError {
    fn from(js: JsValue) -> Self {
        Self::Unsupported(format!("unsupported JS call: {:?}", js))
    }
}

impl From<serde_wasm_bindgen::Error> for PropsError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

impl From<serde_json::Error> for PropsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}
