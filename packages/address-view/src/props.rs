use crate::errors::PropsError;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use wasm_bindgen::JsValue;
use yew::Properties;

#[derive(Properties, PartialEq, Clone, Debug, Deserialize)]
pub struct AddressProps {
    /// Opaque, shown as-is (empty included)
    pub addr: String,
}

impl AddressProps {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }

    /// Checks a JSON props object: `addr` is required and must be a string.
    /// Other keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, PropsError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Same as [`AddressProps::from_json`] for a props object coming from JS.
    pub fn from_js(value: JsValue) -> Result<Self, PropsError> {
        let value: Value = serde_wasm_bindgen::from_value(value)?;
        Self::from_value(value)
    }

    fn from_value(value: Value) -> Result<Self, PropsError> {
        let object = match &value {
            Value::Object(object) => object,
            other => return Err(PropsError::NotAnObject(json_type(other).to_owned())),
        };
        match object.get("addr") {
            None | Some(Value::Null) => return Err(PropsError::MissingAddr),
            Some(Value::String(_)) => (),
            Some(other) => return Err(PropsError::InvalidAddr(json_type(other).to_owned())),
        }
        Ok(serde_json::from_value(value)?)
    }
}

impl FromStr for AddressProps {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
