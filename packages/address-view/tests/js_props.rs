#![cfg(target_arch = "wasm32")]

use address_view::{AddressProps, PropsError};
use js_sys::{Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::wasm_bindgen_test;

fn props_object(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        Reflect::set(&object, &JsValue::from(*key), value).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn accepts_string_addr() {
    let props = AddressProps::from_js(props_object(&[("addr", "12 rue de la Paix".into())]));
    assert_eq!(props, Ok(AddressProps::new("12 rue de la Paix")));
}

#[wasm_bindgen_test]
fn accepts_empty_addr() {
    let props = AddressProps::from_js(props_object(&[("addr", "".into())]));
    assert_eq!(props, Ok(AddressProps::new("")));
}

#[wasm_bindgen_test]
fn ignores_other_keys() {
    let props =
        AddressProps::from_js(props_object(&[("addr", "x".into()), ("network", 1.into())]));
    assert_eq!(props, Ok(AddressProps::new("x")));
}

#[wasm_bindgen_test]
fn rejects_missing_addr() {
    assert_eq!(AddressProps::from_js(props_object(&[])), Err(PropsError::MissingAddr));
    assert_eq!(
        AddressProps::from_js(props_object(&[("addr", JsValue::NULL)])),
        Err(PropsError::MissingAddr)
    );
}

#[wasm_bindgen_test]
fn rejects_non_string_addr() {
    assert_eq!(
        AddressProps::from_js(props_object(&[("addr", 3.into())])),
        Err(PropsError::InvalidAddr("number".to_owned()))
    );
    assert_eq!(
        AddressProps::from_js(props_object(&[("addr", true.into())])),
        Err(PropsError::InvalidAddr("boolean".to_owned()))
    );
}

#[wasm_bindgen_test]
fn rejects_non_object() {
    assert_eq!(
        AddressProps::from_js(JsValue::from("x")),
        Err(PropsError::NotAnObject("string".to_owned()))
    );
}
