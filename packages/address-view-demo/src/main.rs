use self::console::{console_error, console_log};
use address_view::{AddressProps, AddressView, PropsError};
use wasm_bindgen::JsValue;
use web_sys::{window, UrlSearchParams, Window};
use yew::prelude::*;

mod console;

// Set by the embedding page, e.g. `window.addressProps = { addr: "..." }`
const PROPS_GLOBAL: &str = "addressProps";

fn props_from_global(global: JsValue) -> Result<Option<AddressProps>, PropsError> {
    if global.is_undefined() {
        return Ok(None);
    }
    AddressProps::from_js(global).map(Some)
}

fn props_from_query(search: &str) -> Result<Option<AddressProps>, PropsError> {
    let params = UrlSearchParams::new_with_str(search)?;
    Ok(params.get("addr").map(AddressProps::new))
}

/// The page global wins over the `addr` query parameter, an empty address is
/// the last resort.
fn resolve_props(global: JsValue, search: &str) -> Result<AddressProps, PropsError> {
    if let Some(props) = props_from_global(global)? {
        return Ok(props);
    }
    Ok(props_from_query(search)?.unwrap_or_else(|| AddressProps::new("")))
}

fn host_props() -> Result<AddressProps, PropsError> {
    let window: Window =
        window().ok_or(PropsError::Unsupported("no window available".to_owned()))?;
    let global = js_sys::Reflect::get(&window, &JsValue::from(PROPS_GLOBAL))?;
    let search = window.location().search()?;
    resolve_props(global, &search)
}

#[function_component]
fn App() -> Html {
    let props = use_memo(
        |_| match host_props() {
            Ok(props) => {
                console_log!("mounting with address: {:?}", props.addr);
                props
            }
            Err(err) => {
                console_error!("invalid props: {}", err);
                AddressProps::new("")
            }
        },
        (),
    );
    let props = AddressProps::clone(&props);

    html! {
      <AddressView ..props />
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
