use crate::props::AddressProps;
use yew::prelude::*;

pub const PHRASE: &str = "Voici l'adresse que vous utilisez: ";

/// The sentence shown by [`AddressView`], `addr` appended verbatim.
pub fn address_sentence(addr: &str) -> String {
    format!("{}{}", PHRASE, addr)
}

/// Displays the address currently in use.
///
/// The sentence is a single text node, so markup inside `addr` is escaped by
/// the renderer and never interpreted.
#[function_component(AddressView)]
pub fn address_view(props: &AddressProps) -> Html {
    html! {
      <div>
        <p>{address_sentence(&props.addr)}</p>
      </div>
    }
}
