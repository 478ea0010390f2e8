#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod errors;
pub use errors::PropsError;

pub mod props;
pub use props::AddressProps;

pub mod view;
pub use view::{address_sentence, AddressView, PHRASE};
