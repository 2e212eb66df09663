//! Normalization and validation of WhatsApp identifiers: international phone
//! numbers stored as E.164 digits without the leading `+`.

pub mod adapter;
mod helper_constants;
pub mod i18n;
mod interfaces;
mod regex_based_matcher;
mod regexp_cache;
pub(crate) mod string_util;
mod wa_id;

pub use adapter::{
    AdapterError, DEFAULT_ADAPTER, EMBEDDED_METADATA_ADAPTER, EmbeddedMetadataAdapter,
    LibPhoneNumberAdapter, PhoneNumberAdapter,
};
pub use wa_id::{InvalidReason, InvalidWaId, WaId, is_valid, is_valid_with, normalize, normalize_with};

#[cfg(test)]
mod tests;
