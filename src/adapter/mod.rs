// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The boundary between [`WaId`](crate::WaId) and whatever actually knows
//! phone numbering plans.

pub mod embedded;
pub mod errors;
mod libphonenumber_adapter;

use std::sync::LazyLock;

pub use embedded::EmbeddedMetadataAdapter;
pub use errors::{AdapterError, ParseError};
pub use libphonenumber_adapter::LibPhoneNumberAdapter;

/// Adapter used by the region-less constructors and helpers.
pub static DEFAULT_ADAPTER: LibPhoneNumberAdapter = LibPhoneNumberAdapter;

/// Adapter over the compiled-in metadata table, built on first use.
pub static EMBEDDED_METADATA_ADAPTER: LazyLock<EmbeddedMetadataAdapter> =
    LazyLock::new(EmbeddedMetadataAdapter::new);

/// Minimal phone number library surface needed to build a wa_id.
///
/// Implementations parse purely international input (no default region),
/// so `candidate` always begins with at least one `+`.
pub trait PhoneNumberAdapter: Send + Sync {
    /// Parsed representation owned by the library.
    type Number;

    fn parse(&self, candidate: &str) -> Result<Self::Number, AdapterError>;

    fn is_valid(&self, number: &Self::Number) -> bool;

    /// Formats as `+<country code><national number>`.
    fn format_e164(&self, number: &Self::Number) -> Result<String, AdapterError>;

    /// ISO 3166-1 alpha-2 code of the number's region, `None` when the region
    /// can't be determined.
    fn region_code(&self, number: &Self::Number) -> Option<String>;
}
