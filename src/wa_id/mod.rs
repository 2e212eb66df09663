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

mod enums;
mod errors;
mod helper_functions;
mod wa_id;

pub use enums::InvalidReason;
pub use errors::InvalidWaId;
pub use wa_id::WaId;

use crate::adapter::{DEFAULT_ADAPTER, PhoneNumberAdapter};

/// Normalizes `input` to the stored wa_id form, e.g. `"+966 50 123 4567"`
/// becomes `"966501234567"`.
pub fn normalize(input: &str) -> Result<String, InvalidWaId> {
    normalize_with(input, &DEFAULT_ADAPTER)
}

pub fn normalize_with<A>(input: &str, adapter: &A) -> Result<String, InvalidWaId>
where
    A: PhoneNumberAdapter + ?Sized,
{
    WaId::from_any_format_with(input, adapter).map(String::from)
}

/// True when `input` would construct a [`WaId`].
pub fn is_valid(input: &str) -> bool {
    is_valid_with(input, &DEFAULT_ADAPTER)
}

pub fn is_valid_with<A>(input: &str, adapter: &A) -> bool
where
    A: PhoneNumberAdapter + ?Sized,
{
    WaId::from_any_format_with(input, adapter).is_ok()
}
