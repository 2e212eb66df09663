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

use std::{fmt, str::FromStr};

use log::trace;

use super::{
    InvalidReason, InvalidWaId,
    helper_functions::{clean_phone_chars, contains_digit, e164_body, with_leading_plus},
};
use crate::{
    adapter::{AdapterError, DEFAULT_ADAPTER, PhoneNumberAdapter},
    helper_constants::{PLUS_SIGN, SAUDI_COUNTRY_CODE_PREFIX},
};

/// A WhatsApp identifier: an E.164 phone number without its leading `+`,
/// e.g. `966501234567`.
///
/// The only way to get one is through validation, so every instance holds
/// ASCII digits that the phone number library accepts as a valid
/// international number.
///
/// ```
/// use waid::WaId;
///
/// let wa_id = WaId::from_any_format("+966 50 123 4567").unwrap();
/// assert_eq!(wa_id.plain_format(), "966501234567");
/// assert_eq!(wa_id.display_format(), "+966501234567");
/// assert!(wa_id.is_saudi_number());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WaId(String);

impl WaId {
    /// Parses a phone number written in any common way: with or without the
    /// leading `+`, with spaces, hyphens, dots or parentheses.
    pub fn from_any_format(input: &str) -> Result<Self, InvalidWaId> {
        Self::from_any_format_with(input, &DEFAULT_ADAPTER)
    }

    /// Same as [`from_any_format`](Self::from_any_format) but validates with
    /// the given adapter.
    pub fn from_any_format_with<A>(input: &str, adapter: &A) -> Result<Self, InvalidWaId>
    where
        A: PhoneNumberAdapter + ?Sized,
    {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InvalidWaId::new(input, InvalidReason::Empty, "phone number is empty"));
        }

        let cleaned = clean_phone_chars(trimmed);
        if !contains_digit(&cleaned) {
            return Err(InvalidWaId::new(
                input,
                InvalidReason::NoDigits,
                "phone number contains no digits",
            ));
        }

        let candidate = with_leading_plus(cleaned);
        let number = adapter.parse(&candidate).map_err(|err| match err {
            AdapterError::Parse { kind, detail } => InvalidWaId::new(
                input,
                InvalidReason::ParseFailed,
                format!("could not parse {} ({}): {}", candidate, kind, detail),
            ),
            AdapterError::Internal(message) => {
                InvalidWaId::new(input, InvalidReason::Unknown, message)
            }
        })?;

        if !adapter.is_valid(&number) {
            trace!("{} parsed but is not a valid number", candidate);
            return Err(InvalidWaId::new(
                input,
                InvalidReason::InvalidNumber,
                format!("{} is not a valid international phone number", candidate),
            ));
        }

        let formatted = adapter
            .format_e164(&number)
            .map_err(|err| InvalidWaId::new(input, InvalidReason::Unknown, err.to_string()))?;
        let value = e164_body(formatted).ok_or_else(|| {
            InvalidWaId::new(
                input,
                InvalidReason::Unknown,
                "phone number library produced a malformed E.164 number",
            )
        })?;
        Ok(Self(value))
    }

    /// Digits only, no `+`. The form to store and exchange.
    pub fn plain_format(&self) -> &str {
        &self.0
    }

    /// `+` followed by the digits. The form to show.
    pub fn display_format(&self) -> String {
        fast_cat::concat_str!(PLUS_SIGN, &self.0)
    }

    /// Literal `966` prefix test. Does not consult the library, so the answer
    /// can't change with metadata updates.
    pub fn is_saudi_number(&self) -> bool {
        self.0.starts_with(SAUDI_COUNTRY_CODE_PREFIX)
    }

    /// ISO 3166-1 alpha-2 code of the number's region, e.g. `"SA"`.
    pub fn country_code(&self) -> Option<String> {
        self.country_code_with(&DEFAULT_ADAPTER)
    }

    pub fn country_code_with<A>(&self, adapter: &A) -> Option<String>
    where
        A: PhoneNumberAdapter + ?Sized,
    {
        let number = adapter.parse(&self.display_format()).ok()?;
        adapter.region_code(&number)
    }
}

impl fmt::Display for WaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WaId {
    type Err = InvalidWaId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_any_format(s)
    }
}

impl TryFrom<&str> for WaId {
    type Error = InvalidWaId;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_any_format(value)
    }
}

impl TryFrom<String> for WaId {
    type Error = InvalidWaId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_any_format(&value)
    }
}

impl AsRef<str> for WaId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<WaId> for String {
    fn from(value: WaId) -> Self {
        value.0
    }
}
