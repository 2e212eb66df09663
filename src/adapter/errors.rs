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

use thiserror::Error;

/// Failure reported by a [`PhoneNumberAdapter`](super::PhoneNumberAdapter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// The library rejected the input as a phone number. `kind` names the
    /// library's own error variant.
    #[error("failed to parse phone number ({kind}): {detail}")]
    Parse { kind: String, detail: String },
    /// Anything else: a panic inside the library, a broken formatter.
    #[error("phone number library failed: {0}")]
    Internal(String),
}

/// Parse failures of the embedded metadata adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    #[error("Invalid country code")]
    InvalidCountryCode,
    #[error("Not a number")]
    NotANumber,
    #[error("Too short nsn")]
    TooShortNsn,
    #[error("Too long nsn")]
    TooLongNsn,
}

impl From<ParseError> for AdapterError {
    fn from(value: ParseError) -> Self {
        AdapterError::Parse {
            kind: format!("{:?}", value),
            detail: value.to_string(),
        }
    }
}
