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

use strum::{Display, EnumIter, IntoStaticStr};

/// Why an input could not become a [`WaId`](super::WaId).
///
/// The `Display` form is the stable machine-readable code, suitable as a
/// localization key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum InvalidReason {
    /// **Nothing given.** The input is empty or whitespace only.
    Empty,
    /// **No digits.** Nothing is left after dropping every character that is
    /// not a digit or `+`.
    NoDigits,
    /// **Unparseable.** The phone number library rejected the candidate.
    ParseFailed,
    /// **Not a valid number.** Parsed, but no region accepts it.
    InvalidNumber,
    /// **Anything else.** The library failed in an unexpected way.
    Unknown,
}

impl InvalidReason {
    pub fn code(self) -> &'static str {
        self.into()
    }
}
