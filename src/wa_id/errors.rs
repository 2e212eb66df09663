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

use super::InvalidReason;

/// An input that can't be turned into a [`WaId`](super::WaId).
///
/// The message is meant for humans and logs; branch on [`reason`](Self::reason).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid wa_id {input:?} ({reason}): {message}")]
pub struct InvalidWaId {
    input: String,
    reason: InvalidReason,
    message: String,
}

impl InvalidWaId {
    pub(crate) fn new(input: &str, reason: InvalidReason, message: impl Into<String>) -> Self {
        Self {
            input: input.to_owned(),
            reason,
            message: message.into(),
        }
    }

    /// The input exactly as the caller passed it.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn reason(&self) -> InvalidReason {
        self.reason
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
