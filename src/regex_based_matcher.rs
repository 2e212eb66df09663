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

use log::error;

use crate::{
    adapter::embedded::NumberDesc,
    interfaces,
    regexp_cache::{InvalidRegexError, RegexCache},
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn new() -> Self {
        Self { cache: RegexCache::with_capacity(64) }
    }

    fn match_number(&self, phone_number: &str, number_pattern: &str) -> Result<bool, InvalidRegexError> {
        // Anchored so that alternations can't stop at a shorter branch.
        let anchored = fast_cat::concat_str!("^(?:", number_pattern, ")$");
        let regexp = self.cache.get_regex(&anchored)?;
        Ok(regexp.is_match(phone_number))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn match_national_number(&self, number: &str, number_desc: &NumberDesc) -> bool {
        let national_number_pattern = number_desc.national_number_pattern;
        // We don't want to consider it a match when matching non-empty input
        // against an empty pattern.
        if national_number_pattern.is_empty() {
            return false;
        }
        match self.match_number(number, national_number_pattern) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex in metadata! {}", err);
                false
            }
        }
    }
}
