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

use std::collections::{HashMap, VecDeque};

use log::{trace, warn};

use super::metadata::{RegionMetadata, METADATA};
use crate::{
    adapter::{AdapterError, ParseError, PhoneNumberAdapter},
    helper_constants::{
        MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_E164, MAX_LENGTH_FOR_NSN, MIN_LENGTH_FOR_NSN,
        PLUS_CHAR, PLUS_SIGN,
    },
    i18n::RegionCode,
    interfaces::MatcherApi,
    regex_based_matcher::RegexBasedMatcher,
    string_util::{is_ascii_digits, trim_start_char},
};

/// A number parsed by [`EmbeddedMetadataAdapter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmbeddedNumber {
    country_code: u16,
    /// Kept as text so significant leading zeros survive.
    national_number: String,
}

impl EmbeddedNumber {
    pub fn country_code(&self) -> u16 {
        self.country_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }
}

/// Self-contained adapter answering from a compiled-in metadata table.
pub struct EmbeddedMetadataAdapter {
    /// An API for validation checking.
    matcher_api: Box<dyn MatcherApi>,

    /// A mapping from a country calling code to the regions sharing it, main
    /// region first. Implemented as a vector sorted by calling code.
    country_calling_code_to_region_code_map: Vec<(u16, Vec<&'static str>)>,

    /// A mapping from a region code to the metadata for that region.
    region_to_metadata_map: HashMap<&'static str, RegionMetadata>,
}

impl EmbeddedMetadataAdapter {
    pub fn new() -> Self {
        Self::new_for_metadata(METADATA)
    }

    pub fn new_for_metadata(metadata_collection: &[RegionMetadata]) -> Self {
        let mut instance = Self {
            matcher_api: Box::new(RegexBasedMatcher::new()),
            country_calling_code_to_region_code_map: Default::default(),
            region_to_metadata_map: Default::default(),
        };
        // Storing data in a temporary map to make it easier to find other regions
        // that share a country calling code when inserting data.
        let mut country_calling_code_to_region_map = HashMap::<u16, VecDeque<&'static str>>::new();
        for metadata in metadata_collection {
            let region_code = metadata.id;
            if RegionCode::is_unknown(region_code) {
                continue;
            }
            if instance
                .region_to_metadata_map
                .insert(region_code, *metadata)
                .is_some()
            {
                warn!("Region {} is described twice, keeping the last one", region_code);
                for regions in country_calling_code_to_region_map.values_mut() {
                    regions.retain(|r| *r != region_code);
                }
            }

            let regions = country_calling_code_to_region_map
                .entry(metadata.country_code)
                .or_default();
            if metadata.main_country_for_code {
                regions.push_front(region_code);
            } else {
                regions.push_back(region_code);
            }
        }

        instance.country_calling_code_to_region_code_map.extend(
            country_calling_code_to_region_map
                .into_iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| (k, Vec::from(v))),
        );
        // Sort all the pairs in ascending order according to country calling code.
        instance
            .country_calling_code_to_region_code_map
            .sort_by_key(|(code, _)| *code);
        instance
    }

    pub fn get_supported_regions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.region_to_metadata_map.keys().copied()
    }

    pub fn get_supported_calling_codes(&self) -> impl Iterator<Item = u16> + '_ {
        self.country_calling_code_to_region_code_map
            .iter()
            .map(|(code, _)| *code)
    }

    /// Returns the main region for a calling code, or the unknown region.
    pub fn get_region_code_for_country_code(&self, country_calling_code: u16) -> &str {
        self.get_region_codes_for_country_calling_code(country_calling_code)
            .first()
            .copied()
            .unwrap_or(RegionCode::get_unknown())
    }

    fn get_region_codes_for_country_calling_code(&self, country_calling_code: u16) -> &[&'static str] {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .map(|index| self.country_calling_code_to_region_code_map[index].1.as_slice())
            .unwrap_or(&[])
    }

    fn has_valid_country_calling_code(&self, country_calling_code: u16) -> bool {
        self.country_calling_code_to_region_code_map
            .binary_search_by_key(&country_calling_code, |(code, _)| *code)
            .is_ok()
    }

    /// Splits `digits` into a known calling code and the rest. Calling codes
    /// are prefix-free, so the first known prefix is the only one.
    fn extract_country_code<'b>(&self, digits: &'b str) -> Result<(u16, &'b str), ParseError> {
        if digits.starts_with('0') {
            return Err(ParseError::InvalidCountryCode);
        }
        for code_length in 1..=MAX_LENGTH_COUNTRY_CODE.min(digits.len()) {
            let (code, rest) = digits.split_at(code_length);
            let code = code.parse::<u16>().map_err(|_| ParseError::NotANumber)?;
            if self.has_valid_country_calling_code(code) {
                return Ok((code, rest));
            }
        }
        Err(ParseError::InvalidCountryCode)
    }

    fn is_valid_number_for_region(&self, national_number: &str, region_code: &str) -> bool {
        let Some(metadata) = self.region_to_metadata_map.get(region_code) else {
            return false;
        };
        let desc = &metadata.general_desc;
        desc.possible_lengths.contains(&national_number.len())
            && self.matcher_api.match_national_number(national_number, desc)
    }

    pub fn get_region_code_for_number(&self, number: &EmbeddedNumber) -> &str {
        let region_codes = self.get_region_codes_for_country_calling_code(number.country_code);
        let Some((main_region, other_regions)) = region_codes.split_first() else {
            warn!("Missing/invalid country calling code ({})", number.country_code);
            return RegionCode::get_unknown();
        };
        other_regions
            .iter()
            .chain(std::iter::once(main_region))
            .find(|region| self.is_valid_number_for_region(&number.national_number, region))
            .copied()
            .unwrap_or(RegionCode::get_unknown())
    }
}

impl Default for EmbeddedMetadataAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNumberAdapter for EmbeddedMetadataAdapter {
    type Number = EmbeddedNumber;

    fn parse(&self, candidate: &str) -> Result<EmbeddedNumber, AdapterError> {
        let normalized = dec_from_char::normalize_decimals(candidate);
        let (digits, plus_count) = trim_start_char(&normalized, PLUS_CHAR);
        if plus_count == 0 || !is_ascii_digits(digits) {
            trace!("Not an international number: {:?}", candidate);
            return Err(ParseError::NotANumber.into());
        }

        let (country_code, national_number) = self.extract_country_code(digits)?;
        if national_number.len() < MIN_LENGTH_FOR_NSN {
            return Err(ParseError::TooShortNsn.into());
        }
        // E.164 caps the whole identifier, country code included
        if national_number.len() > MAX_LENGTH_FOR_NSN || digits.len() > MAX_LENGTH_FOR_E164 {
            return Err(ParseError::TooLongNsn.into());
        }
        Ok(EmbeddedNumber {
            country_code,
            national_number: national_number.to_owned(),
        })
    }

    fn is_valid(&self, number: &EmbeddedNumber) -> bool {
        !RegionCode::is_unknown(self.get_region_code_for_number(number))
    }

    fn format_e164(&self, number: &EmbeddedNumber) -> Result<String, AdapterError> {
        let mut buf = itoa::Buffer::new();
        let country_calling_code = buf.format(number.country_code);
        Ok(fast_cat::concat_str!(PLUS_SIGN, country_calling_code, &number.national_number))
    }

    fn region_code(&self, number: &EmbeddedNumber) -> Option<String> {
        let region_code = self.get_region_code_for_number(number);
        (!RegionCode::is_unknown(region_code)).then(|| region_code.to_owned())
    }
}
