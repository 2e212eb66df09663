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

use crate::helper_constants::NANPA_COUNTRY_CODE;

/// Description of the numbers valid in a region, by national significant
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberDesc {
    /// Pattern a national significant number must match in full.
    pub national_number_pattern: &'static str,
    /// Lengths a national significant number may have. Checked before the
    /// pattern so most wrong-length inputs never reach the regex engine.
    pub possible_lengths: &'static [usize],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionMetadata {
    pub id: &'static str,
    pub country_code: u16,
    /// Several regions can share a calling code (NANPA, +7). The main region
    /// is the one whose description is tried last, as a catch-all.
    pub main_country_for_code: bool,
    pub general_desc: NumberDesc,
}

const fn region(
    id: &'static str,
    country_code: u16,
    main_country_for_code: bool,
    national_number_pattern: &'static str,
    possible_lengths: &'static [usize],
) -> RegionMetadata {
    RegionMetadata {
        id,
        country_code,
        main_country_for_code,
        general_desc: NumberDesc { national_number_pattern, possible_lengths },
    }
}

/// Compiled-in metadata: the Gulf states and the countries most clinic
/// customers call from.
///
/// Patterns are the general descriptions (any number type) and are coarser
/// than libphonenumber's per-type descriptions.
pub static METADATA: &[RegionMetadata] = &[
    region("SA", 966, true, r"92\d{7}|(?:[15]|8\d)\d{8}", &[9, 10]),
    region("AE", 971, true, r"(?:[4-7]\d|9[0-689])\d{7}|800\d{2,9}|[2-4679]\d{7}", &[5, 6, 7, 8, 9, 10, 11, 12]),
    region("KW", 965, true, r"18\d{5}|[2569]\d{7}", &[7, 8]),
    region("QA", 974, true, r"[2-7]\d{7}|800\d{4}", &[7, 8]),
    region("BH", 973, true, r"[136-9]\d{7}", &[8]),
    region("OM", 968, true, r"[279]\d{7}|500\d{4}|800\d{5,6}", &[7, 8, 9]),
    region("EG", 20, true, r"[189]\d{8,9}|[24-6]\d{8}|[135]\d{7}", &[8, 9, 10]),
    region("JO", 962, true, r"[2-6]\d{7}|7\d{8}|8\d{7,8}|900\d{5}", &[8, 9]),
    region("US", NANPA_COUNTRY_CODE, true, r"[2-9]\d{2}[2-9]\d{6}", &[10]),
    region(
        "CA",
        NANPA_COUNTRY_CODE,
        false,
        r"(?:204|226|236|249|250|263|289|306|343|354|365|367|368|382|403|416|418|428|431|437|438|450|468|474|506|514|519|548|579|581|584|587|604|613|639|647|672|683|705|709|742|753|778|780|782|807|819|825|867|873|879|902|905)[2-9]\d{6}",
        &[10],
    ),
    region("GB", 44, true, r"[1-357-9]\d{9}|[18]\d{8}|8\d{6}", &[7, 9, 10]),
    region("FR", 33, true, r"[1-9]\d{8}", &[9]),
    region("DE", 49, true, r"[1-9]\d{5,12}", &[6, 7, 8, 9, 10, 11, 12, 13]),
    region("IN", 91, true, r"[1-9]\d{9}", &[10]),
    region("PK", 92, true, r"3\d{9}|[2-9]\d{7,9}", &[8, 9, 10]),
    region("TR", 90, true, r"[2-58]\d{9}", &[10]),
    region("RU", 7, true, r"[3489]\d{9}", &[10]),
    region("KZ", 7, false, r"[67]\d{9}", &[10]),
];
