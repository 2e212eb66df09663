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

use std::borrow::Cow;

use crate::{
    helper_constants::{FULL_WIDTH_PLUS_CHAR, PLUS_CHAR, PLUS_SIGN},
    string_util::{is_ascii_digits, strip_cow_prefix},
};

/// Keeps only ASCII digits and `+`, in their original order.
///
/// Other Unicode decimal digits (Arabic-Indic, full-width, ...) are mapped to
/// their ASCII value first, and the full-width plus counts as `+`. Input that
/// is already clean is borrowed.
pub(super) fn clean_phone_chars(input: &str) -> Cow<'_, str> {
    if input.bytes().all(|b| b.is_ascii_digit() || b == b'+') {
        return Cow::Borrowed(input);
    }
    let normalized = dec_from_char::normalize_decimals(input);
    let cleaned = normalized
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | PLUS_CHAR => Some(c),
            FULL_WIDTH_PLUS_CHAR => Some(PLUS_CHAR),
            _ => None,
        })
        .collect();
    Cow::Owned(cleaned)
}

pub(super) fn contains_digit(cleaned: &str) -> bool {
    cleaned.bytes().any(|b| b.is_ascii_digit())
}

/// Turns a cleaned string into an international parse candidate. Existing
/// leading pluses, however many, are left for the parser to judge.
pub(super) fn with_leading_plus(cleaned: Cow<'_, str>) -> Cow<'_, str> {
    if cleaned.starts_with(PLUS_CHAR) {
        cleaned
    } else {
        Cow::Owned(fast_cat::concat_str!(PLUS_SIGN, &cleaned))
    }
}

/// Drops the `+` of an E.164 string; `None` unless digits remain.
pub(super) fn e164_body(formatted: String) -> Option<String> {
    strip_cow_prefix(Cow::Owned(formatted), PLUS_SIGN)
        .filter(|body| is_ascii_digits(body))
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{clean_phone_chars, contains_digit, e164_body, with_leading_plus};

    #[test]
    fn test_clean_phone_chars() {
        assert!(matches!(clean_phone_chars("+966501234567"), Cow::Borrowed(_)));
        assert_eq!(clean_phone_chars("(966)-50-123-4567"), "966501234567");
        assert_eq!(clean_phone_chars("+966 50.123.4567"), "+966501234567");
        assert_eq!(clean_phone_chars("tel: +1 (415) 555-2671"), "+14155552671");
        assert_eq!(clean_phone_chars("\u{FF0B}966"), "+966");
        // pluses are filtered, not collapsed or moved
        assert_eq!(clean_phone_chars("++96+6"), "++96+6");
        assert_eq!(clean_phone_chars("abc"), "");
    }

    #[test]
    fn test_clean_phone_chars_unicode_digits() {
        assert_eq!(clean_phone_chars("+٩٦٦ ٥٠ ١٢٣ ٤٥٦٧"), "+966501234567");
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit("+9"));
        assert!(!contains_digit("+"));
        assert!(!contains_digit(""));
    }

    #[test]
    fn test_with_leading_plus() {
        assert_eq!(with_leading_plus(Cow::Borrowed("966")), "+966");
        assert_eq!(with_leading_plus(Cow::Borrowed("+966")), "+966");
        assert_eq!(with_leading_plus(Cow::Borrowed("++966")), "++966");
    }

    #[test]
    fn test_e164_body() {
        assert_eq!(e164_body("+966501234567".to_owned()).as_deref(), Some("966501234567"));
        assert_eq!(e164_body("966501234567".to_owned()), None);
        assert_eq!(e164_body("+".to_owned()), None);
        assert_eq!(e164_body("+96650 1234567".to_owned()), None);
    }
}
