use std::collections::HashSet;

use strum::IntoEnumIterator;

use crate::{InvalidReason, WaId, i18n::RegionCode, is_valid, normalize};

use super::init_logging;

/// Inputs the full libphonenumber metadata accepts, in assorted formatting.
const VALID_INPUTS: &[&str] = &[
    "+966501234567",
    "966 55 123 4567",
    "+1 (415) 555-2671",
    "+44 7911 123456",
    "+971 50 123 4567",
    "+20 10 1234 5678",
];

fn reason_of(input: &str) -> InvalidReason {
    WaId::from_any_format(input).unwrap_err().reason()
}

#[test]
fn plain_format_strips_plus() {
    init_logging();
    let wa_id = WaId::from_any_format("+966501234567").unwrap();
    assert_eq!(wa_id.plain_format(), "966501234567");
}

#[test]
fn display_format_adds_plus() {
    init_logging();
    let wa_id = WaId::from_any_format("966501234567").unwrap();
    assert_eq!(wa_id.display_format(), "+966501234567");
}

#[test]
fn formatting_characters_are_ignored() {
    init_logging();
    for input in ["+966 50 123 4567", "(966)-50-123-4567", "+966.50.123.4567", "  +966501234567\t"] {
        assert_eq!(
            WaId::from_any_format(input).unwrap().plain_format(),
            "966501234567",
            "input {:?}",
            input
        );
    }
}

#[test]
fn arabic_indic_digits_are_accepted() {
    init_logging();
    let wa_id = WaId::from_any_format("+٩٦٦ ٥٠ ١٢٣ ٤٥٦٧").unwrap();
    assert_eq!(wa_id.plain_format(), "966501234567");
}

#[test]
fn saudi_number_queries() {
    init_logging();
    let wa_id = WaId::from_any_format("+966501234567").unwrap();
    assert_eq!(wa_id.country_code().as_deref(), Some("SA"));
    assert!(wa_id.is_saudi_number());
}

#[test]
fn us_number_queries() {
    init_logging();
    assert!(!is_valid(""));
    assert!(!is_valid("not a number"));
    assert!(is_valid("+14155552671"));

    let wa_id = WaId::from_any_format("+14155552671").unwrap();
    assert_eq!(wa_id.country_code().as_deref(), Some("US"));
    assert!(!wa_id.is_saudi_number());
}

#[test]
fn gb_number_country_code() {
    init_logging();
    let wa_id = WaId::from_any_format("+44 7911 123456").unwrap();
    assert_eq!(wa_id.country_code().as_deref(), Some("GB"));
}

#[test]
fn leading_zero_national_number_country_code() {
    init_logging();
    // Rome landline: the national number starts with 0
    let wa_id = WaId::from_any_format("+39 06 6982 1234").unwrap();
    assert_eq!(wa_id.plain_format(), "390669821234");
    assert_eq!(wa_id.country_code().as_deref(), Some("IT"));
}

#[test]
fn shared_calling_code_country_code() {
    init_logging();
    let ottawa = WaId::from_any_format("+1 613 782 7274").unwrap();
    assert_eq!(ottawa.country_code().as_deref(), Some(RegionCode::ca()));

    let almaty = WaId::from_any_format("+7 701 123 4567").unwrap();
    assert_eq!(almaty.country_code().as_deref(), Some(RegionCode::kz()));

    let moscow = WaId::from_any_format("+7 495 123 4567").unwrap();
    assert_eq!(moscow.country_code().as_deref(), Some(RegionCode::ru()));
}

#[test]
fn non_geographic_number_has_no_country_code() {
    init_logging();
    let wa_id = WaId::from_any_format("+800 1234 5678").unwrap();
    assert_eq!(wa_id.plain_format(), "80012345678");
    assert_eq!(wa_id.country_code(), None);
    assert!(!wa_id.is_saudi_number());
}

#[test]
fn empty_input() {
    init_logging();
    assert_eq!(reason_of(""), InvalidReason::Empty);
    assert_eq!(reason_of("   "), InvalidReason::Empty);
    assert_eq!(reason_of("\t\n"), InvalidReason::Empty);
}

#[test]
fn input_without_digits() {
    init_logging();
    assert_eq!(reason_of("+"), InvalidReason::NoDigits);
    assert_eq!(reason_of("abc"), InvalidReason::NoDigits);
    assert_eq!(reason_of("not a number"), InvalidReason::NoDigits);
    assert_eq!(reason_of(" (+) - . "), InvalidReason::NoDigits);
}

#[test]
fn national_format_is_rejected() {
    init_logging();
    let reason = reason_of("0501234567");
    assert!(
        matches!(reason, InvalidReason::InvalidNumber | InvalidReason::ParseFailed),
        "unexpected reason {:?}",
        reason
    );
}

#[test]
fn too_short_number_is_rejected() {
    init_logging();
    let reason = reason_of("+96650");
    assert!(
        matches!(reason, InvalidReason::InvalidNumber | InvalidReason::ParseFailed),
        "unexpected reason {:?}",
        reason
    );
}

#[test]
fn error_carries_original_input() {
    init_logging();
    let err = WaId::from_any_format("  abc  ").unwrap_err();
    assert_eq!(err.input(), "  abc  ");
    assert_eq!(err.reason().code(), "no_digits");
    assert!(!err.message().is_empty());
    assert!(err.to_string().contains("no_digits"));
}

#[test]
fn reason_codes() {
    let codes: Vec<&str> = InvalidReason::iter().map(InvalidReason::code).collect();
    assert_eq!(codes, ["empty", "no_digits", "parse_failed", "invalid_number", "unknown"]);
    for reason in InvalidReason::iter() {
        assert_eq!(reason.to_string(), reason.code());
    }
}

#[test]
fn multiple_leading_plus_signs_agree_with_is_valid() {
    init_logging();
    // whatever the parser decides, the two entry points must agree
    for input in ["++966501234567", "+ +966501234567", "+966+501234567"] {
        assert_eq!(is_valid(input), WaId::from_any_format(input).is_ok(), "input {:?}", input);
    }
}

#[test]
fn constructed_values_hold_invariants() {
    init_logging();
    for input in VALID_INPUTS {
        let wa_id = WaId::from_any_format(input).unwrap_or_else(|err| panic!("{}", err));
        let plain = wa_id.plain_format();

        assert!(!plain.is_empty());
        assert!(plain.bytes().all(|b| b.is_ascii_digit()), "{:?}", plain);
        assert_eq!(wa_id.display_format(), format!("+{}", plain));
        assert_eq!(wa_id.is_saudi_number(), plain.starts_with("966"));

        let from_display = WaId::from_any_format(&wa_id.display_format()).unwrap();
        assert_eq!(from_display.plain_format(), plain);
        let from_plain = WaId::from_any_format(plain).unwrap();
        assert_eq!(from_plain, wa_id);

        let normalized = normalize(input).unwrap();
        assert_eq!(normalized, plain);
        assert_eq!(normalize(&normalized).unwrap(), normalized);
    }
}

#[test]
fn is_valid_agrees_with_construction() {
    init_logging();
    let inputs = VALID_INPUTS
        .iter()
        .copied()
        .chain(["", "   ", "+", "abc", "0501234567", "+96650", "+999 123", "+1 415 555"]);
    for input in inputs {
        assert_eq!(is_valid(input), WaId::from_any_format(input).is_ok(), "input {:?}", input);
    }
}

#[test]
fn equality_follows_value() {
    init_logging();
    let a = WaId::from_any_format("+966 50 123 4567").unwrap();
    let b = WaId::from_any_format("(966) 501-234-567").unwrap();
    let c = WaId::from_any_format("+14155552671").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);

    let set: HashSet<WaId> = [a.clone(), b, c].into_iter().collect();
    assert_eq!(set.len(), 2);
    assert!(set.contains(&a));
}

#[test]
fn string_representations() {
    init_logging();
    let wa_id = WaId::from_any_format("+966501234567").unwrap();
    assert_eq!(wa_id.to_string(), "966501234567");
    assert_eq!(format!("{:?}", wa_id), "WaId(\"966501234567\")");
    assert_eq!(AsRef::<str>::as_ref(&wa_id), "966501234567");
    assert_eq!(String::from(wa_id), "966501234567");
}

#[test]
fn conversions() {
    init_logging();
    let parsed: WaId = "+966501234567".parse().unwrap();
    let from_str = WaId::try_from("966501234567").unwrap();
    let from_string = WaId::try_from(String::from("+966 50 123 4567")).unwrap();
    assert_eq!(parsed, from_str);
    assert_eq!(parsed, from_string);
    assert!("abc".parse::<WaId>().is_err());
}

#[test]
fn wa_id_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WaId>();
    assert_send_sync::<crate::InvalidWaId>();
}
