// The minimum and maximum length of the national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;
// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum number of digits in an E.164 number, country code included.
pub const MAX_LENGTH_FOR_E164: usize = 15;
/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHAR: char = '+';
/// Full-width plus sign, treated as `+` when cleaning input.
pub const FULL_WIDTH_PLUS_CHAR: char = '\u{FF0B}';

/// Calling code prefix of Saudi Arabia as it appears in a wa_id.
pub const SAUDI_COUNTRY_CODE_PREFIX: &'static str = "966";

pub const NANPA_COUNTRY_CODE: u16 = 1;
