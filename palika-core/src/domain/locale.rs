// palika-core/src/domain/locale.rs

// Numeral and date localization for the bilingual report output.
// The mapping is a fixed one-to-one substitution between ASCII digits and
// Devanagari digit glyphs (U+0966..U+096F), so conversion is idempotent:
// already-converted text contains no ASCII digits and passes through untouched.

use chrono::{Datelike, NaiveDate};

const NEPALI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// Nepali names of the Gregorian months, indexed 0 = January.
const NEPALI_MONTHS: [&str; 12] = [
    "जनवरी",
    "फेब्रुअरी",
    "मार्च",
    "अप्रिल",
    "मे",
    "जुन",
    "जुलाई",
    "अगस्ट",
    "सेप्टेम्बर",
    "अक्टोबर",
    "नोभेम्बर",
    "डिसेम्बर",
];

/// Replace every ASCII digit with its Devanagari counterpart.
/// Non-digit characters (letters, punctuation, already-Nepali digits) pass
/// through untouched, so ward labels like "Ward-5" convert to "Ward-५"
/// without mangling the text around the digit.
pub fn to_nepali_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => NEPALI_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

/// Inverse substitution: Devanagari digits back to ASCII.
/// Round-trip property: `to_ascii_digits(&to_nepali_digits(s)) == s` for any
/// `s` containing only ASCII digits and non-digit characters.
pub fn to_ascii_digits(input: &str) -> String {
    input
        .chars()
        .map(|c| match NEPALI_DIGITS.iter().position(|&n| n == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}

/// Format a date with the localized month name and Nepali digits,
/// e.g. 2026-08-27 -> "२७ अगस्ट २०२६".
pub fn format_nepali_date(date: NaiveDate) -> String {
    let month = NEPALI_MONTHS[(date.month0()) as usize];
    to_nepali_digits(&format!("{} {} {}", date.day(), month, date.year()))
}

/// Group an integer with the South-Asian 2,2,3 separator pattern
/// (1234567 -> "12,34,567") and convert the digits. Narratives quote
/// population counts this way.
pub fn group_nepali(n: u64) -> String {
    let digits = n.to_string();
    let bytes = digits.as_bytes();
    let len = bytes.len();
    let mut grouped = String::with_capacity(len + len / 2);

    for (i, b) in bytes.iter().enumerate() {
        let remaining = len - i;
        // Separators fall before positions 3, 5, 7, ... from the right.
        if i > 0 && remaining >= 3 && (remaining - 3) % 2 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    to_nepali_digits(&grouped)
}

/// Format a percentage with two decimals in Nepali digits, e.g. "३३.३३".
pub fn format_nepali_percent(pct: f64) -> String {
    to_nepali_digits(&format!("{:.2}", pct))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_digit_substitution_basic() {
        assert_eq!(to_nepali_digits("388"), "३८८");
        assert_eq!(to_nepali_digits("Ward-5"), "Ward-५");
        assert_eq!(to_nepali_digits("no digits here"), "no digits here");
    }

    #[test]
    fn test_digit_substitution_idempotent() {
        let once = to_nepali_digits("41555 households in 12 wards");
        let twice = to_nepali_digits(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_digit_round_trip() {
        let original = "2026-08-27: 41555";
        let converted = to_nepali_digits(original);
        assert_eq!(to_ascii_digits(&converted), original);
    }

    #[test]
    fn test_format_nepali_date() -> Result<()> {
        let date = NaiveDate::from_ymd_opt(2026, 8, 27)
            .ok_or_else(|| anyhow::anyhow!("invalid date"))?;
        assert_eq!(format_nepali_date(date), "२७ अगस्ट २०२६");
        Ok(())
    }

    #[test]
    fn test_group_nepali_patterns() {
        assert_eq!(group_nepali(0), "०");
        assert_eq!(group_nepali(388), "३८८");
        assert_eq!(group_nepali(41555), "४१,५५५");
        assert_eq!(group_nepali(1234567), "१२,३४,५६७");
    }

    #[test]
    fn test_format_nepali_percent() {
        assert_eq!(format_nepali_percent(33.333333), "३३.३३");
        assert_eq!(format_nepali_percent(0.0), "०.००");
    }
}
