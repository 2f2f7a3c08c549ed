//! Frame index extraction and canonical output names.
//!
//! Source files follow the convention `*frame_<digits>_*.jpg`. The digit run is
//! the frame index; the canonical name is that index zero-padded to at least
//! three digits, followed by `.jpg`. Wider indices are never truncated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Extension (case-sensitive) that every candidate file must end with.
pub const JPG_EXTENSION: &str = ".jpg";

/// Minimum number of digits in a canonical name.
pub const MIN_INDEX_WIDTH: usize = 3;

// `\d` is Unicode-aware: any character of general category Nd
static FRAME_INDEX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"frame_(\d+)_").expect("frame index regex is valid"));

static DECIMAL_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("decimal digit regex is valid"));

/// Value of a Unicode decimal digit (general category Nd).
///
/// Nd digits come in contiguous runs of ten ordered 0..=9, so the value is the
/// number of Nd code points directly preceding `c`, modulo 10.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }

    let is_decimal = |c: char| DECIMAL_DIGIT_REGEX.is_match(c.encode_utf8(&mut [0; 4]));
    if !is_decimal(c) {
        return None;
    }

    let mut preceding = 0;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal(prev) {
            break;
        }
        preceding += 1;
        code -= 1;
    }
    Some(preceding % 10)
}

/// A non-negative frame index parsed from a file name.
///
/// Stored as ASCII decimal digits with leading zeros removed, so arbitrarily
/// long digit runs keep their exact value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameIndex {
    digits: String,
}

impl FrameIndex {
    /// Parse a run of decimal digits from any script. Returns `None` for empty
    /// input or any non-digit character.
    pub fn from_digits(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        let ascii = raw
            .chars()
            .map(|c| decimal_digit_value(c).and_then(|d| char::from_digit(d, 10)))
            .collect::<Option<String>>()?;

        let trimmed = ascii.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self {
            digits: digits.to_string(),
        })
    }

    /// Canonical output file name, e.g. `042.jpg` or `1500.jpg`.
    pub fn canonical_name(&self) -> String {
        format!(
            "{:0>width$}{}",
            self.digits,
            JPG_EXTENSION,
            width = MIN_INDEX_WIDTH
        )
    }
}

/// Whether a file name passes the case-sensitive `.jpg` suffix filter.
pub fn has_jpg_extension(file_name: &str) -> bool {
    file_name.ends_with(JPG_EXTENSION)
}

/// Extract the frame index from the first `frame_<digits>_` occurrence.
///
/// The search is unanchored and ignores the extension; callers apply
/// [`has_jpg_extension`] separately.
pub fn extract_frame_index(file_name: &str) -> Option<FrameIndex> {
    FRAME_INDEX_REGEX
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| FrameIndex::from_digits(digits.as_str()))
}

/// Name for the `position`-th (0-based) file in sequential renumbering.
/// Numbering starts at 1.
pub fn sequential_name(position: usize) -> String {
    format!(
        "{:0width$}{}",
        position + 1,
        JPG_EXTENSION,
        width = MIN_INDEX_WIDTH
    )
}

/// How output names are derived from source entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingScheme {
    /// Name by the frame index embedded in the file name
    FrameIndex,
    /// Name by position in the sorted `.jpg` listing
    Sequential,
}

impl NamingScheme {
    /// Output name for `file_name`, or `None` when the entry is skipped.
    ///
    /// `position` counts only entries accepted so far and is ignored by
    /// [`NamingScheme::FrameIndex`].
    pub fn target_name(self, file_name: &str, position: usize) -> Option<String> {
        if !has_jpg_extension(file_name) {
            return None;
        }
        match self {
            Self::FrameIndex => extract_frame_index(file_name).map(|index| index.canonical_name()),
            Self::Sequential => Some(sequential_name(position)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn index(raw: &str) -> FrameIndex {
        FrameIndex::from_digits(raw).unwrap()
    }

    #[test]
    fn test_canonical_name_padding() {
        assert_eq!(index("0").canonical_name(), "000.jpg");
        assert_eq!(index("42").canonical_name(), "042.jpg");
        assert_eq!(index("999").canonical_name(), "999.jpg");
        assert_eq!(index("1000").canonical_name(), "1000.jpg");
        assert_eq!(index("1234").canonical_name(), "1234.jpg");
    }

    #[test]
    fn test_from_digits_strips_leading_zeros() {
        assert_eq!(index("0007"), index("7"));
        assert_eq!(index("0007").canonical_name(), "007.jpg");
        assert_eq!(index("000"), index("0"));
        assert_eq!(index("000").canonical_name(), "000.jpg");
    }

    #[test]
    fn test_from_digits_rejects_non_digits() {
        assert!(FrameIndex::from_digits("").is_none());
        assert!(FrameIndex::from_digits("12a").is_none());
        assert!(FrameIndex::from_digits("-1").is_none());
        assert!(FrameIndex::from_digits("½").is_none());
    }

    #[test]
    fn test_oversized_index_keeps_exact_digits() {
        let raw = "123456789012345678901234567890";
        assert_eq!(index(raw).canonical_name(), format!("{raw}.jpg"));
    }

    #[test]
    fn test_decimal_digit_values_across_scripts() {
        // Arabic-Indic, Devanagari, fullwidth, mathematical double-struck
        assert_eq!(decimal_digit_value('\u{0663}'), Some(3));
        assert_eq!(decimal_digit_value('\u{0660}'), Some(0));
        assert_eq!(decimal_digit_value('\u{096F}'), Some(9));
        assert_eq!(decimal_digit_value('\u{FF17}'), Some(7));
        assert_eq!(decimal_digit_value('\u{1D7DA}'), Some(2));
        assert_eq!(decimal_digit_value('x'), None);
        assert_eq!(decimal_digit_value('\u{00B2}'), None);
    }

    #[test]
    fn test_extract_non_ascii_digits() {
        assert_eq!(extract_frame_index("frame_\u{0663}_x.jpg"), Some(index("3")));
        assert_eq!(
            NamingScheme::FrameIndex.target_name("frame_\u{0661}\u{0662}_x.jpg", 0),
            Some("012.jpg".to_string())
        );
        assert_eq!(
            extract_frame_index("frame_\u{0967}\u{0966}\u{0966}\u{0966}_x.jpg"),
            Some(index("1000"))
        );
    }

    #[test]
    fn test_extract_frame_index() {
        assert_eq!(
            extract_frame_index("frame_000_delay-0.04s.jpg"),
            Some(index("0"))
        );
        assert_eq!(extract_frame_index("clip_frame_12_b.jpg"), Some(index("12")));
        assert_eq!(extract_frame_index("frame_5_x.jpg"), Some(index("5")));
        assert_eq!(extract_frame_index("frame_1500_z.jpg"), Some(index("1500")));
    }

    #[test]
    fn test_extract_uses_first_match() {
        assert_eq!(extract_frame_index("frame_3_frame_9_x.jpg"), Some(index("3")));
        assert_eq!(extract_frame_index("frame_frame_8_x.jpg"), Some(index("8")));
    }

    #[test]
    fn test_extract_requires_trailing_underscore() {
        assert_eq!(extract_frame_index("frame_12.jpg"), None);
        assert_eq!(extract_frame_index("frame__x.jpg"), None);
        assert_eq!(extract_frame_index("Frame_12_x.jpg"), None);
        assert_eq!(extract_frame_index("notes.jpg"), None);
    }

    #[test]
    fn test_jpg_extension_is_case_sensitive() {
        assert!(has_jpg_extension("frame_1_a.jpg"));
        assert!(!has_jpg_extension("frame_1_a.JPG"));
        assert!(!has_jpg_extension("frame_1_a.jpeg"));
        assert!(!has_jpg_extension("notes.txt"));
    }

    #[test]
    fn test_scheme_target_names() {
        let frame = NamingScheme::FrameIndex;
        assert_eq!(
            frame.target_name("frame_012_b.jpg", 7),
            Some("012.jpg".to_string())
        );
        assert_eq!(frame.target_name("frame_012_b.png", 0), None);
        assert_eq!(frame.target_name("cover.jpg", 0), None);

        let sequential = NamingScheme::Sequential;
        assert_eq!(
            sequential.target_name("cover.jpg", 0),
            Some("001.jpg".to_string())
        );
        assert_eq!(
            sequential.target_name("page.jpg", 999),
            Some("1000.jpg".to_string())
        );
        assert_eq!(sequential.target_name("notes.txt", 3), None);
    }

    proptest! {
        #[test]
        fn prop_canonical_name_matches_integer_formatting(n in any::<u64>()) {
            prop_assert_eq!(index(&n.to_string()).canonical_name(), format!("{n:03}.jpg"));
        }

        #[test]
        fn prop_extracted_index_matches_embedded_digits(
            prefix in "[a-z]{0,6}",
            n in 0u64..1_000_000,
            pad in 0usize..4,
            suffix in "[a-z0-9]{0,6}",
        ) {
            let name = format!("{prefix}frame_{}{n}_{suffix}.jpg", "0".repeat(pad));
            prop_assert_eq!(extract_frame_index(&name), Some(index(&n.to_string())));
            prop_assert_eq!(
                NamingScheme::FrameIndex.target_name(&name, 0),
                Some(format!("{n:03}.jpg"))
            );
        }

        #[test]
        fn prop_non_jpg_names_are_skipped(stem in "[a-z_0-9]{0,12}", ext in "(png|txt|JPG|jpeg)") {
            let name = format!("frame_1_{stem}.{ext}");
            prop_assert_eq!(NamingScheme::FrameIndex.target_name(&name, 0), None);
            prop_assert_eq!(NamingScheme::Sequential.target_name(&name, 0), None);
        }
    }
}
