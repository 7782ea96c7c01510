// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! An interface for retrieving an encoding from a string label.

use crate::all;
use crate::types::EncodingRef;

/// Returns an encoding from given label, if any.
///
/// Labels are matched case-insensitively (ASCII only) after trimming ASCII whitespace.
/// Each encoding accepts its canonical name (as returned by `Encoding::name`)
/// and a handful of common aliases.
pub fn encoding_from_label(label: &str) -> Option<EncodingRef> {
    match &label.trim_matches(&[' ', '\n', '\r', '\t', '\x0C'][..]).to_ascii_uppercase()[..] {
        "WINDOWS-31J" |
        "CP932" |
        "SJIS" |
        "SHIFTJIS" |
        "SHIFT_JIS" =>
            Some(all::WINDOWS_31J as EncodingRef),
        "EUCJP" |
        "EUC-JP" =>
            Some(all::EUC_JP as EncodingRef),
        "JIS" |
        "ISO2022JP" |
        "ISO-2022-JP" |
        "ISO-2022-JP-1" =>
            Some(all::ISO_2022_JP as EncodingRef),
        "UTF8" |
        "UTF-8" =>
            Some(all::UTF_8 as EncodingRef),
        "UNICODE" |
        "UCS2" |
        "UCS-2" |
        "UTF16LE" |
        "UTF-16LE" =>
            Some(all::UCS_2 as EncodingRef),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::encoding_from_label;

    fn name_of(label: &str) -> Option<&'static str> {
        encoding_from_label(label).map(|e| e.name())
    }

    #[test]
    fn test_encoding_from_label() {
        assert_eq!(name_of("Shift_JIS"), Some("SJIS"));
        assert_eq!(name_of("shiftjis"), Some("SJIS"));
        assert_eq!(name_of("cp932"), Some("SJIS"));
        assert_eq!(name_of("Windows-31J"), Some("SJIS"));
        assert_eq!(name_of("euc-jp"), Some("EUCJP"));
        assert_eq!(name_of("iso-2022-jp"), Some("JIS"));
        assert_eq!(name_of("ISO-2022-JP-1"), Some("JIS"));
        assert_eq!(name_of("utf8"), Some("UTF8"));
        assert_eq!(name_of("unicode"), Some("UCS2"));
        assert_eq!(name_of("UTF-16LE"), Some("UCS2"));
        assert_eq!(name_of("\t\n\x0C\r utf-8\t\n\x0C\r "), Some("UTF8"));
    }

    #[test]
    fn test_canonical_names_resolve_to_themselves() {
        for e in crate::all::encodings() {
            assert_eq!(name_of(e.name()), Some(e.name()));
        }
    }

    #[test]
    fn test_unknown_labels() {
        assert!(encoding_from_label("").is_none());
        assert!(encoding_from_label("ascii").is_none());
        assert!(encoding_from_label("utf-16be").is_none());
        assert!(encoding_from_label("shift-jis").is_none());
        assert!(encoding_from_label("\u{a0}utf-8").is_none(),
                "Non-ASCII whitespace should not be trimmed");
    }
}
