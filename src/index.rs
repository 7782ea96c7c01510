// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Lookup tables for JIS X 0208, JIS X 0212 and Shift_JIS.
//!
//! Codecs never reach for the tables directly; they receive a `CodeTables`
//! so that tests (or callers with their own vendor mappings) can supply a different set.

use encoding_index_japanese::{jis0208, jis0212};

use crate::types::{CodePoint, EncodedCode, UNKNOWN_GLYPH};

/// JIS X 0208 code of `UNKNOWN_GLYPH`, used when a table does not carry it.
pub const UNKNOWN_JIS: EncodedCode = 0x2126;

/// Shift_JIS code of `UNKNOWN_GLYPH`, used when a table does not carry it.
pub const UNKNOWN_SJIS: EncodedCode = 0x8145;

/// The mappings between encoded codes and Unicode code points.
///
/// JIS X 0208 and JIS X 0212 codes are in the 7-bit row/cell form (`0x2121` through `0x7e7e`),
/// Shift_JIS codes are the lead and trail bytes as they appear in the stream.
/// Every method returns `None` when the key has no mapping.
pub trait CodeTables {
    /// Shift_JIS to Unicode.
    fn sjis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint>;

    /// Unicode to Shift_JIS.
    fn ucs_to_sjis(&self, cp: CodePoint) -> Option<EncodedCode>;

    /// JIS X 0208 to Unicode.
    fn jis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint>;

    /// Unicode to JIS X 0208.
    fn ucs_to_jis(&self, cp: CodePoint) -> Option<EncodedCode>;

    /// JIS X 0212 to Unicode.
    fn ext_to_ucs(&self, code: EncodedCode) -> Option<CodePoint>;

    /// Unicode to JIS X 0212.
    fn ucs_to_ext(&self, cp: CodePoint) -> Option<EncodedCode>;

    /// The Shift_JIS code written for an unmappable character.
    fn unknown_sjis(&self) -> EncodedCode {
        self.ucs_to_sjis(UNKNOWN_GLYPH).unwrap_or(UNKNOWN_SJIS)
    }

    /// The JIS X 0208 code written for an unmappable character.
    fn unknown_jis(&self) -> EncodedCode {
        self.ucs_to_jis(UNKNOWN_GLYPH).unwrap_or(UNKNOWN_JIS)
    }
}

/// Tables from the WHATWG Encoding Standard, as packaged by `encoding-index-japanese`.
///
/// Shift_JIS follows Windows code page 932: NEC row 13 and the IBM extensions are mapped,
/// the user-defined area (leads `F0` through `F9`) is not,
/// and a character in both the NEC-selected and the IBM extension area
/// encodes to the IBM extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardTables;

/// The process-wide standard tables.
pub static STANDARD: StandardTables = StandardTables;

/// Returns the index pointer for a 94 by 94 row/cell code.
pub fn row_cell_pointer(code: EncodedCode) -> Option<u16> {
    let lead = code >> 8;
    let trail = code & 0xff;
    match (lead, trail) {
        (0x21..=0x7e, 0x21..=0x7e) => Some((lead - 0x21) * 94 + trail - 0x21),
        _ => None,
    }
}

/// The inverse of `row_cell_pointer`.
pub fn row_cell_code(ptr: u16) -> Option<EncodedCode> {
    if ptr < 94 * 94 {
        Some((ptr / 94 + 0x21) << 8 | (ptr % 94 + 0x21))
    } else {
        None
    }
}

/// Returns the index pointer for a Shift_JIS double-byte code.
pub fn sjis_pointer(code: EncodedCode) -> Option<u16> {
    let lead = code >> 8;
    let trail = code & 0xff;
    match (lead, trail) {
        (0x81..=0x9f, 0x40..=0x7e) | (0x81..=0x9f, 0x80..=0xfc) |
        (0xe0..=0xfc, 0x40..=0x7e) | (0xe0..=0xfc, 0x80..=0xfc) => {
            let leadoffset = if lead < 0xa0 {0x81} else {0xc1};
            let trailoffset = if trail < 0x7f {0x40} else {0x41};
            Some((lead - leadoffset) * 188 + trail - trailoffset)
        }
        _ => None,
    }
}

/// The inverse of `sjis_pointer`.
pub fn sjis_code(ptr: u16) -> EncodedCode {
    let lead = ptr / 188;
    let leadoffset = if lead < 0x1f {0x81} else {0xc1};
    let trail = ptr % 188;
    let trailoffset = if trail < 0x3f {0x40} else {0x41};
    (lead + leadoffset) << 8 | (trail + trailoffset)
}

#[inline]
fn found_char(ch: u32) -> Option<CodePoint> {
    if ch == 0xffff { None } else { Some(ch) }
}

#[inline]
fn found_ptr(ptr: u16) -> Option<u16> {
    if ptr == 0xffff { None } else { Some(ptr) }
}

#[inline]
fn in_bmp(cp: CodePoint) -> bool {
    cp <= 0xffff
}

impl CodeTables for StandardTables {
    fn sjis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> {
        sjis_pointer(code).and_then(|ptr| found_char(jis0208::forward(ptr)))
    }

    fn ucs_to_sjis(&self, cp: CodePoint) -> Option<EncodedCode> {
        if !in_bmp(cp) { return None; }
        // corresponds to the "index Shift_JIS pointer" in the WHATWG Encoding Standard
        found_ptr(jis0208::backward_remapped(cp)).map(sjis_code)
    }

    fn jis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> {
        row_cell_pointer(code).and_then(|ptr| found_char(jis0208::forward(ptr)))
    }

    fn ucs_to_jis(&self, cp: CodePoint) -> Option<EncodedCode> {
        if !in_bmp(cp) { return None; }
        // pointers past the 94th row are IBM extensions only reachable from Shift_JIS
        found_ptr(jis0208::backward(cp)).and_then(row_cell_code)
    }

    fn ext_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> {
        row_cell_pointer(code).and_then(|ptr| found_char(jis0212::forward(ptr)))
    }

    fn ucs_to_ext(&self, cp: CodePoint) -> Option<EncodedCode> {
        if !in_bmp(cp) { return None; }
        found_ptr(jis0212::backward(cp)).and_then(row_cell_code)
    }
}
