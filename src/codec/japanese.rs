// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Legacy Japanese encodings based on JIS X 0208 and JIS X 0212.

use log::trace;

use crate::index::CodeTables;
use crate::types::*;
use crate::util::ByteCursor;

/// Packs two bytes into an `EncodedCode`.
#[inline(always)]
fn pack(lead: u8, trail: u8) -> EncodedCode {
    (lead as u16) << 8 | trail as u16
}

/// Splits an `EncodedCode` back into its two bytes.
#[inline(always)]
fn unpack(code: EncodedCode) -> [u8; 2] {
    [(code >> 8) as u8, code as u8]
}

#[inline(always)]
fn is_row_cell(code: EncodedCode) -> bool {
    let [lead, trail] = unpack(code);
    (0x21..=0x7e).contains(&lead) && (0x21..=0x7e).contains(&trail)
}

/// The character set an ISO-2022-JP stream is currently switched to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// ASCII (`ESC ( B`), or JIS X 0201 Roman (`ESC ( J`) read as ASCII.
    Ascii,
    /// JIS X 0201 halfwidth katakana (`ESC ( I`).
    Katakana,
    /// JIS X 0208-1978 (`ESC $ @`) or -1983 (`ESC $ B`).
    Kanji,
    /// JIS X 0212-1990 (`ESC $ ( D`).
    Extension,
}

impl Mode {
    /// The escape sequence the encoder writes to switch to this mode.
    pub fn designator(self) -> &'static [u8] {
        match self {
            Mode::Ascii => b"\x1b(B",
            Mode::Katakana => b"\x1b(I",
            Mode::Kanji => b"\x1b$B",
            Mode::Extension => b"\x1b$(D",
        }
    }

    /// The number of bytes following `ESC` that belong to the escape sequence
    /// starting with `first` and `second`.
    pub fn designator_len(first: u8, second: u8) -> usize {
        match (first, second) {
            // ESC & @ is always followed by ESC $ B, which is part of the announcement
            (0x26, _) => 5,
            (0x24, 0x28) => 3,
            _ => 2,
        }
    }

    /// Returns the mode after the escape sequence `ESC designator...`.
    /// An unrecognized designator leaves the mode as it is.
    pub fn designate(self, designator: &[u8]) -> Mode {
        match *designator {
            [0x28, 0x42] | [0x28, 0x4a] => Mode::Ascii,
            [0x28, 0x49] => Mode::Katakana,
            [0x26, _, ..] => Mode::Kanji,
            [0x24, 0x40] | [0x24, 0x42] => Mode::Kanji,
            [0x24, 0x28, 0x44] => Mode::Extension,
            _ => self,
        }
    }
}

/**
 * A character on the JIS plane, the common ground of EUC-JP and ISO-2022-JP.
 *
 * Shift_JIS reaches the plane through the row/cell shift,
 * so converting between any two legacy encodings never needs the Unicode tables
 * except for the vendor extensions of Shift_JIS.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JisChar {
    /// A byte of the ASCII set. (Bytes above `7F` pass through unchanged.)
    Ascii(u8),
    /// A JIS X 0201 halfwidth katakana, as its 7-bit byte (`21` through `5F`).
    Katakana(u8),
    /// A JIS X 0208 row/cell code.
    Kanji(EncodedCode),
    /// A JIS X 0212 row/cell code.
    Extension(EncodedCode),
}

impl JisChar {
    /// The ISO-2022-JP mode required to write this character.
    pub fn mode(self) -> Mode {
        match self {
            JisChar::Ascii(_) => Mode::Ascii,
            JisChar::Katakana(_) => Mode::Katakana,
            JisChar::Kanji(_) => Mode::Kanji,
            JisChar::Extension(_) => Mode::Extension,
        }
    }

    /// The stand-in for anything that has no place on the JIS plane.
    pub fn unknown(tables: &dyn CodeTables) -> JisChar {
        JisChar::Kanji(tables.unknown_jis())
    }

    /// A JIS X 0208 character, or the unknown glyph when `code` is not a row/cell code.
    fn kanji(tables: &dyn CodeTables, code: EncodedCode) -> JisChar {
        if is_row_cell(code) { JisChar::Kanji(code) } else { JisChar::unknown(tables) }
    }

    /// A JIS X 0212 character, or the unknown glyph when `code` is not a row/cell code.
    fn extension(tables: &dyn CodeTables, code: EncodedCode) -> JisChar {
        if is_row_cell(code) { JisChar::Extension(code) } else { JisChar::unknown(tables) }
    }

    /// Places a code point on the JIS plane.
    /// JIS X 0208 is preferred over JIS X 0212, and anything in neither is the unknown glyph.
    pub fn classify(tables: &dyn CodeTables, cp: CodePoint) -> JisChar {
        match cp {
            0x0000..=0x007f => JisChar::Ascii(cp as u8),
            0xff61..=0xff9f => JisChar::Katakana((cp - 0xff40) as u8),
            _ => {
                if let Some(code) = tables.ucs_to_jis(cp) {
                    JisChar::Kanji(code)
                } else if let Some(code) = tables.ucs_to_ext(cp) {
                    JisChar::Extension(code)
                } else {
                    trace!("U+{:04X} is not in JIS X 0208 nor JIS X 0212", cp);
                    JisChar::unknown(tables)
                }
            }
        }
    }

    /// Moves a byte the lenient decoders let through (an ASCII byte above `7F`,
    /// or a katakana byte outside `21` through `5F`) to where its code point belongs,
    /// so that it is written as if the conversion went through Unicode.
    pub fn normalize(self, tables: &dyn CodeTables) -> JisChar {
        match self {
            JisChar::Ascii(0x00..=0x7f) | JisChar::Katakana(0x21..=0x5f) => self,
            JisChar::Ascii(_) | JisChar::Katakana(_) => {
                JisChar::classify(tables, self.to_code_point(tables))
            }
            JisChar::Kanji(_) | JisChar::Extension(_) => self,
        }
    }

    /// Maps this character back to Unicode.
    pub fn to_code_point(self, tables: &dyn CodeTables) -> CodePoint {
        match self {
            JisChar::Ascii(b) => b as CodePoint,
            JisChar::Katakana(b) => b as CodePoint + 0xff40,
            JisChar::Kanji(code) => tables.jis_to_ucs(code).unwrap_or_else(|| {
                trace!("JIS X 0208 {:04X} has no mapping", code);
                UNKNOWN_GLYPH
            }),
            JisChar::Extension(code) => tables.ext_to_ucs(code).unwrap_or_else(|| {
                trace!("JIS X 0212 {:04X} has no mapping", code);
                UNKNOWN_GLYPH
            }),
        }
    }
}

/**
 * EUC-JP.
 *
 * This is a Japanese encoding created from three JIS character sets:
 *
 * - JIS X 0201, which lower half is ISO/IEC 646:JP (US-ASCII with yen sign and overline)
 *   and upper half contains legacy half-width Katakanas.
 * - JIS X 0208, a primary graphic character set (94x94).
 * - JIS X 0212, a supplementary graphic character set (94x94).
 *
 * EUC-JP contains the lower half of JIS X 0201 in G0 (`[21-7E]`),
 * JIS X 0208 in G1 (`[A1-FE] [A1-FE]`),
 * the upper half of JIS X 0201 in G2 (`8E [A1-DF]`), and
 * JIS X 0212 in G3 (`8F [A1-FE] [A1-FE]`).
 * Unlike the WHATWG variant, the encoder does write G3.
 */
#[derive(Clone, Copy)]
pub struct EUCJPEncoding;

/// A unit read from EUC-JP.
#[derive(Clone, Copy)]
enum EUCJPChar {
    Jis(JisChar),
    /// `8E` followed by a byte below `80`, still mapped by the katakana offset.
    /// The code point lands off the katakana block, so it has no JIS plane form of its own.
    Offset(CodePoint),
}

impl EUCJPChar {
    fn to_code_point(self, tables: &dyn CodeTables) -> CodePoint {
        match self {
            EUCJPChar::Jis(ch) => ch.to_code_point(tables),
            EUCJPChar::Offset(cp) => cp,
        }
    }

    fn to_jis(self, tables: &dyn CodeTables) -> JisChar {
        match self {
            EUCJPChar::Jis(ch) => ch.normalize(tables),
            EUCJPChar::Offset(cp) => JisChar::classify(tables, cp),
        }
    }
}

/// Reads EUC-JP into JIS plane characters.
fn scan_eucjp<F>(tables: &dyn CodeTables, input: &[u8], mut f: F) -> Result<(), CodecError>
        where F: FnMut(EUCJPChar) {
    let mut cur = ByteCursor::new(input);
    while let Some(lead) = cur.read() {
        let start = cur.pos() - 1;
        let ch = match lead {
            0x00..=0x7f => EUCJPChar::Jis(JisChar::Ascii(lead)),
            0x8e => match cur.next_in(start)? {
                trail @ 0x80..=0xff => EUCJPChar::Jis(JisChar::Katakana(trail - 0x80)),
                trail => {
                    trace!("EUC-JP G2 byte {:02X} at {} lacks its high bit", trail, start + 1);
                    EUCJPChar::Offset(trail as CodePoint + 0xfec0)
                }
            },
            0x8f => {
                let first = cur.next_in(start)?;
                let second = cur.next_in(start)?;
                EUCJPChar::Jis(JisChar::extension(
                    tables, pack(first.wrapping_sub(0x80), second.wrapping_sub(0x80))))
            }
            _ => {
                let trail = cur.next_in(start)?;
                EUCJPChar::Jis(JisChar::kanji(
                    tables, pack(lead.wrapping_sub(0x80), trail.wrapping_sub(0x80))))
            }
        };
        f(ch);
    }
    Ok(())
}

fn write_eucjp(ch: JisChar, output: &mut dyn ByteWriter) {
    match ch {
        JisChar::Ascii(b) => output.write_byte(b),
        JisChar::Katakana(b) => output.write_bytes(&[0x8e, b | 0x80]),
        JisChar::Kanji(code) => {
            let [lead, trail] = unpack(code);
            output.write_bytes(&[lead | 0x80, trail | 0x80]);
        }
        JisChar::Extension(code) => {
            let [lead, trail] = unpack(code);
            output.write_bytes(&[0x8f, lead | 0x80, trail | 0x80]);
        }
    }
}

impl Encoding for EUCJPEncoding {
    fn name(&self) -> &'static str { "EUCJP" }
    fn max_encoded_len(&self, input_len: usize) -> usize { input_len * 3 }

    fn raw_decode(&self, tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError> {
        output.writer_hint(input.len());
        scan_eucjp(tables, input, |ch| output.write_code(ch.to_code_point(tables)))
    }

    fn raw_encode(&self, tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter) {
        output.writer_hint(input.len());
        for &cp in input {
            write_eucjp(JisChar::classify(tables, cp), output);
        }
    }

    fn jis_codec(&self) -> Option<&dyn JisCodec> { Some(self) }
}

impl JisCodec for EUCJPEncoding {
    fn raw_decode_jis(&self, tables: &dyn CodeTables, input: &[u8],
                      output: &mut Vec<JisChar>) -> Result<(), CodecError> {
        scan_eucjp(tables, input, |ch| output.push(ch.to_jis(tables)))
    }

    fn raw_encode_jis(&self, _tables: &dyn CodeTables, input: &[JisChar],
                      output: &mut dyn ByteWriter) {
        for &ch in input {
            write_eucjp(ch, output);
        }
    }
}


/**
 * Windows code page 932, i.e. Shift_JIS with IBM/NEC extensions.
 *
 * This is a Japanese encoding for JIS X 0208
 * compatible to the original assignments of JIS X 0201 (`[21-7E A1-DF]`).
 * The 94 by 94 region of JIS X 0208 is sliced, or rather "shifted" into
 * the odd half (odd row number) and even half (even row number),
 * and merged into the 188 by 47 region mapped to `[81-9F E0-EF] [40-7E 80-FC]`.
 * The remaining area, `[80 A0 F0-FF] [40-7E 80-FC]`, has been subjected to
 * numerous extensions incompatible to each other.
 * The standard tables use IBM/NEC extensions
 * which assigns more characters to `[ED-EE FA-FC] [40-7E 80-FC]`.
 * JIS X 0212 has no place in Shift_JIS.
 */
#[derive(Clone, Copy)]
pub struct Windows31JEncoding;

/// Shifts a JIS X 0208 row/cell code into its Shift_JIS code.
pub fn shift(code: EncodedCode) -> Option<EncodedCode> {
    crate::index::row_cell_pointer(code).map(crate::index::sjis_code)
}

/// The inverse of `shift`, only defined for the leads that carry JIS X 0208 (`81-9F E0-EF`).
pub fn unshift(code: EncodedCode) -> Option<EncodedCode> {
    match code >> 8 {
        0x81..=0x9f | 0xe0..=0xef => {
            crate::index::sjis_pointer(code).and_then(crate::index::row_cell_code)
        }
        _ => None,
    }
}

/// The NEC-selected IBM extensions, which Windows prefers to write as `[FA-FC]`.
fn is_nec_selected(sjis: EncodedCode) -> bool {
    (0xed40..=0xeefc).contains(&sjis)
}

impl Encoding for Windows31JEncoding {
    fn name(&self) -> &'static str { "SJIS" }
    fn max_encoded_len(&self, input_len: usize) -> usize { input_len * 2 }

    fn raw_decode(&self, tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError> {
        output.writer_hint(input.len());

        let mut cur = ByteCursor::new(input);
        while let Some(lead) = cur.read() {
            let start = cur.pos() - 1;
            let ch = match lead {
                0x00..=0x7f => lead as CodePoint,
                0xa1..=0xdf => lead as CodePoint + 0xfec0,
                _ => {
                    let code = pack(lead, cur.next_in(start)?);
                    tables.sjis_to_ucs(code).unwrap_or_else(|| {
                        trace!("Shift_JIS {:04X} has no mapping", code);
                        UNKNOWN_GLYPH
                    })
                }
            };
            output.write_code(ch);
        }
        Ok(())
    }

    fn raw_encode(&self, tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter) {
        output.writer_hint(input.len());

        for &cp in input {
            match cp {
                0x0000..=0x007f => output.write_byte(cp as u8),
                0xff61..=0xff9f => output.write_byte((cp - 0xfec0) as u8),
                _ => {
                    let code = tables.ucs_to_sjis(cp).unwrap_or_else(|| {
                        trace!("U+{:04X} is not in Shift_JIS", cp);
                        tables.unknown_sjis()
                    });
                    output.write_bytes(&unpack(code));
                }
            }
        }
    }

    fn jis_codec(&self) -> Option<&dyn JisCodec> { Some(self) }
}

impl JisCodec for Windows31JEncoding {
    fn raw_decode_jis(&self, tables: &dyn CodeTables, input: &[u8],
                      output: &mut Vec<JisChar>) -> Result<(), CodecError> {
        let mut cur = ByteCursor::new(input);
        while let Some(lead) = cur.read() {
            let start = cur.pos() - 1;
            let ch = match lead {
                0x00..=0x7f => JisChar::Ascii(lead),
                0xa1..=0xdf => JisChar::Katakana(lead - 0x80),
                _ => {
                    let code = pack(lead, cur.next_in(start)?);
                    let ch = match lead {
                        0x81..=0x9f | 0xe0..=0xef => unshift(code).map(JisChar::Kanji),
                        // IBM extensions have no row/cell of their own
                        0xfa..=0xfc => tables.sjis_to_ucs(code).map(|cp| JisChar::classify(tables, cp)),
                        _ => None,
                    };
                    ch.unwrap_or_else(|| {
                        trace!("Shift_JIS {:04X} has no place on the JIS plane", code);
                        JisChar::unknown(tables)
                    })
                }
            };
            output.push(ch);
        }
        Ok(())
    }

    fn raw_encode_jis(&self, tables: &dyn CodeTables, input: &[JisChar],
                      output: &mut dyn ByteWriter) {
        for &ch in input {
            match ch {
                JisChar::Ascii(b) => output.write_byte(b),
                JisChar::Katakana(b) => output.write_byte(b | 0x80),
                JisChar::Kanji(code) => {
                    let sjis = match shift(code) {
                        Some(sjis) if is_nec_selected(sjis) => {
                            tables.jis_to_ucs(code).and_then(|cp| tables.ucs_to_sjis(cp))
                        }
                        sjis => sjis,
                    };
                    output.write_bytes(&unpack(sjis.unwrap_or_else(|| tables.unknown_sjis())));
                }
                JisChar::Extension(code) => {
                    trace!("JIS X 0212 {:04X} cannot be written in Shift_JIS", code);
                    output.write_bytes(&unpack(tables.unknown_sjis()));
                }
            }
        }
    }
}

#[cfg(test)]
mod windows31j_tests {
    use super::{shift, unshift, JisChar, Windows31JEncoding};
    use crate::index::STANDARD;
    use crate::testutils::{self, FIXTURE};
    use crate::types::*;

    #[test]
    fn test_encoder_valid() {
        let e = Windows31JEncoding;
        assert_encode_ok!(e, "A", [0x41]);
        assert_encode_ok!(e, "BC", [0x42, 0x43]);
        assert_encode_ok!(e, "", []);
        assert_encode_ok!(e, "\u{3042}", [0x82, 0xa0]);
        assert_encode_ok!(e, "\u{306b}\u{307b}\u{3093}", [0x82, 0xc9, 0x82, 0xd9, 0x82, 0xf1]);
        assert_encode_ok!(e, "\u{ff86}\u{ff8e}\u{ff9d}", [0xc6, 0xce, 0xdd]);
        assert_encode_ok!(e, "\u{ff71}", [0xb1]);
        assert_encode_ok!(e, "\u{65e5}\u{672c}", [0x93, 0xfa, 0x96, 0x7b]);
        assert_encode_ok!(e, "\u{2170}", [0xfa, 0x40]);
    }

    #[test]
    fn test_encoder_unknown() {
        let e = Windows31JEncoding;
        assert_encode_ok!(e, "\u{e000}", [0x81, 0x45]);
        assert_encode_ok!(e, "?\u{ffff}!", [0x3f, 0x81, 0x45, 0x21]);
        // JIS X 0212 only
        assert_encode_ok!(e, "\u{736c}", [0x81, 0x45]);
        assert_encode_ok!(e, "\u{30fb}", [0x81, 0x45]);
    }

    #[test]
    fn test_decoder_valid() {
        let d = Windows31JEncoding;
        assert_decode_ok!(d, [0x41], "A");
        assert_decode_ok!(d, [0x42, 0x43], "BC");
        assert_decode_ok!(d, [], "");
        assert_decode_ok!(d, [0x5c], "\\");
        assert_decode_ok!(d, [0x7e], "~");
        assert_decode_ok!(d, [0x82, 0xc9, 0x82, 0xd9, 0x82, 0xf1], "\u{306b}\u{307b}\u{3093}");
        assert_decode_ok!(d, [0xc6, 0xce, 0xdd], "\u{ff86}\u{ff8e}\u{ff9d}");
        assert_decode_ok!(d, [0x93, 0xfa, 0x96, 0x7b], "\u{65e5}\u{672c}");
        assert_decode_ok!(d, [0xee, 0xef, 0xfa, 0x40], "\u{2170}\u{2170}");
    }

    #[test]
    fn test_decoder_unknown() {
        let d = Windows31JEncoding;
        // user-defined area
        assert_decode_ok!(d, [0xf0, 0x40], "\u{30fb}");
        // a lead outside of any double-byte area still takes its trail byte
        assert_decode_ok!(d, [0xa0, 0x41, 0x42], "\u{30fb}\u{42}");
        assert_decode_ok!(d, [0x82, 0x20], "\u{30fb}");
    }

    #[test]
    fn test_decoder_truncated() {
        let d = Windows31JEncoding;
        assert_decode_err!(d, [0x82], 0);
        assert_decode_err!(d, [0x82, 0xa0, 0x82], 2);
    }

    #[test]
    fn test_shift() {
        assert_eq!(shift(0x2422), Some(0x82a0));
        assert_eq!(shift(0x2121), Some(0x8140));
        assert_eq!(shift(0x7e7e), Some(0xeffc));
        assert_eq!(shift(0x2420), None);
        assert_eq!(unshift(0x82a0), Some(0x2422));
        assert_eq!(unshift(0xeffc), Some(0x7e7e));
        assert_eq!(unshift(0xfa40), None);
        assert_eq!(unshift(0x827f), None);
        for code in 0x2121..0x7f7f {
            if let Some(sjis) = shift(code) {
                assert_eq!(unshift(sjis), Some(code));
            }
        }
    }

    #[test]
    fn test_jis_plane() {
        let t = &STANDARD;
        let e = Windows31JEncoding;
        assert_eq!(e.decode_jis(t, &[0x41, 0xb1, 0x82, 0xa0, 0xee, 0xef, 0xfa, 0x40, 0xf0, 0x40]),
                   Ok(vec![JisChar::Ascii(0x41), JisChar::Katakana(0x31), JisChar::Kanji(0x2422),
                           JisChar::Kanji(0x7c71), JisChar::Kanji(0x7c71), JisChar::Kanji(0x2126)]));
        // NEC-selected codes are written as IBM extensions
        assert_eq!(e.encode_jis(t, &[JisChar::Kanji(0x2422), JisChar::Kanji(0x7c71),
                                     JisChar::Katakana(0x31), JisChar::Extension(0x4b46)]),
                   [0x82, 0xa0, 0xfa, 0x40, 0xb1, 0x81, 0x45]);
    }

    #[test]
    fn test_injected_tables() {
        let e = Windows31JEncoding;
        assert_eq!(e.encode(&FIXTURE, &testutils::codes("\u{3042}\u{65e5}")),
                   [0x82, 0xa0, 0x81, 0x45]);
        assert_eq!(e.decode(&FIXTURE, &[0x93, 0xfa, 0x82, 0xa0]),
                   Ok(testutils::codes("\u{30fb}\u{3042}")));
    }

    #[test]
    fn test_text_round_trip() {
        let e = Windows31JEncoding;
        let codes = testutils::codes(testutils::JAPANESE_TEXT);
        let encoded = e.encode(&STANDARD, &codes);
        assert_eq!(e.decode(&STANDARD, &encoded), Ok(codes));
    }
}

/**
 * ISO-2022-JP.
 *
 * This is a 7-bit encoding which switches between character sets with escape sequences:
 * ASCII (`ESC ( B`, or JIS X 0201 Roman `ESC ( J` read as ASCII),
 * JIS X 0201 halfwidth katakana (`ESC ( I`),
 * JIS X 0208 (`ESC $ @` or `ESC $ B`, optionally announced by `ESC & @`) and
 * JIS X 0212 (`ESC $ ( D`).
 * It is therefore closer to ISO-2022-JP-1 than to RFC 1468.
 *
 * The encoder writes an escape sequence only when the character set actually changes,
 * and always returns to ASCII at the end.
 */
#[derive(Clone, Copy)]
pub struct ISO2022JPEncoding;

/// The encoding half of the ISO-2022-JP state machine.
#[derive(Clone, Copy, Debug)]
pub struct ISO2022JPEncoder {
    st: Mode,
}

impl ISO2022JPEncoder {
    pub fn new() -> ISO2022JPEncoder {
        ISO2022JPEncoder { st: Mode::Ascii }
    }

    /// Writes one character, switching the mode first if needed.
    pub fn feed(&mut self, ch: JisChar, output: &mut dyn ByteWriter) {
        let mode = ch.mode();
        if mode != self.st {
            output.write_bytes(mode.designator());
            self.st = mode;
        }
        match ch {
            JisChar::Ascii(b) | JisChar::Katakana(b) => output.write_byte(b),
            JisChar::Kanji(code) | JisChar::Extension(code) => output.write_bytes(&unpack(code)),
        }
    }

    /// Returns to ASCII if the stream is not already there.
    pub fn finish(&mut self, output: &mut dyn ByteWriter) {
        if self.st != Mode::Ascii {
            output.write_bytes(Mode::Ascii.designator());
            self.st = Mode::Ascii;
        }
    }
}

impl Default for ISO2022JPEncoder {
    fn default() -> ISO2022JPEncoder { ISO2022JPEncoder::new() }
}

/// The decoding half of the ISO-2022-JP state machine.
fn scan_iso2022jp<F>(tables: &dyn CodeTables, input: &[u8], mut f: F) -> Result<(), CodecError>
        where F: FnMut(JisChar) {
    let mut st = Mode::Ascii;
    let mut cur = ByteCursor::new(input);
    while let Some(b) = cur.read() {
        let start = cur.pos() - 1;
        if b == 0x1b {
            let first = cur.next_in(start)?;
            let second = cur.next_in(start)?;
            cur.skip(Mode::designator_len(first, second) - 2, start)?;
            let designator = &input[start + 1..cur.pos()];
            let next = st.designate(designator);
            if next == st {
                trace!("escape sequence {:02x?} at byte {} leaves the mode at {:?}", designator, start, st);
            }
            st = next;
            continue;
        }
        let ch = match st {
            Mode::Ascii => JisChar::Ascii(b),
            Mode::Katakana => JisChar::Katakana(b),
            Mode::Kanji => JisChar::kanji(tables, pack(b, cur.next_in(start)?)),
            Mode::Extension => JisChar::extension(tables, pack(b, cur.next_in(start)?)),
        };
        f(ch);
    }
    Ok(())
}

impl Encoding for ISO2022JPEncoding {
    fn name(&self) -> &'static str { "JIS" }

    // every character may need a 4-byte escape before its 2 bytes, plus the final `ESC ( B`
    fn max_encoded_len(&self, input_len: usize) -> usize { input_len * 6 + 3 }

    fn raw_decode(&self, tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError> {
        output.writer_hint(input.len());
        scan_iso2022jp(tables, input, |ch| output.write_code(ch.to_code_point(tables)))
    }

    fn raw_encode(&self, tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter) {
        output.writer_hint(input.len());
        let mut encoder = ISO2022JPEncoder::new();
        for &cp in input {
            encoder.feed(JisChar::classify(tables, cp), output);
        }
        encoder.finish(output);
    }

    fn jis_codec(&self) -> Option<&dyn JisCodec> { Some(self) }
}

impl JisCodec for ISO2022JPEncoding {
    fn raw_decode_jis(&self, tables: &dyn CodeTables, input: &[u8],
                      output: &mut Vec<JisChar>) -> Result<(), CodecError> {
        scan_iso2022jp(tables, input, |ch| output.push(ch.normalize(tables)))
    }

    fn raw_encode_jis(&self, _tables: &dyn CodeTables, input: &[JisChar],
                      output: &mut dyn ByteWriter) {
        let mut encoder = ISO2022JPEncoder::new();
        for &ch in input {
            encoder.feed(ch, output);
        }
        encoder.finish(output);
    }
}
