// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UCS-2, as little endian UTF-16 code units.

use log::trace;

use crate::index::CodeTables;
use crate::types::*;
use crate::util::ByteCursor;

/**
 * UCS-2, or rather UTF-16 in little endian without a byte order mark.
 *
 * One code unit takes 2 bytes.
 * Codepoints beyond U+FFFF are written as a surrogate pair,
 * and a surrogate pair is read back as one codepoint.
 * Unpaired surrogates are passed through as they are in both directions.
 */
#[derive(Clone, Copy)]
pub struct UTF16LEEncoding;

#[inline(always)]
fn is_high_surrogate(unit: u16) -> bool {
    (0xd800..=0xdbff).contains(&unit)
}

#[inline(always)]
fn is_low_surrogate(unit: u16) -> bool {
    (0xdc00..=0xdfff).contains(&unit)
}

fn write_unit(unit: u16, output: &mut dyn ByteWriter) {
    output.write_bytes(&unit.to_le_bytes());
}

impl Encoding for UTF16LEEncoding {
    fn name(&self) -> &'static str { "UCS2" }
    fn max_encoded_len(&self, input_len: usize) -> usize { input_len * 4 }

    fn raw_decode(&self, _tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError> {
        output.writer_hint(input.len() / 2);

        let mut cur = ByteCursor::new(input);
        while let Some(lsb) = cur.read() {
            let start = cur.pos() - 1;
            let unit = u16::from_le_bytes([lsb, cur.next_in(start)?]);
            if is_high_surrogate(unit) {
                if let (Some(lsb), Some(msb)) = (cur.peek(0), cur.peek(1)) {
                    let trail = u16::from_le_bytes([lsb, msb]);
                    if is_low_surrogate(trail) {
                        cur.skip(2, start)?;
                        let cp = 0x10000 + ((unit as CodePoint - 0xd800) << 10)
                                         + (trail as CodePoint - 0xdc00);
                        output.write_code(cp);
                        continue;
                    }
                }
            }
            output.write_code(unit as CodePoint);
        }
        Ok(())
    }

    fn raw_encode(&self, _tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter) {
        output.writer_hint(input.len() * 2);
        for &cp in input {
            match cp {
                0x0000..=0xffff => write_unit(cp as u16, output),
                0x10000..=0x10ffff => {
                    let c = cp - 0x10000;
                    write_unit(0xd800 | (c >> 10) as u16, output);
                    write_unit(0xdc00 | (c & 0x3ff) as u16, output);
                }
                _ => {
                    trace!("{:#x} is beyond the reach of UTF-16", cp);
                    write_unit(UNKNOWN_GLYPH as u16, output);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UTF16LEEncoding;
    use crate::index::STANDARD;
    use crate::types::*;

    #[test]
    fn test_encoder_valid() {
        let e = UTF16LEEncoding;
        assert_encode_ok!(e, "\u{0}\
                              \u{1}\u{2}\u{3}\u{4}\u{5}\u{6}\u{7}\
                              \u{8}\u{9}\u{a}\u{b}\u{c}\u{d}\u{e}\u{f}\
                              \u{1f}",
                          [0x00, 0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00,
                           0x04, 0x00, 0x05, 0x00, 0x06, 0x00, 0x07, 0x00,
                           0x08, 0x00, 0x09, 0x00, 0x0a, 0x00, 0x0b, 0x00,
                           0x0c, 0x00, 0x0d, 0x00, 0x0e, 0x00, 0x0f, 0x00,
                           0x1f, 0x00]);
        assert_encode_ok!(e, "A", [0x41, 0x00]);
        assert_encode_ok!(e, "", []);
        assert_encode_ok!(e, "\u{3042}", [0x42, 0x30]);
        assert_encode_ok!(e, "\u{65e5}\u{672c}", [0xe5, 0x65, 0x2c, 0x67]);
        assert_encode_ok!(e, "\u{ffff}", [0xff, 0xff]);
        assert_encode_ok!(e, "\u{10000}", [0x00, 0xd8, 0x00, 0xdc]);
        assert_encode_ok!(e, "\u{1f600}", [0x3d, 0xd8, 0x00, 0xde]);
        assert_encode_ok!(e, "\u{10ffff}", [0xff, 0xdb, 0xff, 0xdf]);
    }

    #[test]
    fn test_encoder_beyond_unicode() {
        let e = UTF16LEEncoding;
        assert_eq!(e.encode(&STANDARD, &[0x41, 0x110000]), [0x41, 0x00, 0xfb, 0x30]);
        // unpaired surrogates come out as they went in
        assert_eq!(e.encode(&STANDARD, &[0xd800, 0x41]), [0x00, 0xd8, 0x41, 0x00]);
    }

    #[test]
    fn test_decoder_valid() {
        let d = UTF16LEEncoding;
        assert_decode_ok!(d, [0x41, 0x00], "A");
        assert_decode_ok!(d, [], "");
        assert_decode_ok!(d, [0x42, 0x30], "\u{3042}");
        assert_decode_ok!(d, [0xe5, 0x65, 0x2c, 0x67], "\u{65e5}\u{672c}");
        assert_decode_ok!(d, [0x3d, 0xd8, 0x00, 0xde], "\u{1f600}");
        assert_decode_ok!(d, [0x41, 0x00, 0xff, 0xdb, 0xff, 0xdf, 0x42, 0x00], "A\u{10ffff}B");
    }

    #[test]
    fn test_decoder_unpaired() {
        let d = UTF16LEEncoding;
        assert_eq!(d.decode(&STANDARD, &[0x00, 0xd8, 0x41, 0x00]), Ok(vec![0xd800, 0x41]));
        assert_eq!(d.decode(&STANDARD, &[0x00, 0xd8]), Ok(vec![0xd800]));
        assert_eq!(d.decode(&STANDARD, &[0x00, 0xdc, 0x00, 0xd8]), Ok(vec![0xdc00, 0xd800]));
        assert_eq!(d.decode(&STANDARD, &[0x00, 0xd8, 0x00, 0xd8, 0x00, 0xdc]),
                   Ok(vec![0xd800, 0x10000]));
    }

    #[test]
    fn test_decoder_truncated() {
        let d = UTF16LEEncoding;
        assert_decode_err!(d, [0x41], 0);
        assert_decode_err!(d, [0x41, 0x00, 0x42], 2);
        // a high surrogate followed by a lone byte is truncated at that byte
        assert_decode_err!(d, [0x3d, 0xd8, 0x00], 2);
    }
}
