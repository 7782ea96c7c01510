// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! UTF-8, the universal encoding.

use crate::index::CodeTables;
use crate::types::*;
use crate::util::ByteCursor;

/**
 * UTF-8 (UCS Transformation Format, 8-bit).
 *
 * This is a Unicode encoding compatible to ASCII (ISO/IEC 646:US)
 * and able to represent all Unicode codepoints uniquely and unambiguously.
 * It has a variable-length design,
 * where one codepoint may use 1 (up to U+007F), 2 (up to U+07FF), 3 (up to U+FFFF)
 * and 4 bytes (up to U+10FFFF) depending on its value.
 *
 * This implementation is lenient in both directions.
 * The decoder looks only at the high nibble of the first byte to determine the length,
 * and never validates continuation bytes nor rejects overlong forms.
 * The encoder accepts values up to `0x7FFFFFFF` and beyond, using the original 5- and 6-byte forms.
 */
#[derive(Clone, Copy)]
pub struct UTF8Encoding;

/// Writes `cp` in the (pre-2003) UTF-8 form of up to 6 bytes.
fn write_utf8(cp: CodePoint, output: &mut dyn ByteWriter) {
    #[inline(always)]
    fn cont(cp: CodePoint, shift: u32) -> u8 {
        0x80 | (cp >> shift & 0x3f) as u8
    }

    if cp < 0x80 {
        output.write_byte(cp as u8);
    } else if cp < 0x800 {
        output.write_bytes(&[0xc0 | (cp >> 6) as u8, cont(cp, 0)]);
    } else if cp < 0x10000 {
        output.write_bytes(&[0xe0 | (cp >> 12) as u8, cont(cp, 6), cont(cp, 0)]);
    } else if cp < 0x200000 {
        output.write_bytes(&[0xf0 | (cp >> 18) as u8, cont(cp, 12), cont(cp, 6), cont(cp, 0)]);
    } else if cp < 0x4000000 {
        output.write_bytes(&[0xf8 | (cp >> 24) as u8,
                             cont(cp, 18), cont(cp, 12), cont(cp, 6), cont(cp, 0)]);
    } else {
        output.write_bytes(&[0xfc | (cp >> 30) as u8,
                             cont(cp, 24), cont(cp, 18), cont(cp, 12), cont(cp, 6), cont(cp, 0)]);
    }
}

impl Encoding for UTF8Encoding {
    fn name(&self) -> &'static str { "UTF8" }
    fn max_encoded_len(&self, input_len: usize) -> usize { input_len * 6 }

    fn raw_decode(&self, _tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError> {
        output.writer_hint(input.len());

        let mut cur = ByteCursor::new(input);
        while let Some(lead) = cur.read() {
            let start = cur.pos() - 1;
            let lead = lead as CodePoint;
            let mut cont = || cur.next_in(start).map(|b| b as CodePoint & 0x3f);
            let cp = match lead >> 4 {
                0x0..=0x7 => lead,
                0xc | 0xd => (lead & 0x1f) << 6 | cont()?,
                0xe => (lead & 0x0f) << 12 | cont()? << 6 | cont()?,
                _ => (lead & 0x07) << 18 | cont()? << 12 | cont()? << 6 | cont()?,
            };
            output.write_code(cp);
        }
        Ok(())
    }

    fn raw_encode(&self, _tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter) {
        output.writer_hint(input.len());
        for &cp in input {
            write_utf8(cp, output);
        }
    }
}
