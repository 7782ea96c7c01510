// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Conversion between two encodings given by their labels.

use log::debug;

use crate::index::{CodeTables, STANDARD};
use crate::label::encoding_from_label;
use crate::types::*;

/// Resolves a label or fails with `Error::UnsupportedEncoding`.
fn resolve(label: &str) -> Result<EncodingRef, Error> {
    encoding_from_label(label).ok_or_else(|| Error::UnsupportedEncoding(label.to_string()))
}

/**
 * Converts whole buffers between encodings, with a given set of lookup tables.
 *
 * Two legacy encodings are converted on the JIS plane
 * without going through Unicode (see `JisCodec`);
 * any other pair is decoded into code points and encoded again.
 */
#[derive(Clone, Copy)]
pub struct Transcoder<'t> {
    tables: &'t dyn CodeTables,
}

impl Transcoder<'static> {
    /// A transcoder with the standard tables.
    pub fn new() -> Transcoder<'static> {
        Transcoder { tables: &STANDARD }
    }
}

impl Default for Transcoder<'static> {
    fn default() -> Transcoder<'static> { Transcoder::new() }
}

impl<'t> Transcoder<'t> {
    /// A transcoder with custom tables.
    pub fn with_tables(tables: &'t dyn CodeTables) -> Transcoder<'t> {
        Transcoder { tables }
    }

    /// Converts `input` from the encoding labelled `from` to the one labelled `to`.
    /// Both labels are resolved before any conversion happens.
    pub fn convert(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, Error> {
        let from = resolve(from)?;
        let to = resolve(to)?;
        self.convert_with(from, to, input)
    }

    /// Same as `convert`, with already resolved encodings.
    pub fn convert_with(&self, from: EncodingRef, to: EncodingRef,
                        input: &[u8]) -> Result<Vec<u8>, Error> {
        match (from.jis_codec(), to.jis_codec()) {
            (Some(src), Some(dst)) if from.name() != to.name() => {
                debug!("converting {} bytes from {} to {} on the JIS plane",
                       input.len(), from.name(), to.name());
                let chars = src.decode_jis(self.tables, input)?;
                Ok(dst.encode_jis(self.tables, &chars))
            }
            _ => {
                debug!("converting {} bytes from {} to {} via Unicode",
                       input.len(), from.name(), to.name());
                let codes = from.decode(self.tables, input)?;
                Ok(to.encode(self.tables, &codes))
            }
        }
    }

    /// Decodes `input` in the encoding labelled `from` into code points.
    pub fn decode(&self, input: &[u8], from: &str) -> Result<Vec<CodePoint>, Error> {
        let from = resolve(from)?;
        Ok(from.decode(self.tables, input)?)
    }

    /// Encodes code points into the encoding labelled `to`.
    pub fn encode(&self, input: &[CodePoint], to: &str) -> Result<Vec<u8>, Error> {
        let to = resolve(to)?;
        Ok(to.encode(self.tables, input))
    }

    /// Encodes a string into the encoding labelled `to`.
    pub fn encode_str(&self, input: &str, to: &str) -> Result<Vec<u8>, Error> {
        let to = resolve(to)?;
        debug!("encoding a string of {} bytes to {}", input.len(), to.name());
        let codes: Vec<CodePoint> = input.chars().map(|c| c as CodePoint).collect();
        Ok(to.encode(self.tables, &codes))
    }
}

/// Converts `input` from the encoding labelled `from` to the one labelled `to`
/// with the standard tables.
///
/// ```
/// let sjis = encoding_jis::convert("\u{3042}".as_bytes(), "UTF-8", "Shift_JIS").unwrap();
/// assert_eq!(sjis, [0x82, 0xa0]);
/// ```
pub fn convert(input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, Error> {
    Transcoder::new().convert(input, from, to)
}

/// Encodes a string into the encoding labelled `to` with the standard tables.
///
/// ```
/// let jis = encoding_jis::encode_str("\u{3042}", "ISO-2022-JP").unwrap();
/// assert_eq!(jis, b"\x1b$B$\"\x1b(B");
/// ```
pub fn encode_str(input: &str, to: &str) -> Result<Vec<u8>, Error> {
    Transcoder::new().encode_str(input, to)
}
