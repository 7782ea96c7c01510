// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!
 * Interface to the character encoding.
 *
 * # Whole-buffer interface
 *
 * Every conversion in this crate takes the entire input at once and produces a freshly
 * allocated output. There is no incremental state that outlives a call,
 * so a codec is just a unit struct implementing `Encoding`.
 *
 * Decoders turn bytes into a sequence of `CodePoint`s, and encoders turn such a sequence
 * back into bytes. A code point is kept as a bare `u32` rather than `char`
 * since the UTF-8 decoder does not validate its input
 * and UTF-16 code units may appear unpaired.
 *
 * Legacy encodings additionally implement `JisCodec`,
 * which works on the JIS plane (`JisChar`) and lets two legacy encodings be
 * converted to each other without a round trip through the Unicode tables.
 *
 * # Failure policy
 *
 * Characters without a mapping in the destination (or source) table are never an error:
 * they are silently replaced with `UNKNOWN_GLYPH`.
 * The only codec error is a multi-byte sequence cut off by the end of input,
 * reported as a `CodecError`.
 */

use std::borrow::Cow;
use std::{error, fmt};

use crate::codec::japanese::JisChar;
use crate::index::CodeTables;
use crate::util::OutputBuffer;

/// A Unicode scalar value, or whatever integer a lenient decoder reconstructed.
pub type CodePoint = u32;

/// Two encoded bytes packed as `high << 8 | low`, used as a key to the lookup tables.
pub type EncodedCode = u16;

/// U+30FB KATAKANA MIDDLE DOT, written in place of any character without a mapping.
pub const UNKNOWN_GLYPH: CodePoint = 0x30fb;

/// Error information from a decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecError {
    /// The byte offset of the first byte of the problematic sequence.
    pub upto: usize,
    /// A human-readable cause of the error.
    pub cause: Cow<'static, str>,
}

impl CodecError {
    /// An error for a multi-byte sequence starting at `upto` which the input ended in.
    pub fn truncated(upto: usize) -> CodecError {
        CodecError { upto, cause: Cow::Borrowed("incomplete sequence") }
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.cause, self.upto)
    }
}

impl error::Error for CodecError {}

/// An error from the transcoding entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The encoding name did not resolve to any supported encoding.
    UnsupportedEncoding(String),
    /// The input ended in the middle of a multi-byte sequence.
    TruncatedInput(CodecError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::UnsupportedEncoding(ref name) => write!(f, "unsupported encoding {:?}", name),
            Error::TruncatedInput(ref err) => write!(f, "truncated input: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::UnsupportedEncoding(_) => None,
            Error::TruncatedInput(ref err) => Some(err),
        }
    }
}

impl From<CodecError> for Error {
    fn from(err: CodecError) -> Error {
        Error::TruncatedInput(err)
    }
}

/// Byte writer used by encoders. In most cases this will be an `OutputBuffer<u8>`.
pub trait ByteWriter {
    /// Hints an expected lower bound on the length (in bytes) of the output
    /// until the next call to `writer_hint`,
    /// so that the writer can reserve the memory for writing.
    /// By default this method does nothing.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single byte.
    fn write_byte(&mut self, b: u8);

    /// Writes a number of bytes.
    fn write_bytes(&mut self, v: &[u8]);
}

impl ByteWriter for Vec<u8> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_byte(&mut self, b: u8) {
        self.push(b);
    }

    fn write_bytes(&mut self, v: &[u8]) {
        self.extend_from_slice(v);
    }
}

/// Code point writer used by decoders.
pub trait CodeWriter {
    /// Same as `ByteWriter::writer_hint`, counted in code points.
    fn writer_hint(&mut self, _expectedlen: usize) {}

    /// Writes a single code point.
    fn write_code(&mut self, c: CodePoint);
}

impl CodeWriter for Vec<CodePoint> {
    fn writer_hint(&mut self, expectedlen: usize) {
        self.reserve(expectedlen);
    }

    fn write_code(&mut self, c: CodePoint) {
        self.push(c);
    }
}

/// A reference to a statically known encoding,
/// for code where the encoding is not known at compile-time.
pub type EncodingRef = &'static (dyn Encoding + Send + Sync);

/// Character encoding.
pub trait Encoding {
    /// Returns the canonical name of given encoding, as resolved by `label`.
    fn name(&self) -> &'static str;

    /// The largest number of code points `input_len` bytes can decode to.
    fn max_decoded_len(&self, input_len: usize) -> usize {
        input_len
    }

    /// The largest number of bytes `input_len` code points can encode to.
    fn max_encoded_len(&self, input_len: usize) -> usize;

    /// Decodes the whole input, pushing code points to `output`.
    fn raw_decode(&self, tables: &dyn CodeTables, input: &[u8],
                  output: &mut dyn CodeWriter) -> Result<(), CodecError>;

    /// Encodes the whole input, pushing bytes to `output`. Never fails.
    fn raw_encode(&self, tables: &dyn CodeTables, input: &[CodePoint],
                  output: &mut dyn ByteWriter);

    /// Returns the JIS plane interface if this is a legacy Japanese encoding.
    fn jis_codec(&self) -> Option<&dyn JisCodec> {
        None
    }

    /// An easy-to-use interface to `raw_decode`.
    fn decode(&self, tables: &dyn CodeTables,
              input: &[u8]) -> Result<Vec<CodePoint>, CodecError> {
        let mut ret = OutputBuffer::with_bound(self.max_decoded_len(input.len()));
        self.raw_decode(tables, input, &mut ret)?;
        Ok(ret.into_vec())
    }

    /// An easy-to-use interface to `raw_encode`.
    fn encode(&self, tables: &dyn CodeTables, input: &[CodePoint]) -> Vec<u8> {
        let mut ret = OutputBuffer::with_bound(self.max_encoded_len(input.len()));
        self.raw_encode(tables, input, &mut ret);
        ret.into_vec()
    }
}

/// A legacy encoding that can be read and written on the JIS plane.
///
/// Converting between two such encodings through `JisCodec` keeps JIS X 0208 codes as they are,
/// instead of mapping them to Unicode and back.
pub trait JisCodec: Encoding {
    /// Decodes the whole input into JIS plane characters.
    fn raw_decode_jis(&self, tables: &dyn CodeTables, input: &[u8],
                      output: &mut Vec<JisChar>) -> Result<(), CodecError>;

    /// Encodes JIS plane characters. Characters the encoding cannot carry become `UNKNOWN_GLYPH`.
    fn raw_encode_jis(&self, tables: &dyn CodeTables, input: &[JisChar],
                      output: &mut dyn ByteWriter);

    /// An easy-to-use interface to `raw_decode_jis`.
    fn decode_jis(&self, tables: &dyn CodeTables,
                  input: &[u8]) -> Result<Vec<JisChar>, CodecError> {
        let mut ret = Vec::with_capacity(self.max_decoded_len(input.len()));
        self.raw_decode_jis(tables, input, &mut ret)?;
        Ok(ret)
    }

    /// An easy-to-use interface to `raw_encode_jis`.
    fn encode_jis(&self, tables: &dyn CodeTables, input: &[JisChar]) -> Vec<u8> {
        let mut ret = OutputBuffer::with_bound(self.max_encoded_len(input.len()));
        self.raw_encode_jis(tables, input, &mut ret);
        ret.into_vec()
    }
}
