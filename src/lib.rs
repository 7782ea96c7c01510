// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

/*!

# Encoding-JIS

Transcoding between Unicode and Japanese legacy encodings for Rust.

Supported encodings:

* `SJIS`: Shift_JIS, as Windows code page 932 with NEC/IBM extensions
* `EUCJP`: EUC-JP, with JIS X 0212 in its G3 set
* `JIS`: ISO-2022-JP, with halfwidth katakana and JIS X 0212 designations
* `UTF8`: UTF-8
* `UCS2`: UTF-16 code units in little endian

## Usage

To convert a buffer between two encodings given by their labels:

```
use encoding_jis::convert;

assert_eq!(convert("\u{65e5}\u{672c}".as_bytes(), "UTF-8", "EUC-JP").unwrap(),
           [0xc6, 0xfc, 0xcb, 0xdc]);
assert_eq!(convert(&[0x93, 0xfa, 0x96, 0x7b], "Shift_JIS", "ISO-2022-JP").unwrap(),
           b"\x1b$BF|K\\\x1b(B");
```

Labels are case-insensitive and accept a few common aliases (`CP932`, `ISO-2022-JP` etc.).
An unknown label is an error, checked before any conversion:

```
use encoding_jis::{convert, Error};

assert_eq!(convert(b"A", "UTF-8", "latin1"),
           Err(Error::UnsupportedEncoding("latin1".to_string())));
```

Characters without a mapping in the destination are never an error.
They are replaced with U+30FB KATAKANA MIDDLE DOT (`・`):

```
use encoding_jis::encode_str;

// U+E000 is a private use character
assert_eq!(encode_str("A\u{e000}", "SJIS").unwrap(), [0x41, 0x81, 0x45]);
```

The only error a conversion itself can return is
a multi-byte sequence cut off by the end of input:

```
use encoding_jis::{convert, Error};

match convert(&[0x41, 0x82], "SJIS", "UTF-8") {
    Err(Error::TruncatedInput(err)) => assert_eq!(err.upto, 1),
    other => panic!("unexpected {:?}", other),
}
```

Conversions between two legacy encodings happen on the JIS plane,
so a JIS X 0208 character keeps its row and cell even if the tables have no Unicode for it.
The lookup tables themselves can be replaced with a `CodeTables` implementation
handed to `Transcoder::with_tables`.

*/

pub use crate::types::*; // reexport
pub use crate::index::{CodeTables, StandardTables};
pub use crate::transcode::{convert, encode_str, Transcoder};

mod util;
#[cfg(test)] #[macro_use] mod testutils;

pub mod types;
pub mod index;

/// Codec implementations.
pub mod codec {
    pub mod utf_8;
    pub mod utf_16;
    pub mod japanese;
}

pub mod all;
pub mod label;
pub mod transcode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readme() {
        assert_eq!(all::WINDOWS_31J.encode(&index::STANDARD, &[0x3042]), [0x82, 0xa0]);
        assert_eq!(all::EUC_JP.decode(&index::STANDARD, &[0xa4, 0xa2]), Ok(vec![0x3042]));

        let sjis = label::encoding_from_label("cp932").unwrap();
        assert_eq!(sjis.name(), "SJIS");
        assert_eq!(sjis.decode(&index::STANDARD, &[0x82, 0xa0, 0xff, 0x41]),
                   Ok(vec![0x3042, 0x30fb]));
    }
}
