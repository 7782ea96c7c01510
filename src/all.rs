// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! A list of all supported encodings. Useful for encodings fixed in the compile time.

use crate::codec;
use crate::types::EncodingRef;

macro_rules! unique {
    ($(#[$attr:meta])* var=$var:ident, mod=$($module:ident)::+, val=$val:ident) => (
        $(#[$attr])* pub static $var: &$($module)::+::$val = &$($module)::+::$val;
    )
}

unique!(var=UTF_8, mod=codec::utf_8, val=UTF8Encoding);
unique!(var=UCS_2, mod=codec::utf_16, val=UTF16LEEncoding);
unique!(var=WINDOWS_31J, mod=codec::japanese, val=Windows31JEncoding);
unique!(var=EUC_JP, mod=codec::japanese, val=EUCJPEncoding);
unique!(var=ISO_2022_JP, mod=codec::japanese, val=ISO2022JPEncoding);

/// Returns a list of references to the encodings available.
pub fn encodings() -> &'static [EncodingRef] {
    const ENCODINGS: &[EncodingRef] = &[
        &codec::utf_8::UTF8Encoding,
        &codec::utf_16::UTF16LEEncoding,
        &codec::japanese::Windows31JEncoding,
        &codec::japanese::EUCJPEncoding,
        &codec::japanese::ISO2022JPEncoding,
    ];
    ENCODINGS
}
