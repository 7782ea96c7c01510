// This is a part of encoding-jis.
// Copyright (c) 2013-2014, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

//! Macros and utilities for testing.

use crate::index::CodeTables;
use crate::types::{CodePoint, EncodedCode};

/// Asserts that the encoder turns a string into given bytes with the standard tables.
macro_rules! assert_encode_ok {
    ($this:expr, $input:expr, $output:expr) => ({
        let input = $crate::testutils::codes(&$input);
        let output: &[u8] = &$output;
        let buf = $this.encode(&$crate::index::STANDARD, &input);
        assert!(output == &buf[..],
                "encode({:?}) should return {:02x?}, but instead returned {:02x?}",
                $input, output, buf);
    })
}

/// Asserts that the decoder turns given bytes into a string with the standard tables.
macro_rules! assert_decode_ok {
    ($this:expr, $input:expr, $output:expr) => ({
        let input: &[u8] = &$input;
        let output = $crate::testutils::codes(&$output);
        let result = $this.decode(&$crate::index::STANDARD, input);
        assert!(result.as_ref() == Ok(&output),
                "decode({:02x?}) should return {:x?}, but instead returned {:x?}",
                input, output, result);
    })
}

/// Asserts that the decoder reports a sequence truncated at given offset.
macro_rules! assert_decode_err {
    ($this:expr, $input:expr, $upto:expr) => ({
        let input: &[u8] = &$input;
        let result = $this.decode(&$crate::index::STANDARD, input);
        let upto = result.as_ref().err().map(|e| e.upto);
        assert!(upto == Some($upto),
                "decode({:02x?}) should fail at byte {}, but instead returned {:x?}",
                input, $upto, result);
    })
}

/// Returns the code points of given string.
pub fn codes(s: &str) -> Vec<CodePoint> {
    s.chars().map(|c| c as CodePoint).collect()
}

/// A handful of mappings, enough to tell the injected tables from the standard ones.
pub struct FixtureTables {
    sjis: &'static [(EncodedCode, CodePoint)],
    jis: &'static [(EncodedCode, CodePoint)],
    ext: &'static [(EncodedCode, CodePoint)],
}

fn forward(table: &[(EncodedCode, CodePoint)], code: EncodedCode) -> Option<CodePoint> {
    table.iter().find(|&&(k, _)| k == code).map(|&(_, v)| v)
}

fn backward(table: &[(EncodedCode, CodePoint)], cp: CodePoint) -> Option<EncodedCode> {
    table.iter().find(|&&(_, v)| v == cp).map(|&(k, _)| k)
}

impl CodeTables for FixtureTables {
    fn sjis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> { forward(self.sjis, code) }
    fn ucs_to_sjis(&self, cp: CodePoint) -> Option<EncodedCode> { backward(self.sjis, cp) }
    fn jis_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> { forward(self.jis, code) }
    fn ucs_to_jis(&self, cp: CodePoint) -> Option<EncodedCode> { backward(self.jis, cp) }
    fn ext_to_ucs(&self, code: EncodedCode) -> Option<CodePoint> { forward(self.ext, code) }
    fn ucs_to_ext(&self, cp: CodePoint) -> Option<EncodedCode> { backward(self.ext, cp) }
}

/// Knows U+3042, U+30FB and (in JIS X 0212) U+736C, nothing else.
pub static FIXTURE: FixtureTables = FixtureTables {
    sjis: &[(0x82a0, 0x3042), (0x8145, 0x30fb)],
    jis: &[(0x2422, 0x3042), (0x2126, 0x30fb)],
    ext: &[(0x4b46, 0x736c)],
};

/// Some Japanese text to test.
//
// the first paragraphs of the article "Japanese Language" from Japanese Wikipedia.
// https://ja.wikipedia.org/w/index.php?title=%E6%97%A5%E6%9C%AC%E8%AA%9E&oldid=51443986
pub static JAPANESE_TEXT: &str =
    "日本語（にほんご、にっぽんご）とは、主に日本国内や日本人同士の間で使われている言語である。\
     日本は法令によって「公用語」を規定していないが、法令その他の公用文は日本語で記述され、\
     各種法令（裁判所法第74条、会社計算規則第57条、特許法施行規則第2条など）において\
     日本語を用いることが定められるなど事実上の公用語となっており、学校教育の「国語」でも\
     教えられる。使用人口について正確な統計はないが、日本国内の人口、および日本国外に住む\
     日本人や日系人、日本がかつて統治した地域の一部の住民など、約1億3千万人以上と考えられる。\
     統計によって前後する可能性はあるが、この数は世界の母語話者数で上位10位以内に入る人数である。";

#[test]
fn test_fixture_tables() {
    assert_eq!(FIXTURE.ucs_to_jis(0x3042), Some(0x2422));
    assert_eq!(FIXTURE.jis_to_ucs(0x467c), None);
    assert_eq!(FIXTURE.unknown_jis(), 0x2126);
    assert_eq!(FIXTURE.unknown_sjis(), 0x8145);
}
