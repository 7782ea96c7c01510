// This is a part of encoding-jis.
// Copyright (c) 2014-2015, Kang Seonghoon.
// See README.md and LICENSE.txt for details.

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use encoding_jis::label::encoding_from_label;
use encoding_jis::{EncodingRef, Transcoder};
use getopts::Options;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut opts = Options::new();
    opts.optopt("f", "from-code", "set input encoding (default UTF8)", "NAME");
    opts.optopt("t", "to-code", "set output encoding (default UTF8)", "NAME");
    opts.optopt("o", "output", "output file", "FILE");
    opts.optflag("h", "help", "print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(m) => m,
        Err(e) => fail(&e.to_string()),
    };
    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options] [INPUT]", args[0]);
        println!("{}", opts.usage(&format!("{}\nConverts Japanese text between encodings.", brief)));
        return;
    }

    let inenc = resolve(matches.opt_str("f").as_deref(), "input");
    let outenc = resolve(matches.opt_str("t").as_deref(), "output");

    let mut input: Box<dyn Read> = match matches.free.first().map(|s| &s[..]) {
        Some("-") | None => Box::new(io::stdin()),
        Some(f) => match File::open(f) {
            Ok(file) => Box::new(file),
            Err(e) => fail(&format!("cannot open {}: {}", f, e)),
        },
    };
    let mut output: Box<dyn Write> = match matches.opt_str("o").as_deref() {
        Some("-") | None => Box::new(io::stdout()),
        Some(f) => match File::create(f) {
            Ok(file) => Box::new(file),
            Err(e) => fail(&format!("cannot create {}: {}", f, e)),
        },
    };

    let mut buf = Vec::new();
    if let Err(e) = input.read_to_end(&mut buf) {
        fail(&format!("read error: {}", e));
    }
    let converted = match Transcoder::new().convert_with(inenc, outenc, &buf) {
        Ok(v) => v,
        Err(e) => fail(&format!("conversion error: {}", e)),
    };
    if let Err(e) = output.write_all(&converted).and_then(|_| output.flush()) {
        fail(&format!("write error: {}", e));
    }
}

fn resolve(name: Option<&str>, what: &str) -> EncodingRef {
    match name {
        Some(name) => match encoding_from_label(name) {
            Some(enc) => enc,
            None => fail(&format!("invalid {} encoding name {}", what, name)),
        },
        None => encoding_jis::all::UTF_8 as EncodingRef,
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("recode: {}", msg);
    process::exit(1);
}
