//! Fuzzing entry point shared by `main_libfuzzer` and `main_cli`.
//!
//! The first line of the input is a tag name followed by attribute keys, separated by spaces. The
//! rest of the input is the markup to scan.
use std::env;

mod filter_invariants;
mod reader_agreement;

pub fn run(s: &[u8]) {
    let (header, input) = match s.iter().position(|&b| b == b'\n') {
        Some(i) => (&s[..i], &s[i + 1..]),
        None => (&b""[..], s),
    };

    let mut words = header.split(|&b| b == b' ');
    let tag = words.next().unwrap_or_default().to_vec();
    let keys: Vec<Vec<u8>> = words.map(<[u8]>::to_vec).collect();

    // unconditionally run the scanner against raw bytes, it should never crash. we rely on running
    // in debug mode such that this is not just simply optimized away
    for _ in getattr::Scanner::new(input) {}

    if env::var("FUZZ_READER_AGREEMENT").as_deref() != Ok("0") {
        reader_agreement::run_reader_agreement(&tag, &keys, input);
    }

    if env::var("FUZZ_FILTER_INVARIANTS").as_deref() != Ok("0") {
        filter_invariants::validate_filter_invariants(&tag, &keys, input);
    }
}
