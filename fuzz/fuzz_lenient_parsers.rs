//! Fuzz target for the lenient parsers.
//!
//! Run with: cargo +nightly fuzz run fuzz_lenient_parsers
//!
//! Version and author parsing must degrade to absent/verbatim values on
//! arbitrary input; they must never panic or error.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = buildstamp::VersionParts::parse(s);
        let _ = buildstamp::Author::parse(s);
    }
});
