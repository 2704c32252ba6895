//! Fuzz target for the full metadata resolution pipeline.
//!
//! Run with: cargo +nightly fuzz run fuzz_metadata_resolve
//!
//! This spreads arbitrary strings across every raw slot and exercises
//! `Metadata::resolve()` to find panics in the validators. Resolution may
//! reject the input, but it must not panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let raw = buildstamp::RawMetadata {
            author: s.to_owned(),
            author_url: s.to_owned(),
            date: s.to_owned(),
            dev: s.to_owned(),
            sha: s.to_owned(),
            url: s.to_owned(),
            version: s.to_owned(),
            ..Default::default()
        };
        let _ = buildstamp::Metadata::resolve(raw);
    }
});
