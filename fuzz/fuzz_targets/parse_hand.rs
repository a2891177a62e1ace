#![no_main]
#[macro_use]
extern crate libfuzzer_sys;

use std::str;

use poker_equity::core::{Hand, rank_partial};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            // Parsed hands never hold the same card twice.
            let result = rank_partial(&h[..]);
            if (1..=7).contains(&h.len()) {
                assert!(result.is_ok());
            } else {
                assert!(result.is_err());
            }
        }
    }
});
