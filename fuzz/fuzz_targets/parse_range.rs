#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_gto;
use std::str;
use rs_gto::holdem::{parse_range, strength_index};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        let range = parse_range(s);
        let indexes: Vec<usize> = range.iter().map(|h| strength_index(h)).collect();
        assert!(indexes.windows(2).all(|w| w[0] <= w[1]));
        let _ = range.total_combos();
    }
});
