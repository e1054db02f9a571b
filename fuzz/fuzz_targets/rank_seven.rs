#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_gto;
use std::str;
use rs_gto::core::{CardIter, Rankable, parse_board};
use rs_gto::holdem::evaluate;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(cards) = parse_board(s) {
            if cards.len() == 7 {
                if let Ok(r_seven) = evaluate(&cards[..2], &cards[2..]) {
                    let r_five_max = CardIter::new(&cards[..], 5)
                        .map(|cv| cv.rank_five())
                        .max()
                        .unwrap();
                    assert_eq!(r_five_max, r_seven);
                }
            }
        }
    }
});
