#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate rs_gto;
use rs_gto::core::Card;
use rs_gto::holdem::evaluate;

fuzz_target!(|input: (Vec<Card>, usize)| {
    let (mut cards, split) = input;
    if cards.len() < 5 || cards.len() > 7 {
        return;
    }
    let split = split % cards.len();
    let forward = evaluate(&cards[..split], &cards[split..]);
    cards.reverse();
    let backward = evaluate(&cards[..split], &cards[split..]);
    match (forward, backward) {
        (Ok(f), Ok(b)) => {
            assert_eq!(f, b);
            assert_eq!(f.category, b.category);
        }
        (Err(_), Err(_)) => {}
        _ => panic!("only one order evaluated"),
    }
});
