/// All 169 starting hand classes ordered by approximate preflop strength,
/// strongest first.
pub const HAND_RANKING: [&str; 169] = [
    "AA", "KK", "QQ", "AKs", "JJ", "AQs", "KQs", "AJs", "KJs", "TT", //
    "AKo", "ATs", "QJs", "KTs", "QTs", "JTs", "99", "AQo", "A9s", "KQo", //
    "K9s", "T9s", "J9s", "Q9s", "A8s", "88", "A5s", "A7s", "A4s", "A6s", //
    "A3s", "K8s", "T8s", "A2s", "98s", "J8s", "77", "Q8s", "K7s", "AJo", //
    "87s", "66", "K6s", "ATo", "97s", "76s", "T7s", "K5s", "55", "J7s", //
    "86s", "KJo", "65s", "Q7s", "K4s", "K3s", "K2s", "96s", "44", "QJo", //
    "75s", "54s", "A9o", "T6s", "KTo", "J6s", "Q6s", "33", "85s", "64s", //
    "QTo", "22", "53s", "JTo", "K9o", "J9o", "T9o", "Q9o", "Q5s", "Q4s", //
    "Q3s", "Q2s", "74s", "43s", "A8o", "A5o", "A7o", "A4o", "A6o", "A3o", //
    "95s", "63s", "A2o", "J5s", "J4s", "J3s", "J2s", "52s", "84s", "42s", //
    "T8o", "98o", "J8o", "Q8o", "73s", "87o", "32s", "T5s", "T4s", "T3s", //
    "T2s", "62s", "97o", "76o", "K8o", "86o", "65o", "94s", "93s", "92s", //
    "T7o", "54o", "83s", "75o", "82s", "K7o", "K6o", "72s", "96o", "J7o", //
    "K5o", "T6o", "K4o", "K3o", "K2o", "85o", "Q7o", "64o", "53o", "J6o", //
    "Q6o", "Q5o", "Q4o", "Q3o", "Q2o", "74o", "43o", "95o", "63o", "84o", //
    "42o", "T5o", "T4o", "T3o", "T2o", "52o", "J5o", "J4o", "J3o", "J2o", //
    "73o", "32o", "62o", "94o", "93o", "92o", "83o", "82o", "72o",
];

/// Position of a hand class in `HAND_RANKING`. Anything that isn't in
/// the table gets `HAND_RANKING.len()` so it sorts after every real class.
///
/// ```
/// use rs_gto::holdem::strength_index;
///
/// assert_eq!(0, strength_index("AA"));
/// assert_eq!(168, strength_index("72o"));
/// assert_eq!(169, strength_index("nope"));
/// ```
pub fn strength_index(hand: &str) -> usize {
    HAND_RANKING
        .iter()
        .position(|&h| h == hand)
        .unwrap_or(HAND_RANKING.len())
}
