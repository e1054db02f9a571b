use std::fmt;
use std::str::FromStr;

use crate::core::{Card, GtoError, Suit, Value};

/// Number of two card combinations in a 52 card deck.
pub const TOTAL_COMBOS: u32 = 1326;

/// Enum to represent how the suits of a hand correspond to each other.
/// `Suitedness::Suited` will mean that both cards have the same suit
/// `Suitedness::OffSuit` will mean that both cards have different suits
/// Pairs are always `OffSuit`.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suitedness {
    /// Both of the cards are the same suit
    Suited,
    /// The cards are of different suits
    OffSuit,
}

/// One of the 169 starting hand classes, like `AA`, `AKs` or `AKo`.
///
/// Each class stands for every concrete two card combination that
/// shares its values and suit relationship.
#[derive(Debug, Eq, PartialEq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct HandClass {
    /// Higher or equal value.
    high: Value,
    /// Lower or equal value.
    low: Value,
    suited: Suitedness,
}

impl HandClass {
    /// Create a class from two values in any order.
    /// A pair can't be suited, so pairs are always stored as `OffSuit`.
    ///
    /// ```
    /// use rs_gto::core::Value;
    /// use rs_gto::holdem::{HandClass, Suitedness};
    ///
    /// let aks = HandClass::new(Value::King, Value::Ace, Suitedness::Suited);
    /// assert_eq!("AKs", aks.to_string());
    /// ```
    pub fn new(v1: Value, v2: Value, suited: Suitedness) -> Self {
        let (high, low) = if v1 >= v2 { (v1, v2) } else { (v2, v1) };
        let suited = if high == low {
            Suitedness::OffSuit
        } else {
            suited
        };
        Self { high, low, suited }
    }

    /// Is this starting hand a pocket pair?
    pub fn is_pair(&self) -> bool {
        self.high == self.low
    }

    pub fn is_suited(&self) -> bool {
        self.suited == Suitedness::Suited
    }

    pub fn high(&self) -> Value {
        self.high
    }

    pub fn low(&self) -> Value {
        self.low
    }

    /// How many concrete combinations this class stands for.
    pub fn combo_count(&self) -> u32 {
        if self.is_pair() {
            6
        } else if self.is_suited() {
            4
        } else {
            12
        }
    }

    /// Every concrete two card combination of this class.
    ///
    /// The higher card always comes first.
    pub fn combos(&self) -> Vec<(Card, Card)> {
        let suits = Suit::suits();
        let mut hands = Vec::with_capacity(self.combo_count() as usize);
        if self.is_pair() {
            for (i, suit_one) in suits.iter().enumerate() {
                for suit_two in &suits[i + 1..] {
                    hands.push((
                        Card::new(self.high, *suit_one),
                        Card::new(self.low, *suit_two),
                    ));
                }
            }
        } else if self.is_suited() {
            for s in suits {
                hands.push((Card::new(self.high, s), Card::new(self.low, s)));
            }
        } else {
            for suit_one in suits {
                for suit_two in suits {
                    if suit_one != suit_two {
                        hands.push((Card::new(self.high, suit_one), Card::new(self.low, suit_two)));
                    }
                }
            }
        }
        hands
    }

    /// The class of two concrete cards.
    ///
    /// ```
    /// use rs_gto::core::{Card, Suit, Value};
    /// use rs_gto::holdem::HandClass;
    ///
    /// let class = HandClass::from_cards(
    ///     Card::new(Value::Nine, Suit::Heart),
    ///     Card::new(Value::Ten, Suit::Spade),
    /// );
    /// assert_eq!("T9o", class.to_string());
    /// ```
    pub fn from_cards(one: Card, two: Card) -> Self {
        let suited = if one.suit == two.suit {
            Suitedness::Suited
        } else {
            Suitedness::OffSuit
        };
        Self::new(one.value, two.value, suited)
    }

    /// Create every possible unique starting hand class.
    pub fn all() -> Vec<Self> {
        let mut hands = Vec::with_capacity(169);
        let values = Value::values();
        for (i, value_one) in values.iter().enumerate() {
            for value_two in &values[i..] {
                hands.push(Self::new(*value_one, *value_two, Suitedness::OffSuit));
                if value_one != value_two {
                    hands.push(Self::new(*value_one, *value_two, Suitedness::Suited));
                }
            }
        }
        hands
    }
}

impl fmt::Display for HandClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.high.to_char(), self.low.to_char())?;
        match (self.is_pair(), self.suited) {
            (true, _) => Ok(()),
            (false, Suitedness::Suited) => write!(f, "s"),
            (false, Suitedness::OffSuit) => write!(f, "o"),
        }
    }
}

/// Value chars inside hand notation are upper case only, since `s` and
/// `o` mean suited and off suit there.
pub(crate) fn notation_value(c: char) -> Option<Value> {
    if c.is_ascii_lowercase() {
        None
    } else {
        Value::from_char(c)
    }
}

/// Parse the canonical notation. The high card has to come first,
/// and suited or off suit has to be given for anything that isn't a pair.
impl FromStr for HandClass {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GtoError::InvalidHandNotation(s.to_string());
        let chars: Vec<char> = s.chars().collect();
        let value = notation_value;
        match chars.as_slice() {
            [a, b] if a == b => {
                let v = value(*a).ok_or_else(invalid)?;
                Ok(Self::new(v, v, Suitedness::OffSuit))
            }
            [h, l, kind] => {
                let high = value(*h).ok_or_else(invalid)?;
                let low = value(*l).ok_or_else(invalid)?;
                let suited = match kind {
                    's' => Suitedness::Suited,
                    'o' => Suitedness::OffSuit,
                    _ => return Err(invalid()),
                };
                if high <= low {
                    return Err(invalid());
                }
                Ok(Self::new(high, low, suited))
            }
            _ => Err(invalid()),
        }
    }
}

/// How many concrete combinations a hand class string stands for.
///
/// Pairs are 6, suited hands 4 and off suit hands 12. Anything that
/// doesn't parse as a [`HandClass`] is 0, including specific hands like
/// `AsKd` and misordered ones like `KAs`.
///
/// ```
/// use rs_gto::holdem::combo_count;
///
/// assert_eq!(6, combo_count("AA"));
/// assert_eq!(4, combo_count("AKs"));
/// assert_eq!(12, combo_count("AKo"));
/// assert_eq!(0, combo_count("AK"));
/// ```
pub fn combo_count(notation: &str) -> u32 {
    notation
        .parse::<HandClass>()
        .map(|class| class.combo_count())
        .unwrap_or(0)
}

/// Every concrete combination for a hand class, or the single combination
/// of a specific hand like `AsKd`.
pub fn hand_combos(notation: &str) -> Result<Vec<(Card, Card)>, GtoError> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() == 4 {
        let one: Card = chars[..2].iter().collect::<String>().parse()?;
        let two: Card = chars[2..].iter().collect::<String>().parse()?;
        if one == two {
            return Err(GtoError::DuplicateCard(one));
        }
        return Ok(vec![(one, two)]);
    }
    Ok(notation.parse::<HandClass>()?.combos())
}

/// The hand class string of exactly two concrete cards.
///
/// ```
/// use rs_gto::core::parse_board;
/// use rs_gto::holdem::simplify_hand;
///
/// assert_eq!("AKs", simplify_hand(&parse_board("KhAh").unwrap()).unwrap());
/// assert_eq!("QQ", simplify_hand(&parse_board("QsQd").unwrap()).unwrap());
/// ```
pub fn simplify_hand(cards: &[Card]) -> Result<String, GtoError> {
    match cards {
        [one, two] => Ok(HandClass::from_cards(*one, *two).to_string()),
        _ => Err(GtoError::InvalidHandSize(cards.len())),
    }
}
