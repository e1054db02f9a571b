use std::fmt;
use std::str::FromStr;

use super::GtoError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// Value characters in ascending order.
const VALUE_CHARS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// Anything past the ace is clamped to the ace.
    pub fn from_u8(v: u8) -> Self {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck, or
    /// generating all possible starting hands.
    pub const fn values() -> [Self; 13] {
        VALUES
    }

    /// Given a character parse that char into a value.
    /// Case is ignored as long as the char is ascii.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gto::core::Value;
    ///
    /// assert_eq!(Value::Ace, Value::from_char('A').unwrap());
    /// assert_eq!(Value::Ten, Value::from_char('t').unwrap());
    /// assert!(Value::from_char('1').is_none());
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        VALUE_CHARS
            .iter()
            .position(|&vc| vc == upper)
            .map(|i| VALUES[i])
    }

    /// Convert this Value to a char.
    pub fn to_char(self) -> char {
        VALUE_CHARS[self as usize]
    }

    /// The face value of the card, from 2 for a deuce to 14 for an ace.
    ///
    /// ```
    /// use rs_gto::core::Value;
    ///
    /// assert_eq!(2, Value::Two.face());
    /// assert_eq!(14, Value::Ace.face());
    /// ```
    pub fn face(self) -> u8 {
        self as u8 + 2
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Clubs
    Club = 1,
    /// Hearts
    Heart = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Self; 4] {
        SUITS
    }

    /// Take a u8 and convert it to a suit.
    pub fn from_u8(s: u8) -> Self {
        SUITS[usize::from(s & 3)]
    }

    /// Given a character that represents a suit try and parse that char.
    /// Upper case chars are accepted too.
    pub fn from_char(s: char) -> Option<Self> {
        match s.to_ascii_lowercase() {
            'd' => Some(Self::Diamond),
            's' => Some(Self::Spade),
            'h' => Some(Self::Heart),
            'c' => Some(Self::Club),
            _ => None,
        }
    }

    /// This Suit to a char
    pub fn to_char(self) -> char {
        match self {
            Self::Diamond => 'd',
            Self::Spade => 's',
            Self::Heart => 'h',
            Self::Club => 'c',
        }
    }

    /// Unicode symbol for the suit.
    pub fn symbol(self) -> char {
        match self {
            Self::Diamond => '\u{2666}',
            Self::Spade => '\u{2660}',
            Self::Heart => '\u{2665}',
            Self::Club => '\u{2663}',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first. The suit only breaks ties so that cards can
/// be sorted deterministically.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Pretty printed version with the unicode suit symbol.
    ///
    /// ```
    /// use rs_gto::core::{Card, Suit, Value};
    ///
    /// assert_eq!("A\u{2660}", Card::new(Value::Ace, Suit::Spade).pretty());
    /// ```
    pub fn pretty(&self) -> String {
        format!("{}{}", self.value.to_char(), self.suit.symbol())
    }
}

/// Cards pack into 0..52, four suits per value.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.value as u8 * 4 + card.suit as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx / 4),
            suit: Suit::from_u8(idx % 4),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Parse two character notation like `As` or `td`.
///
/// ```
/// use rs_gto::core::{Card, Suit, Value};
///
/// let card: Card = "Td".parse().unwrap();
/// assert_eq!(Card::new(Value::Ten, Suit::Diamond), card);
/// assert!("1s".parse::<Card>().is_err());
/// ```
impl FromStr for Card {
    type Err = GtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let notation = s.trim();
        let mut chars = notation.chars();
        let (Some(vc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GtoError::InvalidCardNotation(notation.to_string()));
        };
        let value = Value::from_char(vc).ok_or(GtoError::InvalidCardValue(vc))?;
        let suit = Suit::from_char(sc).ok_or(GtoError::InvalidCardSuit(sc))?;
        Ok(Self { value, suit })
    }
}

impl TryFrom<String> for Card {
    type Error = GtoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parse a run of cards such as a board. Spaces and commas are ignored.
///
/// ```
/// use rs_gto::core::parse_board;
///
/// let board = parse_board("As Kd, 2c").unwrap();
/// assert_eq!(3, board.len());
/// assert!(parse_board("AsK").is_err());
/// ```
pub fn parse_board(notation: &str) -> Result<Vec<Card>, GtoError> {
    let chars: Vec<char> = notation
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if chars.len() % 2 != 0 {
        return Err(GtoError::InvalidBoardNotation(notation.to_string()));
    }
    chars
        .chunks(2)
        .map(|pair| {
            let value = Value::from_char(pair[0]).ok_or(GtoError::InvalidCardValue(pair[0]))?;
            let suit = Suit::from_char(pair[1]).ok_or(GtoError::InvalidCardSuit(pair[1]))?;
            Ok(Card::new(value, suit))
        })
        .collect()
}
