use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const JOKER_TOKEN: &str = "JOKER";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("{0} is not a valid rank")]
    InvalidRank(String),
    #[error("{0} is not a valid suit")]
    InvalidSuit(String),
    #[error("empty card notation")]
    Empty,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
        }
    }

    pub fn from_symbol(symbol: char) -> Result<Self, CardError> {
        match symbol {
            '♠' => Ok(Suit::Spades),
            '♥' => Ok(Suit::Hearts),
            '♣' => Ok(Suit::Clubs),
            '♦' => Ok(Suit::Diamonds),
            other => Err(CardError::InvalidSuit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Position in a suit run, ace low: 1 for ace up to 13 for king.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Result<Self, CardError> {
        match number {
            1..=13 => Ok(Self::ALL[usize::from(number - 1)]),
            other => Err(CardError::InvalidRank(other.to_string())),
        }
    }

    /// Jack, queen and king.
    pub fn is_monkey(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    fn letter(self) -> Option<&'static str> {
        match self {
            Rank::Ace => Some("A"),
            Rank::Jack => Some("J"),
            Rank::Queen => Some("Q"),
            Rank::King => Some("K"),
            _ => None,
        }
    }

    fn from_notation(notation: &str) -> Result<Self, CardError> {
        match notation {
            "A" => Ok(Rank::Ace),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "T" | "D" => Ok(Rank::Ten),
            digits => {
                let number: u8 = digits
                    .parse()
                    .map_err(|_| CardError::InvalidRank(digits.to_string()))?;
                Self::from_number(number)
            }
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => f.write_str(letter),
            None => write!(f, "{}", self.number()),
        }
    }
}

/// A playing card. Jokers carry neither rank nor suit, so no arithmetic on
/// ranks can ever see one by accident.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub enum Card {
    Joker,
    Standard { rank: Rank, suit: Suit },
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card::Standard { rank, suit }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker)
    }

    pub fn rank(&self) -> Option<Rank> {
        match self {
            Card::Joker => None,
            Card::Standard { rank, .. } => Some(*rank),
        }
    }

    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Joker => None,
            Card::Standard { suit, .. } => Some(*suit),
        }
    }

    /// Numeric rank with the joker at 0, used only for ordering.
    pub fn rank_number(&self) -> u8 {
        self.rank().map(Rank::number).unwrap_or(0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Joker => f.write_str(JOKER_TOKEN),
            Card::Standard { rank, suit } => write!(f, "{}{}", rank, suit.symbol()),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let notation = raw.trim().to_uppercase();
        if notation.starts_with("JO") || notation.starts_with("JK") {
            return Ok(Card::Joker);
        }
        let mut chars = notation.chars();
        let suit = chars.next_back().ok_or(CardError::Empty)?;
        let suit = Suit::from_symbol(suit)?;
        let rank = Rank::from_notation(chars.as_str())?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Parses a whitespace separated list of cards, e.g. `"A♠ 10♥ jkr"`.
pub fn parse_cards(notation: &str) -> Result<Vec<Card>, CardError> {
    notation.split_whitespace().map(str::parse).collect()
}

pub fn format_cards(cards: &[Card]) -> String {
    let inner: Vec<String> = cards.iter().map(Card::to_string).collect();
    format!("[{}]", inner.join(","))
}
