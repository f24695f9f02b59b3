use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type CardId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    Spade,
    Heart,
    Diamond,
    Club,
    Joker,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
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
    Ace,
    SmallJoker,
    BigJoker,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default)]
    pub id: CardId,
    pub value: Value,
    pub suit: Suit,
}

impl Card {
    pub fn new(id: CardId, value: Value, suit: Suit) -> Self {
        Self { id, value, suit }
    }

    pub fn is_joker(&self) -> bool {
        self.suit == Suit::Joker
    }
}

impl Value {
    pub fn label(self) -> &'static str {
        match self {
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
            Value::SmallJoker => "small joker",
            Value::BigJoker => "big joker",
        }
    }
}

impl Suit {
    pub fn label(self) -> &'static str {
        match self {
            Suit::Spade => "SPADES",
            Suit::Heart => "HEARTS",
            Suit::Diamond => "DIAMONDS",
            Suit::Club => "CLUBS",
            Suit::Joker => "NO TRUMP",
        }
    }
}

/// Friend-declaration ordinal names; 0 is the "other" copy of a card the
/// declarer already holds.
pub const ORDINALS: [&str; 3] = ["OTHER", "FIRST", "SECOND"];

pub fn ordinal_label(ordinal: usize) -> &'static str {
    ORDINALS.get(ordinal).copied().unwrap_or("OTHER")
}
