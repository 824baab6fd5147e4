use crate::cards::{parse_cards, Card};
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly five cards, got {0}")]
    CardCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's five-card hand.
///
/// Input order carries no meaning; the evaluator sorts a copy before
/// analysis. The hand itself keeps the cards as given.
///
/// ```
/// use showdown_rs::hand::Hand;
///
/// let hand: Hand = "TH JH QH KH AH".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; 5]);

impl Hand {
    pub const fn new(cards: [Card; 5]) -> Self {
        Self(cards)
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match <[Card; 5]>::try_from(slice) {
            Ok(cards) => Ok(Self(cards)),
            Err(_) => Err(HandError::CardCount(slice.len())),
        }
    }

    pub const fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    /// Copy of the cards sorted ascending by rank, then by suit symbol.
    /// The suit component only makes the order deterministic for equal
    /// ranks; the sequence scan needs the rank order.
    pub fn sorted(&self) -> [Card; 5] {
        let mut cards = self.0;
        cards.sort_by(|a, b| a.rank().cmp(&b.rank()).then(a.suit().cmp(&b.suit())));
        cards
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.0[0], self.0[1], self.0[2], self.0[3], self.0[4])
    }
}
