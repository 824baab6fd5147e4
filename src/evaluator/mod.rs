pub(crate) mod detector;
pub mod features;
pub mod histogram;

pub use features::HandFeatures;
pub use histogram::RankHistogram;

use crate::cards::{Card, Rank};
use crate::hand::{Hand, HandError};
use std::fmt;
use std::str::FromStr;

/// Poker hand category from weakest to strongest. The discriminant is the
/// strength class compared during adjudication: 1 = High Card up to
/// 10 = Royal Flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPairs = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const fn strength(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Evaluation result: the category plus the single rank that breaks ties
/// within it (the quad/triple rank, the pair rank, or the high card).
///
/// Built fresh per hand and consumed by adjudication; comparing two of these
/// is [`crate::duel::adjudicate`]'s job, not a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedHand {
    pub category: Category,
    pub tiebreak: Rank,
}

impl RankedHand {
    pub const fn new(category: Category, tiebreak: Rank) -> Self {
        Self { category, tiebreak }
    }

    /// Informational label of the category, e.g. "Full House".
    pub const fn name(&self) -> &'static str {
        self.category.label()
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} high)", self.name(), self.tiebreak)
    }
}

/// Evaluate exactly five cards into a ranked hand.
///
/// Classification is total: every five-card hand lands in exactly one
/// category between High Card and Royal Flush.
///
/// ```
/// use showdown_rs::cards::Rank;
/// use showdown_rs::evaluator::{evaluate_hand, Category};
/// use showdown_rs::hand::Hand;
///
/// let hand: Hand = "2C 3C 4C 5C 7C".parse().unwrap();
/// let ranked = evaluate_hand(&hand);
/// assert_eq!(ranked.category, Category::Flush);
/// assert_eq!(ranked.tiebreak, Rank::Seven);
/// ```
pub fn evaluate_hand(hand: &Hand) -> RankedHand {
    use detector::DETECTORS;

    let features = HandFeatures::new(hand);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if detector.detect(&features) {
            return detector.rank_hand(&features);
        }
    }

    // Unreachable: HighCard detector always matches as fallback
    unreachable!("HighCard detector should always match")
}

/// Evaluate five card tokens, failing fast on a malformed token.
///
/// ```
/// use showdown_rs::evaluator::{evaluate_tokens, Category};
///
/// let ranked = evaluate_tokens(&["TH", "JH", "QH", "KH", "AH"]).unwrap();
/// assert_eq!(ranked.category, Category::RoyalFlush);
/// ```
pub fn evaluate_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<RankedHand, HandError> {
    let cards = tokens
        .iter()
        .map(|t| Card::from_str(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| HandError::CardParse(e.to_string()))?;
    Ok(evaluate_hand(&Hand::from_slice(&cards)?))
}
