use super::features::HandFeatures;
use super::{Category, RankedHand};
use crate::cards::Rank;

/// Strategy pattern: each category detector knows how to match the hand
/// summary and which rank breaks ties within its category.
pub trait CategoryDetector {
    fn detect(&self, features: &HandFeatures) -> bool;
    fn rank_hand(&self, features: &HandFeatures) -> RankedHand;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Royal Flush: ace-high straight flush
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.same_suit && features.in_sequence && features.high_card == Rank::Ace
    }

    fn rank_hand(&self, _features: &HandFeatures) -> RankedHand {
        RankedHand::new(Category::RoyalFlush, Rank::Ace)
    }
}

/// Straight Flush: five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.same_suit && features.in_sequence
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        RankedHand::new(Category::StraightFlush, features.high_card)
    }
}

/// Four of a Kind: four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.rank_counts.rank_with_count(4).is_some()
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        let quad = features.rank_counts.rank_with_count(4).unwrap();
        RankedHand::new(Category::FourOfAKind, quad)
    }
}

/// Full House: three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.rank_counts.rank_with_count(3).is_some()
            && features.rank_counts.rank_with_count(2).is_some()
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        let triple = features.rank_counts.rank_with_count(3).unwrap();
        RankedHand::new(Category::FullHouse, triple)
    }
}

/// Flush: all five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.same_suit
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        RankedHand::new(Category::Flush, features.high_card)
    }
}

/// Straight: five consecutive ranks, mixed suits
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.in_sequence
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        RankedHand::new(Category::Straight, features.high_card)
    }
}

/// Three of a Kind: three cards of the same rank, no pair beside them
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.rank_counts.rank_with_count(3).is_some()
            && features.rank_counts.rank_with_count(2).is_none()
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        let triple = features.rank_counts.rank_with_count(3).unwrap();
        RankedHand::new(Category::ThreeOfAKind, triple)
    }
}

/// Two Pairs: the higher pair breaks ties within the category
pub struct TwoPairsDetector;

impl CategoryDetector for TwoPairsDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.rank_counts.ranks_with_count(2).len() == 2
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        let high_pair = features.rank_counts.rank_with_count(2).unwrap();
        RankedHand::new(Category::TwoPairs, high_pair)
    }
}

/// One Pair: two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn detect(&self, features: &HandFeatures) -> bool {
        features.rank_counts.ranks_with_count(2).len() == 1
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        let pair = features.rank_counts.rank_with_count(2).unwrap();
        RankedHand::new(Category::OnePair, pair)
    }
}

/// High Card: no pattern at all
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn detect(&self, _features: &HandFeatures) -> bool {
        true // Always matches as fallback
    }

    fn rank_hand(&self, features: &HandFeatures) -> RankedHand {
        RankedHand::new(Category::HighCard, features.high_card)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairsDetector,
    &OnePairDetector,
    &HighCardDetector,
];
