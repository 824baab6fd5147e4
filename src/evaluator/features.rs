use super::histogram::RankHistogram;
use crate::cards::{Card, Rank};
use crate::hand::Hand;

/// Summary of a sorted 5-card hand.
/// Built once per evaluation and shared by all category detectors.
#[derive(Debug, Clone, Copy)]
pub struct HandFeatures {
    pub sorted_cards: [Card; 5],
    /// All five cards share one suit.
    pub same_suit: bool,
    /// Sorted ranks form five consecutive integers. There is no ace-low
    /// wraparound: 2,3,4,5,A is not a sequence.
    pub in_sequence: bool,
    /// Maximum rank in the hand.
    pub high_card: Rank,
    pub rank_counts: RankHistogram,
}

impl HandFeatures {
    /// Walk the sorted cards once, computing the suit flag, the sequence
    /// flag, the high card, and the rank histogram.
    pub fn new(hand: &Hand) -> Self {
        let sorted_cards = hand.sorted();
        let first = sorted_cards[0];

        let mut same_suit = true;
        let mut in_sequence = true;
        // Seed one below the first rank so the scan accepts the first card.
        let mut prev = first.rank().value() - 1;
        let mut high_card = first.rank();
        let mut rank_counts = RankHistogram::default();

        for card in sorted_cards.iter() {
            if same_suit && card.suit() != first.suit() {
                same_suit = false;
            }
            if in_sequence && card.rank().value() == prev + 1 {
                prev = card.rank().value();
            } else {
                in_sequence = false;
            }
            if card.rank() > high_card {
                high_card = card.rank();
            }
            rank_counts.bump(card.rank());
        }

        Self { sorted_cards, same_suit, in_sequence, high_card, rank_counts }
    }
}
