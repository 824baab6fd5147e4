use crate::evaluator::RankedHand;
use std::cmp::Ordering;
use std::fmt;

/// Result of pitting two ranked hands against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    /// Category and tiebreak rank are both equal. Resolving this would take
    /// a kicker-by-kicker cascade that is deliberately not implemented; the
    /// game is surfaced for manual review instead.
    Undecided,
}

impl Outcome {
    /// Numeric code used by the reporting layer: 1, 2, or 0 for undecided.
    pub const fn code(self) -> u8 {
        match self {
            Outcome::PlayerOne => 1,
            Outcome::PlayerTwo => 2,
            Outcome::Undecided => 0,
        }
    }

    /// The same outcome seen from the other player's side.
    pub const fn flipped(self) -> Self {
        match self {
            Outcome::PlayerOne => Outcome::PlayerTwo,
            Outcome::PlayerTwo => Outcome::PlayerOne,
            Outcome::Undecided => Outcome::Undecided,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerOne => f.write_str("player 1"),
            Outcome::PlayerTwo => f.write_str("player 2"),
            Outcome::Undecided => f.write_str("undecided"),
        }
    }
}

/// Compare two ranked hands: higher category wins, equal categories fall to
/// the higher tiebreak rank, and a full tie is undecided.
///
/// ```
/// use showdown_rs::duel::{adjudicate, Outcome};
/// use showdown_rs::evaluator::evaluate_tokens;
///
/// let one = evaluate_tokens(&["4C", "2S", "AD", "TH", "9D"]).unwrap();
/// let two = evaluate_tokens(&["8S", "3S", "KD", "3C", "5H"]).unwrap();
/// assert_eq!(adjudicate(&one, &two), Outcome::PlayerTwo);
/// ```
pub fn adjudicate(one: &RankedHand, two: &RankedHand) -> Outcome {
    match one.category.cmp(&two.category).then(one.tiebreak.cmp(&two.tiebreak)) {
        Ordering::Greater => Outcome::PlayerOne,
        Ordering::Less => Outcome::PlayerTwo,
        Ordering::Equal => Outcome::Undecided,
    }
}

/// Win counters accumulated over a batch of games, with the zero-based
/// indices of undecided games kept aside for manual review.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub player_one: u64,
    pub player_two: u64,
    undecided: Vec<usize>,
}

impl Tally {
    pub fn record(&mut self, game: usize, outcome: Outcome) {
        match outcome {
            Outcome::PlayerOne => self.player_one += 1,
            Outcome::PlayerTwo => self.player_two += 1,
            Outcome::Undecided => self.undecided.push(game),
        }
    }

    /// Indices of games that ended undecided, in ascending order.
    pub fn undecided(&self) -> &[usize] {
        &self.undecided
    }

    pub fn games(&self) -> u64 {
        self.player_one + self.player_two + self.undecided.len() as u64
    }

    /// Fold another tally in. Counters are plain sums, so partial tallies
    /// from independent workers combine in any grouping or order.
    pub fn merge(&mut self, other: Tally) {
        self.player_one += other.player_one;
        self.player_two += other.player_two;
        self.undecided.extend(other.undecided);
        self.undecided.sort_unstable();
    }
}
