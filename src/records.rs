use crate::cards::{Card, CardParseError};
use crate::deck::Deck;
use crate::duel::{adjudicate, Outcome};
use crate::evaluator::evaluate_hand;
use crate::hand::{Hand, HandError};
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

/// Ten tokens per line: player 1's five cards, then player 2's.
pub const TOKENS_PER_GAME: usize = 10;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RecordError {
    #[error("expected {TOKENS_PER_GAME} card tokens, got {0}")]
    TokenCount(usize),
    #[error("card dealt twice in one game: {0}")]
    DuplicateCard(Card),
    #[error(transparent)]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

/// One game record: two five-card hands drawn from the same deck.
///
/// ```
/// use showdown_rs::duel::Outcome;
/// use showdown_rs::records::GameRecord;
///
/// let record: GameRecord = "4C 2S AD TH 9D 8S 3S KD 3C 5H".parse().unwrap();
/// assert_eq!(record.play(), Outcome::PlayerTwo);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord {
    pub player_one: Hand,
    pub player_two: Hand,
}

impl GameRecord {
    /// Evaluate both hands and adjudicate the winner.
    pub fn play(&self) -> Outcome {
        adjudicate(&evaluate_hand(&self.player_one), &evaluate_hand(&self.player_two))
    }

    /// Deal a record from a freshly shuffled deck: ten cards, split 5/5.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        let cards = deck.draw_n(TOKENS_PER_GAME);
        let player_one = Hand::from_slice(&cards[..5]).expect("full deck deals five cards");
        let player_two = Hand::from_slice(&cards[5..]).expect("full deck deals five cards");
        Self { player_one, player_two }
    }
}

impl FromStr for GameRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards =
            s.split_whitespace().map(Card::from_str).collect::<Result<Vec<_>, _>>()?;
        if cards.len() != TOKENS_PER_GAME {
            return Err(RecordError::TokenCount(cards.len()));
        }
        // One physical deck per game: the same card cannot be in both hands.
        let mut seen = HashSet::new();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(RecordError::DuplicateCard(card));
            }
        }
        Ok(Self { player_one: Hand::from_slice(&cards[..5])?, player_two: Hand::from_slice(&cards[5..])? })
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player_one, self.player_two)
    }
}

/// Iterate game records out of a line-oriented source, one game per line,
/// skipping blank lines.
///
/// This decouples the scoring loop from file handling, so the core runs
/// against in-memory literals in tests:
///
/// ```
/// use showdown_rs::records::read_records;
///
/// let input = "4C 2S AD TH 9D 8S 3S KD 3C 5H\nTH JH QH KH AH 2C 3C 4C 5C 7C\n";
/// let records: Vec<_> = read_records(input.as_bytes()).collect::<Result<_, _>>().unwrap();
/// assert_eq!(records.len(), 2);
/// ```
pub fn read_records<R: BufRead>(reader: R) -> impl Iterator<Item = Result<GameRecord, RecordError>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(line.parse()),
        Err(e) => Some(Err(RecordError::Io(e))),
    })
}
