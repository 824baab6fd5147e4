//! showdown-rs: five-card poker duel scorer
//!
//! Goals:
//! - Deterministic evaluation of five-card hands into ranked categories
//! - Faithful batch scoring: per game, two hands in, one outcome out
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! A game is ten two-character card tokens, split 5/5 between the players.
//! Each hand is ranked into one of ten categories with a tiebreak rank, and
//! adjudication compares the pair: higher category wins, then higher
//! tiebreak, and an exact tie is surfaced as undecided for manual review
//! rather than resolved by kickers.
//!
//! ## Quick start: score one game
//! ```
//! use showdown_rs::duel::{adjudicate, Outcome};
//! use showdown_rs::evaluator::{evaluate_hand, Category};
//! use showdown_rs::hand::Hand;
//!
//! let one: Hand = "4C 2S AD TH 9D".parse().unwrap();
//! let two: Hand = "8S 3S KD 3C 5H".parse().unwrap();
//!
//! let one = evaluate_hand(&one);
//! let two = evaluate_hand(&two);
//! assert_eq!(one.category, Category::HighCard);
//! assert_eq!(two.category, Category::OnePair);
//! assert_eq!(adjudicate(&one, &two), Outcome::PlayerTwo);
//! ```
//!
//! ## Batch scoring
//! Score a record file (one game per line) with:
//! ```sh
//! cargo run --bin showdown-rs -- tally games.txt
//! ```

pub mod cards;
pub mod deck;
pub mod duel;
pub mod evaluator;
pub mod hand;
pub mod records;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
