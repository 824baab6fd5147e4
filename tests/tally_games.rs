use showdown_rs::duel::{Outcome, Tally};
use showdown_rs::records::{read_records, GameRecord, RecordError};

// A small batch covering both players winning on categories, a tiebreak
// decision, and one game that ties outright.
const GAMES: &str = "\
4C 2S AD TH 9D 8S 3S KD 3C 5H
TH JH QH KH AH 2C 3C 4C 5C 7C
KC KD 4H 8S 2D KH KS 9C 7D 3H
2C 2D 2H 3S 3D 9C 9D 9H 9S AC
7D 2S 5D 3S AC 8C TS KC 9H 4S
";

fn score(input: &str) -> Tally {
    let mut tally = Tally::default();
    for (game, record) in read_records(input.as_bytes()).enumerate() {
        tally.record(game, record.unwrap().play());
    }
    tally
}

#[test]
fn batch_tally_matches_expected_counts() {
    let tally = score(GAMES);
    assert_eq!(tally.games(), 5);
    assert_eq!(tally.player_one, 2);
    assert_eq!(tally.player_two, 2);
    assert_eq!(tally.undecided(), &[2]);
}

#[test]
fn per_game_outcomes() {
    let outcomes: Vec<Outcome> = read_records(GAMES.as_bytes())
        .map(|r| r.unwrap().play())
        .collect();
    assert_eq!(
        outcomes,
        vec![
            // high card loses to a pair of threes
            Outcome::PlayerTwo,
            // royal flush beats a seven-high flush
            Outcome::PlayerOne,
            // both hold a pair of kings, kickers are not compared
            Outcome::Undecided,
            // full house loses to four of a kind
            Outcome::PlayerTwo,
            // ace high beats king high
            Outcome::PlayerOne,
        ]
    );
}

#[test]
fn undecided_outcomes_carry_code_zero() {
    let record: GameRecord = "KC KD 4H 8S 2D KH KS 9C 7D 3H".parse().unwrap();
    let outcome = record.play();
    assert_eq!(outcome, Outcome::Undecided);
    assert_eq!(outcome.code(), 0);
}

#[test]
fn a_bad_line_surfaces_its_error_without_poisoning_the_rest() {
    let input = "4C 2S AD TH 9D 8S 3S KD 3C 5H\n4C 2S AD TH 9D 8S 3S KD 3C\n";
    let results: Vec<_> = read_records(input.as_bytes()).collect();
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(RecordError::TokenCount(9))));
}

#[test]
fn partial_tallies_merge_to_the_sequential_result() {
    let full = score(GAMES);

    let lines: Vec<&str> = GAMES.lines().collect();
    let mut merged = Tally::default();
    for (game, line) in lines.iter().enumerate() {
        // One worker per game, merged out of order.
        let mut partial = Tally::default();
        partial.record(game, line.parse::<GameRecord>().unwrap().play());
        let mut next = partial;
        next.merge(std::mem::take(&mut merged));
        merged = next;
    }

    assert_eq!(merged, full);
}
