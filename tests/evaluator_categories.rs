use showdown_rs::cards::Rank;
use showdown_rs::evaluator::{evaluate_tokens, Category};

#[test]
fn category_royal_flush() {
    let e = evaluate_tokens(&["TH", "JH", "QH", "KH", "AH"]).unwrap();
    assert_eq!(e.category, Category::RoyalFlush);
    assert_eq!(e.tiebreak, Rank::Ace);
}

#[test]
fn category_straight_flush() {
    let e = evaluate_tokens(&["5S", "6S", "7S", "8S", "9S"]).unwrap();
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tiebreak, Rank::Nine);
}

#[test]
fn category_four_of_a_kind() {
    let e = evaluate_tokens(&["9C", "9D", "9H", "9S", "AC"]).unwrap();
    assert_eq!(e.category, Category::FourOfAKind);
    assert_eq!(e.tiebreak, Rank::Nine);
}

#[test]
fn category_full_house() {
    let e = evaluate_tokens(&["2C", "2D", "2H", "3S", "3D"]).unwrap();
    assert_eq!(e.category, Category::FullHouse);
    assert_eq!(e.tiebreak, Rank::Two);
}

#[test]
fn category_flush() {
    let e = evaluate_tokens(&["2C", "3C", "4C", "5C", "7C"]).unwrap();
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.tiebreak, Rank::Seven);
}

#[test]
fn category_straight() {
    let e = evaluate_tokens(&["5H", "6C", "7D", "8S", "9H"]).unwrap();
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tiebreak, Rank::Nine);
}

#[test]
fn category_three_of_a_kind() {
    let e = evaluate_tokens(&["QC", "QD", "QH", "TS", "2C"]).unwrap();
    assert_eq!(e.category, Category::ThreeOfAKind);
    assert_eq!(e.tiebreak, Rank::Queen);
}

#[test]
fn category_two_pairs_breaks_on_higher_pair() {
    let e = evaluate_tokens(&["JC", "JD", "9C", "9H", "2S"]).unwrap();
    assert_eq!(e.category, Category::TwoPairs);
    assert_eq!(e.tiebreak, Rank::Jack);
}

#[test]
fn category_one_pair() {
    let e = evaluate_tokens(&["8S", "3S", "KD", "3C", "5H"]).unwrap();
    assert_eq!(e.category, Category::OnePair);
    assert_eq!(e.tiebreak, Rank::Three);
}

#[test]
fn category_high_card() {
    let e = evaluate_tokens(&["4C", "2S", "AD", "TH", "9D"]).unwrap();
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.tiebreak, Rank::Ace);
}

#[test]
fn ace_low_run_is_no_straight() {
    // 2,3,4,5,A does not wrap around the ace.
    let e = evaluate_tokens(&["AS", "2H", "3D", "4C", "5S"]).unwrap();
    assert_eq!(e.category, Category::HighCard);
    assert_eq!(e.tiebreak, Rank::Ace);
}

#[test]
fn ace_low_flush_run_is_a_plain_flush() {
    let e = evaluate_tokens(&["AC", "2C", "3C", "4C", "5C"]).unwrap();
    assert_eq!(e.category, Category::Flush);
    assert_eq!(e.tiebreak, Rank::Ace);
}

#[test]
fn token_case_does_not_matter() {
    let upper = evaluate_tokens(&["TH", "JH", "QH", "KH", "AH"]).unwrap();
    let lower = evaluate_tokens(&["th", "jh", "qh", "kh", "ah"]).unwrap();
    assert_eq!(upper, lower);
}
