//! Интеграционные тесты для доменной модели (crate::domain).

use poker_showdown::domain::*;

use Rank::*;
use Suit::*;

/// Удобный конструктор карты.
fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Rank: 13 значений, туз — нулевой, двойка — последний.
#[test]
fn rank_all_is_strength_ordered() {
    assert_eq!(Rank::ALL.len(), 13);
    assert_eq!(Rank::ALL[0], Ace);
    assert_eq!(Rank::ALL[12], Two);

    // порядковые номера уникальны и идут подряд
    let ordinals: Vec<usize> = Rank::ALL.iter().map(|r| r.ordinal()).collect();
    assert_eq!(ordinals, (0..13).collect::<Vec<_>>());
}

#[test]
fn suits_compare_only_by_equality() {
    assert_eq!(Suit::ALL.len(), 4);
    assert_eq!(Hearts, Hearts);
    assert_ne!(Hearts, Spades);
}

/// Hand из ровно пяти карт собирается, из другого количества — нет.
#[test]
fn hand_try_from_checks_size() {
    let five = vec![
        c(Ace, Hearts),
        c(King, Hearts),
        c(Queen, Hearts),
        c(Jack, Hearts),
        c(Ten, Hearts),
    ];
    let hand = Hand::try_from(five.clone()).expect("five cards make a hand");
    assert_eq!(hand.cards().to_vec(), five);

    let four = &five[..4];
    assert_eq!(
        Hand::try_from(four),
        Err(HandError::InvalidSize {
            expected: HAND_SIZE,
            actual: 4
        })
    );

    let mut six = five.clone();
    six.push(c(Nine, Hearts));
    assert_eq!(
        Hand::try_from(six),
        Err(HandError::InvalidSize {
            expected: HAND_SIZE,
            actual: 6
        })
    );

    // пустая рука — тоже ошибка, а не паника
    assert!(Hand::try_from(Vec::<Card>::new()).is_err());
}

/// Повторяющиеся карты не проверяются.
#[test]
fn hand_accepts_duplicate_cards() {
    let cards = vec![c(Ace, Hearts); 5];
    let hand = Hand::try_from(cards).expect("duplicates are not validated");
    assert!(hand.iter().all(|card| *card == c(Ace, Hearts)));
}

#[test]
fn hand_display_keeps_caller_order() {
    let hand = Hand::new([
        c(Nine, Spades),
        c(King, Clubs),
        c(Queen, Clubs),
        c(Jack, Clubs),
        c(Ten, Clubs),
    ]);
    assert_eq!(hand.to_string(), "9s Kc Qc Jc Tc");
}

#[test]
fn hand_error_message() {
    let err = HandError::InvalidSize {
        expected: 5,
        actual: 3,
    };
    assert_eq!(err.to_string(), "рука должна содержать 5 карт, получено 3");
}
