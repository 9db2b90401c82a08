//! Эталонные руки и матчапы.
//!
//! Используются dev-CLI и интеграционными тестами. Руки подобраны так,
//! чтобы проверять порядок проверок: "фулл-хаус" и "флеш" ниже — одномастные
//! руки с парами, и их категория определяется только первым совпадением.

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::hand::Hand;
use crate::eval::{HandCategory, Seat, Verdict};

use Rank::*;
use Suit::*;

/// Именованная эталонная рука и её ожидаемая категория.
#[derive(Clone, Copy, Debug)]
pub struct NamedHand {
    pub name: &'static str,
    pub hand: Hand,
    pub expected: HandCategory,
}

/// Матчап двух эталонных рук с ожидаемым итогом.
#[derive(Clone, Copy, Debug)]
pub struct Matchup {
    pub name: &'static str,
    pub hand_a: NamedHand,
    pub hand_b: NamedHand,
    pub expected: Verdict,
}

const fn c(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

const fn named(name: &'static str, cards: [Card; 5], expected: HandCategory) -> NamedHand {
    NamedHand {
        name,
        hand: Hand::new(cards),
        expected,
    }
}

pub const ROYAL_FLUSH: NamedHand = named(
    "royal_flush",
    [c(Ace, Hearts), c(King, Hearts), c(Queen, Hearts), c(Jack, Hearts), c(Ten, Hearts)],
    HandCategory::RoyalFlush,
);
pub const STRAIGHT_FLUSH: NamedHand = named(
    "straight_flush",
    [c(Nine, Hearts), c(King, Hearts), c(Queen, Hearts), c(Jack, Hearts), c(Ten, Hearts)],
    HandCategory::StraightFlush,
);
pub const FOUR_OF_A_KIND: NamedHand = named(
    "four_of_a_kind",
    [c(Ace, Hearts), c(Ace, Hearts), c(Ace, Hearts), c(Ace, Hearts), c(Ten, Hearts)],
    HandCategory::FourOfAKind,
);
pub const FULL_HOUSE: NamedHand = named(
    "full_house",
    [c(Ace, Hearts), c(King, Hearts), c(Ace, Hearts), c(King, Hearts), c(King, Hearts)],
    HandCategory::FullHouse,
);
pub const FLUSH: NamedHand = named(
    "flush",
    [c(Two, Hearts), c(King, Hearts), c(Ace, Hearts), c(King, Hearts), c(King, Hearts)],
    HandCategory::Flush,
);
pub const STRAIGHT: NamedHand = named(
    "straight",
    [c(Nine, Spades), c(King, Clubs), c(Queen, Clubs), c(Jack, Clubs), c(Ten, Clubs)],
    HandCategory::Straight,
);
pub const THREE_OF_A_KIND: NamedHand = named(
    "three_of_a_kind",
    [c(Ace, Hearts), c(King, Clubs), c(Three, Clubs), c(Three, Hearts), c(Three, Hearts)],
    HandCategory::ThreeOfAKind,
);
pub const TWO_PAIR: NamedHand = named(
    "two_pair",
    [c(Ace, Hearts), c(King, Clubs), c(Ace, Clubs), c(King, Hearts), c(Nine, Hearts)],
    HandCategory::TwoPair,
);
pub const PAIR: NamedHand = named(
    "pair",
    [c(Ace, Hearts), c(King, Clubs), c(Ace, Clubs), c(Ten, Hearts), c(Nine, Hearts)],
    HandCategory::Pair,
);
pub const HIGH_CARD: NamedHand = named(
    "high_card",
    [c(Ace, Hearts), c(King, Clubs), c(Three, Clubs), c(Ten, Hearts), c(Nine, Hearts)],
    HandCategory::HighCard,
);

/// Десять эталонных рук, по одной на категорию, от сильнейшей к слабейшей.
pub fn canonical_hands() -> [NamedHand; 10] {
    [
        ROYAL_FLUSH,
        STRAIGHT_FLUSH,
        FOUR_OF_A_KIND,
        FULL_HOUSE,
        FLUSH,
        STRAIGHT,
        THREE_OF_A_KIND,
        TWO_PAIR,
        PAIR,
        HIGH_CARD,
    ]
}

fn win(winner: Seat, category: HandCategory) -> Verdict {
    Verdict::Win { winner, category }
}

/// Эталонные матчапы с ожидаемыми вердиктами.
pub fn canonical_matchups() -> Vec<Matchup> {
    let m = |name: &'static str, hand_a: NamedHand, hand_b: NamedHand, expected: Verdict| Matchup {
        name,
        hand_a,
        hand_b,
        expected,
    };

    vec![
        m(
            "straight_vs_royal_flush",
            STRAIGHT,
            ROYAL_FLUSH,
            win(Seat::B, HandCategory::RoyalFlush),
        ),
        m(
            "straight_flush_vs_two_pair",
            STRAIGHT_FLUSH,
            TWO_PAIR,
            win(Seat::A, HandCategory::StraightFlush),
        ),
        m(
            "four_of_a_kind_vs_three_of_a_kind",
            FOUR_OF_A_KIND,
            THREE_OF_A_KIND,
            win(Seat::A, HandCategory::FourOfAKind),
        ),
        m(
            "full_house_vs_three_of_a_kind",
            FULL_HOUSE,
            THREE_OF_A_KIND,
            win(Seat::A, HandCategory::FullHouse),
        ),
        m(
            "flush_vs_three_of_a_kind",
            FLUSH,
            THREE_OF_A_KIND,
            win(Seat::A, HandCategory::Flush),
        ),
        m(
            "three_of_a_kind_vs_straight",
            THREE_OF_A_KIND,
            STRAIGHT,
            win(Seat::B, HandCategory::Straight),
        ),
        m(
            "three_of_a_kind_vs_high_card",
            THREE_OF_A_KIND,
            HIGH_CARD,
            win(Seat::A, HandCategory::ThreeOfAKind),
        ),
        m(
            "two_pair_vs_high_card",
            TWO_PAIR,
            HIGH_CARD,
            win(Seat::A, HandCategory::TwoPair),
        ),
        m(
            "pair_vs_high_card",
            PAIR,
            HIGH_CARD,
            win(Seat::A, HandCategory::Pair),
        ),
        m(
            "high_card_vs_high_card",
            HIGH_CARD,
            HIGH_CARD,
            Verdict::Draw,
        ),
    ]
}

/// Найти матчап по имени.
pub fn find_matchup(name: &str) -> Option<Matchup> {
    canonical_matchups().into_iter().find(|m| m.name == name)
}
