//! Предикаты категорий.
//!
//! Каждый предикат отвечает только на вопрос "подходит ли рука под
//! категорию" и НЕ исключает более сильные категории: например,
//! `is_three_of_a_kind` верен и для фулл-хауса. Разрешение пересечений —
//! работа `evaluator::classify`, который проверяет категории по силе.

use crate::domain::card::Rank;
use crate::domain::hand::Hand;

use super::rank_counts::hand_counts;

/// Ранги роял-флеша (в любом порядке).
const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

/// Все карты той же масти, что и первая.
pub fn is_flush(hand: &Hand) -> bool {
    let [first, rest @ ..] = hand.cards();
    rest.iter().all(|card| card.suit == first.suit)
}

/// Пять рангов подряд.
///
/// Туз только старший: A-2-3-4-5 стритом не считается.
pub fn is_straight(hand: &Hand) -> bool {
    let mut ordinals = hand.cards().map(|card| card.rank.ordinal());
    ordinals.sort_unstable();
    ordinals.windows(2).all(|pair| pair[1] == pair[0] + 1)
}

/// Флеш из A, K, Q, J, T.
pub fn is_royal_flush(hand: &Hand) -> bool {
    if !is_flush(hand) {
        return false;
    }
    let mut ranks = hand.cards().map(|card| card.rank);
    ranks.sort_unstable();
    // ROYAL_RANKS уже отсортированы
    ranks == ROYAL_RANKS
}

pub fn is_straight_flush(hand: &Hand) -> bool {
    is_straight(hand) && is_flush(hand)
}

pub fn is_four_of_a_kind(hand: &Hand) -> bool {
    hand_counts(hand).contains(4)
}

/// Тройка и пара разных рангов.
pub fn is_full_house(hand: &Hand) -> bool {
    let counts = hand_counts(hand);
    counts.contains(3) && counts.contains(2)
}

pub fn is_three_of_a_kind(hand: &Hand) -> bool {
    hand_counts(hand).contains(3)
}

/// Две разные пары: находим первую, выкидываем её и ищем вторую.
pub fn is_two_pair(hand: &Hand) -> bool {
    let mut counts = hand_counts(hand);
    match counts.find(2) {
        Some(first) => {
            counts.clear(first);
            counts.contains(2)
        }
        None => false,
    }
}

pub fn is_pair(hand: &Hand) -> bool {
    hand_counts(hand).contains(2)
}
