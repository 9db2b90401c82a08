use crate::domain::hand::Hand;

use super::hand_category::HandCategory;
use super::predicates::{
    is_flush, is_four_of_a_kind, is_full_house, is_pair, is_royal_flush, is_straight,
    is_straight_flush, is_three_of_a_kind, is_two_pair,
};

type Predicate = fn(&Hand) -> bool;

/// Проверки от сильнейшей категории к слабейшей.
///
/// Порядок строк — инвариант: предикаты пересекаются (тройка верна и для
/// фулл-хауса), и правильную категорию даёт только первое совпадение.
/// Старшей карте проверка не нужна — это значение по умолчанию.
const CATEGORY_CHECKS: [(HandCategory, Predicate); 9] = [
    (HandCategory::RoyalFlush, is_royal_flush),
    (HandCategory::StraightFlush, is_straight_flush),
    (HandCategory::FourOfAKind, is_four_of_a_kind),
    (HandCategory::FullHouse, is_full_house),
    (HandCategory::Flush, is_flush),
    (HandCategory::Straight, is_straight),
    (HandCategory::ThreeOfAKind, is_three_of_a_kind),
    (HandCategory::TwoPair, is_two_pair),
    (HandCategory::Pair, is_pair),
];

/// Главная функция: категория пятикарточной руки.
///
/// Первое сработавшее правило из `CATEGORY_CHECKS`, иначе `HighCard`.
pub fn classify(hand: &Hand) -> HandCategory {
    CATEGORY_CHECKS
        .iter()
        .find(|(_, check)| check(hand))
        .map(|(category, _)| *category)
        .unwrap_or(HandCategory::HighCard)
}

/// Все категории, чьи предикаты верны для руки, от сильнейшей к слабейшей.
///
/// Последним элементом всегда идёт `HighCard`. Первый элемент совпадает
/// с `classify(hand)`.
pub fn matching_categories(hand: &Hand) -> Vec<HandCategory> {
    CATEGORY_CHECKS
        .iter()
        .filter(|(_, check)| check(hand))
        .map(|(category, _)| *category)
        .chain(std::iter::once(HandCategory::HighCard))
        .collect()
}

impl Hand {
    /// Сокращение для `classify(self)`.
    pub fn category(&self) -> HandCategory {
        classify(self)
    }
}
