use core::cmp::Ordering;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Категория покерной руки по силе.
///
/// Варианты объявлены от сильнейшего к слабейшему; порядковый номер
/// (`ordinal`) — ключ сравнения: меньше номер — сильнее рука.
/// `Ord` при этом упорядочивает по силе: `RoyalFlush > HighCard`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HandCategory {
    RoyalFlush = 0,
    StraightFlush = 1,
    FourOfAKind = 2,
    FullHouse = 3,
    Flush = 4,
    Straight = 5,
    ThreeOfAKind = 6,
    TwoPair = 7,
    Pair = 8,
    HighCard = 9,
}

impl HandCategory {
    /// Все категории от сильнейшей к слабейшей.
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// 0 = роял-флеш, 9 = старшая карта.
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Место в таблице силы, начиная с 1.
    pub const fn position(self) -> usize {
        self.ordinal() + 1
    }

    /// Строго сильнее ли `self`, чем `other`.
    pub fn beats(self, other: HandCategory) -> bool {
        self.ordinal() < other.ordinal()
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::Pair => "Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        other.ordinal().cmp(&self.ordinal())
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
