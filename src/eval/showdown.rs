use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;

use super::evaluator::classify;
use super::hand_category::HandCategory;

/// Какая из двух сравниваемых рук.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::A => f.write_str("A"),
            Seat::B => f.write_str("B"),
        }
    }
}

/// Итог сравнения двух рук.
///
/// Сравниваются только категории. Кикеры не учитываются: две разные
/// пары (или две разные старшие карты) — всегда ничья.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Verdict {
    Draw,
    Win { winner: Seat, category: HandCategory },
}

impl Verdict {
    pub fn is_draw(&self) -> bool {
        matches!(self, Verdict::Draw)
    }

    pub fn winner(&self) -> Option<Seat> {
        match self {
            Verdict::Draw => None,
            Verdict::Win { winner, .. } => Some(*winner),
        }
    }

    /// Категория победившей руки.
    pub fn category(&self) -> Option<HandCategory> {
        match self {
            Verdict::Draw => None,
            Verdict::Win { category, .. } => Some(*category),
        }
    }

    /// Тот же итог, если поменять руки местами.
    pub fn swapped(self) -> Verdict {
        match self {
            Verdict::Draw => Verdict::Draw,
            Verdict::Win { winner, category } => Verdict::Win {
                winner: winner.other(),
                category,
            },
        }
    }
}

impl fmt::Display for Verdict {
    /// `Draw` или `Hand A wins with Royal Flush`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Draw => f.write_str("Draw"),
            Verdict::Win { winner, category } => {
                write!(f, "Hand {winner} wins with {category}")
            }
        }
    }
}

/// Сравнить две руки по категориям.
pub fn compare(hand_a: &Hand, hand_b: &Hand) -> Verdict {
    let cat_a = classify(hand_a);
    let cat_b = classify(hand_b);

    if cat_a == cat_b {
        Verdict::Draw
    } else if cat_a.beats(cat_b) {
        Verdict::Win {
            winner: Seat::A,
            category: cat_a,
        }
    } else {
        Verdict::Win {
            winner: Seat::B,
            category: cat_b,
        }
    }
}
