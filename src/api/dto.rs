use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::hand::{Hand, HandError};
use crate::eval::{HandCategory, Verdict};

/// DTO руки: карты в том виде, в каком их прислал клиент.
///
/// Длина не фиксирована, проверяется при переводе в `Hand`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandDto {
    pub cards: Vec<Card>,
}

impl From<Hand> for HandDto {
    fn from(hand: Hand) -> Self {
        Self {
            cards: hand.cards().to_vec(),
        }
    }
}

impl TryFrom<&HandDto> for Hand {
    type Error = HandError;

    fn try_from(dto: &HandDto) -> Result<Self, Self::Error> {
        Hand::try_from(dto.cards.as_slice())
    }
}

/// DTO категории руки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDto {
    pub category: HandCategory,
    /// Человеческое название ("Full House").
    pub name: String,
    /// Место в таблице силы: 1 = роял-флеш, 10 = старшая карта.
    pub position: usize,
}

impl From<HandCategory> for CategoryDto {
    fn from(category: HandCategory) -> Self {
        Self {
            category,
            name: category.name().to_string(),
            position: category.position(),
        }
    }
}

/// DTO итога сравнения.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerdictDto {
    pub verdict: Verdict,
    /// Текст для фронта: "Draw" / "Hand A wins with Flush".
    pub message: String,
}

impl From<Verdict> for VerdictDto {
    fn from(verdict: Verdict) -> Self {
        Self {
            verdict,
            message: verdict.to_string(),
        }
    }
}
