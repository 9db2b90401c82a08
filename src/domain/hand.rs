use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::Card;

/// Сколько карт в руке.
pub const HAND_SIZE: usize = 5;

/// Ошибки построения руки.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HandError {
    #[error("рука должна содержать {expected} карт, получено {actual}")]
    InvalidSize { expected: usize, actual: usize },
}

/// Пятикарточная рука.
///
/// Длина зашита в тип, поэтому все предикаты над `Hand` тотальны.
/// Повторяющиеся карты не проверяются: легальность колоды — забота
/// вызывающей стороны.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    /// Карты в том порядке, в каком их передали.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self::new(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = HandError;

    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let cards: [Card; HAND_SIZE] = cards.try_into().map_err(|_| HandError::InvalidSize {
            expected: HAND_SIZE,
            actual: cards.len(),
        })?;
        Ok(Self(cards))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}

impl fmt::Display for Hand {
    /// Формат вида `Ah Kh Qh Jh Th`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
