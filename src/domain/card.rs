use core::fmt;

use serde::{Deserialize, Serialize};

/// Масть карты. Порядка между мастями нет, только равенство.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,   // ♥
    Diamonds, // ♦
    Clubs,    // ♣
    Spades,   // ♠
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];
}

/// Ранг карты.
///
/// Объявлены от старшего к младшему: порядковый номер (`ordinal`)
/// у туза 0, у двойки 12. Этот номер — индекс в таблице частот
/// и шаг при поиске стрита. `Ord` идёт по тому же номеру: `Ace < King`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 0,
    King,
    Queen,
    Jack,
    Ten,
    Nine,
    Eight,
    Seven,
    Six,
    Five,
    Four,
    Three,
    Two,
}

impl Rank {
    /// Количество рангов в колоде.
    pub const COUNT: usize = 13;

    /// Все ранги от туза до двойки.
    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::Ace,
        Rank::King,
        Rank::Queen,
        Rank::Jack,
        Rank::Ten,
        Rank::Nine,
        Rank::Eight,
        Rank::Seven,
        Rank::Six,
        Rank::Five,
        Rank::Four,
        Rank::Three,
        Rank::Two,
    ];

    /// Позиция ранга: 0 = туз, 12 = двойка.
    pub const fn ordinal(self) -> usize {
        self as usize
    }
}

/// Обычная покерная карта (52-карточная колода).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ch = match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
        };
        write!(f, "{ch}")
    }
}

impl fmt::Display for Card {
    /// Формат вида `Ah`, `Td`, `7c`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(rank.ordinal(), i);
        }
        assert_eq!(Rank::Ace.ordinal(), 0);
        assert_eq!(Rank::Two.ordinal(), 12);
    }

    #[test]
    fn ord_matches_ordinal() {
        let mut ranks = [Rank::Two, Rank::Ten, Rank::Ace, Rank::King];
        ranks.sort_unstable();
        assert_eq!(ranks, [Rank::Ace, Rank::King, Rank::Ten, Rank::Two]);
        assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn card_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).to_string(), "Ah");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "Td");
        assert_eq!(Card::new(Rank::Seven, Suit::Clubs).to_string(), "7c");
    }
}
