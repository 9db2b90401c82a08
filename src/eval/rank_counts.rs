use crate::domain::card::Rank;
use crate::domain::hand::Hand;

/// Таблица частот рангов.
///
/// Индекс — `Rank::ordinal()` (0 = туз, 12 = двойка),
/// значение — сколько карт этого ранга во входе.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankCounts([usize; Rank::COUNT]);

impl RankCounts {
    /// Сколько раз встречается ранг.
    pub fn get(&self, rank: Rank) -> usize {
        self.0[rank.ordinal()]
    }

    /// Есть ли ранг, встречающийся ровно `n` раз.
    pub fn contains(&self, n: usize) -> bool {
        self.0.contains(&n)
    }

    /// Первый (самый старший) ранг, встречающийся ровно `n` раз.
    pub fn find(&self, n: usize) -> Option<Rank> {
        self.0
            .iter()
            .position(|&count| count == n)
            .map(|idx| Rank::ALL[idx])
    }

    /// Обнулить счётчик ранга.
    pub fn clear(&mut self, rank: Rank) {
        self.0[rank.ordinal()] = 0;
    }

    /// Сумма всех счётчиков (для корректной руки — 5).
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[usize; Rank::COUNT] {
        &self.0
    }
}

/// Построить таблицу частот по списку рангов.
///
/// Длина входа не проверяется.
pub fn make_counts(ranks: &[Rank]) -> RankCounts {
    let mut counts = [0usize; Rank::COUNT];
    for rank in ranks {
        counts[rank.ordinal()] += 1;
    }
    RankCounts(counts)
}

/// Ранги карт руки в исходном порядке.
pub fn hand_ranks(hand: &Hand) -> Vec<Rank> {
    hand.iter().map(|card| card.rank).collect()
}

/// Таблица частот для руки.
pub fn hand_counts(hand: &Hand) -> RankCounts {
    make_counts(&hand_ranks(hand))
}
