//! Модуль оценки силы пятикарточных рук.
//!
//! Основные функции:
//!   `classify(hand) -> HandCategory`
//!   `compare(hand_a, hand_b) -> Verdict`

pub mod evaluator;
pub mod hand_category;
pub mod predicates;
pub mod rank_counts;
pub mod showdown;

pub use evaluator::{classify, matching_categories};
pub use hand_category::HandCategory;
pub use rank_counts::{make_counts, RankCounts};
pub use showdown::{compare, Seat, Verdict};
