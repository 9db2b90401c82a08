//! Доменная модель: ранги, масти, карты и пятикарточная рука.

pub mod card;
pub mod hand;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use hand::*;
