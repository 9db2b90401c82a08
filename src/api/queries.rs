use serde::{Deserialize, Serialize};

use crate::domain::hand::Hand;
use crate::eval::{classify, compare};

use super::dto::{CategoryDto, HandDto, VerdictDto};
use super::errors::ApiError;

/// Запросы "только чтение". Состояния нет, каждый запрос — чистая функция.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Query {
    /// Определить категорию одной руки.
    Classify { hand: HandDto },

    /// Сравнить две руки.
    Compare { hand_a: HandDto, hand_b: HandDto },
}

/// Результат запроса.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum QueryResponse {
    Category(CategoryDto),
    Verdict(VerdictDto),
}

/// Выполнить запрос.
pub fn handle_query(query: Query) -> Result<QueryResponse, ApiError> {
    match query {
        Query::Classify { hand } => {
            let hand = to_hand(&hand, "hand")?;
            let category = classify(&hand);
            log::debug!("classify [{hand}] -> {category}");
            Ok(QueryResponse::Category(category.into()))
        }
        Query::Compare { hand_a, hand_b } => {
            let hand_a = to_hand(&hand_a, "hand_a")?;
            let hand_b = to_hand(&hand_b, "hand_b")?;
            let verdict = compare(&hand_a, &hand_b);
            log::debug!("compare [{hand_a}] vs [{hand_b}] -> {verdict}");
            Ok(QueryResponse::Verdict(verdict.into()))
        }
    }
}

/// Разобрать запрос из JSON и выполнить его.
pub fn handle_json_query(raw: &str) -> Result<QueryResponse, ApiError> {
    let query: Query = serde_json::from_str(raw)?;
    handle_query(query)
}

fn to_hand(dto: &HandDto, field: &str) -> Result<Hand, ApiError> {
    Hand::try_from(dto).map_err(|err| {
        log::warn!("rejected {field}: {err}");
        ApiError::from(err)
    })
}
