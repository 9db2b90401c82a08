use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::hand::HandError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (например, битый JSON).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Рука не прошла валидацию (не пять карт).
    #[error("invalid hand: {0}")]
    InvalidHand(String),
}

impl From<HandError> for ApiError {
    fn from(err: HandError) -> Self {
        ApiError::InvalidHand(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
