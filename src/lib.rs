//! Оценщик пятикарточных покерных рук для Linera.
//!
//! Ядро (`domain` + `eval`) — чистые функции без состояния:
//! `classify(hand)` и `compare(hand_a, hand_b)`. Здесь же описываем ABI
//! (Operation / Query / Response), через который contract/service
//! отдают эти функции наружу.

pub mod api;
pub mod domain;
pub mod eval;
pub mod scenarios;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Query, QueryResponse};

pub use crate::domain::{Card, Hand, HandError, Rank, Suit};
pub use crate::eval::{classify, compare, HandCategory, Seat, Verdict};

/// Операции, которые модуль принимает.
///
/// Состояния нет, поэтому операция — это тот же запрос на чтение.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum ShowdownOperation {
    Query(Query),
}

/// Ответ на операцию или запрос.
pub type ShowdownResponse = Result<QueryResponse, ApiError>;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct ShowdownAbi;

impl ContractAbi for ShowdownAbi {
    type Operation = ShowdownOperation;
    type Response = ShowdownResponse;
}

impl ServiceAbi for ShowdownAbi {
    type Query = Query;
    type QueryResponse = ShowdownResponse;
}

/// Выполнить операцию.
pub fn execute_operation(operation: ShowdownOperation) -> ShowdownResponse {
    match operation {
        ShowdownOperation::Query(query) => api::handle_query(query),
    }
}
