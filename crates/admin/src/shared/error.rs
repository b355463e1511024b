use crate::system::ledger::MutationId;
use contracts::domain::a001_order::{OrderId, TransitionError};
use contracts::domain::a002_product::ProductId;
use thiserror::Error;

/// Отказ в выполнении операции над коллекцией сессии.
/// Ни один отказ не оставляет частично применённых изменений.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdminError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Invalid status transition: {0}")]
    InvalidTransition(#[from] TransitionError),

    #[error("Record {record} has an unreconciled mutation {mutation}")]
    MutationPending { record: String, mutation: MutationId },

    #[error("Unknown mutation: {0}")]
    UnknownMutation(MutationId),
}
