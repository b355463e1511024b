use async_trait::async_trait;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_product::{Product, ProductId};
use thiserror::Error;

/// Ошибки внешнего хранилища
#[derive(Debug, Clone, Error)]
pub enum SinkError {
    #[error("Storage rejected the change: {0}")]
    Rejected(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Внешнее хранилище, подтверждающее изменения сессии
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn save_order(&self, order: &Order) -> Result<(), SinkError>;

    async fn save_product(&self, product: &Product) -> Result<(), SinkError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), SinkError>;

    fn sink_name(&self) -> &str;
}

/// Хранилище-заглушка: только пишет изменения в лог и подтверждает их
pub struct TracingSink;

#[async_trait]
impl RecordSink for TracingSink {
    async fn save_order(&self, order: &Order) -> Result<(), SinkError> {
        tracing::info!(
            order = %order.order_number(),
            status = %order.status,
            version = order.base.metadata.version,
            "Order saved"
        );
        Ok(())
    }

    async fn save_product(&self, product: &Product) -> Result<(), SinkError> {
        tracing::info!(
            product = %product.name(),
            status = product.status.code(),
            featured = product.featured,
            "Product saved"
        );
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), SinkError> {
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }

    fn sink_name(&self) -> &str {
        "tracing"
    }
}
