use super::seed;
use async_trait::async_trait;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_product::Product;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Снимок записей, которые сессия загружает при старте
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSnapshot {
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl RecordSnapshot {
    /// Проверка инвариантов каждой записи. Снимок с некорректной записью отклоняется целиком.
    pub fn validate(&self) -> anyhow::Result<()> {
        for order in &self.orders {
            order
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid order {}: {}", order.order_number(), e))?;
        }
        for product in &self.products {
            product
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid product {}: {}", product.sku(), e))?;
        }
        Ok(())
    }
}

/// Внешний источник записей (бэкенд, файл, тестовые данные)
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn load(&self) -> anyhow::Result<RecordSnapshot>;

    fn source_name(&self) -> &str;
}

/// Встроенный тестовый каталог
pub struct MockRecordSource;

#[async_trait]
impl RecordSource for MockRecordSource {
    async fn load(&self) -> anyhow::Result<RecordSnapshot> {
        let now = chrono::Utc::now();
        Ok(RecordSnapshot {
            orders: seed::mock_orders(now),
            products: seed::mock_products(now),
        })
    }

    fn source_name(&self) -> &str {
        "mock"
    }
}

/// JSON-снимок `{ "orders": [...], "products": [...] }`
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self) -> anyhow::Result<RecordSnapshot> {
        tracing::info!("Loading records from: {}", self.path.display());
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", self.path.display(), e))?;
        let snapshot: RecordSnapshot = serde_json::from_str(&contents)?;
        Ok(snapshot)
    }

    fn source_name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_is_valid() {
        let snapshot = MockRecordSource.load().await.unwrap();
        assert!(!snapshot.orders.is_empty());
        assert!(!snapshot.products.is_empty());
        snapshot.validate().unwrap();
    }

    #[tokio::test]
    async fn test_json_source_roundtrip() {
        let snapshot = MockRecordSource.load().await.unwrap();
        let path = std::env::temp_dir().join(format!("admin-snapshot-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, serde_json::to_string_pretty(&snapshot).unwrap()).unwrap();

        let loaded = JsonFileSource::new(&path).load().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.orders, snapshot.orders);
        assert_eq!(loaded.products, snapshot.products);
    }

    #[tokio::test]
    async fn test_json_source_missing_file() {
        let source = JsonFileSource::new("/nonexistent/admin-records.json");
        assert!(source.load().await.is_err());
    }

    #[test]
    fn test_snapshot_with_broken_total_is_rejected() {
        let mut orders = seed::mock_orders(chrono::Utc::now());
        orders[0].total += 10.0;
        let snapshot = RecordSnapshot {
            orders,
            products: Vec::new(),
        };
        let err = snapshot.validate().unwrap_err().to_string();
        assert!(err.contains("Invalid order"));
    }
}
