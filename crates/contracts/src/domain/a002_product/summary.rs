use super::stock_tier::StockTier;
use serde::{Deserialize, Serialize};

/// Сводка по каталогу для карточек дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub total_count: usize,
    pub active: usize,
    pub inactive: usize,
    pub featured: usize,
    /// Количество товаров по уровню остатка (в порядке StockTier::all)
    pub by_stock_tier: Vec<(StockTier, usize)>,
    /// Стоимость остатков по цене продажи
    pub inventory_value: f64,
}

impl ProductSummary {
    pub fn count_for(&self, tier: StockTier) -> usize {
        self.by_stock_tier
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
