use crate::shared::list::{BadgeTone, FacetValue};
use serde::{Deserialize, Serialize};

/// Верхняя граница (включительно) низкого остатка
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Уровень остатка товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockTier {
    /// Нет в наличии (0)
    Out,
    /// Мало (1..=5)
    Low,
    /// В наличии (> 5)
    InStock,
}

impl StockTier {
    /// Классификация количества на складе
    pub fn classify(stock: u32) -> Self {
        match stock {
            0 => StockTier::Out,
            1..=LOW_STOCK_THRESHOLD => StockTier::Low,
            _ => StockTier::InStock,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StockTier::Out => "out",
            StockTier::Low => "low",
            StockTier::InStock => "in-stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockTier::Out => "Agotado",
            StockTier::Low => "Stock bajo",
            StockTier::InStock => "En stock",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            StockTier::Out => BadgeTone::Error,
            StockTier::Low => BadgeTone::Warning,
            StockTier::InStock => BadgeTone::Success,
        }
    }

    pub fn all() -> Vec<StockTier> {
        vec![StockTier::InStock, StockTier::Low, StockTier::Out]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "out" => Some(StockTier::Out),
            "low" => Some(StockTier::Low),
            "in-stock" => Some(StockTier::InStock),
            _ => None,
        }
    }
}

impl FacetValue for StockTier {
    fn facet_code(&self) -> &'static str {
        self.code()
    }

    fn parse_facet(code: &str) -> Option<Self> {
        Self::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(StockTier::classify(0), StockTier::Out);
        assert_eq!(StockTier::classify(1), StockTier::Low);
        assert_eq!(StockTier::classify(5), StockTier::Low);
        assert_eq!(StockTier::classify(6), StockTier::InStock);
        assert_eq!(StockTier::classify(u32::MAX), StockTier::InStock);
    }

    #[test]
    fn test_every_quantity_gets_exactly_one_tier() {
        for stock in 0..=100u32 {
            let tier = StockTier::classify(stock);
            let expected = if stock == 0 {
                StockTier::Out
            } else if stock <= 5 {
                StockTier::Low
            } else {
                StockTier::InStock
            };
            assert_eq!(tier, expected, "stock {}", stock);
        }
    }

    #[test]
    fn test_codes() {
        for tier in StockTier::all() {
            assert_eq!(StockTier::from_code(tier.code()), Some(tier));
        }
        assert_eq!(
            serde_json::to_string(&StockTier::InStock).unwrap(),
            "\"in-stock\""
        );
    }
}
