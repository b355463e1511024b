use super::aggregate::{ProductCategory, ProductStatus};
use super::stock_tier::StockTier;
use crate::shared::list::Facet;
use serde::{Deserialize, Serialize};

/// Критерии фильтрации каталога. Все фасеты объединяются по И.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListFilter {
    /// Поиск по названию, бренду и категории (без учёта регистра)
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Facet<ProductStatus>,
    #[serde(default)]
    pub category: Facet<ProductCategory>,
    /// Уровень остатка, вычисляется из количества
    #[serde(default)]
    pub stock: Facet<StockTier>,
}

impl ProductListFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = Facet::Only(status);
        self
    }

    pub fn with_category(mut self, category: ProductCategory) -> Self {
        self.category = Facet::Only(category);
        self
    }

    pub fn with_stock(mut self, tier: StockTier) -> Self {
        self.stock = Facet::Only(tier);
        self
    }
}

/// Поле сортировки каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortField {
    Name,
    /// Цена продажи (со скидкой, если есть)
    Price,
    Stock,
    UpdatedAt,
}

impl ProductSortField {
    pub fn code(&self) -> &'static str {
        match self {
            ProductSortField::Name => "name",
            ProductSortField::Price => "price",
            ProductSortField::Stock => "stock",
            ProductSortField::UpdatedAt => "updated_at",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "name" => Some(ProductSortField::Name),
            "price" => Some(ProductSortField::Price),
            "stock" => Some(ProductSortField::Stock),
            "updated_at" => Some(ProductSortField::UpdatedAt),
            _ => None,
        }
    }
}
