use super::stock_tier::StockTier;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::list::{BadgeTone, FacetValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Категории каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Guitars,
    Keyboards,
    Drums,
    Audio,
    Accessories,
}

impl ProductCategory {
    pub fn code(&self) -> &'static str {
        match self {
            ProductCategory::Guitars => "guitars",
            ProductCategory::Keyboards => "keyboards",
            ProductCategory::Drums => "drums",
            ProductCategory::Audio => "audio",
            ProductCategory::Accessories => "accessories",
        }
    }

    /// Название для UI, участвует в текстовом поиске
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Guitars => "Guitarras",
            ProductCategory::Keyboards => "Teclados",
            ProductCategory::Drums => "Percusión",
            ProductCategory::Audio => "Audio",
            ProductCategory::Accessories => "Accesorios",
        }
    }

    pub fn all() -> Vec<ProductCategory> {
        vec![
            ProductCategory::Guitars,
            ProductCategory::Keyboards,
            ProductCategory::Drums,
            ProductCategory::Audio,
            ProductCategory::Accessories,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "guitars" => Some(ProductCategory::Guitars),
            "keyboards" => Some(ProductCategory::Keyboards),
            "drums" => Some(ProductCategory::Drums),
            "audio" => Some(ProductCategory::Audio),
            "accessories" => Some(ProductCategory::Accessories),
            _ => None,
        }
    }
}

impl FacetValue for ProductCategory {
    fn facet_code(&self) -> &'static str {
        self.code()
    }

    fn parse_facet(code: &str) -> Option<Self> {
        Self::from_code(code)
    }
}

/// Статус публикации товара. Переключается без ограничений.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Activo",
            ProductStatus::Inactive => "Inactivo",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ProductStatus::Active => BadgeTone::Success,
            ProductStatus::Inactive => BadgeTone::Neutral,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ProductStatus::Active => ProductStatus::Inactive,
            ProductStatus::Inactive => ProductStatus::Active,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(ProductStatus::Active),
            "inactive" => Some(ProductStatus::Inactive),
            _ => None,
        }
    }
}

impl FacetValue for ProductStatus {
    fn facet_code(&self) -> &'static str {
        self.code()
    }

    fn parse_facet(code: &str) -> Option<Self> {
        Self::from_code(code)
    }
}

/// Товар каталога (агрегат)
///
/// `base.code` - артикул, `base.description` - название товара.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Подробное описание для карточки товара
    #[serde(default)]
    pub details: String,
    pub brand: String,
    pub category: ProductCategory,

    /// Базовая цена
    pub price: f64,
    /// Цена со скидкой, не выше базовой
    #[serde(default)]
    pub sale_price: Option<f64>,

    /// Остаток на складе
    pub stock: u32,

    pub status: ProductStatus,
    #[serde(default)]
    pub featured: bool,

    /// Ссылки на изображения, первое - основное
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        sku: String,
        name: String,
        details: String,
        brand: String,
        category: ProductCategory,
        price: f64,
        sale_price: Option<f64>,
        stock: u32,
        images: Vec<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), sku, name),
            details,
            brand,
            category,
            price,
            sale_price,
            stock,
            status: ProductStatus::Active,
            featured: false,
            images,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn sku(&self) -> &str {
        &self.base.code
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.metadata.updated_at
    }

    /// Цена продажи: со скидкой, если она задана
    pub fn effective_price(&self) -> f64 {
        self.sale_price.unwrap_or(self.price)
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_price.is_some_and(|sale| sale < self.price)
    }

    pub fn stock_tier(&self) -> StockTier {
        StockTier::classify(self.stock)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название товара не может быть пустым".into());
        }
        if !(self.price >= 0.0) {
            return Err("Цена не может быть отрицательной".into());
        }
        if let Some(sale) = self.sale_price {
            if !(sale >= 0.0) {
                return Err("Цена со скидкой не может быть отрицательной".into());
            }
            if sale > self.price {
                return Err(format!(
                    "Цена со скидкой {} выше базовой цены {}",
                    sale, self.price
                ));
            }
        }
        if !self.base.metadata.is_consistent() {
            return Err("Дата изменения раньше даты создания".into());
        }
        Ok(())
    }

    /// Копия с переключённым статусом active/inactive
    pub fn with_status_toggled(&self, now: DateTime<Utc>) -> Product {
        let mut updated = self.clone();
        updated.status = self.status.toggled();
        updated.base.mark_modified(now);
        updated
    }

    /// Копия с переключённым признаком "рекомендуемый"
    pub fn with_featured_toggled(&self, now: DateTime<Utc>) -> Product {
        let mut updated = self.clone();
        updated.featured = !self.featured;
        updated.base.mark_modified(now);
        updated
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }
}
