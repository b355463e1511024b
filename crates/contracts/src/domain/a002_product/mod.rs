pub mod aggregate;
pub mod list_filter;
pub mod stock_tier;
pub mod summary;

pub use aggregate::{Product, ProductCategory, ProductId, ProductStatus};
pub use list_filter::{ProductListFilter, ProductSortField};
pub use stock_tier::StockTier;
pub use summary::ProductSummary;
