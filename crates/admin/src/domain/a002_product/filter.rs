use crate::shared::list::{filter_records, RecordFilter, SearchQuery};
use contracts::domain::a002_product::{Product, ProductListFilter, ProductSortField};
use contracts::shared::list::SortSpec;
use std::cmp::Ordering;

pub struct ProductCriteria<'f> {
    search: SearchQuery,
    filter: &'f ProductListFilter,
}

impl<'f> ProductCriteria<'f> {
    pub fn new(filter: &'f ProductListFilter) -> Self {
        Self {
            search: SearchQuery::new(&filter.search),
            filter,
        }
    }
}

impl RecordFilter<Product> for ProductCriteria<'_> {
    fn matches(&self, product: &Product) -> bool {
        self.search.matches_any([
            product.name(),
            product.brand.as_str(),
            product.category.display_name(),
        ]) && self.filter.status.matches(&product.status)
            && self.filter.category.matches(&product.category)
            && self.filter.stock.matches(&product.stock_tier())
    }
}

/// Товары, прошедшие все фасеты, в исходном порядке
pub fn filter_products<'a>(products: &'a [Product], filter: &ProductListFilter) -> Vec<&'a Product> {
    filter_records(products, &ProductCriteria::new(filter))
}

pub fn sort_products(products: &mut [&Product], sort: SortSpec<ProductSortField>) {
    products.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Product, b: &Product, field: ProductSortField) -> Ordering {
    match field {
        ProductSortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        ProductSortField::Price => a.effective_price().total_cmp(&b.effective_price()),
        ProductSortField::Stock => a.stock.cmp(&b.stock),
        ProductSortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed;
    use chrono::Utc;
    use contracts::domain::a002_product::{ProductCategory, ProductStatus, StockTier};
    use contracts::shared::list::Facet;

    fn skus(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.sku().to_string()).collect()
    }

    fn with_stock(stocks: &[u32]) -> Vec<Product> {
        let template = seed::mock_products(Utc::now()).remove(0);
        stocks
            .iter()
            .enumerate()
            .map(|(i, stock)| {
                let mut product = template.clone();
                product.base.code = format!("SKU-{}", i);
                product.stock = *stock;
                product
            })
            .collect()
    }

    #[test]
    fn test_low_stock_facet() {
        let products = with_stock(&[0, 3, 5, 6]);
        let filter = ProductListFilter::default().with_stock(StockTier::Low);
        let result = filter_products(&products, &filter);
        let stocks: Vec<u32> = result.iter().map(|p| p.stock).collect();
        assert_eq!(stocks, vec![3, 5]);
    }

    #[test]
    fn test_out_and_in_stock_facets() {
        let products = with_stock(&[0, 3, 5, 6, 0]);
        let out = filter_products(&products, &ProductListFilter::default().with_stock(StockTier::Out));
        assert_eq!(skus(&out), vec!["SKU-0", "SKU-4"]);
        let in_stock =
            filter_products(&products, &ProductListFilter::default().with_stock(StockTier::InStock));
        assert_eq!(skus(&in_stock), vec!["SKU-3"]);
    }

    #[test]
    fn test_search_by_name_brand_and_category() {
        let products = seed::mock_products(Utc::now());

        let by_name = filter_products(&products, &ProductListFilter::default().with_search("guitarra"));
        assert_eq!(skus(&by_name), vec!["GTR-FG830", "GTR-STRAT"]);

        let by_brand = filter_products(&products, &ProductListFilter::default().with_search("YAMAHA"));
        assert_eq!(skus(&by_brand), vec!["GTR-FG830", "KEY-PSRE373"]);

        let by_category = filter_products(&products, &ProductListFilter::default().with_search("percu"));
        assert_eq!(skus(&by_category), vec!["DRM-NITRO", "DRM-CAJON"]);
    }

    #[test]
    fn test_category_and_status_facets() {
        let products = seed::mock_products(Utc::now());
        let filter = ProductListFilter::default()
            .with_category(ProductCategory::Audio)
            .with_status(ProductStatus::Active);
        assert_eq!(skus(&filter_products(&products, &filter)), vec!["AUD-M50X"]);
    }

    #[test]
    fn test_stale_facet_is_fail_open() {
        let products = seed::mock_products(Utc::now());
        let filter = ProductListFilter {
            search: String::new(),
            status: Facet::parse("archived"),
            category: Facet::parse("violins"),
            stock: Facet::parse("backorder"),
        };
        assert_eq!(filter_products(&products, &filter).len(), products.len());
    }

    #[test]
    fn test_sort_by_effective_price() {
        let products = seed::mock_products(Utc::now());
        let mut rows: Vec<&Product> = products.iter().collect();
        sort_products(&mut rows, SortSpec::asc(ProductSortField::Price));
        assert_eq!(rows[0].sku(), "ACC-EJ16");
        assert_eq!(rows.last().unwrap().sku(), "GTR-STRAT");
        // FP-30X сортируется по цене со скидкой 649, а не 699
        let fp30 = rows.iter().position(|p| p.sku() == "KEY-FP30X").unwrap();
        assert_eq!(fp30, rows.len() - 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = seed::mock_products(Utc::now());
        let filter = ProductListFilter::default()
            .with_search("a")
            .with_status(ProductStatus::Active)
            .with_stock(StockTier::InStock);

        let once: Vec<Product> = filter_products(&products, &filter)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, &filter);

        assert!(!once.is_empty());
        assert_eq!(skus(&twice), once.iter().map(|p| p.sku().to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_keeps_source_order_for_equal_keys() {
        let products = with_stock(&[5, 3, 5, 3]);
        let mut rows: Vec<&Product> = products.iter().collect();

        sort_products(&mut rows, SortSpec::asc(ProductSortField::Stock));
        assert_eq!(skus(&rows), vec!["SKU-1", "SKU-3", "SKU-0", "SKU-2"]);

        sort_products(&mut rows, SortSpec::desc(ProductSortField::Stock));
        assert_eq!(skus(&rows), vec!["SKU-0", "SKU-2", "SKU-1", "SKU-3"]);

        // одинаковая цена у всех: порядок источника не меняется
        let mut rows: Vec<&Product> = products.iter().collect();
        sort_products(&mut rows, SortSpec::desc(ProductSortField::Price));
        assert_eq!(skus(&rows), vec!["SKU-0", "SKU-1", "SKU-2", "SKU-3"]);
    }
}
