use super::filter;
use crate::shared::error::AdminError;
use crate::shared::list::{paginate, ListState};
use crate::system::{AdminSession, MutationKind, MutationTicket, RecordRef};
use chrono::{DateTime, Utc};
use contracts::domain::a002_product::{
    Product, ProductId, ProductListFilter, ProductSortField, ProductStatus, ProductSummary,
    StockTier,
};
use contracts::shared::list::ListResult;

pub type ProductListState = ListState<ProductListFilter, ProductSortField>;

/// Страница каталога: фильтр -> сортировка -> пересчёт страницы -> нарезка
pub fn list<'a>(session: &'a AdminSession, state: &mut ProductListState) -> ListResult<&'a Product> {
    let mut rows = filter::filter_products(session.products(), &state.filter);
    if let Some(sort) = state.sort {
        filter::sort_products(&mut rows, sort);
    }

    let total_count = rows.len();
    state.clamp_page(total_count);
    let slice = paginate(&rows, state.page, state.page_size);
    let total_pages = state.total_pages(total_count);

    ListResult {
        items: slice.visible.to_vec(),
        total_count,
        page: state.page,
        page_size: state.page_size,
        total_pages,
        has_more: state.page + 1 < total_pages,
    }
}

fn current(session: &AdminSession, id: ProductId) -> Result<&Product, AdminError> {
    let product = session.product(id).ok_or(AdminError::ProductNotFound(id))?;
    session.ensure_not_pending(RecordRef::Product(id))?;
    Ok(product)
}

/// Переключить статус active/inactive
pub fn toggle_status(
    session: &mut AdminSession,
    id: ProductId,
    now: DateTime<Utc>,
) -> Result<MutationTicket<Product>, AdminError> {
    let updated = current(session, id)?.with_status_toggled(now);
    let mutation_id = session.apply_product(
        updated.clone(),
        MutationKind::ProductStatusToggle { to: updated.status },
        now,
    )?;

    tracing::info!(
        product = %updated.name(),
        status = updated.status.code(),
        mutation = %mutation_id,
        "Product status toggled"
    );

    Ok(MutationTicket {
        mutation_id,
        record: updated,
    })
}

/// Переключить признак "рекомендуемый"
pub fn toggle_featured(
    session: &mut AdminSession,
    id: ProductId,
    now: DateTime<Utc>,
) -> Result<MutationTicket<Product>, AdminError> {
    let updated = current(session, id)?.with_featured_toggled(now);
    let mutation_id = session.apply_product(
        updated.clone(),
        MutationKind::ProductFeaturedToggle {
            featured: updated.featured,
        },
        now,
    )?;

    tracing::info!(
        product = %updated.name(),
        featured = updated.featured,
        mutation = %mutation_id,
        "Product featured flag toggled"
    );

    Ok(MutationTicket {
        mutation_id,
        record: updated,
    })
}

/// Удалить товар из каталога. После подтверждения удаление окончательное.
pub fn remove(
    session: &mut AdminSession,
    id: ProductId,
    now: DateTime<Utc>,
) -> Result<MutationTicket<Product>, AdminError> {
    current(session, id)?;
    let (mutation_id, removed) = session.apply_product_removal(id, now)?;

    tracing::info!(
        product = %removed.name(),
        mutation = %mutation_id,
        "Product removed"
    );

    Ok(MutationTicket {
        mutation_id,
        record: removed,
    })
}

/// Сводка для карточек дашборда
pub fn summary(products: &[Product]) -> ProductSummary {
    let count_status = |status: ProductStatus| products.iter().filter(|p| p.status == status).count();

    let by_stock_tier = StockTier::all()
        .into_iter()
        .map(|tier| (tier, products.iter().filter(|p| p.stock_tier() == tier).count()))
        .collect();

    let inventory_value: f64 = products
        .iter()
        .map(|p| p.stock as f64 * p.effective_price())
        .sum();

    ProductSummary {
        total_count: products.len(),
        active: count_status(ProductStatus::Active),
        inactive: count_status(ProductStatus::Inactive),
        featured: products.iter().filter(|p| p.featured).count(),
        by_stock_tier,
        inventory_value: (inventory_value * 100.0).round() / 100.0,
    }
}
