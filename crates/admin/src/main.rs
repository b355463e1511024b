use admin::domain::{a001_order, a002_product};
use admin::shared::config::{self, DataSourceKind};
use admin::shared::data::{JsonFileSource, MockRecordSource, RecordSource, TracingSink};
use admin::system::{sync_pending, AdminSession};
use chrono::{Local, Utc};
use contracts::domain::a001_order::{OrderListFilter, OrderSortField, OrderStatus};
use contracts::domain::a002_product::{ProductListFilter, StockTier};
use contracts::shared::list::{DateWindow, SortSpec};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::load_config()?;

    let source: Box<dyn RecordSource> = match config.data.source {
        DataSourceKind::Mock => Box::new(MockRecordSource),
        DataSourceKind::Json => {
            let path = config::get_snapshot_path(&config)
                .ok_or_else(|| anyhow::anyhow!("[data] path is not set"))?;
            tracing::info!("Snapshot path: {}", path.display());
            Box::new(JsonFileSource::new(path))
        }
    };

    let mut session = AdminSession::load(source.as_ref()).await?;
    let page_size = config.list.default_page_size;

    // Заказы за неделю, новые сверху
    let mut orders_state = a001_order::service::OrderListState::new(page_size);
    orders_state.set_filter(OrderListFilter::default().with_date_window(DateWindow::Week));
    orders_state.set_sort(Some(SortSpec::desc(OrderSortField::CreatedAt)));
    let page = a001_order::service::list(&session, &mut orders_state, &Local::now());
    tracing::info!(
        "Orders this week: {} (page {}/{})",
        page.total_count,
        page.page + 1,
        page.total_pages.max(1)
    );
    for order in &page.items {
        tracing::info!(
            "  {} | {:<20} | {:>10} | {:>9.2}",
            order.order_number(),
            order.customer.name,
            order.status.display_name(),
            order.total
        );
    }

    // Взять в работу первый ожидающий заказ
    let pending_order = session
        .orders()
        .iter()
        .find(|o| o.status == OrderStatus::Pending)
        .map(|o| o.base.id);
    if let Some(id) = pending_order {
        match a001_order::service::transition(&mut session, id, OrderStatus::Processing, None, Utc::now()) {
            Ok(ticket) => tracing::info!(
                "Order {} moved to {}",
                ticket.record.order_number(),
                ticket.record.status
            ),
            Err(e) => tracing::warn!("Transition failed: {}", e),
        }
    }

    // Товары с низким остатком
    // Компактная страница: наименьший из допустимых размеров
    let compact = config
        .list
        .page_size_options
        .iter()
        .copied()
        .min()
        .unwrap_or(page_size);
    let mut products_state = a002_product::service::ProductListState::new(page_size);
    products_state.set_page_size(config.list.resolve_page_size(compact));
    products_state.set_filter(ProductListFilter::default().with_stock(StockTier::Low));
    let low_stock: Vec<_> = a002_product::service::list(&session, &mut products_state)
        .items
        .iter()
        .map(|p| (p.base.id, p.name().to_string(), p.stock))
        .collect();
    for (_, name, stock) in &low_stock {
        tracing::info!("  Low stock: {} ({} uds.)", name, stock);
    }
    if let Some((id, _, _)) = low_stock.first() {
        if let Err(e) = a002_product::service::toggle_featured(&mut session, *id, Utc::now()) {
            tracing::warn!("Toggle failed: {}", e);
        }
    }

    let report = sync_pending(&mut session, &TracingSink).await;
    tracing::info!(
        "Sync finished: {} committed, {} rolled back",
        report.committed.len(),
        report.rolled_back.len()
    );

    let orders = a001_order::service::summary(session.orders());
    tracing::info!(
        "Orders: {} total, revenue {:.2}, awaiting payment {}",
        orders.total_count,
        orders.revenue,
        orders.awaiting_payment
    );
    for (status, count) in &orders.by_status {
        tracing::info!("  {}: {}", status.display_name(), count);
    }

    let products = a002_product::service::summary(session.products());
    tracing::info!(
        "Products: {} total, {} active, {} featured, inventory value {:.2}",
        products.total_count,
        products.active,
        products.featured,
        products.inventory_value
    );

    Ok(())
}
