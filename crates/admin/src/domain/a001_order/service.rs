use super::filter;
use crate::shared::error::AdminError;
use crate::shared::list::{paginate, ListState};
use crate::system::{AdminSession, MutationKind, MutationTicket, RecordRef};
use chrono::{DateTime, TimeZone, Utc};
use contracts::domain::a001_order::{
    Order, OrderId, OrderListFilter, OrderSortField, OrderStatus, OrderSummary, PaymentStatus,
};
use contracts::shared::list::ListResult;

pub type OrderListState = ListState<OrderListFilter, OrderSortField>;

/// Страница списка заказов.
///
/// Фильтр -> сортировка -> пересчёт номера страницы -> нарезка.
/// `now` задаёт "сегодня" и границы временных окон.
pub fn list<'a, Tz: TimeZone>(
    session: &'a AdminSession,
    state: &mut OrderListState,
    now: &DateTime<Tz>,
) -> ListResult<&'a Order> {
    let mut rows = filter::filter_orders(session.orders(), &state.filter, now);
    if let Some(sort) = state.sort {
        filter::sort_orders(&mut rows, sort);
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

/// Смена статуса заказа.
///
/// Переход проверяется по таблице статусов, изменение применяется сразу
/// и ждёт подтверждения хранилища.
pub fn transition(
    session: &mut AdminSession,
    id: OrderId,
    target: OrderStatus,
    tracking_number: Option<String>,
    now: DateTime<Utc>,
) -> Result<MutationTicket<Order>, AdminError> {
    let current = session.order(id).ok_or(AdminError::OrderNotFound(id))?;
    session.ensure_not_pending(RecordRef::Order(id))?;

    let from = current.status;
    let updated = match current.transition(target, tracking_number, now) {
        Ok(order) => order,
        Err(e) => {
            tracing::warn!(
                order = %current.order_number(),
                from = %from,
                to = %target,
                "Order transition rejected: {}",
                e
            );
            return Err(e.into());
        }
    };

    let mutation_id = session.apply_order(
        updated.clone(),
        MutationKind::OrderTransition { from, to: target },
        now,
    )?;

    tracing::info!(
        order = %updated.order_number(),
        from = %from,
        to = %target,
        mutation = %mutation_id,
        "Order status changed"
    );

    Ok(MutationTicket {
        mutation_id,
        record: updated,
    })
}

/// Сводка для карточек дашборда
pub fn summary(orders: &[Order]) -> OrderSummary {
    let by_status = OrderStatus::all()
        .into_iter()
        .map(|status| (status, orders.iter().filter(|o| o.status == status).count()))
        .collect();

    let revenue: f64 = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total)
        .sum();

    OrderSummary {
        total_count: orders.len(),
        by_status,
        revenue: (revenue * 100.0).round() / 100.0,
        awaiting_payment: orders
            .iter()
            .filter(|o| o.payment_status == PaymentStatus::Pending && o.status != OrderStatus::Cancelled)
            .count(),
    }
}
