use crate::shared::list::{filter_records, RecordFilter, SearchQuery};
use chrono::{DateTime, TimeZone};
use contracts::domain::a001_order::{Order, OrderListFilter, OrderSortField};
use contracts::shared::list::SortSpec;
use std::cmp::Ordering;

/// Критерии списка заказов, привязанные к моменту запроса
pub struct OrderCriteria<'f, Tz: TimeZone> {
    search: SearchQuery,
    filter: &'f OrderListFilter,
    now: DateTime<Tz>,
}

impl<'f, Tz: TimeZone> OrderCriteria<'f, Tz> {
    pub fn new(filter: &'f OrderListFilter, now: DateTime<Tz>) -> Self {
        Self {
            search: SearchQuery::new(&filter.search),
            filter,
            now,
        }
    }
}

impl<Tz: TimeZone> RecordFilter<Order> for OrderCriteria<'_, Tz> {
    fn matches(&self, order: &Order) -> bool {
        self.search.matches_any([
            order.order_number(),
            order.customer.name.as_str(),
            order.customer.email.as_str(),
        ]) && self.filter.status.matches(&order.status)
            && self.filter.date_window.contains(order.created_at(), &self.now)
    }
}

/// Заказы, прошедшие все фасеты, в исходном порядке
pub fn filter_orders<'a, Tz: TimeZone>(
    orders: &'a [Order],
    filter: &OrderListFilter,
    now: &DateTime<Tz>,
) -> Vec<&'a Order> {
    filter_records(orders, &OrderCriteria::new(filter, now.clone()))
}

/// Устойчивая сортировка: равные записи сохраняют порядок
pub fn sort_orders(orders: &mut [&Order], sort: SortSpec<OrderSortField>) {
    orders.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        if sort.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare(a: &Order, b: &Order, field: OrderSortField) -> Ordering {
    match field {
        OrderSortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        OrderSortField::Total => a.total.total_cmp(&b.total),
        OrderSortField::OrderNumber => a.order_number().cmp(b.order_number()),
        OrderSortField::CustomerName => a
            .customer
            .name
            .to_lowercase()
            .cmp(&b.customer.name.to_lowercase()),
    }
}
