use super::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Сводка по заказам для карточек дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub total_count: usize,
    /// Количество заказов по каждому статусу (в порядке OrderStatus::all)
    pub by_status: Vec<(OrderStatus, usize)>,
    /// Выручка по неотменённым заказам
    pub revenue: f64,
    /// Заказы с неоплаченным счётом
    pub awaiting_payment: usize,
}

impl OrderSummary {
    pub fn count_for(&self, status: OrderStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}
