use super::status::OrderStatus;
use crate::shared::list::{DateWindow, Facet};
use serde::{Deserialize, Serialize};

/// Критерии фильтрации списка заказов. Все фасеты объединяются по И.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderListFilter {
    /// Поиск по номеру заказа, имени и email покупателя (без учёта регистра)
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub status: Facet<OrderStatus>,
    #[serde(default)]
    pub date_window: DateWindow,
}

impl OrderListFilter {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Facet::Only(status);
        self
    }

    pub fn with_date_window(mut self, window: DateWindow) -> Self {
        self.date_window = window;
        self
    }
}

/// Поле сортировки списка заказов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSortField {
    CreatedAt,
    Total,
    OrderNumber,
    CustomerName,
}

impl OrderSortField {
    pub fn code(&self) -> &'static str {
        match self {
            OrderSortField::CreatedAt => "created_at",
            OrderSortField::Total => "total",
            OrderSortField::OrderNumber => "order_number",
            OrderSortField::CustomerName => "customer_name",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "created_at" => Some(OrderSortField::CreatedAt),
            "total" => Some(OrderSortField::Total),
            "order_number" => Some(OrderSortField::OrderNumber),
            "customer_name" => Some(OrderSortField::CustomerName),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_all() {
        let filter: OrderListFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter, OrderListFilter::default());
        assert!(filter.status.is_all());
        assert_eq!(filter.date_window, DateWindow::All);
    }

    #[test]
    fn test_stale_facet_values_deserialize_as_all() {
        let filter: OrderListFilter =
            serde_json::from_str(r#"{"search":"ana","status":"on_hold","date_window":"year"}"#)
                .unwrap();
        assert_eq!(filter.search, "ana");
        assert!(filter.status.is_all());
        assert_eq!(filter.date_window, DateWindow::All);
    }
}
