use crate::shared::list::{BadgeTone, FacetValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Статус заказа
///
/// Переходы:
/// pending -> processing | cancelled
/// processing -> shipped | cancelled
/// shipped -> delivered | cancelled
/// delivered, cancelled - конечные
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Название для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Processing => "Procesando",
            OrderStatus::Shipped => "Enviado",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Pending => BadgeTone::Warning,
            OrderStatus::Processing => BadgeTone::Info,
            OrderStatus::Shipped => BadgeTone::Primary,
            OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Cancelled => BadgeTone::Error,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "processing" => Some(OrderStatus::Processing),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Допустимые целевые статусы из текущего
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Processing, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Shipped, OrderStatus::Cancelled],
            OrderStatus::Shipped => &[OrderStatus::Delivered, OrderStatus::Cancelled],
            OrderStatus::Delivered | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_transitions().contains(&target)
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Статусы, в которых у заказа есть трек-номер
    pub fn carries_tracking(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }

    /// Проверка перехода без изменения заказа
    pub fn check_transition(&self, target: OrderStatus) -> Result<(), TransitionError> {
        if *self == target {
            return Err(TransitionError::NoOp(target));
        }
        if !self.can_transition_to(target) {
            return Err(TransitionError::NotAllowed {
                from: *self,
                to: target,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FacetValue for OrderStatus {
    fn facet_code(&self) -> &'static str {
        self.code()
    }

    fn parse_facet(code: &str) -> Option<Self> {
        Self::from_code(code)
    }
}

/// Статус оплаты. Меняется независимо от статуса заказа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
            PaymentStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pagado",
            PaymentStatus::Pending => "Pago pendiente",
            PaymentStatus::Refunded => "Reembolsado",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            PaymentStatus::Paid => BadgeTone::Success,
            PaymentStatus::Pending => BadgeTone::Warning,
            PaymentStatus::Refunded => BadgeTone::Neutral,
        }
    }
}

/// Отказ в смене статуса заказа
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("order is already {0}")]
    NoOp(OrderStatus),

    #[error("transition {from} -> {to} is not allowed")]
    NotAllowed { from: OrderStatus, to: OrderStatus },

    #[error("tracking number is required to ship an order")]
    TrackingRequired,

    #[error("tracking number cannot be set when moving to {0}")]
    TrackingNotApplicable(OrderStatus),
}
