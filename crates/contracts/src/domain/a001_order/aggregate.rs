use super::status::{OrderStatus, PaymentStatus, TransitionError};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID типа для заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Покупатель
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Строка заказа (позиция)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Название товара
    pub product_name: String,
    /// Количество
    pub quantity: u32,
    /// Цена за единицу
    pub unit_price: f64,
}

impl OrderLine {
    pub fn new(product_name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Сумма за строку
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Адрес доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Заказ (агрегат)
///
/// `base.code` - номер заказа, `base.description` - имя покупателя,
/// `base.comment` - примечания к заказу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    pub customer: OrderCustomer,

    /// Строки заказа
    pub lines: Vec<OrderLine>,

    /// Сумма по строкам
    pub subtotal: f64,
    /// Стоимость доставки
    pub shipping_cost: f64,
    /// subtotal + shipping_cost
    pub total: f64,

    pub status: OrderStatus,
    pub payment_status: PaymentStatus,

    pub shipping_address: ShippingAddress,

    /// Трек-номер, есть только у отправленных и доставленных заказов
    pub tracking_number: Option<String>,
}

/// Округление до копеек/центов
fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn same_amount(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.005
}

impl Order {
    /// Новый заказ в статусе pending с рассчитанными итогами
    pub fn new_for_insert(
        order_number: String,
        customer: OrderCustomer,
        lines: Vec<OrderLine>,
        shipping_cost: f64,
        payment_status: PaymentStatus,
        shipping_address: ShippingAddress,
        notes: Option<String>,
    ) -> Self {
        let base = BaseAggregate::new(OrderId::new_v4(), order_number, customer.name.clone());
        Self::from_parts(
            base,
            customer,
            lines,
            shipping_cost,
            OrderStatus::Pending,
            payment_status,
            shipping_address,
            None,
            notes,
        )
    }

    /// Заказ с существующими метаданными и статусом (загрузка из источника)
    #[allow(clippy::too_many_arguments)]
    pub fn with_state(
        id: OrderId,
        order_number: String,
        customer: OrderCustomer,
        lines: Vec<OrderLine>,
        shipping_cost: f64,
        status: OrderStatus,
        payment_status: PaymentStatus,
        shipping_address: ShippingAddress,
        tracking_number: Option<String>,
        notes: Option<String>,
        metadata: EntityMetadata,
    ) -> Self {
        let base = BaseAggregate::with_metadata(
            id,
            order_number,
            customer.name.clone(),
            None,
            metadata,
        );
        Self::from_parts(
            base,
            customer,
            lines,
            shipping_cost,
            status,
            payment_status,
            shipping_address,
            tracking_number,
            notes,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn from_parts(
        mut base: BaseAggregate<OrderId>,
        customer: OrderCustomer,
        lines: Vec<OrderLine>,
        shipping_cost: f64,
        status: OrderStatus,
        payment_status: PaymentStatus,
        shipping_address: ShippingAddress,
        tracking_number: Option<String>,
        notes: Option<String>,
    ) -> Self {
        base.set_comment(notes);
        let mut order = Self {
            base,
            customer,
            lines,
            subtotal: 0.0,
            shipping_cost,
            total: 0.0,
            status,
            payment_status,
            shipping_address,
            tracking_number,
        };
        order.recalculate_totals();
        order
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Номер заказа (ключ для отображения)
    pub fn order_number(&self) -> &str {
        &self.base.code
    }

    pub fn notes(&self) -> Option<&str> {
        self.base.comment.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.base.metadata.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.base.metadata.updated_at
    }

    /// Сумма по строкам заказа
    pub fn compute_subtotal(lines: &[OrderLine]) -> f64 {
        round_money(lines.iter().map(OrderLine::amount).sum())
    }

    /// Пересчитать итоги по строкам
    pub fn recalculate_totals(&mut self) {
        self.subtotal = Self::compute_subtotal(&self.lines);
        self.total = round_money(self.subtotal + self.shipping_cost);
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Номер заказа обязателен".into());
        }
        if self.customer.name.trim().is_empty() {
            return Err("Имя покупателя обязательно".into());
        }
        if self.base.description != self.customer.name {
            return Err(format!(
                "Описание заказа \"{}\" не совпадает с именем покупателя \"{}\"",
                self.base.description, self.customer.name
            ));
        }
        if self.customer.email.trim().is_empty() {
            return Err("Email покупателя обязателен".into());
        }
        if self.customer.phone.trim().is_empty() {
            return Err("Телефон покупателя обязателен".into());
        }
        if self.lines.is_empty() {
            return Err("Заказ должен содержать хотя бы одну строку".into());
        }
        for line in &self.lines {
            if line.quantity == 0 {
                return Err(format!(
                    "Количество должно быть положительным: {}",
                    line.product_name
                ));
            }
            if !(line.unit_price >= 0.0) {
                return Err(format!(
                    "Цена не может быть отрицательной: {}",
                    line.product_name
                ));
            }
        }
        if !(self.shipping_cost >= 0.0) {
            return Err("Стоимость доставки не может быть отрицательной".into());
        }
        if !same_amount(self.subtotal, Self::compute_subtotal(&self.lines)) {
            return Err(format!(
                "Сумма по строкам {} не совпадает с расчётной",
                self.subtotal
            ));
        }
        if !same_amount(self.total, self.subtotal + self.shipping_cost) {
            return Err(format!(
                "Итог {} не равен сумме по строкам и доставке",
                self.total
            ));
        }
        let has_tracking = self
            .tracking_number
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty());
        if self.status.carries_tracking() != has_tracking {
            return Err(format!(
                "Трек-номер допустим только для отправленных заказов (статус {})",
                self.status
            ));
        }
        if !self.base.metadata.is_consistent() {
            return Err("Дата изменения раньше даты создания".into());
        }
        Ok(())
    }

    /// Смена статуса по таблице переходов.
    ///
    /// Возвращает обновлённую копию заказа, исходный не меняется.
    /// Трек-номер обязателен при переходе в shipped и допустим только для него;
    /// delivered сохраняет имеющийся трек-номер, cancelled его сбрасывает.
    pub fn transition(
        &self,
        target: OrderStatus,
        tracking_number: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Order, TransitionError> {
        self.status.check_transition(target)?;

        let tracking_number = tracking_number
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let mut updated = self.clone();
        match target {
            OrderStatus::Shipped => {
                let tracking = tracking_number.ok_or(TransitionError::TrackingRequired)?;
                updated.tracking_number = Some(tracking);
            }
            _ if tracking_number.is_some() => {
                return Err(TransitionError::TrackingNotApplicable(target));
            }
            OrderStatus::Delivered => {}
            _ => updated.tracking_number = None,
        }

        updated.status = target;
        updated.base.mark_modified(now);
        Ok(updated)
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap()
    }

    fn sample(status: OrderStatus, tracking: Option<&str>) -> Order {
        Order::with_state(
            OrderId::new_v4(),
            "ORD-2024-001".into(),
            OrderCustomer {
                name: "María García".into(),
                email: "maria@example.com".into(),
                phone: "+34 600 123 456".into(),
            },
            vec![
                OrderLine::new("Guitarra Acústica Yamaha FG830", 1, 299.99),
                OrderLine::new("Cuerdas D'Addario EJ16", 3, 9.99),
            ],
            15.0,
            status,
            PaymentStatus::Paid,
            ShippingAddress {
                street: "Calle Mayor 10".into(),
                city: "Madrid".into(),
                postal_code: "28013".into(),
                country: "España".into(),
            },
            tracking.map(String::from),
            None,
            EntityMetadata::created_at(t0()),
        )
    }

    #[test]
    fn test_totals_are_derived() {
        let order = sample(OrderStatus::Pending, None);
        assert_eq!(order.subtotal, 329.96);
        assert_eq!(order.total, 344.96);
        assert_eq!(order.item_count(), 4);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inconsistent_total() {
        let mut order = sample(OrderStatus::Pending, None);
        order.total = 1.0;
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_tracking_mismatch() {
        assert!(sample(OrderStatus::Pending, Some("TRK-1")).validate().is_err());
        assert!(sample(OrderStatus::Shipped, None).validate().is_err());
        assert!(sample(OrderStatus::Shipped, Some("TRK-1")).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_lines() {
        let mut order = sample(OrderStatus::Pending, None);
        order.lines.clear();
        order.recalculate_totals();
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_processing_to_shipped_records_tracking() {
        let order = sample(OrderStatus::Processing, None);
        let now = t0() + Duration::hours(2);

        let shipped = order
            .transition(OrderStatus::Shipped, Some(" TRK-42 ".into()), now)
            .unwrap();

        assert_eq!(shipped.status, OrderStatus::Shipped);
        assert_eq!(shipped.tracking_number.as_deref(), Some("TRK-42"));
        assert_eq!(shipped.updated_at(), now);
        assert_eq!(shipped.created_at(), order.created_at());
        assert_eq!(shipped.base.metadata.version, order.base.metadata.version + 1);
        assert!(shipped.validate().is_ok());
        // исходный заказ не изменён
        assert_eq!(order.status, OrderStatus::Processing);
    }

    #[test]
    fn test_ship_without_tracking_is_rejected() {
        let order = sample(OrderStatus::Processing, None);
        assert_eq!(
            order.transition(OrderStatus::Shipped, None, t0()),
            Err(TransitionError::TrackingRequired)
        );
        assert_eq!(
            order.transition(OrderStatus::Shipped, Some("   ".into()), t0()),
            Err(TransitionError::TrackingRequired)
        );
    }

    #[test]
    fn test_tracking_only_applies_to_shipping() {
        let order = sample(OrderStatus::Pending, None);
        assert_eq!(
            order.transition(OrderStatus::Processing, Some("TRK".into()), t0()),
            Err(TransitionError::TrackingNotApplicable(OrderStatus::Processing))
        );
    }

    #[test]
    fn test_delivered_keeps_and_cancelled_clears_tracking() {
        let shipped = sample(OrderStatus::Shipped, Some("TRK-7"));

        let delivered = shipped.transition(OrderStatus::Delivered, None, t0()).unwrap();
        assert_eq!(delivered.tracking_number.as_deref(), Some("TRK-7"));

        let cancelled = shipped.transition(OrderStatus::Cancelled, None, t0()).unwrap();
        assert_eq!(cancelled.tracking_number, None);
        assert!(cancelled.validate().is_ok());
    }

    #[test]
    fn test_terminal_orders_reject_everything() {
        let delivered = sample(OrderStatus::Delivered, Some("TRK-7"));
        for target in OrderStatus::all() {
            assert!(delivered
                .transition(target, Some("TRK-8".into()), t0())
                .is_err());
        }
    }

    #[test]
    fn test_updated_at_does_not_go_back() {
        let order = sample(OrderStatus::Pending, None);
        let earlier = t0() - Duration::days(1);
        let updated = order.transition(OrderStatus::Processing, None, earlier).unwrap();
        assert_eq!(updated.updated_at(), t0());
    }

    #[test]
    fn test_new_for_insert_builds_pending_order_with_totals() {
        let order = Order::new_for_insert(
            "ORD-2024-013".into(),
            OrderCustomer {
                name: "Irene Castro".into(),
                email: "irene@example.com".into(),
                phone: "+34 611 222 333".into(),
            },
            vec![
                OrderLine::new("Afinador Korg TM-60", 2, 29.9),
                OrderLine::new("Cuerdas D'Addario EJ16", 3, 9.5),
            ],
            4.95,
            PaymentStatus::Pending,
            ShippingAddress {
                street: "Calle Mayor 1".into(),
                city: "Zaragoza".into(),
                postal_code: "50001".into(),
                country: "España".into(),
            },
            Some("Llamar antes".into()),
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.tracking_number, None);
        assert_eq!(order.subtotal, 88.3);
        assert_eq!(order.total, 93.25);
        assert_eq!(order.item_count(), 5);
        assert_eq!(order.description(), "Irene Castro");
        assert_eq!(order.notes(), Some("Llamar antes"));
        assert_eq!(order.base.metadata.version, 0);
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_description_must_follow_customer_name() {
        let mut order = sample(OrderStatus::Pending, None);
        order.customer.name = "Otra Persona".into();
        assert!(order.validate().is_err());
    }
}
