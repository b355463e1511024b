use chrono::{DateTime, Utc};
use contracts::domain::a001_order::{Order, OrderId, OrderStatus};
use contracts::domain::a002_product::{Product, ProductId, ProductStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID неподтверждённого изменения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationId(pub Uuid);

impl MutationId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for MutationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ссылка на изменённую запись
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordRef {
    Order(OrderId),
    Product(ProductId),
}

impl std::fmt::Display for RecordRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordRef::Order(id) => write!(f, "order {}", id),
            RecordRef::Product(id) => write!(f, "product {}", id),
        }
    }
}

/// Вид изменения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    OrderTransition { from: OrderStatus, to: OrderStatus },
    ProductStatusToggle { to: ProductStatus },
    ProductFeaturedToggle { featured: bool },
    ProductRemoval,
}

/// Состояние записи до изменения, нужно для отката
#[derive(Debug, Clone)]
pub(crate) enum Snapshot {
    Order(Order),
    Product(Product),
    RemovedProduct(Product),
}

/// Изменение, применённое локально и ожидающее подтверждения хранилища
#[derive(Debug, Clone)]
pub struct PendingMutation {
    pub id: MutationId,
    pub record: RecordRef,
    pub kind: MutationKind,
    pub registered_at: DateTime<Utc>,
    pub(crate) snapshot: Snapshot,
}

/// Результат принятой операции: ID изменения и новая версия записи
#[derive(Debug, Clone, PartialEq)]
pub struct MutationTicket<T> {
    pub mutation_id: MutationId,
    pub record: T,
}

/// Журнал неподтверждённых изменений в порядке регистрации
#[derive(Debug, Default)]
pub struct PendingLedger {
    entries: Vec<PendingMutation>,
}

impl PendingLedger {
    pub(crate) fn register(
        &mut self,
        record: RecordRef,
        kind: MutationKind,
        snapshot: Snapshot,
        now: DateTime<Utc>,
    ) -> MutationId {
        let id = MutationId::new_v4();
        self.entries.push(PendingMutation {
            id,
            record,
            kind,
            registered_at: now,
            snapshot,
        });
        id
    }

    pub fn pending_for(&self, record: RecordRef) -> Option<MutationId> {
        self.entries
            .iter()
            .find(|m| m.record == record)
            .map(|m| m.id)
    }

    pub(crate) fn take(&mut self, id: MutationId) -> Option<PendingMutation> {
        let index = self.entries.iter().position(|m| m.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[PendingMutation] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
