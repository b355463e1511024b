use super::ledger::{MutationId, MutationKind, PendingLedger, PendingMutation, RecordRef, Snapshot};
use crate::shared::data::{Collection, RecordSnapshot, RecordSource};
use crate::shared::error::AdminError;
use chrono::{DateTime, Utc};
use contracts::domain::a001_order::{Order, OrderId};
use contracts::domain::a002_product::{Product, ProductId};
use contracts::domain::common::AggregateRoot;

/// Административная сессия.
///
/// Владеет копией заказов и каталога. Изменения применяются сразу
/// и регистрируются в журнале, пока хранилище их не подтвердит (`commit`)
/// или не отклонит (`rollback`).
#[derive(Debug)]
pub struct AdminSession {
    orders: Collection<Order>,
    products: Collection<Product>,
    ledger: PendingLedger,
}

impl AdminSession {
    /// Создать сессию из снимка. Снимок с некорректной записью отклоняется.
    pub fn new(snapshot: RecordSnapshot) -> anyhow::Result<Self> {
        snapshot.validate()?;
        Ok(Self {
            orders: Collection::new(snapshot.orders),
            products: Collection::new(snapshot.products),
            ledger: PendingLedger::default(),
        })
    }

    pub async fn load(source: &dyn RecordSource) -> anyhow::Result<Self> {
        let snapshot = source.load().await?;
        let session = Self::new(snapshot)?;
        tracing::info!(
            source = source.source_name(),
            orders = session.orders.len(),
            products = session.products.len(),
            "Admin session loaded"
        );
        Ok(session)
    }

    pub fn orders(&self) -> &[Order] {
        self.orders.as_slice()
    }

    pub fn products(&self) -> &[Product] {
        self.products.as_slice()
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Неподтверждённые изменения в порядке регистрации
    pub fn pending(&self) -> &[PendingMutation] {
        self.ledger.entries()
    }

    pub(crate) fn ensure_not_pending(&self, record: RecordRef) -> Result<(), AdminError> {
        match self.ledger.pending_for(record) {
            Some(mutation) => Err(AdminError::MutationPending {
                record: record.to_string(),
                mutation,
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn apply_order(
        &mut self,
        updated: Order,
        kind: MutationKind,
        now: DateTime<Utc>,
    ) -> Result<MutationId, AdminError> {
        let id = updated.id();
        let previous = self
            .orders
            .replace(updated)
            .ok_or(AdminError::OrderNotFound(id))?;
        Ok(self
            .ledger
            .register(RecordRef::Order(id), kind, Snapshot::Order(previous), now))
    }

    pub(crate) fn apply_product(
        &mut self,
        updated: Product,
        kind: MutationKind,
        now: DateTime<Utc>,
    ) -> Result<MutationId, AdminError> {
        let id = updated.id();
        let previous = self
            .products
            .replace(updated)
            .ok_or(AdminError::ProductNotFound(id))?;
        Ok(self
            .ledger
            .register(RecordRef::Product(id), kind, Snapshot::Product(previous), now))
    }

    pub(crate) fn apply_product_removal(
        &mut self,
        id: ProductId,
        now: DateTime<Utc>,
    ) -> Result<(MutationId, Product), AdminError> {
        let product = self
            .products
            .remove(id)
            .ok_or(AdminError::ProductNotFound(id))?;
        let mutation_id = self.ledger.register(
            RecordRef::Product(id),
            MutationKind::ProductRemoval,
            Snapshot::RemovedProduct(product.clone()),
            now,
        );
        Ok((mutation_id, product))
    }

    /// Хранилище подтвердило изменение: снимок больше не нужен
    pub fn commit(&mut self, id: MutationId) -> Result<(), AdminError> {
        let mutation = self
            .ledger
            .take(id)
            .ok_or(AdminError::UnknownMutation(id))?;
        if let Snapshot::RemovedProduct(product) = &mutation.snapshot {
            self.products.forget(product.id());
        }
        tracing::debug!(mutation = %id, record = %mutation.record, "Mutation committed");
        Ok(())
    }

    /// Хранилище отклонило изменение: вернуть запись в прежнее состояние.
    /// Удалённый товар возвращается на прежнюю позицию независимо от
    /// порядка откатов.
    pub fn rollback(&mut self, id: MutationId) -> Result<(), AdminError> {
        let mutation = self
            .ledger
            .take(id)
            .ok_or(AdminError::UnknownMutation(id))?;
        match mutation.snapshot {
            Snapshot::Order(previous) => {
                self.orders.replace(previous);
            }
            Snapshot::Product(previous) => {
                self.products.replace(previous);
            }
            Snapshot::RemovedProduct(product) => {
                self.products.restore(product);
            }
        }
        tracing::info!(mutation = %id, record = %mutation.record, "Mutation rolled back");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{seed, MockRecordSource};

    fn snapshot() -> RecordSnapshot {
        let now = Utc::now();
        RecordSnapshot {
            orders: seed::mock_orders(now),
            products: seed::mock_products(now),
        }
    }

    #[tokio::test]
    async fn test_load_from_mock_source() {
        let session = AdminSession::load(&MockRecordSource).await.unwrap();
        assert_eq!(session.orders().len(), 12);
        assert_eq!(session.products().len(), 10);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn test_snapshot_with_invalid_record_is_rejected() {
        let mut snapshot = snapshot();
        snapshot.products[3].sale_price = Some(10_000.0);
        assert!(AdminSession::new(snapshot).is_err());
    }

    #[test]
    fn test_unknown_mutation() {
        let mut session = AdminSession::new(snapshot()).unwrap();
        let id = MutationId::new_v4();
        assert_eq!(session.commit(id).unwrap_err(), AdminError::UnknownMutation(id));
        assert_eq!(session.rollback(id).unwrap_err(), AdminError::UnknownMutation(id));
    }

    #[test]
    fn test_pending_record_is_locked() {
        let mut session = AdminSession::new(snapshot()).unwrap();
        let product = session.products()[2].clone();
        let id = product.id();
        let mutation_id = session
            .apply_product(
                product.with_featured_toggled(Utc::now()),
                MutationKind::ProductFeaturedToggle { featured: true },
                Utc::now(),
            )
            .unwrap();

        assert_eq!(
            session.ensure_not_pending(RecordRef::Product(id)),
            Err(AdminError::MutationPending {
                record: RecordRef::Product(id).to_string(),
                mutation: mutation_id,
            })
        );

        session.rollback(mutation_id).unwrap();
        assert_eq!(session.product(id), Some(&product));
        assert!(session.ensure_not_pending(RecordRef::Product(id)).is_ok());
    }
}
