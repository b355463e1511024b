use super::ledger::{MutationId, MutationKind, RecordRef};
use super::session::AdminSession;
use crate::shared::data::{RecordSink, SinkError};

/// Итог синхронизации журнала с хранилищем
#[derive(Debug, Default)]
pub struct SyncReport {
    pub committed: Vec<MutationId>,
    pub rolled_back: Vec<(MutationId, SinkError)>,
}

/// Отправить неподтверждённые изменения в хранилище в порядке регистрации.
///
/// Подтверждённое изменение фиксируется, отклонённое откатывается.
pub async fn sync_pending(session: &mut AdminSession, sink: &dyn RecordSink) -> SyncReport {
    let pending: Vec<(MutationId, RecordRef, MutationKind)> = session
        .pending()
        .iter()
        .map(|m| (m.id, m.record, m.kind))
        .collect();

    let mut report = SyncReport::default();

    for (mutation_id, record, kind) in pending {
        let result = match (record, kind) {
            (RecordRef::Order(id), _) => match session.order(id).cloned() {
                Some(order) => sink.save_order(&order).await,
                None => Err(SinkError::Rejected(format!("order {} is gone", id))),
            },
            (RecordRef::Product(id), MutationKind::ProductRemoval) => sink.delete_product(id).await,
            (RecordRef::Product(id), _) => match session.product(id).cloned() {
                Some(product) => sink.save_product(&product).await,
                None => Err(SinkError::Rejected(format!("product {} is gone", id))),
            },
        };

        match result {
            Ok(()) => {
                if let Err(e) = session.commit(mutation_id) {
                    tracing::error!("Failed to commit mutation {}: {}", mutation_id, e);
                    continue;
                }
                report.committed.push(mutation_id);
            }
            Err(e) => {
                tracing::warn!(
                    sink = sink.sink_name(),
                    mutation = %mutation_id,
                    record = %record,
                    "Storage rejected mutation: {}",
                    e
                );
                if let Err(err) = session.rollback(mutation_id) {
                    tracing::error!("Failed to roll back mutation {}: {}", mutation_id, err);
                    continue;
                }
                report.rolled_back.push((mutation_id, e));
            }
        }
    }

    tracing::info!(
        committed = report.committed.len(),
        rolled_back = report.rolled_back.len(),
        "Pending mutations synchronized"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{a001_order, a002_product};
    use crate::shared::data::{seed, RecordSnapshot, TracingSink};
    use async_trait::async_trait;
    use chrono::Utc;
    use contracts::domain::a001_order::{Order, OrderStatus};
    use contracts::domain::a002_product::{Product, ProductId, ProductStatus};
    use std::sync::Mutex;

    fn session() -> AdminSession {
        let now = Utc::now();
        AdminSession::new(RecordSnapshot {
            orders: seed::mock_orders(now),
            products: seed::mock_products(now),
        })
        .unwrap()
    }

    /// Хранилище, отклоняющее изменения товаров и запоминающее вызовы
    #[derive(Default)]
    struct ProductRejectingSink {
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl RecordSink for ProductRejectingSink {
        async fn save_order(&self, order: &Order) -> Result<(), SinkError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("order:{}", order.order_number()));
            Ok(())
        }

        async fn save_product(&self, product: &Product) -> Result<(), SinkError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("product:{}", product.sku()));
            Err(SinkError::Unavailable("catalog service is down".into()))
        }

        async fn delete_product(&self, _id: ProductId) -> Result<(), SinkError> {
            self.calls.lock().unwrap().push("delete".into());
            Err(SinkError::Rejected("product has open orders".into()))
        }

        fn sink_name(&self) -> &str {
            "rejecting"
        }
    }

    #[tokio::test]
    async fn test_all_mutations_committed_by_tracing_sink() {
        let mut session = session();
        let now = Utc::now();
        let order_id = session.orders()[0].base.id;
        let product_id = session.products()[0].base.id;

        a001_order::service::transition(&mut session, order_id, OrderStatus::Processing, None, now)
            .unwrap();
        a002_product::service::toggle_status(&mut session, product_id, now).unwrap();
        assert_eq!(session.pending().len(), 2);

        let report = sync_pending(&mut session, &TracingSink).await;

        assert_eq!(report.committed.len(), 2);
        assert!(report.rolled_back.is_empty());
        assert!(session.pending().is_empty());
        assert_eq!(
            session.order(order_id).unwrap().status,
            OrderStatus::Processing
        );
        assert_eq!(
            session.product(product_id).unwrap().status,
            ProductStatus::Inactive
        );
    }

    #[tokio::test]
    async fn test_rejected_mutations_are_rolled_back() {
        let mut session = session();
        let now = Utc::now();
        let order_id = session.orders()[0].base.id;
        let toggled_id = session.products()[0].base.id;
        let removed_id = session.products()[1].base.id;
        let products_before = session.products().to_vec();

        a001_order::service::transition(&mut session, order_id, OrderStatus::Cancelled, None, now)
            .unwrap();
        a002_product::service::toggle_featured(&mut session, toggled_id, now).unwrap();
        a002_product::service::remove(&mut session, removed_id, now).unwrap();
        assert!(session.product(removed_id).is_none());

        let sink = ProductRejectingSink::default();
        let report = sync_pending(&mut session, &sink).await;

        assert_eq!(report.committed.len(), 1);
        assert_eq!(report.rolled_back.len(), 2);
        assert!(session.pending().is_empty());

        // заказ подтверждён, товары вернулись в исходное состояние
        assert_eq!(session.order(order_id).unwrap().status, OrderStatus::Cancelled);
        assert_eq!(session.products(), products_before.as_slice());

        let calls = sink.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 3);
        assert!(calls[0].starts_with("order:"));
        assert!(calls[1].starts_with("product:"));
        assert_eq!(calls[2], "delete");
    }

    #[tokio::test]
    async fn test_rejected_removals_restore_catalogue_order() {
        let mut session = session();
        let now = Utc::now();
        let before = session.products().to_vec();
        let third_id = before[2].base.id;
        let second_id = before[1].base.id;

        a002_product::service::remove(&mut session, third_id, now).unwrap();
        a002_product::service::remove(&mut session, second_id, now).unwrap();

        let sink = ProductRejectingSink::default();
        let report = sync_pending(&mut session, &sink).await;

        assert_eq!(report.rolled_back.len(), 2);
        assert_eq!(session.products(), before.as_slice());
    }

    #[tokio::test]
    async fn test_committed_removal_does_not_shift_later_rollback() {
        let mut session = session();
        let now = Utc::now();
        let before = session.products().to_vec();

        let committed = a002_product::service::remove(&mut session, before[1].base.id, now).unwrap();
        let rejected = a002_product::service::remove(&mut session, before[3].base.id, now).unwrap();
        session.commit(committed.mutation_id).unwrap();
        session.rollback(rejected.mutation_id).unwrap();

        let mut expected = before.clone();
        expected.remove(1);
        assert_eq!(session.products(), expected.as_slice());
    }
}
