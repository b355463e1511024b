//! Административная сессия: коллекции записей и журнал неподтверждённых изменений

pub mod ledger;
pub mod session;
pub mod sync;

pub use ledger::{MutationId, MutationKind, MutationTicket, PendingMutation, RecordRef};
pub use session::AdminSession;
pub use sync::{sync_pending, SyncReport};
