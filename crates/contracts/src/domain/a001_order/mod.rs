pub mod aggregate;
pub mod list_filter;
pub mod status;
pub mod summary;

pub use aggregate::{Order, OrderCustomer, OrderId, OrderLine, ShippingAddress};
pub use list_filter::{OrderListFilter, OrderSortField};
pub use status::{OrderStatus, PaymentStatus, TransitionError};
pub use summary::OrderSummary;
