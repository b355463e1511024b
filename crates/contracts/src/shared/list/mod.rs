//! Общие типы для списков: фасеты фильтров, сортировка, результат с пагинацией

pub mod badge;
pub mod date_window;
pub mod facet;
pub mod result;
pub mod sort;

pub use badge::BadgeTone;
pub use date_window::DateWindow;
pub use facet::{Facet, FacetValue};
pub use result::ListResult;
pub use sort::SortSpec;
