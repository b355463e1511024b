//! Движок списков: фильтрация, сортировка, нарезка на страницы

pub mod filter;
pub mod list_state;
pub mod pagination;

pub use filter::{filter_records, RecordFilter, SearchQuery};
pub use list_state::ListState;
pub use pagination::{paginate, total_pages, PageSlice};
