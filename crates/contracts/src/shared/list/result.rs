use serde::{Deserialize, Serialize};

/// Страница списка с информацией для навигации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    /// Количество записей после фильтрации (до нарезки на страницы)
    pub total_count: usize,
    /// Номер страницы (с 0)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_more: bool,
}
