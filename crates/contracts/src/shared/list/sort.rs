use serde::{Deserialize, Serialize};

/// Выбранная сортировка списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<F> {
    pub field: F,
    pub ascending: bool,
}

impl<F> SortSpec<F> {
    pub fn asc(field: F) -> Self {
        Self {
            field,
            ascending: true,
        }
    }

    pub fn desc(field: F) -> Self {
        Self {
            field,
            ascending: false,
        }
    }
}
