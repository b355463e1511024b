use super::pagination::total_pages;
use contracts::shared::list::SortSpec;
use serde::{Deserialize, Serialize};

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Состояние экрана списка: фильтр, сортировка, страница
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListState<F, S> {
    pub filter: F,
    pub sort: Option<SortSpec<S>>,
    /// Номер страницы (с 0)
    pub page: usize,
    pub page_size: usize,
}

impl<F: Default, S> Default for ListState<F, S> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<F: Default, S> ListState<F, S> {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: F::default(),
            sort: None,
            page: 0,
            page_size: page_size.max(1),
        }
    }
}

impl<F, S> ListState<F, S> {
    /// Смена фильтра не трогает страницу: её пересчитывает сервис списка
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec<S>>) {
        self.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Смена размера страницы всегда возвращает на первую страницу
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    pub fn total_pages(&self, total_count: usize) -> usize {
        total_pages(total_count, self.page_size)
    }

    /// Вернуть страницу в допустимый диапазон для `total_count` записей
    pub fn clamp_page(&mut self, total_count: usize) {
        let last = self.total_pages(total_count).saturating_sub(1);
        if self.page > last {
            self.page = last;
        }
    }
}
