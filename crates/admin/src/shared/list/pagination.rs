/// Видимое окно страницы и общее количество записей до нарезки
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub visible: &'a [T],
    pub total_count: usize,
}

/// Нарезка страницы `[page * page_size, page * page_size + page_size)`.
///
/// Страница за пределами списка даёт пустое окно, а не ошибку.
/// Пересчёт номера страницы после смены фильтра - забота вызывающего.
/// Нулевой размер страницы также даёт пустое окно.
pub fn paginate<T>(records: &[T], page: usize, page_size: usize) -> PageSlice<'_, T> {
    let total_count = records.len();
    let start = page.saturating_mul(page_size);
    if page_size == 0 || start >= total_count {
        return PageSlice {
            visible: &records[..0],
            total_count,
        };
    }
    let end = start.saturating_add(page_size).min(total_count);
    PageSlice {
        visible: &records[start..end],
        total_count,
    }
}

/// Количество страниц для `total_count` записей
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}
