/// Предикат фильтра над записями списка
pub trait RecordFilter<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Отфильтровать записи, сохраняя исходный порядок.
///
/// Возвращает ссылки на записи коллекции, копии не создаются.
pub fn filter_records<'a, T, F>(records: &'a [T], filter: &F) -> Vec<&'a T>
where
    F: RecordFilter<T> + ?Sized,
{
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Нормализованная строка поиска (подстрока без учёта регистра)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    /// Пустая строка или пробелы - поиск отключён
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self {
            needle: (!trimmed.is_empty()).then(|| trimmed.to_lowercase()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_none()
    }

    /// Совпадение хотя бы в одном из полей
    pub fn matches_any<'s>(&self, fields: impl IntoIterator<Item = &'s str>) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => fields
                .into_iter()
                .any(|field| field.to_lowercase().contains(needle.as_str())),
        }
    }
}
