use contracts::domain::common::AggregateRoot;

/// Коллекция записей в памяти сессии.
///
/// Порядок записей - порядок, в котором их отдал источник. Удалённая запись
/// сохраняет своё место в `order`, пока удаление не подтверждено (`forget`),
/// поэтому `restore` возвращает её на исходную позицию в любом порядке откатов.
#[derive(Debug, Clone)]
pub struct Collection<T: AggregateRoot> {
    records: Vec<T>,
    order: Vec<T::Id>,
}

impl<T: AggregateRoot> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        let order = records.iter().map(|r| r.id()).collect();
        Self { records, order }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Заменить запись с тем же ID, вернуть предыдущую версию
    pub fn replace(&mut self, record: T) -> Option<T> {
        let index = self.position(record.id())?;
        Some(std::mem::replace(&mut self.records[index], record))
    }

    /// Убрать запись из видимых. Место в исходном порядке остаётся за ней.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Вернуть удалённую запись на её место в исходном порядке.
    /// Запись без места в порядке добавляется в конец.
    pub fn restore(&mut self, record: T) {
        let id = record.id();
        let Some(rank) = self.order.iter().position(|o| *o == id) else {
            self.order.push(id);
            self.records.push(record);
            return;
        };
        let preceding = &self.order[..rank];
        let index = self
            .records
            .iter()
            .take_while(|r| preceding.contains(&r.id()))
            .count();
        self.records.insert(index, record);
    }

    /// Удаление подтверждено: освободить место записи в порядке
    pub fn forget(&mut self, id: T::Id) {
        if self.position(id).is_none() {
            self.order.retain(|o| *o != id);
        }
    }
}
