use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метаданные экземпляра агрегата (lifecycle tracking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи, после установки не меняется
    pub created_at: DateTime<Utc>,
    /// Дата последнего обновления
    pub updated_at: DateTime<Utc>,
    /// Счётчик изменений
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    /// Создать новые метаданные для нового агрегата
    pub fn new() -> Self {
        Self::created_at(Utc::now())
    }

    pub fn created_at(at: DateTime<Utc>) -> Self {
        Self {
            created_at: at,
            updated_at: at,
            version: 0,
        }
    }

    pub fn with_timestamps(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
            version: 0,
        }
    }

    /// Обновить timestamp текущим временем
    pub fn touch(&mut self) {
        self.touch_at(Utc::now());
    }

    /// Обновить timestamp. updated_at никогда не уменьшается.
    pub fn touch_at(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }

    /// Увеличить версию
    pub fn increment_version(&mut self) {
        self.version += 1;
    }

    pub fn is_consistent(&self) -> bool {
        self.updated_at >= self.created_at
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_touch_never_moves_backwards() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let mut meta = EntityMetadata::created_at(t0);

        meta.touch_at(t0 + Duration::minutes(5));
        assert_eq!(meta.updated_at, t0 + Duration::minutes(5));

        meta.touch_at(t0);
        assert_eq!(meta.updated_at, t0 + Duration::minutes(5));
        assert_eq!(meta.created_at, t0);
    }

    #[test]
    fn test_consistency_check() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert!(EntityMetadata::with_timestamps(t0, t0).is_consistent());
        assert!(!EntityMetadata::with_timestamps(t0, t0 - Duration::seconds(1)).is_consistent());
    }
}
