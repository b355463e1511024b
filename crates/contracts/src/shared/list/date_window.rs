use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Временное окно по дате создания записи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    /// Текущий календарный день (по локальной дате `now`)
    Today,
    /// Последние 7 суток
    Week,
    /// Последние 30 суток
    Month,
}

impl DateWindow {
    pub fn code(&self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Today => "today",
            DateWindow::Week => "week",
            DateWindow::Month => "month",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateWindow::All => "Todas las fechas",
            DateWindow::Today => "Hoy",
            DateWindow::Week => "Última semana",
            DateWindow::Month => "Último mes",
        }
    }

    pub fn all() -> Vec<DateWindow> {
        vec![
            DateWindow::All,
            DateWindow::Today,
            DateWindow::Week,
            DateWindow::Month,
        ]
    }

    /// Разбор из строки. Неизвестный код означает отсутствие фильтра.
    pub fn parse(code: &str) -> Self {
        match code.trim() {
            "today" => DateWindow::Today,
            "week" => DateWindow::Week,
            "month" => DateWindow::Month,
            _ => DateWindow::All,
        }
    }

    /// Попадает ли момент `created_at` в окно относительно `now`.
    ///
    /// "Сегодня" сравнивает календарные даты в часовом поясе `now`.
    /// Для недели и месяца граница включается (`>=`).
    pub fn contains<Tz: TimeZone>(&self, created_at: DateTime<Utc>, now: &DateTime<Tz>) -> bool {
        match self {
            DateWindow::All => true,
            DateWindow::Today => {
                created_at.with_timezone(&now.timezone()).date_naive() == now.date_naive()
            }
            DateWindow::Week => created_at >= now.with_timezone(&Utc) - Duration::days(7),
            DateWindow::Month => created_at >= now.with_timezone(&Utc) - Duration::days(30),
        }
    }
}

impl Serialize for DateWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for DateWindow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(DateWindow::parse(&raw))
    }
}
