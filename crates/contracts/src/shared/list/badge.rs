use serde::{Deserialize, Serialize};

/// Тон бейджа/чипа для отображения статусов.
/// Конкретные цвета определяет слой отрисовки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Neutral,
    Info,
    Primary,
    Success,
    Warning,
    Error,
}
