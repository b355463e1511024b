use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Код фасета, отключающий фильтрацию
pub const ALL_CODE: &str = "all";

/// Значение, по которому можно фильтровать список (статус, категория, уровень остатка)
pub trait FacetValue: Copy + PartialEq + Sized {
    /// Стабильный строковый код значения
    fn facet_code(&self) -> &'static str;

    /// Разбор кода. None для неизвестного кода.
    fn parse_facet(code: &str) -> Option<Self>;
}

/// Фасет фильтра: либо "все", либо точное совпадение со значением
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: FacetValue> Facet<T> {
    /// Разбор кода фасета.
    ///
    /// Неизвестный код (устаревшая опция в UI, опечатка) трактуется как "все":
    /// фильтр никогда не падает.
    pub fn parse(code: &str) -> Self {
        match T::parse_facet(code.trim()) {
            Some(value) => Facet::Only(value),
            None => Facet::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Facet::All => ALL_CODE,
            Facet::Only(value) => value.facet_code(),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }
}

impl<T: FacetValue> Serialize for Facet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de, T: FacetValue> Deserialize<'de> for Facet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Facet::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Blue,
    }

    impl FacetValue for Color {
        fn facet_code(&self) -> &'static str {
            match self {
                Color::Red => "red",
                Color::Blue => "blue",
            }
        }

        fn parse_facet(code: &str) -> Option<Self> {
            match code {
                "red" => Some(Color::Red),
                "blue" => Some(Color::Blue),
                _ => None,
            }
        }
    }

    #[test]
    fn test_parse_known_and_unknown_codes() {
        assert_eq!(Facet::<Color>::parse("red"), Facet::Only(Color::Red));
        assert_eq!(Facet::<Color>::parse(" blue "), Facet::Only(Color::Blue));
        assert_eq!(Facet::<Color>::parse("all"), Facet::All);
        assert_eq!(Facet::<Color>::parse(""), Facet::All);
        assert_eq!(Facet::<Color>::parse("magenta"), Facet::All);
    }

    #[test]
    fn test_matches() {
        assert!(Facet::<Color>::All.matches(&Color::Red));
        assert!(Facet::Only(Color::Red).matches(&Color::Red));
        assert!(!Facet::Only(Color::Red).matches(&Color::Blue));
    }

    #[test]
    fn test_serde_is_fail_open() {
        let facet: Facet<Color> = serde_json::from_str("\"stale-option\"").unwrap();
        assert_eq!(facet, Facet::All);

        let facet: Facet<Color> = serde_json::from_str("\"blue\"").unwrap();
        assert_eq!(serde_json::to_string(&facet).unwrap(), "\"blue\"");
    }
}
