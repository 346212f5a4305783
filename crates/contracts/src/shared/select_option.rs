use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор записи справочника
///
/// Сервер отдаёт числовые первичные ключи, но контракт допускает и строки.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Int(i64),
    Text(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionId::Int(id) => write!(f, "{}", id),
            OptionId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for OptionId {
    fn from(id: i64) -> Self {
        OptionId::Int(id)
    }
}

impl From<i32> for OptionId {
    fn from(id: i32) -> Self {
        OptionId::Int(i64::from(id))
    }
}

impl From<&str> for OptionId {
    fn from(id: &str) -> Self {
        OptionId::Text(id.to_string())
    }
}

/// Элемент выпадающего списка `{id, name}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: OptionId,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_string_ids() {
        let items: Vec<SelectOption> =
            serde_json::from_str(r#"[{"id":10,"name":"Food"},{"id":"x-7","name":"Misc"}]"#)
                .unwrap();

        assert_eq!(items[0], SelectOption::new(10, "Food"));
        assert_eq!(items[1], SelectOption::new("x-7", "Misc"));
        assert_eq!(items[0].id.to_string(), "10");
        assert_eq!(items[1].id.to_string(), "x-7");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let parsed = serde_json::from_str::<SelectOption>(r#"{"id":1}"#);
        assert!(parsed.is_err());
    }
}
