use crate::shared::select_option::SelectOption;

/// Тело ответа обоих эндпоинтов: упорядоченный список `{id, name}`
pub type OptionListResponse = Vec<SelectOption>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let body = r#"[{"id":11,"name":"Transport"},{"id":10,"name":"Food"}]"#;
        let list: OptionListResponse = serde_json::from_str(body).unwrap();
        let names: Vec<&str> = list.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Transport", "Food"]);
    }

    #[test]
    fn test_empty_list() {
        let list: OptionListResponse = serde_json::from_str("[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_object_body_is_rejected() {
        assert!(serde_json::from_str::<OptionListResponse>(r#"{"error":"x"}"#).is_err());
    }
}
