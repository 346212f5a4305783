//! API utilities for frontend-backend communication
//!
//! The ajax endpoints live on the same server that rendered the page, so the
//! default base is empty and URLs stay relative to the current origin.

/// Build a full API URL from a base and a path
///
/// # Arguments
/// * `base` - Origin prefix such as "https://example.com", or "" for same origin
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```rust
/// # use cashflow_frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("", "/ajax/load-categories/"), "/ajax/load-categories/");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin() {
        assert_eq!(
            api_url("", "/ajax/load-categories/?type_id=3"),
            "/ajax/load-categories/?type_id=3"
        );
    }

    #[test]
    fn test_trailing_slash_on_base() {
        assert_eq!(
            api_url("http://127.0.0.1:8000/", "/ajax/load-subcategories/"),
            "http://127.0.0.1:8000/ajax/load-subcategories/"
        );
    }
}
