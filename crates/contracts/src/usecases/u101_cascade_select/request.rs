use serde::{Deserialize, Serialize};

/// Эндпоинт списка категорий по типу операции
pub const LOAD_CATEGORIES_PATH: &str = "/ajax/load-categories/";

/// Эндпоинт списка подкатегорий по категории
pub const LOAD_SUBCATEGORIES_PATH: &str = "/ajax/load-subcategories/";

/// Query-параметры `GET /ajax/load-categories/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadCategoriesQuery {
    pub type_id: String,
}

/// Query-параметры `GET /ajax/load-subcategories/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadSubcategoriesQuery {
    pub category_id: String,
}

impl LoadCategoriesQuery {
    pub fn new(type_id: impl Into<String>) -> Self {
        Self {
            type_id: type_id.into(),
        }
    }

    /// Path with query string, e.g. `/ajax/load-categories/?type_id=3`
    pub fn to_path(&self) -> Result<String, serde_qs::Error> {
        Ok(format!(
            "{}?{}",
            LOAD_CATEGORIES_PATH,
            serde_qs::to_string(self)?
        ))
    }
}

impl LoadSubcategoriesQuery {
    pub fn new(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
        }
    }

    pub fn to_path(&self) -> Result<String, serde_qs::Error> {
        Ok(format!(
            "{}?{}",
            LOAD_SUBCATEGORIES_PATH,
            serde_qs::to_string(self)?
        ))
    }
}
