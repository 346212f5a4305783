//! Каскадная загрузка категорий и подкатегорий
//!
//! Категория зависит от типа операции, подкатегория зависит от категории.

pub mod request;
pub mod response;

pub use request::{
    LoadCategoriesQuery, LoadSubcategoriesQuery, LOAD_CATEGORIES_PATH, LOAD_SUBCATEGORIES_PATH,
};
pub use response::OptionListResponse;
