pub mod alerts;
pub mod api_utils;
pub mod confirm_delete;
pub mod dom;
