use contracts::usecases::u101_cascade_select::OptionListResponse;
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибки загрузки зависимого списка
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("failed to build request: {0}")]
    Query(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// GET a JSON array of `{id, name}` records
pub async fn fetch_options(url: &str) -> Result<OptionListResponse, LoadError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    response
        .json::<OptionListResponse>()
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))
}
