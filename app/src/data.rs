//! Page-data loading.

use folio_core::{PageData, page_data_path};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors loading a page's data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageDataError {
    /// The request did not complete.
    #[error("failed to fetch {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with an error status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The body was not the expected page data.
    #[error("{0}")]
    Decode(String),
}

impl PageDataError {
    /// Whether the page simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Fetch and decode the query result of `route`.
pub async fn fetch_page_data<T: DeserializeOwned>(route: &str) -> Result<T, PageDataError> {
    let url = page_data_path(route);
    log::debug!("loading page data from {url}");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| PageDataError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(PageDataError::Status {
            url,
            status: response.status(),
        });
    }

    let text = response.text().await.map_err(|e| PageDataError::Network {
        url: url.clone(),
        message: e.to_string(),
    })?;

    PageData::from_json(route, &text).map_err(|e| PageDataError::Decode(e.to_string()))
}
