//! Page-data files written by the build pipeline.
//!
//! Every generated route has a `page-data.json` next to it holding the result
//! of the page's query under `result.data`.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{CoreError, Result};

/// Envelope of a page-data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData<T> {
    pub result: PageResult<T>,
}

/// Query result section of a page-data file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: T,
}

impl<T: DeserializeOwned> PageData<T> {
    /// Decode the page-data file of `route` and return the query result.
    pub fn from_json(route: &str, text: &str) -> Result<T> {
        let envelope: PageData<T> = serde_json::from_str(text)
            .map_err(|e| CoreError::page_data(route, e.to_string()))?;
        Ok(envelope.result.data)
    }
}

/// URL of the page-data file for a route.
///
/// The root route maps to `index`; surrounding slashes are ignored.
pub fn page_data_path(route: &str) -> String {
    let trimmed = route.trim_matches('/');
    let name = if trimmed.is_empty() { "index" } else { trimmed };
    format!("/page-data/{name}/page-data.json")
}
