//! API Configuration
//!
//! The recipe service lives at a fixed base URL; single records hang off it by id.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::RecipeId;

/// Base URL of the recipe service
pub const DEFAULT_API_BASE: &str = "https://jornadaldb.netlify.app/.netlify/functions/api";

/// Characters escaped in an id path segment (RFC 3986 unreserved set stays literal)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/`, used for list and create
    pub fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    /// `<base>/{id}`, used for update and delete
    pub fn record_url(&self, id: &RecipeId) -> String {
        format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
