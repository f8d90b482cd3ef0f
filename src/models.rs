//! Frontend Models
//!
//! Data structures matching the recipe API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned recipe identifier, opaque to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecipeId,
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub favorite: bool,
}

/// Body for create and update requests
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipePayload {
    pub name: String,
    pub cuisine: String,
    pub ingredients: String,
    pub favorite: bool,
}
