//! Error Types
//!
//! `ApiError` carries the underlying failure for diagnostics;
//! `FormError` is what the user sees.

use thiserror::Error;

use crate::models::RecipeId;

/// Failure talking to the recipe service
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

/// The single user-visible error slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Failed to fetch recipes")]
    FetchFailed,

    #[error("Name, cuisine, and ingredients are required")]
    MissingFields,

    #[error("There was an error submitting the data")]
    SubmitFailed,

    #[error("There was an error deleting the recipe")]
    DeleteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("recipe {0} is not in the list")]
    NotFound(RecipeId),
}
