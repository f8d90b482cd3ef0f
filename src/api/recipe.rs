//! HTTP Recipe Client
//!
//! `reqwest` bindings for the recipe REST endpoints.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::traits::{ApiResult, RecipeBackend};
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Recipe, RecipeId, RecipePayload};

/// Recipe service client
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    config: ApiConfig,
}

impl HttpRecipeApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> ApiResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> ApiResult<T> {
        let response = self.send(request, url).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(url, e))
    }
}

impl Default for HttpRecipeApi {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait(?Send)]
impl RecipeBackend for HttpRecipeApi {
    async fn list(&self) -> ApiResult<Vec<Recipe>> {
        let url = self.config.collection_url();
        tracing::debug!(%url, "GET recipes");
        self.send_json(self.client.get(&url), &url).await
    }

    async fn create(&self, payload: &RecipePayload) -> ApiResult<Recipe> {
        let url = self.config.collection_url();
        tracing::debug!(%url, name = %payload.name, "POST recipe");
        self.send_json(self.client.post(&url).json(payload), &url).await
    }

    async fn update(&self, id: &RecipeId, payload: &RecipePayload) -> ApiResult<Recipe> {
        let url = self.config.record_url(id);
        tracing::debug!(%url, "PUT recipe");
        self.send_json(self.client.put(&url).json(payload), &url).await
    }

    async fn delete(&self, id: &RecipeId) -> ApiResult<()> {
        let url = self.config.record_url(id);
        tracing::debug!(%url, "DELETE recipe");
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }
}
