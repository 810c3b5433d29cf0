//! Thin typed client for the recipes REST API.
//!
//! Reads deserialize into [`Recipe`]; mutations hand back the response
//! [`StatusCode`] so callers can map 200/204/400/404 to their own
//! user-facing outcomes.

use recipes_core::{Recipe, RecipeSearch};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
}

pub struct RecipesClient {
    base_url: String,
    http: reqwest::Client,
}

impl RecipesClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        RecipesClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn list(&self) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .http
            .get(format!("{}/recipes", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.json().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Recipe>, ClientError> {
        let response = self
            .http
            .get(format!("{}/recipes/{id}", self.base_url))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    /// Searches by duration range. A 404 means the search matched nothing
    /// and is reported as an empty result rather than an error.
    pub async fn search(&self, search: &RecipeSearch) -> Result<Vec<Recipe>, ClientError> {
        let response = self
            .http
            .post(format!("{}/search/recipe", self.base_url))
            .json(search)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if status.is_success() => Ok(response.json().await?),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    pub async fn create(&self, recipe: &Recipe) -> Result<StatusCode, ClientError> {
        let response = self
            .http
            .post(format!("{}/recipes", self.base_url))
            .json(recipe)
            .send()
            .await?;

        Ok(response.status())
    }

    pub async fn update(&self, id: i64, recipe: &Recipe) -> Result<StatusCode, ClientError> {
        let response = self
            .http
            .put(format!("{}/recipes/{id}", self.base_url))
            .json(recipe)
            .send()
            .await?;

        Ok(response.status())
    }

    pub async fn delete(&self, id: i64) -> Result<StatusCode, ClientError> {
        let response = self
            .http
            .delete(format!("{}/recipes/{id}", self.base_url))
            .send()
            .await?;

        Ok(response.status())
    }
}
