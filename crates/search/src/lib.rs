//! Recipe lookup against the Rakuten category ranking API.
//!
//! Failures never reach the caller: every error is logged and an empty
//! result is returned instead.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_ENDPOINT: &str =
    "https://app.rakuten.co.jp/services/api/Recipe/CategoryRanking/20170426";

#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub application_id: String,
    pub category_id: String,
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            application_id: "YOUR_API_KEY".to_owned(),
            category_id: "10".to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum SearchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api error {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct RankingResponse {
    #[serde(default)]
    result: Vec<Value>,
}

#[derive(Clone)]
pub struct RecipeSearch {
    client: Client,
    config: SearchConfig,
}

impl RecipeSearch {
    pub fn new(config: SearchConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!(err = %err, "failed to build search client, using defaults");
                Client::new()
            });

        Self { client, config }
    }

    /// Recipes ranked for the given ingredient names, as raw API records.
    ///
    /// No request is made for an empty list.
    pub async fn search(&self, names: &[String]) -> Vec<Value> {
        let names: Vec<&str> = names
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return vec![];
        }

        let keyword = names.join(" ");

        match self.fetch(&keyword).await {
            Ok(recipes) => {
                tracing::debug!(keyword = %keyword, count = recipes.len(), "recipe search");

                recipes
            }
            Err(err) => {
                tracing::error!(keyword = %keyword, err = %err, "recipe search failed");

                vec![]
            }
        }
    }

    async fn fetch(&self, keyword: &str) -> Result<Vec<Value>, SearchError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("applicationId", self.config.application_id.as_str()),
                ("categoryId", self.config.category_id.as_str()),
                ("keyword", keyword),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(SearchError::Api { status, body });
        }

        let ranking: RankingResponse = serde_json::from_str(&body)?;

        Ok(ranking.result)
    }
}
