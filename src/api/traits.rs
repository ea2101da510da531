use async_trait::async_trait;
use serde_json::Value;

use crate::core::repository::Repository;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{method} {url} returned {status}: {message}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        message: String,
    },

    #[error("{0}")]
    Connection(#[source] reqwest::Error),

    #[error("invalid response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Remote service holding the user's repositories.
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// Names of every repository the token can see, in API order.
    async fn fetch_all_repository_names(&self, token: &str) -> Result<Vec<String>>;

    async fn fetch_username(&self, token: &str) -> Result<String>;

    async fn fetch_repository(&self, token: &str, owner: &str, name: &str) -> Result<Repository>;

    async fn update_repository(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        body: &Value,
    ) -> Result<()>;

    /// Repository names, optionally narrowed to `requested`.
    async fn fetch_repository_names(
        &self,
        token: &str,
        requested: Option<&[String]>,
    ) -> Result<Vec<String>> {
        let names = self.fetch_all_repository_names(token).await?;
        Ok(match requested {
            Some(requested) => filter_requested(names, requested),
            None => names,
        })
    }
}

/// Keeps the names present in `requested`, preserving API order.
pub fn filter_requested(names: Vec<String>, requested: &[String]) -> Vec<String> {
    for missing in requested.iter().filter(|r| !names.contains(r)) {
        tracing::warn!("repository '{}' was not found for this token", missing);
    }
    names
        .into_iter()
        .filter(|name| requested.contains(name))
        .collect()
}
