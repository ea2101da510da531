//! GitHub REST client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::traits::{ApiError, RepositoryHost, Result};
use crate::core::repository::{Repository, RepositorySettings};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("repotoggle/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct RepositoryName {
    name: String,
}

#[derive(Debug, Deserialize)]
struct User {
    login: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryInfo {
    name: String,
    id: u64,
    #[serde(flatten)]
    settings: RepositorySettings,
}

impl From<RepositoryInfo> for Repository {
    fn from(info: RepositoryInfo) -> Self {
        Repository {
            name: info.name,
            id: info.id,
            settings: info.settings,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the GitHub REST API, authenticated per call with a bearer token.
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(base_url: impl Into<String>, per_page: u32) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            per_page: per_page.max(1),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
        token: &str,
    ) -> Result<Response> {
        tracing::debug!("{method} {url}");
        let response = request
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("request failed").to_string());
        Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        token: &str,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.get(&url).query(query);
        let response = self.send("GET", &url, request, token).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            url,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl RepositoryHost for GitHubClient {
    async fn fetch_all_repository_names(&self, token: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1u32;

        loop {
            // Only owned repositories resolve under /repos/{login}/{name}.
            let query = [
                ("affiliation", "owner".to_string()),
                ("per_page", self.per_page.to_string()),
                ("page", page.to_string()),
            ];
            let batch: Vec<RepositoryName> = self.get_json("/user/repos", &query, token).await?;
            let count = batch.len();
            names.extend(batch.into_iter().map(|r| r.name));

            if count < self.per_page as usize {
                break;
            }
            page += 1;
        }

        tracing::debug!("found {} repositories over {} page(s)", names.len(), page);
        Ok(names)
    }

    async fn fetch_username(&self, token: &str) -> Result<String> {
        let user: User = self.get_json("/user", &[], token).await?;
        Ok(user.login)
    }

    async fn fetch_repository(&self, token: &str, owner: &str, name: &str) -> Result<Repository> {
        let info: RepositoryInfo = self
            .get_json(&format!("/repos/{owner}/{name}"), &[], token)
            .await?;
        Ok(info.into())
    }

    async fn update_repository(
        &self,
        token: &str,
        owner: &str,
        name: &str,
        body: &Value,
    ) -> Result<()> {
        let url = self.url(&format!("/repos/{owner}/{name}"));
        let request = self.client.patch(&url).json(body);
        self.send("PATCH", &url, request, token).await?;
        tracing::info!("updated {owner}/{name} with {body}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_page(names: &[&str]) -> Value {
        Value::Array(
            names
                .iter()
                .map(|n| serde_json::json!({ "name": n, "id": 1 }))
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_fetch_username_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", "Bearer s3cret"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "login": "octocat" })),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        let username = client.fetch_username("s3cret").await.expect("fetch username");
        assert_eq!(username, "octocat");
    }

    #[tokio::test]
    async fn test_fetch_repository_names_follows_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("affiliation", "owner"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(&["alpha", "beta"])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .and(query_param("affiliation", "owner"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(repo_page(&["gamma"])))
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 2);
        let names = client.fetch_repository_names("t", None).await.unwrap();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn test_fetch_repository_names_filters_requested() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(repo_page(&["alpha", "beta", "gamma"])),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        let requested = vec!["gamma".to_string(), "missing".to_string()];
        let names = client
            .fetch_repository_names("t", Some(&requested))
            .await
            .unwrap();
        assert_eq!(names, vec!["gamma"]);
    }

    #[tokio::test]
    async fn test_fetch_repository_reads_settings() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octocat/hello"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 42,
                "name": "hello",
                "full_name": "octocat/hello",
                "delete_branch_on_merge": true,
                "allow_squash_merge": false,
                "has_wiki": true
            })))
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        let repo = client.fetch_repository("t", "octocat", "hello").await.unwrap();
        assert_eq!(repo.id, 42);
        assert_eq!(repo.name, "hello");
        assert_eq!(repo.settings.delete_branch_on_merge, Some(true));
        assert_eq!(repo.settings.allow_squash_merge, Some(false));
        assert_eq!(repo.settings.allow_auto_merge, None);
    }

    #[tokio::test]
    async fn test_update_repository_patches_body() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "delete_branch_on_merge": true });
        Mock::given(method("PATCH"))
            .and(path("/repos/octocat/hello"))
            .and(body_json(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        client
            .update_repository("t", "octocat", "hello", &body)
            .await
            .expect("patch repository");
    }

    #[tokio::test]
    async fn test_error_status_carries_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({ "message": "Bad credentials" })),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        let err = client.fetch_username("bad").await.unwrap_err();
        match err {
            ApiError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Bad credentials");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_object_instead_of_list_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/repos"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "solo" })),
            )
            .mount(&server)
            .await;

        let client = GitHubClient::new(server.uri(), 100);
        let err = client.fetch_repository_names("t", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let client = GitHubClient::new("http://127.0.0.1:1", 100);
        let err = client.fetch_username("t").await.unwrap_err();
        assert!(matches!(err, ApiError::Connection(_)));
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = GitHubClient::new("https://api.github.com/", 100);
        assert_eq!(client.url("/user"), "https://api.github.com/user");
        assert_eq!(client.base_url(), "https://api.github.com/");
    }
}
