use anyhow::Context;
use chrono::{Datelike, Utc};
use log::{debug, info, warn};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::heatmap;
use crate::languages::rank_languages;
use crate::profile::{Profile, estimate_lines_of_code};

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const REPO_PAGE_SIZE: &str = "100";
const MAX_HANDLE_LEN: usize = 39;

#[derive(Deserialize)]
struct UserResponse {
    avatar_url: Option<String>,
}

#[derive(Deserialize)]
struct SearchCount {
    total_count: Option<u64>,
}

#[derive(Deserialize)]
struct RepoNode {
    language: Option<String>,
}

/// Where and how to query GitHub.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: Option<String>,
    /// Calendar year the commit and pull request searches cover.
    pub year: i32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            token: None,
            year: Utc::now().year(),
            user_agent: format!("devwrap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Literal search range, e.g. `2025-01-01..2025-12-31`.
    pub fn date_range(&self) -> String {
        format!("{y}-01-01..{y}-12-31", y = self.year)
    }
}

/// Results of the three concurrent lookups after each one has settled.
#[derive(Debug, Default)]
struct FanOut {
    commit_count: u64,
    merged_pr_count: u64,
    repo_languages: Vec<Option<String>>,
}

impl FanOut {
    /// A failed branch degrades to its zero value instead of failing the fetch.
    fn settle<T: Default>(handle: &str, branch: &str, result: anyhow::Result<T>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!("{branch} lookup for {handle} failed, using default: {e:#}");
                T::default()
            }
        }
    }

    fn gather(
        handle: &str,
        commits: anyhow::Result<u64>,
        merged_prs: anyhow::Result<u64>,
        repos: anyhow::Result<Vec<Option<String>>>,
    ) -> Self {
        Self {
            commit_count: Self::settle(handle, "commit search", commits),
            merged_pr_count: Self::settle(handle, "pull request search", merged_prs),
            repo_languages: Self::settle(handle, "repository listing", repos),
        }
    }
}

/// Trims `handle` and checks it against GitHub's login charset
/// (ASCII letters, digits and `-`, at most 39 characters).
///
/// The handle ends up in URL paths, so anything else is rejected before a
/// request is built.
pub fn validate_handle(handle: &str) -> Result<&str> {
    let trimmed = handle.trim();
    let valid = !trimmed.is_empty()
        && trimmed.len() <= MAX_HANDLE_LEN
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(trimmed)
    } else {
        Err(Error::InvalidHandle(handle.to_string()))
    }
}

#[derive(Clone)]
pub struct GithubClient {
    config: Arc<ClientConfig>,
    http: Arc<Client>,
}

impl GithubClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            http: Arc::new(Client::new()),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET against the API base with the shared headers. No retries.
    fn get(&self, path: &str) -> RequestBuilder {
        let url = format!("{}/{path}", self.config.base_url.trim_end_matches('/'));
        debug!("GET {url}");

        let req = self
            .http
            .get(url)
            .header(ACCEPT, ACCEPT_V3)
            .header(USER_AGENT, &self.config.user_agent);

        match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Confirms the handle exists and returns its avatar URL.
    async fn identity(&self, handle: &str) -> Result<Option<String>> {
        let resp = self.get(&format!("users/{handle}")).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::HandleNotFound {
                handle: handle.to_string(),
                status: status.as_u16(),
            });
        }

        let user: UserResponse = resp.json().await?;
        Ok(user.avatar_url)
    }

    /// Total commits authored in the configured year.
    pub async fn commit_count(&self, handle: &str) -> anyhow::Result<u64> {
        let q = format!("author:{handle} committer-date:{}", self.config.date_range());
        self.search_count("search/commits", &q).await
    }

    /// Merged pull requests opened in the configured year.
    pub async fn merged_pr_count(&self, handle: &str) -> anyhow::Result<u64> {
        let q = format!(
            "author:{handle} is:pr is:merged created:{}",
            self.config.date_range()
        );
        self.search_count("search/issues", &q).await
    }

    async fn search_count(&self, path: &str, q: &str) -> anyhow::Result<u64> {
        let parsed: SearchCount = self
            .get(path)
            .query(&[("q", q)])
            .send()
            .await
            .with_context(|| format!("Network error on {path}"))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("Failed to deserialize {path} response"))?;

        Ok(parsed.total_count.unwrap_or(0))
    }

    /// Primary language of each of the 100 most recently updated repos.
    pub async fn repo_languages(&self, handle: &str) -> anyhow::Result<Vec<Option<String>>> {
        let repos: Vec<RepoNode> = self
            .get(&format!("users/{handle}/repos"))
            .query(&[("sort", "updated"), ("per_page", REPO_PAGE_SIZE)])
            .send()
            .await
            .context("Network error listing repositories")?
            .error_for_status()?
            .json()
            .await
            .context("Failed to deserialize repository listing")?;

        Ok(repos.into_iter().map(|r| r.language).collect())
    }

    /// Builds a profile for `handle`.
    ///
    /// Malformed handles fail before any request. Only the identity lookup
    /// is fatal. The commit search, pull request search and repository
    /// listing run concurrently and each degrades to zero on failure.
    pub async fn fetch_profile(&self, handle: &str) -> Result<Profile> {
        let handle = validate_handle(handle)?;
        let avatar_url = self.identity(handle).await?;

        let (commits, merged_prs, repos) = tokio::join!(
            self.commit_count(handle),
            self.merged_pr_count(handle),
            self.repo_languages(handle),
        );
        let fan_out = FanOut::gather(handle, commits, merged_prs, repos);

        let repo_count = fan_out.repo_languages.len() as u64;
        let top_languages = rank_languages(fan_out.repo_languages.iter().map(|l| l.as_deref()));
        let activity = fan_out.commit_count.saturating_add(fan_out.merged_pr_count);

        let profile = Profile {
            commit_count: fan_out.commit_count,
            merged_pr_count: fan_out.merged_pr_count,
            repo_count,
            top_languages,
            estimated_lines_of_code: estimate_lines_of_code(fan_out.commit_count, repo_count),
            avatar_url,
            heatmap: heatmap::generate(activity),
        };

        info!(
            "{handle}: {} commits, {} merged PRs, {} repos",
            profile.commit_count, profile.merged_pr_count, profile.repo_count
        );

        Ok(profile)
    }
}
