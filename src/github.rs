use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue},
};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    config::{Config, PULL_REQUEST_PAGE_SIZE, USER_AGENT},
    error::{FetchError, RequestError, Resource, Result},
    stats,
};

/// Placeholder GitHub puts in `pulls_url` for a single pull request.
const PULL_NUMBER_PLACEHOLDER: &str = "{/number}";

/// Login GitHub shows for pull requests whose author account was deleted.
const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSnapshot {
    pub forks_count: u64,
    pub stargazers_count: u64,
    pub pulls_url: String,
}

impl RepoSnapshot {
    pub fn forks(&self) -> u64 {
        self.forks_count
    }

    pub fn stars(&self) -> u64 {
        self.stargazers_count
    }

    /// Collection endpoint for this repository's pull requests.
    pub fn pull_requests_url(&self) -> String {
        pull_requests_url(&self.pulls_url)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
}

impl Release {
    /// Release title, or the tag when the release was published without one.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.tag_name.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub login: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub user: Option<Author>,
}

impl PullRequest {
    pub fn author(&self) -> &str {
        self.user
            .as_ref()
            .map_or(GHOST_LOGIN, |user| user.login.as_str())
    }
}

pub fn pull_requests_url(template: &str) -> String {
    template.replacen(PULL_NUMBER_PLACEHOLDER, "", 1)
}

/// A way of issuing authenticated GETs that answer with JSON.
///
/// Only HTTP 200 counts as success; any other status is reported as
/// [`RequestError::Status`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Value, RequestError>;
}

/// Transport failure text including every underlying cause, e.g.
/// `error sending request for url (..): client error (Connect): tcp connect error: Connection refused`.
fn network_error(err: reqwest::Error) -> RequestError {
    RequestError::Network(format!("{:#}", anyhow::Error::new(err)))
}

impl Transport for Client {
    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> std::result::Result<Value, RequestError> {
        log::debug!("GET {url} {query:?}");
        let resp = self.get(url).query(query).send().await.map_err(network_error)?;
        let status = resp.status();
        if status != StatusCode::OK {
            log::debug!("{url} answered with {status}");
            return Err(RequestError::Status(status.as_u16()));
        }
        let body = resp.text().await.map_err(network_error)?;
        Ok(serde_json::from_str(&body)?)
    }
}

pub fn make_client(config: &Config) -> anyhow::Result<Client> {
    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("token {}", config.token))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// Read operations against the configured repository.
pub struct GitHubApi<T> {
    config: Config,
    transport: T,
}

impl<T: Transport> GitHubApi<T> {
    pub fn new(config: Config, transport: T) -> Self {
        GitHubApi { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get<D: DeserializeOwned>(
        &self,
        resource: Resource,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<D> {
        let value = self
            .transport
            .get_json(url, query)
            .await
            .map_err(|e| FetchError::new(resource, e))?;
        serde_json::from_value(value).map_err(|e| FetchError::new(resource, e.into()))
    }

    pub async fn fetch_snapshot(&self) -> Result<RepoSnapshot> {
        let snapshot: RepoSnapshot = self
            .get(Resource::Repository, &self.config.repo_url(), &[])
            .await?;
        log::info!(
            "{}/{}: {} forks, {} stars",
            self.config.owner,
            self.config.name,
            snapshot.forks(),
            snapshot.stars()
        );
        Ok(snapshot)
    }

    pub async fn fetch_releases(&self) -> Result<Vec<Release>> {
        self.get(Resource::Releases, &self.config.releases_url(), &[])
            .await
    }

    /// Names of the first `count` releases, newest first as GitHub lists them.
    pub async fn fetch_last_releases(&self, count: usize) -> Result<Vec<String>> {
        let releases = self.fetch_releases().await?;
        log::debug!("got {} releases, keeping {count}", releases.len());
        Ok(stats::last_release_names(&releases, count))
    }

    pub async fn fetch_pull_requests(&self, snapshot: &RepoSnapshot) -> Result<Vec<PullRequest>> {
        let query = [("per_page", PULL_REQUEST_PAGE_SIZE.to_string())];
        let prs: Vec<PullRequest> = self
            .get(Resource::PullRequests, &snapshot.pull_requests_url(), &query)
            .await?;
        log::info!("got {} pull requests", prs.len());
        Ok(prs)
    }
}
