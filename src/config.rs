pub const API_BASE: &str = "https://api.github.com";
pub const REPO_OWNER: &str = "CTFd";
pub const REPO_NAME: &str = "CTFd";

/// Number of releases shown when the caller doesn't ask for a specific amount.
pub const DEFAULT_RELEASE_COUNT: usize = 3;
/// Large enough that every pull request comes back in one page.
pub const PULL_REQUEST_PAGE_SIZE: u32 = 1000;

pub const USER_AGENT: &str = "repo-stats";

/// Where to fetch from and with which token.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub name: String,
    pub api_base: String,
}

impl Config {
    pub fn new(token: impl Into<String>) -> Self {
        Config {
            token: token.into(),
            owner: REPO_OWNER.to_string(),
            name: REPO_NAME.to_string(),
            api_base: API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.name
        )
    }

    pub fn releases_url(&self) -> String {
        format!("{}/releases", self.repo_url())
    }
}
