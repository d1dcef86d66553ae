use std::fmt;

use thiserror::Error;

/// Which GitHub resource a request was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Repository,
    Releases,
    PullRequests,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Resource::Repository => "repository information",
            Resource::Releases => "releases information",
            Resource::PullRequests => "pull request information",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Status Code: {0}")]
    Status(u16),

    #[error("An error occurred: {0}")]
    Network(String),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
#[error("Failed to retrieve {resource}. {source}")]
pub struct FetchError {
    pub resource: Resource,
    #[source]
    pub source: RequestError,
}

impl FetchError {
    pub fn new(resource: Resource, source: RequestError) -> Self {
        FetchError { resource, source }
    }

    pub fn status(&self) -> Option<u16> {
        match self.source {
            RequestError::Status(code) => Some(code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
