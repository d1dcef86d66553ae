pub mod config;
pub mod error;
pub mod github;
pub mod pipeline;
pub mod report;
pub mod stats;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::{FetchError, RequestError, Resource};
pub use github::{GitHubApi, Transport, make_client};
pub use pipeline::{RepoReport, collect};
pub use report::write_report;
