use crate::{
    config::DEFAULT_RELEASE_COUNT,
    error::{FetchError, Result},
    github::{GitHubApi, Transport},
    stats::PullRequestStats,
};

/// Everything gathered after the repository snapshot came back.
///
/// Releases and pull requests are fetched independently, so either can fail
/// without hiding the other.
#[derive(Debug)]
pub struct RepoReport {
    pub forks: u64,
    pub stars: u64,
    pub releases: std::result::Result<Vec<String>, FetchError>,
    pub pull_requests: std::result::Result<PullRequestStats, FetchError>,
}

/// Runs the fetch pipeline. An `Err` means the snapshot itself could not be
/// fetched, in which case nothing else was requested.
pub async fn collect<T: Transport>(api: &GitHubApi<T>) -> Result<RepoReport> {
    let snapshot = api.fetch_snapshot().await?;

    let releases = api.fetch_last_releases(DEFAULT_RELEASE_COUNT).await;
    if let Err(err) = &releases {
        log::debug!("{err}");
    }

    let forks = snapshot.forks();
    let stars = snapshot.stars();

    let pull_requests = api
        .fetch_pull_requests(&snapshot)
        .await
        .map(|prs| PullRequestStats::from_pull_requests(&prs));
    match &pull_requests {
        Ok(stats) => log::info!(
            "{} pull requests from {} contributors",
            stats.count,
            stats.contributor_count()
        ),
        Err(err) => log::debug!("{err}"),
    }

    Ok(RepoReport {
        forks,
        stars,
        releases,
        pull_requests,
    })
}
