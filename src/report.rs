use std::{fmt::Display, io};

use crate::{error::FetchError, pipeline::RepoReport, stats::PullRequestStats};

const UNAVAILABLE: &str = "unavailable";

fn or_unavailable<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| UNAVAILABLE.to_string(), |v| v.to_string())
}

/// Writes the plain-text report. Failed fetches are listed first, and the
/// values they would have provided show as "unavailable".
pub fn write_report(
    out: &mut impl io::Write,
    repo_name: &str,
    collected: &Result<RepoReport, FetchError>,
) -> io::Result<()> {
    let report = match collected {
        Ok(report) => Some(report),
        Err(err) => {
            writeln!(out, "{err}")?;
            None
        }
    };
    let releases = report.and_then(|r| r.releases.as_ref().ok().map(Vec::as_slice));
    let pull_requests = report.and_then(|r| r.pull_requests.as_ref().ok());
    if let Some(report) = report {
        for err in [report.releases.as_ref().err(), report.pull_requests.as_ref().err()]
            .into_iter()
            .flatten()
        {
            writeln!(out, "{err}")?;
        }
    }

    writeln!(out, "Latest releases of {repo_name}:")?;
    for name in releases.unwrap_or_default() {
        writeln!(out, "- {name}")?;
    }

    writeln!(out, "Number of forks: {}", or_unavailable(report.map(|r| r.forks)))?;
    writeln!(out, "Number of stars: {}", or_unavailable(report.map(|r| r.stars)))?;
    writeln!(
        out,
        "Number of contributors: {}",
        or_unavailable(pull_requests.map(PullRequestStats::contributor_count))
    )?;
    writeln!(
        out,
        "Number of pull requests: {}",
        or_unavailable(pull_requests.map(|p| p.count))
    )?;

    writeln!(out, "Descending order list of contributors per amount of pull requests:")?;
    for rank in pull_requests.map(|p| p.ranking.as_slice()).unwrap_or_default() {
        writeln!(out, "{}: {}", rank.login, rank.pull_requests)?;
    }
    Ok(())
}
