use std::cmp::Reverse;

use itertools::Itertools;

use crate::github::{PullRequest, Release};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributorRank {
    pub login: String,
    pub pull_requests: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestStats {
    pub count: usize,
    pub ranking: Vec<ContributorRank>,
}

impl PullRequestStats {
    pub fn from_pull_requests(prs: &[PullRequest]) -> Self {
        PullRequestStats {
            count: prs.len(),
            ranking: rank_contributors(prs),
        }
    }

    pub fn contributor_count(&self) -> usize {
        self.ranking.len()
    }
}

pub fn last_release_names(releases: &[Release], count: usize) -> Vec<String> {
    releases
        .iter()
        .take(count)
        .map(|release| release.display_name().to_string())
        .collect()
}

/// Pull requests per author, most active first. Authors with equal counts
/// stay in the order they first appear in `prs`.
pub fn rank_contributors(prs: &[PullRequest]) -> Vec<ContributorRank> {
    let counts = prs.iter().map(PullRequest::author).counts();
    prs.iter()
        .map(PullRequest::author)
        .unique()
        .map(|login| ContributorRank {
            login: login.to_string(),
            pull_requests: counts[login],
        })
        .sorted_by_key(|rank| Reverse(rank.pull_requests))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{pulls_json, releases_json};

    fn prs(authors: &[&str]) -> Vec<PullRequest> {
        serde_json::from_value(pulls_json(authors)).unwrap()
    }

    fn releases(names: &[&str]) -> Vec<Release> {
        serde_json::from_value(releases_json(names)).unwrap()
    }

    fn pairs(ranking: &[ContributorRank]) -> Vec<(&str, usize)> {
        ranking
            .iter()
            .map(|r| (r.login.as_str(), r.pull_requests))
            .collect()
    }

    #[test]
    fn ranking_counts_and_orders_authors() {
        let stats = PullRequestStats::from_pull_requests(&prs(&["a", "a", "b", "a", "c", "b"]));
        assert_eq!(stats.count, 6);
        assert_eq!(stats.contributor_count(), 3);
        assert_eq!(pairs(&stats.ranking), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn ties_keep_first_encounter_order() {
        let ranking = rank_contributors(&prs(&["z", "y", "x", "y", "z", "w"]));
        assert_eq!(pairs(&ranking), vec![("z", 2), ("y", 2), ("x", 1), ("w", 1)]);
    }

    #[test]
    fn ranking_invariants_hold_for_many_inputs() {
        let pool = ["ann", "bob", "cy", "dee", "eve"];
        for n in 0..40usize {
            let authors: Vec<&str> = (0..n).map(|i| pool[(i * i + 3 * i) % pool.len()]).collect();
            let ranking = rank_contributors(&prs(&authors));
            let total: usize = ranking.iter().map(|r| r.pull_requests).sum();
            assert_eq!(total, n);
            assert_eq!(ranking.len(), authors.iter().unique().count());
            assert!(ranking.windows(2).all(|w| w[0].pull_requests >= w[1].pull_requests));
            assert_eq!(ranking.iter().map(|r| &r.login).unique().count(), ranking.len());
        }
    }

    #[test]
    fn empty_pull_requests_give_empty_ranking() {
        let stats = PullRequestStats::from_pull_requests(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.contributor_count(), 0);
    }

    #[test]
    fn last_releases_take_min_of_count_and_available() {
        let all = releases(&["R1", "R2", "R3", "R4", "R5"]);
        assert_eq!(last_release_names(&all, 3), vec!["R1", "R2", "R3"]);
        assert!(last_release_names(&all, 0).is_empty());
        assert_eq!(last_release_names(&all, 10).len(), 5);
        assert_eq!(last_release_names(&all[..2], 3), vec!["R1", "R2"]);
    }
}
