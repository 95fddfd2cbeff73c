use serde::Serialize;

pub const LOC_PER_COMMIT: u64 = 55;
pub const LOC_PER_REPO: u64 = 1050;

/// Snapshot of a handle's public activity, built once per fetch.
///
/// `estimated_lines_of_code` and `heatmap` are estimates, not measurements:
/// see [`estimate_lines_of_code`] and [`crate::heatmap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub commit_count: u64,
    pub merged_pr_count: u64,
    pub repo_count: u64,
    pub top_languages: Vec<String>,
    pub estimated_lines_of_code: u64,
    pub avatar_url: Option<String>,
    pub heatmap: Vec<u8>,
}

/// Heuristic volume: 55 lines per commit plus 1050 per repository.
pub fn estimate_lines_of_code(commit_count: u64, repo_count: u64) -> u64 {
    commit_count
        .saturating_mul(LOC_PER_COMMIT)
        .saturating_add(repo_count.saturating_mul(LOC_PER_REPO))
}
