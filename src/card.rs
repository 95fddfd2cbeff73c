//! card.rs
//!
//! The editable card document.
//!
//! The rank label is derived from the "Lines of Code" stat. Every setter that
//! can touch that stat re-derives it straight away; setters for tools,
//! languages and the beverage leave it alone because they never change it.

use serde::Serialize;

use crate::heatmap;
use crate::personality::{RankLabel, classify};
use crate::profile::Profile;
use crate::stats::{self, StatEntry, with_thousands};

pub const LANGUAGE_SLOTS: usize = 5;
pub const PANEL_SIZE: usize = 6;

/// Index of the stat swapped out when a LeetCode count is shown.
const LEETCODE_SLOT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Beverage {
    Coffee,
    Chai,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub category_header: String,
    pub tagline: String,
    pub name: String,
    pub role: String,
    rank: RankLabel,
    stats: Vec<StatEntry>,
    pub tools: Vec<String>,
    pub languages: Vec<String>,
    pub image_url: String,
    pub beverage: Beverage,
    pub brand_color: Option<String>,
    pub leetcode_count: Option<String>,
    pub heatmap: Vec<u8>,
}

impl Default for Card {
    fn default() -> Self {
        let stats = stats::default_panel();
        Self {
            category_header: "Engineering Student".to_string(),
            tagline: "Eat. Sleep. Code. Repeat.".to_string(),
            name: "Alex Dev".to_string(),
            role: "Software Engineer".to_string(),
            rank: classify(&stats),
            stats,
            tools: ["vscode", "github", "slack", "chrome", "figma"]
                .map(String::from)
                .to_vec(),
            languages: ["ts", "js", "python", "go", "rust"]
                .map(String::from)
                .to_vec(),
            image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=300&auto=format&fit=crop"
                .to_string(),
            beverage: Beverage::Coffee,
            brand_color: Some("#FFFFFF".to_string()),
            leetcode_count: Some("150+".to_string()),
            heatmap: heatmap::uniform(&mut rand::thread_rng()),
        }
    }
}

impl Card {
    pub fn rank(&self) -> RankLabel {
        self.rank
    }

    pub fn stats(&self) -> &[StatEntry] {
        &self.stats
    }

    /// Re-derives the rank label. Returns `true` only if it changed, so
    /// callers can skip downstream updates when nothing moved.
    pub fn refresh_rank(&mut self) -> bool {
        let rank = classify(&self.stats);
        if rank == self.rank {
            return false;
        }
        log::debug!("rank {} -> {}", self.rank, rank);
        self.rank = rank;
        true
    }

    /// Replaces the value of one stat. Out-of-range indexes are ignored.
    pub fn set_stat(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.stats.get_mut(index) {
            Some(entry) => entry.value = value.into(),
            None => return false,
        }
        self.refresh_rank()
    }

    pub fn set_stats(&mut self, stats: Vec<StatEntry>) -> bool {
        self.stats = stats;
        self.refresh_rank()
    }

    pub fn set_languages(&mut self, languages: Vec<String>) {
        self.languages = pad(languages);
    }

    pub fn set_tools(&mut self, tools: Vec<String>) {
        self.tools = tools;
    }

    pub fn set_beverage(&mut self, beverage: Beverage) {
        self.beverage = beverage;
    }

    /// Fills the card from a fetched profile.
    ///
    /// The stat panel is reset to the fetch template first; the avatar is
    /// kept when the profile has none.
    pub fn apply_profile(&mut self, handle: &str, profile: &Profile) {
        let mut panel = stats::fetch_panel();
        panel[0].value = format!("{}+", with_thousands(profile.estimated_lines_of_code));
        panel[1].value = format!("{}+", profile.commit_count);
        panel[3].value = profile.merged_pr_count.to_string();
        panel[4].value = format!("{} Apps", profile.repo_count);

        self.name = handle.to_string();
        self.languages = pad(profile.top_languages.clone());
        if let Some(avatar) = &profile.avatar_url {
            self.image_url = avatar.clone();
        }
        self.heatmap = profile.heatmap.clone();
        self.set_stats(panel);
    }

    /// Export file name without extension: `devwrap-<name>`, lower-cased,
    /// whitespace runs replaced by `-`.
    pub fn file_stem(&self) -> String {
        let name = self
            .name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("devwrap-{name}")
    }

    /// The six stats as drawn on the card.
    pub fn display_stats(&self) -> Vec<StatEntry> {
        let mut shown: Vec<StatEntry> = self.stats.iter().take(PANEL_SIZE).cloned().collect();
        if let Some(count) = &self.leetcode_count {
            if let Some(slot) = shown.get_mut(LEETCODE_SLOT) {
                *slot = StatEntry::new("LeetCode Solved", count.clone());
            }
        }
        shown
    }
}

fn pad(mut languages: Vec<String>) -> Vec<String> {
    languages.truncate(LANGUAGE_SLOTS);
    languages.resize(LANGUAGE_SLOTS, String::new());
    languages
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile() -> Profile {
        Profile {
            commit_count: 450,
            merged_pr_count: 12,
            repo_count: 40,
            top_languages: vec!["rust".to_string(), "ts".to_string()],
            estimated_lines_of_code: crate::profile::estimate_lines_of_code(450, 40),
            avatar_url: Some("https://avatars.example/u/1".to_string()),
            heatmap: vec![2; heatmap::CELLS],
        }
    }

    #[test]
    fn default_rank_is_derived() {
        let card = Card::default();
        assert_eq!(card.rank(), RankLabel::SyntaxWizard);
        assert_eq!(card.heatmap.len(), heatmap::CELLS);
    }

    #[test]
    fn apply_profile_maps_stats() {
        let mut card = Card::default();
        card.apply_profile("octocat", &profile());

        let values: Vec<&str> = card.stats().iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["66,750+", "450+", "∞", "12", "40 Apps", "Gemini"]);
        assert_eq!(card.stats()[2].label, "Coffee Cups");
        assert_eq!(card.name, "octocat");
        assert_eq!(card.languages, vec!["rust", "ts", "", "", ""]);
        assert_eq!(card.image_url, "https://avatars.example/u/1");
        assert_eq!(card.rank(), RankLabel::CodeMonster);
    }

    #[test]
    fn missing_avatar_keeps_current_image() {
        let mut card = Card::default();
        let before = card.image_url.clone();
        let mut p = profile();
        p.avatar_url = None;
        card.apply_profile("octocat", &p);
        assert_eq!(card.image_url, before);
    }

    #[test]
    fn editing_volume_recomputes_rank() {
        let mut card = Card::default();
        assert!(card.set_stat(0, "120,000+"));
        assert_eq!(card.rank(), RankLabel::Batman);

        // same label, nothing to propagate
        assert!(!card.set_stat(0, "150000"));
        assert_eq!(card.rank(), RankLabel::Batman);

        assert!(card.set_stat(0, "oops"));
        assert_eq!(card.rank(), RankLabel::Newbie);
    }

    #[test]
    fn unrelated_edits_leave_rank_alone() {
        let mut card = Card::default();
        let rank = card.rank();
        assert!(!card.set_stat(1, "99,999,999+"));
        card.set_tools(vec!["vim".to_string()]);
        card.set_languages(vec!["go".to_string()]);
        card.set_beverage(Beverage::Chai);
        assert_eq!(card.rank(), rank);
        assert_eq!(card.languages.len(), LANGUAGE_SLOTS);
    }

    #[test]
    fn out_of_range_stat_is_ignored() {
        let mut card = Card::default();
        assert!(!card.set_stat(42, "1"));
        assert_eq!(card.stats().len(), PANEL_SIZE);
    }

    #[test]
    fn file_stem_follows_name() {
        let mut card = Card::default();
        assert_eq!(card.file_stem(), "devwrap-alex-dev");

        card.apply_profile("OctoCat", &profile());
        assert_eq!(card.file_stem(), "devwrap-octocat");

        card.name = "  Ada \t Lovelace ".to_string();
        assert_eq!(card.file_stem(), "devwrap-ada-lovelace");
    }

    #[test]
    fn leetcode_replaces_shipped_slot() {
        let mut card = Card::default();
        let shown = card.display_stats();
        assert_eq!(shown[4], StatEntry::new("LeetCode Solved", "150+"));

        card.leetcode_count = None;
        assert_eq!(card.display_stats()[4], StatEntry::new("Shipped", "5 Apps"));
    }
}
