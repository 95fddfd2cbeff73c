//! personality.rs
//!
//! Maps the card's coding volume to a coarse rank label.
//!
//! Only the first stat entry ("Lines of Code") is read. Its value is display
//! text, so separators and "+" markers are stripped before the leading
//! integer is taken. Anything unparseable counts as zero.

use std::fmt;

use serde::Serialize;

use crate::stats::StatEntry;

/// Rank labels, ordered by the volume needed to reach them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RankLabel {
    #[serde(rename = "NEWBIE")]
    Newbie,
    #[serde(rename = "GHOST CODER")]
    GhostCoder,
    #[serde(rename = "BUG SLAYER")]
    BugSlayer,
    #[serde(rename = "SYNTAX WIZARD")]
    SyntaxWizard,
    #[serde(rename = "CODE MONSTER")]
    CodeMonster,
    #[serde(rename = "BATMAN")]
    Batman,
}

/// Inclusive lower bounds, highest first.
const THRESHOLDS: [(i64, RankLabel); 5] = [
    (100_000, RankLabel::Batman),
    (50_000, RankLabel::CodeMonster),
    (25_000, RankLabel::SyntaxWizard),
    (10_000, RankLabel::BugSlayer),
    (5_000, RankLabel::GhostCoder),
];

impl RankLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            RankLabel::Newbie => "NEWBIE",
            RankLabel::GhostCoder => "GHOST CODER",
            RankLabel::BugSlayer => "BUG SLAYER",
            RankLabel::SyntaxWizard => "SYNTAX WIZARD",
            RankLabel::CodeMonster => "CODE MONSTER",
            RankLabel::Batman => "BATMAN",
        }
    }

    /// First threshold the volume reaches; negative volumes land on `Newbie`.
    pub fn for_volume(volume: i64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| volume >= *min)
            .map(|(_, label)| *label)
            .unwrap_or(RankLabel::Newbie)
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a stat panel by the volume in entry 0. Never fails.
pub fn classify(stats: &[StatEntry]) -> RankLabel {
    let volume = stats.first().map(|s| parse_volume(&s.value)).unwrap_or(0);
    RankLabel::for_volume(volume)
}

/// Reads the leading integer of `raw` once `,` and `+` are removed.
///
/// Leading whitespace and a sign are accepted, trailing text is ignored
/// ("5 Apps" is 5). No digits means 0. Oversized digit runs saturate.
pub fn parse_volume(raw: &str) -> i64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '+').collect();
    let rest = cleaned.trim_start();

    let (negative, rest) = match rest.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, rest),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        log::trace!("stat value {raw:?} has no leading integer, using 0");
        return 0;
    }

    match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(volume: &str) -> Vec<StatEntry> {
        let mut stats = crate::stats::default_panel();
        stats[0].value = volume.to_string();
        stats
    }

    #[test]
    fn boundaries() {
        assert_eq!(classify(&panel("4999")), RankLabel::Newbie);
        assert_eq!(classify(&panel("5000")), RankLabel::GhostCoder);
        assert_eq!(classify(&panel("9999")), RankLabel::GhostCoder);
        assert_eq!(classify(&panel("10000")), RankLabel::BugSlayer);
        assert_eq!(classify(&panel("25000")), RankLabel::SyntaxWizard);
        assert_eq!(classify(&panel("50000")), RankLabel::CodeMonster);
        assert_eq!(classify(&panel("99999")), RankLabel::CodeMonster);
        assert_eq!(classify(&panel("100000")), RankLabel::Batman);
        assert_eq!(classify(&panel("9999999999")), RankLabel::Batman);
    }

    #[test]
    fn separators_and_plus_are_ignored() {
        assert_eq!(classify(&panel("5,000")), classify(&panel("5000+")));
        assert_eq!(classify(&panel("25,000+")), RankLabel::SyntaxWizard);
        assert_eq!(classify(&panel("1,0,0,0,0,0")), RankLabel::Batman);
    }

    #[test]
    fn malformed_volume_is_newbie() {
        assert_eq!(classify(&panel("")), RankLabel::Newbie);
        assert_eq!(classify(&panel("abc")), RankLabel::Newbie);
        assert_eq!(classify(&panel("∞")), RankLabel::Newbie);
        assert_eq!(classify(&[]), RankLabel::Newbie);
    }

    #[test]
    fn negative_volume_falls_through() {
        assert_eq!(parse_volume("-5"), -5);
        assert_eq!(classify(&panel("-5")), RankLabel::Newbie);
        assert_eq!(classify(&panel("-999999")), RankLabel::Newbie);
    }

    #[test]
    fn leading_integer_is_taken() {
        assert_eq!(parse_volume("  12"), 12);
        assert_eq!(parse_volume("5 Apps"), 5);
        assert_eq!(parse_volume("60k lines"), 60);
        assert_eq!(parse_volume("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn only_first_entry_matters() {
        let mut stats = panel("100");
        stats[1].value = "1,000,000+".to_string();
        assert_eq!(classify(&stats), RankLabel::Newbie);
    }

    #[test]
    fn labels_are_ordered_and_display_upper_case() {
        assert!(RankLabel::Newbie < RankLabel::GhostCoder);
        assert!(RankLabel::CodeMonster < RankLabel::Batman);
        assert_eq!(RankLabel::SyntaxWizard.to_string(), "SYNTAX WIZARD");
    }
}
