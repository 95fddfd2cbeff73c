//! Ranks repository languages into the short tags the card displays.

const TOP_N: usize = 5;

/// Lower-cased GitHub language names mapped to card tags.
const SYNONYMS: &[(&str, &str)] = &[
    ("typescript", "ts"),
    ("javascript", "js"),
    ("python", "python"),
    ("java", "java"),
    ("c++", "cpp"),
    ("c", "c"),
    ("c#", "cs"),
    ("go", "go"),
    ("rust", "rust"),
    ("php", "php"),
    ("ruby", "ruby"),
    ("swift", "swift"),
    ("kotlin", "kotlin"),
    ("html", "html"),
    ("css", "css"),
    ("sql", "sql"),
];

/// Maps a language name to its card tag, case-insensitively. Unknown names
/// come back lower-cased.
pub fn normalize(language: &str) -> String {
    let lower = language.to_lowercase();
    SYNONYMS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, tag)| tag.to_string())
        .unwrap_or(lower)
}

/// Tallies primary languages, most common first, and keeps the top five.
///
/// `None` entries (repos without a detected language) are skipped. Equal
/// counts keep the order in which the language was first seen.
pub fn rank_languages<'a, I>(languages: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for lang in languages.into_iter().flatten() {
        match tally.iter_mut().find(|(name, _)| *name == lang) {
            Some((_, count)) => *count += 1,
            None => tally.push((lang, 1)),
        }
    }

    // stable sort keeps first-seen order on ties
    tally.sort_by(|a, b| b.1.cmp(&a.1));

    tally
        .into_iter()
        .take(TOP_N)
        .map(|(name, _)| normalize(name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn most_frequent_first() {
        let repos = ["TypeScript", "TypeScript", "Python", "Go", "Go", "Go"];
        let ranked = rank_languages(repos.iter().map(|l| Some(*l)));
        assert_eq!(ranked, vec!["go", "ts", "python"]);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let repos = [Some("Rust"), Some("C#"), Some("Ruby"), Some("C#"), Some("Rust")];
        assert_eq!(rank_languages(repos), vec!["rust", "cs", "ruby"]);
    }

    #[test]
    fn missing_languages_are_skipped_and_capped_at_five() {
        let repos = [
            None,
            Some("Shell"),
            Some("C++"),
            None,
            Some("JavaScript"),
            Some("HTML"),
            Some("Dockerfile"),
            Some("Kotlin"),
        ];
        let ranked = rank_languages(repos);
        assert_eq!(ranked, vec!["shell", "cpp", "js", "html", "dockerfile"]);
    }

    #[test]
    fn normalize_is_case_insensitive() {
        assert_eq!(normalize("TYPESCRIPT"), "ts");
        assert_eq!(normalize("c++"), "cpp");
        assert_eq!(normalize("Jupyter Notebook"), "jupyter notebook");
    }

    #[test]
    fn empty_input() {
        assert!(rank_languages(Vec::<Option<&str>>::new()).is_empty());
    }
}
