//! Language frequency tally derived from a repository listing.

use serde::Serialize;

use super::Repository;

/// Count of repositories per primary language.
///
/// Languages keep the order in which they first appear in the listing, which
/// is the order the charts use for their axes and slices. Repositories
/// without a language contribute to no key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageTally {
    entries: Vec<(String, u32)>,
}

impl LanguageTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a repository listing into a tally.
    pub fn from_repositories(repos: &[Repository]) -> Self {
        repos
            .iter()
            .filter_map(|repo| repo.language.as_deref())
            .fold(Self::new(), |mut tally, language| {
                tally.record(language);
                tally
            })
    }

    /// Count one more repository for `language`.
    pub fn record(&mut self, language: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == language) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((language.to_string(), 1)),
        }
    }

    /// Repository count for a language, if it appears at all.
    pub fn get(&self, language: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == language)
            .map(|(_, count)| *count)
    }

    /// Number of distinct languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(language, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Total number of repositories that have a language.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Percentage of languaged repositories written in `language`.
    pub fn share(&self, language: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.get(language).unwrap_or(0)) * 100.0 / f64::from(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn repos() -> Vec<Repository> {
        vec![
            Repository::new("a", 1).with_language("Rust"),
            Repository::new("b", 1).with_language("Python"),
            Repository::new("c", 1),
            Repository::new("d", 1).with_language("Rust"),
            Repository::new("e", 1).with_language("Go"),
            Repository::new("f", 1),
        ]
    }

    #[test]
    fn test_tally_counts_each_language() {
        let tally = LanguageTally::from_repositories(&repos());
        assert_eq!(tally.get("Rust"), Some(2));
        assert_eq!(tally.get("Python"), Some(1));
        assert_eq!(tally.get("Go"), Some(1));
        assert_eq!(tally.len(), 3);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_matches_projection_of_languages() {
        let repos = repos();
        let mut expected: HashMap<&str, u32> = HashMap::new();
        for language in repos.iter().filter_map(|r| r.language.as_deref()) {
            *expected.entry(language).or_default() += 1;
        }

        let tally = LanguageTally::from_repositories(&repos);
        let actual: HashMap<&str, u32> = tally.iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_tally_keeps_first_seen_order() {
        let tally = LanguageTally::from_repositories(&repos());
        let order: Vec<&str> = tally.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["Rust", "Python", "Go"]);
    }

    #[test]
    fn test_empty_listing_gives_empty_tally() {
        let tally = LanguageTally::from_repositories(&[]);
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert_eq!(tally.share("Rust"), 0.0);
    }

    #[test]
    fn test_repositories_without_language_are_excluded() {
        let repos = vec![Repository::new("x", 3), Repository::new("y", 4)];
        assert!(LanguageTally::from_repositories(&repos).is_empty());
    }

    #[test]
    fn test_share_is_percentage() {
        let tally = LanguageTally::from_repositories(&repos());
        assert!((tally.share("Rust") - 50.0).abs() < f64::EPSILON);
        assert!((tally.share("Go") - 25.0).abs() < f64::EPSILON);
        assert_eq!(tally.share("COBOL"), 0.0);
    }
}
