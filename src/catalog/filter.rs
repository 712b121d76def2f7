//! Client-side catalog filtering and ordering.
//!
//! A pure view over an in-memory stack collection: category equality,
//! case-insensitive substring match on name or language, then a stable
//! descending-stars sort. Re-run whenever an input changes; an empty result
//! is a valid "no matches" state, not a failure.

use tracing::debug;

use crate::api::types::{Stack, StackCategory};

/// Filter inputs for one catalog view.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Keep only stacks with this category; `None` matches all.
    pub category: Option<StackCategory>,

    /// Case-insensitive substring of name or language; empty matches all.
    pub text: String,
}

impl CatalogQuery {
    /// A query that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to one category.
    pub fn in_category(category: StackCategory) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Set the free-text filter.
    pub fn matching(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether a single stack survives this query.
    pub fn matches(&self, stack: &Stack) -> bool {
        if let Some(category) = self.category {
            if stack.category != category {
                return false;
            }
        }
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        stack.name.to_lowercase().contains(&needle)
            || stack.language.to_lowercase().contains(&needle)
    }

    /// The results line the catalog view shows, e.g.
    /// `Showing 2 stacks in build tools matching "vite"`.
    pub fn describe_results(&self, count: usize) -> String {
        let mut line = format!("Showing {} stack{}", count, if count == 1 { "" } else { "s" });
        if let Some(category) = self.category {
            line.push_str(&format!(" in {}", category.as_str().replace('-', " ")));
        }
        if !self.text.is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.text));
        }
        line
    }
}

/// Apply `query` and order by descending stars.
///
/// The sort is stable, so equal star counts keep their input order.
pub fn filter_stacks<'a>(stacks: &'a [Stack], query: &CatalogQuery) -> Vec<&'a Stack> {
    let mut view: Vec<&Stack> = stacks.iter().filter(|stack| query.matches(stack)).collect();
    view.sort_by(|a, b| b.stars().cmp(&a.stars()));
    debug!(total = stacks.len(), kept = view.len(), "filtered catalog");
    view
}

/// Order owned stacks by descending stars in place, stable like
/// [`filter_stacks`].
pub fn sort_by_stars(stacks: &mut [Stack]) {
    stacks.sort_by(|a, b| b.stars().cmp(&a.stars()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::InstallCommands;

    fn stack(name: &str, language: &str, stars: Option<u64>, category: StackCategory) -> Stack {
        Stack {
            name: name.to_string(),
            language: language.to_string(),
            latest_version: "1.0.0".to_string(),
            release_date: "2024-06-01".to_string(),
            docs_url: format!("https://example.com/{}", name),
            github_url: None,
            install: InstallCommands::default(),
            github_stars: stars,
            github_forks: None,
            downloads_weekly: None,
            downloads_monthly: None,
            last_checked: None,
            category,
            last_updated: None,
        }
    }

    fn sample() -> Vec<Stack> {
        vec![
            stack("React", "JavaScript", Some(200_000), StackCategory::Frontend),
            stack("FastAPI", "Python", Some(70_000), StackCategory::Backend),
            stack("Vue", "JavaScript", Some(40_000), StackCategory::Frontend),
            stack("PostgreSQL", "C", Some(14_000), StackCategory::Database),
        ]
    }

    fn names(view: &[&Stack]) -> Vec<String> {
        view.iter().map(|s| s.name.clone()).collect()
    }

    #[test]
    fn match_all_returns_everything_by_stars() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::all());
        assert_eq!(names(&view), vec!["React", "FastAPI", "Vue", "PostgreSQL"]);
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::in_category(StackCategory::Frontend));
        assert_eq!(names(&view), vec!["React", "Vue"]);
        assert!(view.iter().all(|s| s.category == StackCategory::Frontend));
    }

    #[test]
    fn text_matches_name_case_insensitively() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::all().matching("REA"));
        assert_eq!(names(&view), vec!["React"]);
    }

    #[test]
    fn text_matches_language_too() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::all().matching("python"));
        assert_eq!(names(&view), vec!["FastAPI"]);
    }

    #[test]
    fn category_and_text_combine() {
        let stacks = sample();
        let query = CatalogQuery::in_category(StackCategory::Frontend).matching("vue");
        let view = filter_stacks(&stacks, &query);
        assert_eq!(names(&view), vec!["Vue"]);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::all().matching("cobol"));
        assert!(view.is_empty());
    }

    #[test]
    fn absent_stars_sort_last() {
        let stacks = vec![
            stack("Unknown", "Rust", None, StackCategory::Utility),
            stack("Popular", "Rust", Some(10), StackCategory::Utility),
        ];
        let view = filter_stacks(&stacks, &CatalogQuery::all());
        assert_eq!(names(&view), vec!["Popular", "Unknown"]);
    }

    #[test]
    fn equal_stars_keep_input_order() {
        let stacks = vec![
            stack("Alpha", "Go", Some(500), StackCategory::Backend),
            stack("Beta", "Go", Some(500), StackCategory::Backend),
            stack("Gamma", "Go", Some(500), StackCategory::Backend),
        ];
        let view = filter_stacks(&stacks, &CatalogQuery::all());
        assert_eq!(names(&view), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn output_is_a_subsequence_of_input() {
        let stacks = sample();
        let view = filter_stacks(&stacks, &CatalogQuery::all().matching("a"));
        for kept in &view {
            assert!(stacks.iter().any(|s| std::ptr::eq(s, *kept)));
        }
        assert!(view.len() <= stacks.len());
    }

    #[test]
    fn sort_by_stars_orders_owned_stacks() {
        let mut stacks = sample();
        sort_by_stars(&mut stacks);
        let names: Vec<&str> = stacks.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["React", "FastAPI", "Vue", "PostgreSQL"]);
    }

    #[test]
    fn results_line_mentions_category_and_query() {
        let query = CatalogQuery::in_category(StackCategory::BuildTools).matching("vite");
        assert_eq!(
            query.describe_results(2),
            "Showing 2 stacks in build tools matching \"vite\""
        );
        assert_eq!(CatalogQuery::all().describe_results(1), "Showing 1 stack");
    }
}
