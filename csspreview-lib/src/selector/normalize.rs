//! Reduces a selector to a space-separated ancestor chain.
//!
//! Combinators are not modeled: `>`, `*`, `~` and `+` all become a plain
//! descendant space, and everything from the first pseudo-class or attribute
//! selector onwards is dropped.

use std::collections::HashSet;

/// Characters flattened into descendant spacing.
const FLATTENED_COMBINATORS: &[char] = &['>', '*', '~', '+'];

/// Anything from one of these on is cut off.
const TRUNCATE_AT: &[char] = &[':', '['];

/// Selectors with these prefixes target the document itself and are never previewed.
const DOCUMENT_PREFIXES: &[&str] = &["html", "body"];

/// Normalize one selector. Returns `None` for selectors that produce nothing
/// to render: `html`/`body` selectors and selectors left empty after cleanup.
pub fn normalize_selector(selector: &str) -> Option<String> {
    let selector = selector.trim();
    if DOCUMENT_PREFIXES.iter().any(|p| selector.starts_with(p)) {
        return None;
    }

    let chain = flatten_selector(selector)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if chain.is_empty() {
        None
    } else {
        Some(chain)
    }
}

/// Replace combinators with spaces and cut at the first `:` or `[`, leaving
/// whitespace as is: `ul > li:hover` becomes `ul   li`.
pub fn flatten_selector(selector: &str) -> String {
    let mut flattened: String = selector
        .chars()
        .map(|c| {
            if FLATTENED_COMBINATORS.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    if let Some(idx) = flattened.find(TRUNCATE_AT) {
        flattened.truncate(idx);
    }
    flattened
}

/// Split a normalized selector into its segments, outermost first.
pub fn chain_segments(chain: &str) -> Vec<&str> {
    chain.split_whitespace().collect()
}

/// Normalized chains that already have a placeholder in the document.
#[derive(Debug, Default)]
pub struct SeenSelectors {
    seen: HashSet<String>,
}

impl SeenSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `chain`; returns false if it was already recorded.
    pub fn insert(&mut self, chain: &str) -> bool {
        if self.seen.contains(chain) {
            return false;
        }
        self.seen.insert(chain.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinators_become_descendant_spaces() {
        assert_eq!(normalize_selector("ul > li").as_deref(), Some("ul li"));
        assert_eq!(normalize_selector("h1+p").as_deref(), Some("h1 p"));
        assert_eq!(normalize_selector("h1 ~ p").as_deref(), Some("h1 p"));
        assert_eq!(normalize_selector(".grid > * > span").as_deref(), Some(".grid span"));
    }

    #[test]
    fn test_pseudo_and_attribute_parts_are_cut() {
        assert_eq!(normalize_selector("a.button:hover").as_deref(), Some("a.button"));
        assert_eq!(normalize_selector("p::first-line").as_deref(), Some("p"));
        assert_eq!(
            normalize_selector("form input[type=\"text\"] span").as_deref(),
            Some("form input")
        );
        assert_eq!(normalize_selector("li:not(.x) > a").as_deref(), Some("li"));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(
            normalize_selector("  div \t .outer\n  span ").as_deref(),
            Some("div .outer span")
        );
    }

    #[test]
    fn test_document_selectors_are_skipped() {
        assert_eq!(normalize_selector("html"), None);
        assert_eq!(normalize_selector("body .wrapper"), None);
        assert_eq!(normalize_selector("html.dark .card"), None);
    }

    #[test]
    fn test_empty_chains_are_skipped() {
        assert_eq!(normalize_selector("*"), None);
        assert_eq!(normalize_selector(":root"), None);
        assert_eq!(normalize_selector("[hidden]"), None);
        assert_eq!(normalize_selector(""), None);
    }

    #[test]
    fn test_flatten_keeps_original_spacing() {
        assert_eq!(flatten_selector(".menu > li a"), ".menu   li a");
        assert_eq!(flatten_selector("a.button:hover"), "a.button");
        assert_eq!(flatten_selector("input[type=text]"), "input");
    }

    #[test]
    fn test_chain_segments() {
        assert_eq!(
            chain_segments("div.outer span.inner"),
            vec!["div.outer", "span.inner"]
        );
    }

    #[test]
    fn test_seen_selectors_dedup() {
        let mut seen = SeenSelectors::new();
        assert!(seen.insert("ul li"));
        assert!(!seen.insert("ul li"));
        assert!(seen.insert("ol li"));
    }
}
