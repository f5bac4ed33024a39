//! Name filter for selecting a subset of assets.

use regex::Regex;

use crate::types::Asset;

/// Comma-separated name patterns; `*` matches any run of characters.
///
/// `"bg*, text_primary"` keeps `bg`, `bg_secondary` and `text_primary`.
#[derive(Debug, Clone)]
pub struct AssetsFilter {
    patterns: Vec<Regex>,
}

impl AssetsFilter {
    pub fn parse(filter: &str) -> Self {
        let patterns = filter
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter_map(|p| {
                let body = p
                    .split('*')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join(".*");
                Regex::new(&format!("^{}$", body)).ok()
            })
            .collect();
        Self { patterns }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    /// Keep assets whose name matches any pattern.
    pub fn apply<A: Asset>(&self, assets: Vec<A>) -> Vec<A> {
        assets.into_iter().filter(|a| self.matches(a.name())).collect()
    }
}
