//! Query parameters for list endpoints.
//!
//! Recognized keys: `ordering` (a `-` prefix sorts descending), `search`,
//! `limit`, `wine_type` and nested filters written `<relation>__<field>`.
//! Pairs keep insertion order; setting an existing key replaces its value in
//! place. Blank values are never stored.

pub const ORDERING: &str = "ordering";
pub const SEARCH: &str = "search";
pub const LIMIT: &str = "limit";
pub const WINE_TYPE: &str = "wine_type";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pairs: Vec<(String, String)>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`; a blank value removes the key
    pub fn set(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            self.pairs.retain(|(k, _)| k != key);
            return self;
        }
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn ordering(self, sort_key: &str) -> Self {
        self.set(ORDERING, sort_key)
    }

    pub fn search(self, term: &str) -> Self {
        self.set(SEARCH, term)
    }

    pub fn limit(self, limit: u32) -> Self {
        self.set(LIMIT, limit.to_string())
    }

    pub fn wine_type(self, wine_type: &str) -> Self {
        self.set(WINE_TYPE, wine_type)
    }

    /// Nested relation filter, e.g. `filter("winery__region__slug", "douro")`
    pub fn filter(self, key: &str, value: &str) -> Self {
        self.set(key, value)
    }

    /// Apply every pair of `other` on top of `self`
    pub fn merge(self, other: &ListParams) -> Self {
        other
            .pairs
            .iter()
            .fold(self, |acc, (k, v)| acc.set(k, v.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `key=value&key=value`, percent-encoded, in insertion order
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k),
                    urlencoding::encode(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_and_encoding() {
        let params = ListParams::new()
            .ordering("-rating")
            .search("Vinho Rosé")
            .limit(10);
        assert_eq!(
            params.to_query_string(),
            "ordering=-rating&search=Vinho%20Ros%C3%A9&limit=10"
        );
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let params = ListParams::new().ordering("name").search("").wine_type("  ");
        assert_eq!(params.pairs().len(), 1);
        assert_eq!(params.get(SEARCH), None);
    }

    #[test]
    fn test_set_replaces_in_place_and_merge_overrides() {
        let base = ListParams::new()
            .filter("grapes__slug", "malbec")
            .ordering("name");
        let merged = base.merge(&ListParams::new().ordering("-rating").limit(4));
        assert_eq!(
            merged.to_query_string(),
            "grapes__slug=malbec&ordering=-rating&limit=4"
        );
    }
}
