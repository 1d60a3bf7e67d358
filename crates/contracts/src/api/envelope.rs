use serde::Deserialize;

/// Paginated list body (`{"count": .., "results": [..]}`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

/// A list response in either shape the API produces.
///
/// Normalized with [`ListEnvelope::into_items`] at the client boundary so
/// page code only ever sees a `Vec<T>` in response order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Page(Page<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Page(page) => page.results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::SlugOnly;

    fn slugs(body: &str) -> Vec<String> {
        let envelope: ListEnvelope<SlugOnly> = serde_json::from_str(body).unwrap();
        envelope.into_items().into_iter().map(|s| s.slug).collect()
    }

    #[test]
    fn test_both_shapes_normalize_in_order() {
        let bare = r#"[{"slug": "c"}, {"slug": "a"}, {"slug": "b"}]"#;
        let paged = r#"{"count": 3, "next": null, "results": [{"slug": "c"}, {"slug": "a"}, {"slug": "b"}]}"#;
        assert_eq!(slugs(bare), vec!["c", "a", "b"]);
        assert_eq!(slugs(paged), slugs(bare));
    }

    #[test]
    fn test_empty_shapes() {
        assert!(slugs("[]").is_empty());
        assert!(slugs(r#"{"results": []}"#).is_empty());
    }

    #[test]
    fn test_object_without_results_is_rejected() {
        let parsed: Result<ListEnvelope<SlugOnly>, _> = serde_json::from_str(r#"{"detail": "x"}"#);
        assert!(parsed.is_err());
    }
}
