//! Fuzzy server search for the servers section.

use crate::model::{Server, SERVERS};
use nucleo::pattern::{CaseMatching, Pattern};
use nucleo::{Config, Matcher, Utf32Str};

/// Catalog entries matching `query`, best match first. An empty query
/// yields the whole catalog in its declared order.
pub fn matching_servers(query: &str) -> Vec<&'static Server> {
    let query = query.trim();
    if query.is_empty() {
        return SERVERS.iter().collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::parse(query, CaseMatching::Ignore);
    let mut buf = Vec::new();

    let mut scored: Vec<(u32, &'static Server)> = SERVERS
        .iter()
        .filter_map(|server| {
            let haystack = format!("{} {}", server.name, server.id);
            pattern
                .score(Utf32Str::new(&haystack, &mut buf), &mut matcher)
                .map(|score| (score, server))
        })
        .collect();
    // Stable sort keeps catalog order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, s)| s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_keeps_catalog_order() {
        let ids: Vec<&str> = matching_servers("").iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["mc", "lu", "ch", "nl", "sg", "is"]);
        assert_eq!(matching_servers("   ").len(), SERVERS.len());
    }

    #[test]
    fn test_query_narrows_results() {
        let hits = matching_servers("singa");
        assert_eq!(hits.first().map(|s| s.id), Some("sg"));
        assert!(hits.len() < SERVERS.len());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let hits = matching_servers("ICELAND");
        assert_eq!(hits.first().map(|s| s.id), Some("is"));
    }

    #[test]
    fn test_no_match() {
        assert!(matching_servers("zzzz").is_empty());
    }
}
