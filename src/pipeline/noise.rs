//! Noise filter: drops results from known directory/aggregator domains.
//!
//! A Yelp or DoorDash listing is not evidence of a second web identity, so
//! those results are removed before any domain comparison happens.

use crate::types::SearchResult;

/// Returns `true` if `url` contains any blacklist entry as a substring.
///
/// Matching is case-sensitive on the raw URL. The curated entries are
/// lowercase, matching lowercase-typical result links; see
/// [`crate::config::DEFAULT_BLACKLIST`].
pub fn is_blacklisted(url: &str, blacklist: &[String]) -> bool {
    blacklist.iter().any(|entry| url.contains(entry.as_str()))
}

/// Remove every result whose link matches the blacklist.
///
/// Pure, order-preserving filter: surviving results keep their relative
/// order and are returned as owned clones of the input rows.
pub fn filter_blacklisted(results: &[SearchResult], blacklist: &[String]) -> Vec<SearchResult> {
    results
        .iter()
        .filter(|result| !is_blacklisted(&result.link, blacklist))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BLACKLIST;

    fn blacklist() -> Vec<String> {
        DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect()
    }

    fn make_result(link: &str) -> SearchResult {
        SearchResult {
            position: 1,
            title: "Title".into(),
            snippet: None,
            snippet_highlighted_words: None,
            link: link.into(),
            displayed_link: link.into(),
        }
    }

    #[test]
    fn every_default_entry_matches_a_containing_url() {
        for entry in DEFAULT_BLACKLIST {
            let url = format!("https://host{entry}/listing");
            assert!(
                is_blacklisted(&url, &blacklist()),
                "{entry} should match {url}"
            );
        }
    }

    #[test]
    fn clean_url_is_not_blacklisted() {
        assert!(!is_blacklisted(
            "https://paradisepizzaandgrill.com/menu",
            &blacklist()
        ));
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(is_blacklisted("https://www.yelp.com/biz/x", &blacklist()));
        assert!(!is_blacklisted("https://www.YELP.com/biz/x", &blacklist()));
    }

    #[test]
    fn filter_preserves_order() {
        let results = vec![
            make_result("https://paradisepizzaandgrill.com"),
            make_result("https://www.yelp.com/biz/paradise-pizza"),
            make_result("https://paradisepizzagrillsouthington.com"),
            make_result("https://www.doordash.com/store/paradise"),
        ];
        let filtered = filter_blacklisted(&results, &blacklist());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].link, "https://paradisepizzaandgrill.com");
        assert_eq!(filtered[1].link, "https://paradisepizzagrillsouthington.com");
    }

    #[test]
    fn filter_does_not_touch_input() {
        let results = vec![make_result("https://www.yelp.com/biz/x")];
        let filtered = filter_blacklisted(&results, &blacklist());
        assert!(filtered.is_empty());
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn empty_blacklist_keeps_everything() {
        let results = vec![make_result("https://www.yelp.com/biz/x")];
        let filtered = filter_blacklisted(&results, &[]);
        assert_eq!(filtered.len(), 1);
    }
}
