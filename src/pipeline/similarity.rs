//! Similarity clustering over the surviving domain set.
//!
//! Two near-identical domains (a rebrand, a regional variant) are a far
//! stronger fracture signal than two unrelated ones, which usually just
//! mean the search results were noisy. The ratio is the difflib-style
//! `2 * matches / total_chars` in `[0, 1]`, computed character-wise.

use similar::TextDiff;

use crate::types::DomainSet;

/// Character-level similarity ratio between two domain strings, in `[0, 1]`.
pub fn pair_similarity(a: &str, b: &str) -> f64 {
    f64::from(TextDiff::from_chars(a, b).ratio())
}

/// Returns `true` when any unordered pair of surviving domains has a
/// similarity ratio strictly greater than `threshold`.
///
/// Fewer than two domains can never trigger: the pair set is empty.
pub fn has_fracture_signal(domains: &DomainSet, threshold: f64) -> bool {
    let domains: Vec<&str> = domains.iter().map(String::as_str).collect();
    for i in 0..domains.len() {
        for j in i + 1..domains.len() {
            let ratio = pair_similarity(domains[i], domains[j]);
            tracing::trace!(a = domains[i], b = domains[j], ratio, "domain pair similarity");
            if ratio > threshold {
                return true;
            }
        }
    }
    false
}
