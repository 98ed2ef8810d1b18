//! Root domain extraction from result links.
//!
//! Reduces a URL to a canonical comparison key: scheme and `www.` stripped,
//! path dropped, host truncated to its first two labels, lowercased.

/// Extract the canonical root domain from a URL.
///
/// Steps, in order:
/// 1. keep everything after the first `"//"` (drops the scheme);
/// 2. strip a leading `"www."`;
/// 3. keep everything before the first `"/"` (drops path and query);
/// 4. keep the first two `"."`-separated labels, rejoined.
///
/// The two-label truncation mis-splits multi-label public suffixes:
/// `sub.example.co.uk` becomes `example.co`, not `example.co.uk`. The
/// clustering heuristic was tuned on this behaviour, so it is kept.
///
/// Never fails: malformed input yields a best-effort lowercased string so
/// that one bad link cannot abort a batch.
pub fn extract_root_domain(url: &str) -> String {
    let after_scheme = match url.split_once("//") {
        Some((_, rest)) => rest,
        None => url,
    };
    let no_www = after_scheme.strip_prefix("www.").unwrap_or(after_scheme);
    let host = no_www.split('/').next().unwrap_or(no_www);
    let labels: Vec<&str> = host.split('.').take(2).collect();
    labels.join(".").to_lowercase()
}
