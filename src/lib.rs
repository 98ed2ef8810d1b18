//! # fracture-scan
//!
//! Detects restaurants whose online presence is "fractured" — web search
//! results pointing at multiple seemingly-unrelated domains instead of one
//! canonical site.
//!
//! ## Design
//!
//! - A pure, synchronous filtering pipeline over search result rows:
//!   blacklist noise filter → root-domain extraction → self-reference
//!   filter → dedupe → similarity clustering → verdict
//! - Stateless and idempotent: nothing survives a query, re-running on the
//!   same inputs yields the same verdict
//! - Search itself is a pluggable collaborator ([`SearchProvider`]) with a
//!   SerpApi implementation; the pipeline never touches the network
//! - Best-effort over strict validation: malformed links, missing fields,
//!   and empty result sets all still produce a verdict
//!
//! ## Heuristic, not ground truth
//!
//! A fracture verdict is evidence (two or more distinct, sufficiently
//! similar root domains), not a verified classification, and the crate
//! makes no attempt to rank which surviving domain is "the real one".

pub mod batch;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod provider;
pub mod serpapi;
pub mod types;

pub use config::ScanConfig;
pub use error::{Result, ScanError};
pub use provider::SearchProvider;
pub use serpapi::{SerpApiConfig, SerpApiProvider};
pub use types::{DomainSet, FractureVerdict, Query, SearchResult};

/// Evaluate one query's raw search results into a [`FractureVerdict`].
///
/// Validates `config`, then runs the filtering pipeline. The pipeline
/// itself never fails: an empty or fully-filtered result set yields a
/// non-fractured verdict with an empty domain set.
///
/// # Errors
///
/// Returns [`ScanError::Config`] if `config` is invalid. No other error is
/// possible.
///
/// # Examples
///
/// ```
/// let query = fracture_scan::Query::new(
///     "Paradise Pizza & Grill 400 N Main St",
///     Some("Southington".into()),
/// );
/// let config = fracture_scan::ScanConfig::default();
/// let verdict = fracture_scan::evaluate(&query, &[], &config)?;
/// assert!(!verdict.is_fractured);
/// # Ok::<(), fracture_scan::ScanError>(())
/// ```
pub fn evaluate(
    query: &Query,
    raw_results: &[SearchResult],
    config: &ScanConfig,
) -> Result<FractureVerdict> {
    config.validate()?;
    Ok(pipeline::evaluate::evaluate(query, raw_results, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_rejects_invalid_threshold() {
        let config = ScanConfig {
            similarity_threshold: 0.0,
            ..Default::default()
        };
        let query = Query::new("Pizza Palace", None);
        let result = evaluate(&query, &[], &config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("similarity_threshold"));
    }

    #[test]
    fn evaluate_empty_results_is_ok_and_not_fractured() {
        let query = Query::new("Pizza Palace", Some("Hartford".into()));
        let verdict =
            evaluate(&query, &[], &ScanConfig::default()).expect("default config is valid");
        assert!(!verdict.is_fractured);
        assert!(verdict.domains.is_empty());
    }
}
