//! Pipeline orchestrator: raw results in, fracture verdict out.
//!
//! Sequences noise filtering, domain extraction, self-reference filtering,
//! deduplication, and similarity clustering for one query. Pure over its
//! inputs: the caller's result slice is never mutated and no state survives
//! the call.

use crate::config::ScanConfig;
use crate::types::{AnnotatedResult, DomainSet, FractureVerdict, Query, SearchResult};

use super::domain::extract_root_domain;
use super::noise::filter_blacklisted;
use super::self_reference::is_self_reference;
use super::similarity::has_fracture_signal;
use super::tokens::tokenize;

/// Run the full filtering pipeline for one query.
///
/// # Pipeline
///
/// 1. Drop results whose link matches the blacklist
/// 2. Annotate survivors with their root domain
/// 3. Drop domains judged to be the business's own address-branded site
/// 4. Deduplicate the surviving domains into an ordered set
/// 5. `is_fractured` = at least two domains and one pair above the
///    similarity threshold
///
/// Always produces a verdict: an empty result set (or one that filters down
/// to nothing) yields `is_fractured == false` with an empty domain set.
pub fn evaluate(query: &Query, raw_results: &[SearchResult], config: &ScanConfig) -> FractureVerdict {
    tracing::trace!(query = %query.restaurant_name, results = raw_results.len(), "evaluating query");

    // 1. Noise filter.
    let reduced = filter_blacklisted(raw_results, &config.blacklist);
    tracing::debug!(
        kept = reduced.len(),
        dropped = raw_results.len() - reduced.len(),
        "blacklist filter applied"
    );

    // 2. Domain extraction.
    let annotated: Vec<AnnotatedResult> = reduced
        .into_iter()
        .map(|result| {
            let root_domain = extract_root_domain(&result.link);
            AnnotatedResult {
                result,
                root_domain,
            }
        })
        .collect();

    // 3. Self-reference filter.
    let business_tokens = tokenize(&query.restaurant_name);
    let address_tokens = tokenize(query.address_text());

    let surviving: Vec<AnnotatedResult> = annotated
        .into_iter()
        .filter(|entry| !is_self_reference(&business_tokens, &address_tokens, &entry.root_domain))
        .collect();
    tracing::debug!(kept = surviving.len(), "self-reference filter applied");

    // 4. Dedupe into the domain set.
    let domains: DomainSet = surviving
        .into_iter()
        .map(|entry| entry.root_domain)
        .collect();

    // 5. Similarity clustering.
    let is_fractured =
        domains.len() > 1 && has_fracture_signal(&domains, config.similarity_threshold);
    tracing::debug!(
        query = %query.restaurant_name,
        domains = domains.len(),
        is_fractured,
        "verdict computed"
    );

    FractureVerdict {
        query: query.clone(),
        domains,
        is_fractured,
    }
}
