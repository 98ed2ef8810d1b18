//! Scan configuration with sensible defaults.
//!
//! [`ScanConfig`] carries the two tunables of the filtering pipeline — the
//! noise blacklist and the similarity threshold — as explicit values
//! threaded through the orchestrator, so behaviour is testable without
//! shared globals.

use crate::error::ScanError;

/// Curated substrings identifying directory, aggregator, social, delivery,
/// and booking domains. Results whose link contains any of these are noise,
/// not evidence of a separate web identity.
///
/// Matching is substring containment, case-sensitive on the raw URL: the
/// entries are lowercase and real-world result links are lowercase-typical.
/// An upper-cased link would slip through; accepted limitation.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    "mapquest",
    "yelp",
    "restaurantji",
    "restaurantguru",
    "propertyshark",
    "loopnet",
    "tripadvisor",
    "roadtrippers",
    "slicelife",
    "grubhub",
    "doordash",
    "instagram",
    "facebook",
    "toasttab",
    "fromtherestaurant",
    "autoreserve",
    "opentable",
    "foursquare",
    "linkedin.com",
    ".business",
    ".square",
    "seamless.com",
    "ezcater.com",
    "yellowpages.com",
    "menupages.com",
    "ubereats.com",
    "beyondmenu.com",
];

/// Default pairwise similarity threshold for the fracture signal.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Configuration for one fracture scan.
///
/// Use [`Default::default()`] for the curated blacklist and tuned
/// threshold, or construct with field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Substrings that mark a result link as a non-authoritative
    /// directory/aggregator/platform domain.
    pub blacklist: Vec<String>,
    /// Two surviving domains count as a fracture signal only when their
    /// pairwise similarity ratio strictly exceeds this value.
    pub similarity_threshold: f64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            blacklist: DEFAULT_BLACKLIST.iter().map(|s| s.to_string()).collect(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl ScanConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `similarity_threshold` must be finite and in `(0, 1]`
    /// - blacklist entries must not be empty strings (an empty substring
    ///   matches every link and would discard all results)
    pub fn validate(&self) -> Result<(), ScanError> {
        if !self.similarity_threshold.is_finite()
            || self.similarity_threshold <= 0.0
            || self.similarity_threshold > 1.0
        {
            return Err(ScanError::Config(
                "similarity_threshold must be in (0, 1]".into(),
            ));
        }
        if self.blacklist.iter().any(|entry| entry.is_empty()) {
            return Err(ScanError::Config(
                "blacklist entries must not be empty".into(),
            ));
        }
        Ok(())
    }
}
