//! Core types: queries, search results, and fracture verdicts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One business lookup: the search text and an optional location filter.
///
/// `restaurant_name` is the full search text — for batch records this is the
/// account name combined with the billing address line. `address_or_city`
/// is the location the search provider should bias towards, and is also the
/// source of the address tokens used by the self-reference filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Full search text identifying the business.
    pub restaurant_name: String,
    /// Location filter, if known. When absent, the self-reference filter
    /// degrades to a business-name-leak check only.
    pub address_or_city: Option<String>,
}

impl Query {
    /// Build a query from a search text and an optional location.
    pub fn new(restaurant_name: impl Into<String>, address_or_city: Option<String>) -> Self {
        Self {
            restaurant_name: restaurant_name.into(),
            address_or_city,
        }
    }

    /// Address tokens for self-reference filtering; empty when no location
    /// was supplied.
    pub(crate) fn address_text(&self) -> &str {
        self.address_or_city.as_deref().unwrap_or("")
    }
}

/// One organic search result row, as returned by the search provider.
///
/// Deserializes directly from a SerpApi `organic_results` entry. Optional
/// fields are absent for some result types and default to `None`/empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Ordinal rank within the provider's result page (1-based).
    #[serde(default)]
    pub position: u32,
    /// The title of the result page.
    #[serde(default)]
    pub title: String,
    /// Text snippet summarising the page, when the provider supplies one.
    #[serde(default)]
    pub snippet: Option<String>,
    /// Query terms the provider highlighted inside the snippet.
    #[serde(default)]
    pub snippet_highlighted_words: Option<Vec<String>>,
    /// Absolute URL of the result.
    pub link: String,
    /// The abbreviated URL the provider displayed.
    #[serde(default)]
    pub displayed_link: String,
}

/// A search result annotated with its derived root domain.
///
/// Pipeline-local: created by the domain extractor, consumed by the
/// self-reference filter, discarded once the verdict is computed.
#[derive(Debug, Clone)]
pub struct AnnotatedResult {
    /// The underlying search result.
    pub result: SearchResult,
    /// Canonical root domain derived from `result.link`.
    pub root_domain: String,
}

/// The set of distinct root domains surviving all filters for one query.
///
/// `BTreeSet` gives uniqueness by construction and deterministic iteration
/// order for serialized reports.
pub type DomainSet = BTreeSet<String>;

/// Terminal pipeline output: one verdict per query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FractureVerdict {
    /// The query this verdict answers.
    pub query: Query,
    /// Distinct root domains that survived filtering.
    pub domains: DomainSet,
    /// Whether the surviving domains constitute a fracture signal.
    pub is_fractured: bool,
}
