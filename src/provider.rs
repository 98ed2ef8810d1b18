//! Trait definition for pluggable search providers.
//!
//! The pipeline never talks to the network itself; it consumes whatever
//! result rows a [`SearchProvider`] hands it. The SerpApi client in
//! [`crate::serpapi`] is the production implementation; tests substitute
//! in-memory providers.

use crate::error::ScanError;
use crate::types::{Query, SearchResult};

/// A pluggable web search backend.
///
/// Implementors own everything network-shaped: request construction,
/// authentication, retries, and rate limiting. The pipeline only requires
/// an ordered sequence of result rows — an empty vec when the provider
/// found nothing is a valid answer, not an error.
///
/// All implementations must be `Send + Sync` so batch runs can query
/// concurrently.
pub trait SearchProvider: Send + Sync {
    /// Execute one search for `query`, returning the organic results in
    /// provider rank order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Http`], [`ScanError::Parse`], or
    /// [`ScanError::Provider`] when the search could not be completed. Such
    /// failures are fatal to this query only; the batch driver contains
    /// them.
    fn search(
        &self,
        query: &Query,
    ) -> impl std::future::Future<Output = Result<Vec<SearchResult>, ScanError>> + Send;
}
