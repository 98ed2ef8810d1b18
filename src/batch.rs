//! Batch driver: one verdict per account record.
//!
//! Fans out over a sequence of account records, searching and evaluating
//! each concurrently. A provider failure is fatal to that record only —
//! it is logged at warn level and the rest of the batch proceeds.

use serde::{Deserialize, Serialize};

use crate::config::ScanConfig;
use crate::pipeline::evaluate::evaluate;
use crate::provider::SearchProvider;
use crate::types::{FractureVerdict, Query};

/// One account row from the batch source.
///
/// `Deserialize` so any tabular reader (CSV, JSON lines, a database layer)
/// can produce records; the reader itself is outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Business account name.
    pub account_name: String,
    /// First billing address line; combined with the name into the search
    /// text.
    pub billing_address_line_1: String,
    /// Billing city, used as the search location filter.
    #[serde(default)]
    pub billing_city: Option<String>,
}

impl BatchRecord {
    /// Build the search query for this record: name and address line
    /// combined into the search text, city as the location filter.
    pub fn to_query(&self) -> Query {
        Query::new(
            format!("{} {}", self.account_name, self.billing_address_line_1),
            self.billing_city.clone(),
        )
    }
}

/// Search and evaluate every record, returning the verdicts that could be
/// computed.
///
/// Records are processed concurrently; each record owns its own query and
/// result set, so no state is shared between them. Provider failures skip
/// the affected record with a warning and never abort the batch.
pub async fn run_batch<P: SearchProvider>(
    records: &[BatchRecord],
    provider: &P,
    config: &ScanConfig,
) -> Vec<FractureVerdict> {
    let futures: Vec<_> = records
        .iter()
        .map(|record| {
            let query = record.to_query();
            async move {
                let outcome = provider.search(&query).await;
                (query, outcome)
            }
        })
        .collect();

    let outcomes = futures::future::join_all(futures).await;

    let mut verdicts = Vec::with_capacity(outcomes.len());
    for (query, outcome) in outcomes {
        match outcome {
            Ok(results) => {
                tracing::debug!(query = %query.restaurant_name, count = results.len(), "search completed");
                verdicts.push(evaluate(&query, &results, config));
            }
            Err(err) => {
                tracing::warn!(query = %query.restaurant_name, error = %err, "search failed, skipping record");
            }
        }
    }
    verdicts
}

/// Keep only the fractured verdicts — the shape of the final batch report.
pub fn fractured_only(verdicts: Vec<FractureVerdict>) -> Vec<FractureVerdict> {
    verdicts
        .into_iter()
        .filter(|verdict| verdict.is_fractured)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use crate::types::SearchResult;

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

    /// Provider that fails for queries containing a marker string.
    struct ScriptedProvider;

    impl SearchProvider for ScriptedProvider {
        async fn search(&self, query: &Query) -> Result<Vec<SearchResult>, ScanError> {
            if query.restaurant_name.contains("FAIL") {
                return Err(ScanError::Provider("scripted failure".into()));
            }
            Ok(vec![
                make_result("https://pizzapalace.com/"),
                make_result("https://pizzapalace.net/"),
            ])
        }
    }

    fn record(name: &str) -> BatchRecord {
        BatchRecord {
            account_name: name.into(),
            billing_address_line_1: "12 Elm St".into(),
            billing_city: Some("Hartford".into()),
        }
    }

    #[test]
    fn record_builds_combined_query() {
        let query = record("Pizza Palace").to_query();
        assert_eq!(query.restaurant_name, "Pizza Palace 12 Elm St");
        assert_eq!(query.address_or_city.as_deref(), Some("Hartford"));
    }

    #[test]
    fn record_deserializes_without_city() {
        let json = r#"{"account_name": "Pizza Palace", "billing_address_line_1": "12 Elm St"}"#;
        let record: BatchRecord = serde_json::from_str(json).expect("deserialize");
        assert!(record.billing_city.is_none());
        assert!(record.to_query().address_or_city.is_none());
    }

    #[tokio::test]
    async fn batch_produces_one_verdict_per_successful_record() {
        let records = vec![record("Pizza Palace"), record("Corner Diner")];
        let verdicts = run_batch(&records, &ScriptedProvider, &ScanConfig::default()).await;
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts.iter().all(|v| v.is_fractured));
    }

    #[tokio::test]
    async fn provider_failure_skips_record_but_not_batch() {
        let records = vec![record("Pizza Palace"), record("FAIL Diner"), record("Corner Diner")];
        let verdicts = run_batch(&records, &ScriptedProvider, &ScanConfig::default()).await;
        assert_eq!(verdicts.len(), 2);
        assert!(verdicts
            .iter()
            .all(|v| !v.query.restaurant_name.contains("FAIL")));
    }

    #[tokio::test]
    async fn empty_batch_yields_no_verdicts() {
        let verdicts = run_batch(&[], &ScriptedProvider, &ScanConfig::default()).await;
        assert!(verdicts.is_empty());
    }

    #[test]
    fn fractured_only_filters_verdicts() {
        let fractured = FractureVerdict {
            query: Query::new("Pizza Palace 12 Elm St", Some("Hartford".into())),
            domains: ["pizzapalace.com".to_string(), "pizzapalace.net".to_string()]
                .into_iter()
                .collect(),
            is_fractured: true,
        };
        let clean = FractureVerdict {
            query: Query::new("Corner Diner 3 Oak Ave", Some("Hartford".into())),
            domains: ["cornerdiner.com".to_string()].into_iter().collect(),
            is_fractured: false,
        };
        let kept = fractured_only(vec![fractured, clean]);
        assert_eq!(kept.len(), 1);
        assert!(kept[0].is_fractured);
    }
}
