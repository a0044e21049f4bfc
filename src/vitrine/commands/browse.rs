use std::time::Duration;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterSet;
use crate::session::Session;
use crate::store::RecordStore;

/// Load up to `pages` pages of the catalog filtered by `raw_query` and
/// `filters`. Each page fetch pays the simulated `latency` once.
pub fn run<S: RecordStore>(
    store: &S,
    raw_query: &str,
    filters: FilterSet,
    pages: usize,
    latency: Duration,
) -> Result<CmdResult> {
    let mut session = Session::new().with_latency(latency);
    session.set_filters(filters);
    // supersedes the filter reset; a single settle drains both
    session.search(raw_query);
    session.settle(store)?;

    let mut loaded = 1;
    while loaded < pages {
        match session.load_more() {
            Some(_) => {
                session.settle(store)?;
                loaded += 1;
            }
            None => break,
        }
    }

    let view = session.snapshot();
    let mut result = CmdResult::default()
        .with_listed_records(view.records)
        .with_total_matched(view.total_count)
        .with_has_more(view.has_more);
    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info(
            "No records matched the current query and filters.",
        ));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{fixtures, InMemoryStore};

    fn run_quick(
        store: &InMemoryStore,
        raw_query: &str,
        filters: FilterSet,
        pages: usize,
    ) -> CmdResult {
        run(store, raw_query, filters, pages, Duration::ZERO).unwrap()
    }

    #[test]
    fn single_page_by_default() {
        let store = InMemoryStore::new(fixtures::sample_run(26));
        let result = run_quick(&store, "", FilterSet::new(), 1);

        assert_eq!(result.listed_records.len(), 12);
        assert_eq!(result.total_matched, 26);
        assert!(result.has_more);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn extra_pages_accumulate_until_exhausted() {
        let store = InMemoryStore::new(fixtures::sample_run(26));

        let result = run_quick(&store, "", FilterSet::new(), 2);
        assert_eq!(result.listed_records.len(), 24);
        assert!(result.has_more);

        // asking for more pages than exist stops cleanly at the end
        let result = run_quick(&store, "", FilterSet::new(), usize::MAX);
        assert_eq!(result.listed_records.len(), 26);
        assert!(!result.has_more);
    }

    #[test]
    fn query_and_filters_combine_conjunctively() {
        let store = InMemoryStore::new(fixtures::sample_run(26));

        let result = run_quick(
            &store,
            "rare",
            FilterSet::new().with_chain("Polygon"),
            usize::MAX,
        );
        assert!(result
            .listed_records
            .iter()
            .all(|r| r.chain.as_deref() == Some("Polygon")));
        assert!(result
            .listed_records
            .iter()
            .all(|r| r.attributes.iter().any(|a| a.value == "Rare")));
        assert_eq!(result.listed_records.len(), result.total_matched);
    }

    #[test]
    fn empty_result_carries_a_message() {
        let store = InMemoryStore::new(fixtures::sample_run(4));
        let result = run_quick(&store, "nothing matches this", FilterSet::new(), 1);

        assert!(result.listed_records.is_empty());
        assert_eq!(result.total_matched, 0);
        assert!(!result.has_more);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn empty_store_is_not_an_error() {
        let store = InMemoryStore::empty();
        let result = run_quick(&store, "", FilterSet::new(), 1);
        assert!(result.listed_records.is_empty());
        assert!(!result.has_more);
    }
}
