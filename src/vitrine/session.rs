//! Incremental browsing sessions.
//!
//! A [`Session`] owns the "load more" state for one combination of search
//! query and filter set: the accumulated records, the 1-based page
//! cursor, and the Idle/Fetching gate that keeps at most one fetch in
//! flight. Fetch latency is simulated with a plain sleep in [`Session::settle`],
//! standing in for the remote catalog query a networked backend would
//! make.
//!
//! The session does not own its record store. Completions take the store
//! as an argument, so the same session logic runs against the JSON
//! catalog in production and `InMemoryStore` fixtures in tests.
//!
//! Every issued fetch gets a [`FetchTicket`]. Changing the query or
//! filters while a fetch is pending issues a new ticket and strands the
//! old one; a completion presenting a stranded ticket is discarded, so a
//! stale fetch can never overwrite the state of the session that
//! superseded it.

use std::thread;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::error::Result;
use crate::filter::{self, FilterSet};
use crate::model::AssetRecord;
use crate::query::{self, StructuredQuery};
use crate::store::RecordStore;

/// Records per page.
pub const PAGE_SIZE: usize = 12;

/// Simulated fetch latency standing in for a remote catalog query.
pub const DEFAULT_FETCH_LATENCY: Duration = Duration::from_millis(800);

/// Correlation token for one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchOrigin {
    Reset,
    NextPage,
}

#[derive(Debug)]
struct PendingFetch {
    ticket: FetchTicket,
    origin: FetchOrigin,
    issued_at: Instant,
}

/// Observable session state after any transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub records: Vec<AssetRecord>,
    pub loading: bool,
    pub has_more: bool,
    pub total_count: usize,
}

/// Pagination state machine for one query session.
///
/// A fresh session is idle and empty until the first [`Session::search`]
/// or [`Session::set_filters`] call resets it. Both always issue a reset
/// fetch; [`Session::load_more`] issues a next-page fetch unless a fetch
/// is already pending or the filtered result is exhausted.
#[derive(Debug)]
pub struct Session {
    query: StructuredQuery,
    filters: FilterSet,
    /// Next page to fetch, 1-based. Reset to 1 on any input change.
    page: usize,
    records: Vec<AssetRecord>,
    has_more: bool,
    total_count: usize,
    pending: Option<PendingFetch>,
    latency: Duration,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            query: StructuredQuery::default(),
            filters: FilterSet::default(),
            page: 1,
            records: Vec::new(),
            has_more: false,
            total_count: 0,
            pending: None,
            latency: DEFAULT_FETCH_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Set the active search string and issue a reset fetch. Supersedes
    /// any pending fetch.
    pub fn search(&mut self, raw: &str) -> FetchTicket {
        self.query = query::parse(raw);
        self.reset()
    }

    /// Set the active filter set and issue a reset fetch. Supersedes any
    /// pending fetch.
    pub fn set_filters(&mut self, filters: FilterSet) -> FetchTicket {
        self.filters = filters;
        self.reset()
    }

    /// Issue a next-page fetch. Returns `None` while a fetch is pending
    /// or when there is nothing more to load.
    pub fn load_more(&mut self) -> Option<FetchTicket> {
        if self.pending.is_some() || !self.has_more {
            return None;
        }
        Some(self.issue(FetchOrigin::NextPage))
    }

    fn reset(&mut self) -> FetchTicket {
        self.page = 1;
        self.issue(FetchOrigin::Reset)
    }

    fn issue(&mut self, origin: FetchOrigin) -> FetchTicket {
        let ticket = FetchTicket(Uuid::new_v4());
        self.pending = Some(PendingFetch {
            ticket,
            origin,
            issued_at: Instant::now(),
        });
        ticket
    }

    /// Apply a finished fetch. Returns `Ok(false)` without touching any
    /// state when the ticket does not match the pending fetch (a stale
    /// completion from a superseded query, or no fetch pending at all).
    ///
    /// On apply, the full catalog is reloaded and refiltered, the page
    /// slice is taken, and `records` is replaced (reset) or extended
    /// (next page); `has_more` and `total_count` are recomputed from the
    /// filtered sequence.
    pub fn complete<S: RecordStore>(&mut self, store: &S, ticket: FetchTicket) -> Result<bool> {
        let origin = match &self.pending {
            Some(pending) if pending.ticket == ticket => pending.origin,
            _ => return Ok(false),
        };
        self.pending = None;

        let all = store.load_all()?;
        let filtered = filter::apply(&all, &self.query, &self.filters);

        let start = match origin {
            FetchOrigin::Reset => 0,
            FetchOrigin::NextPage => (self.page - 1) * PAGE_SIZE,
        };
        let end = start + PAGE_SIZE;
        let slice = filtered
            .get(start..filtered.len().min(end))
            .unwrap_or(&[])
            .to_vec();

        match origin {
            FetchOrigin::Reset => {
                self.records = slice;
                self.page = 2;
            }
            FetchOrigin::NextPage => {
                self.records.extend(slice);
                self.page += 1;
            }
        }
        self.has_more = end < filtered.len();
        self.total_count = filtered.len();
        Ok(true)
    }

    /// Sleep out the remaining simulated latency of the pending fetch and
    /// apply it. Returns `Ok(false)` when the session is idle.
    pub fn settle<S: RecordStore>(&mut self, store: &S) -> Result<bool> {
        let (ticket, elapsed) = match &self.pending {
            Some(pending) => (pending.ticket, pending.issued_at.elapsed()),
            None => return Ok(false),
        };
        if elapsed < self.latency {
            thread::sleep(self.latency - elapsed);
        }
        self.complete(store, ticket)
    }

    pub fn snapshot(&self) -> SessionView {
        SessionView {
            records: self.records.clone(),
            loading: self.is_loading(),
            has_more: self.has_more,
            total_count: self.total_count,
        }
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn query(&self) -> &StructuredQuery {
        &self.query
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }
}
