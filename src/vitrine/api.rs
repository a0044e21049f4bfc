//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all vitrine operations, regardless of the client
//! driving it.
//!
//! The facade **dispatches** to command functions and **returns
//! structured types** (`Result<CmdResult>`). It holds no business logic,
//! performs no I/O of its own, and never formats output.
//!
//! ## Generic Over RecordStore
//!
//! `VitrineApi<S: RecordStore>` is generic over the catalog backend:
//! - Production: `VitrineApi<FileStore>`
//! - Testing: `VitrineApi<InMemoryStore>`
//!
//! API tests verify dispatch, not logic; the command modules own their
//! own behavior tests.

use std::path::Path;
use std::time::Duration;

use crate::commands;
use crate::error::Result;
use crate::filter::FilterSet;
use crate::session::DEFAULT_FETCH_LATENCY;
use crate::store::RecordStore;

/// The main API facade for vitrine operations.
pub struct VitrineApi<S: RecordStore> {
    store: S,
    latency: Duration,
}

impl<S: RecordStore> VitrineApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            latency: DEFAULT_FETCH_LATENCY,
        }
    }

    /// Override the simulated per-page fetch latency.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn browse(
        &self,
        raw_query: &str,
        filters: FilterSet,
        pages: usize,
    ) -> Result<commands::CmdResult> {
        commands::browse::run(&self.store, raw_query, filters, pages, self.latency)
    }

    pub fn show<I: AsRef<str>>(&self, ids: &[I]) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, ids)
    }

    pub fn collections(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.store, Facet::Collections)
    }

    pub fn chains(&self) -> Result<commands::CmdResult> {
        commands::facets::run(&self.store, Facet::Chains)
    }

    /// Write the starter catalog. Path-based rather than store-based: the
    /// read stores the API is generic over never mutate the catalog.
    pub fn init(&self, catalog_path: &Path, force: bool) -> Result<commands::CmdResult> {
        commands::init::run(catalog_path, force)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::facets::Facet;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
