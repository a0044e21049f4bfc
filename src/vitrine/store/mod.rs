//! # Storage Layer
//!
//! This module defines the storage abstraction for vitrine. The
//! [`RecordStore`] trait allows the engine to work with different catalog
//! backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** (a remote indexer, a database) without
//!   changing engine logic
//! - Keep the browsing engine **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based catalog, a single JSON
//!   array of records read and written whole
//! - [`memory::InMemoryStore`]: In-memory catalog for testing
//!
//! ## Read Contract
//!
//! The engine treats the catalog as a fixed, already-loaded, ordered
//! collection: one synchronous full read, stable iteration order, no
//! mutation. A networked backend would swap the full read for a remote
//! query behind the same trait.

use crate::error::Result;
use crate::model::AssetRecord;

pub mod fs;
pub mod memory;

/// Abstract read interface over an ordered record catalog.
pub trait RecordStore {
    /// Load every record, preserving catalog order.
    fn load_all(&self) -> Result<Vec<AssetRecord>>;
}
