use std::collections::BTreeMap;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Which optional record field to aggregate distinct values for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Collections,
    Chains,
}

/// Count distinct values of the chosen facet across the catalog.
/// Records without the field are skipped.
pub fn run<S: RecordStore>(store: &S, facet: Facet) -> Result<CmdResult> {
    let records = store.load_all()?;

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        let value = match facet {
            Facet::Collections => record.collection.as_ref(),
            Facet::Chains => record.chain.as_ref(),
        };
        if let Some(value) = value {
            *counts.entry(value.clone()).or_insert(0) += 1;
        }
    }

    let mut result = CmdResult::default().with_facet_counts(counts.into_iter().collect());
    if result.facet_counts.is_empty() {
        result.add_message(CmdMessage::info("The catalog has no values for this field."));
    }
    Ok(result)
}
