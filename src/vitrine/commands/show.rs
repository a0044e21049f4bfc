use crate::commands::CmdResult;
use crate::error::{Result, VitrineError};
use crate::store::RecordStore;

/// Fetch full records by exact id, in the order requested.
pub fn run<S: RecordStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let records = store.load_all()?;

    let mut listed = Vec::with_capacity(ids.len());
    for id in ids {
        let id = id.as_ref();
        let record = records
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| VitrineError::RecordNotFound(id.to_string()))?;
        listed.push(record.clone());
    }

    Ok(CmdResult::default().with_listed_records(listed))
}
