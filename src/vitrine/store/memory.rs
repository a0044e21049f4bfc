use super::RecordStore;
use crate::error::Result;
use crate::model::AssetRecord;

/// In-memory catalog for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Vec<AssetRecord>,
}

impl InMemoryStore {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<AssetRecord>> {
        Ok(self.records.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{AssetRecord, TraitAttribute};

    /// A minimal record with just an id and a name.
    pub fn record(id: &str, name: &str) -> AssetRecord {
        AssetRecord::new(id, name)
    }

    /// `count` generated records in insertion order: ids `1..=count`,
    /// alternating Ethereum/Polygon chains, collections of three, one
    /// rarity attribute each, mint dates spread across 2023.
    pub fn sample_run(count: usize) -> Vec<AssetRecord> {
        (1..=count)
            .map(|i| {
                let mut record =
                    AssetRecord::new(i.to_string(), format!("Sample Asset #{i}"));
                record.image = format!("https://img.example/{i}.png");
                record.description = format!("Generated sample asset {i}");
                record.attributes = vec![TraitAttribute::new(
                    "Rarity",
                    if i % 3 == 0 { "Rare" } else { "Common" },
                )];
                record.collection = Some(format!("Collection {}", (i - 1) / 3 + 1));
                record.chain =
                    Some(if i % 2 == 0 { "Polygon" } else { "Ethereum" }.to_string());
                record.mint_date =
                    Some(format!("2023-{:02}-{:02}", (i - 1) % 12 + 1, (i - 1) % 28 + 1));
                record
            })
            .collect()
    }
}
