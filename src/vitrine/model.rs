use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One descriptive trait on a record, e.g. `("Fur", "Golden")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitAttribute {
    pub trait_type: String,
    pub value: String,
}

impl TraitAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// One catalogued digital asset.
///
/// Records are immutable once loaded; the engine only reads them. `id` is
/// unique within one catalog (not globally). `attributes` keeps insertion
/// order, which is preserved but carries no search semantics. The JSON
/// field names match the catalog wire format (camelCase, `trait_type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<TraitAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_date: Option<String>,
}

impl AssetRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            description: String::new(),
            attributes: Vec::new(),
            collection: None,
            chain: None,
            mint_date: None,
        }
    }

    /// Mint date parsed as a calendar date; `None` when absent or not
    /// ISO `YYYY-MM-DD`.
    pub fn parsed_mint_date(&self) -> Option<NaiveDate> {
        self.mint_date.as_deref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_catalog_field_names() {
        let mut record = AssetRecord::new("1", "CryptoPunk #1234");
        record.attributes = vec![TraitAttribute::new("Type", "Male")];
        record.mint_date = Some("2021-06-12".to_string());

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"mintDate\":\"2021-06-12\""));
        assert!(json.contains("\"trait_type\":\"Type\""));

        let parsed: AssetRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn optional_fields_deserialize_when_absent() {
        let record: AssetRecord =
            serde_json::from_str(r#"{"id":"9","name":"Bare"}"#).unwrap();
        assert_eq!(record.id, "9");
        assert!(record.attributes.is_empty());
        assert!(record.collection.is_none());
        assert!(record.chain.is_none());
        assert!(record.mint_date.is_none());
    }

    #[test]
    fn mint_date_parses_iso_only() {
        let mut record = AssetRecord::new("1", "A");
        assert_eq!(record.parsed_mint_date(), None);

        record.mint_date = Some("2021-06-12".to_string());
        assert_eq!(
            record.parsed_mint_date(),
            Some(NaiveDate::from_ymd_opt(2021, 6, 12).unwrap())
        );

        record.mint_date = Some("June 12, 2021".to_string());
        assert_eq!(record.parsed_mint_date(), None);
    }
}
