//! Record filtering.
//!
//! [`matches`] is the pure predicate at the heart of catalog browsing: a
//! record passes only when it satisfies every active constraint from the
//! parsed query and the explicit [`FilterSet`]. Absent or empty
//! constraints auto-pass; unrecognized `type:` literals are inert rather
//! than errors, and unreadable mint dates fail closed against an active
//! date bound.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::model::AssetRecord;
use crate::query::StructuredQuery;

const IMAGE_KEYWORDS: [&str; 7] = ["image", "img", "jpeg", "jpg", "png", "gif", "webp"];
const VIDEO_KEYWORDS: [&str; 5] = ["video", "mp4", "avi", "mov", "webm"];

/// Inclusive calendar-date bounds on a record's mint date. Either end may
/// be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    fn contains(&self, date: NaiveDate) -> bool {
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Explicit constraints supplied alongside the search string, orthogonal
/// to the structured query tokens. Empty sets and an absent range impose
/// no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    pub chains: BTreeSet<String>,
    pub collections: BTreeSet<String>,
    pub date_range: Option<DateRange>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(mut self, chain: impl Into<String>) -> Self {
        self.chains.insert(chain.into());
        self
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collections.insert(collection.into());
        self
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
            && self.collections.is_empty()
            && !self.date_range.is_some_and(|r| r.is_active())
    }
}

/// Evaluate one record against a parsed query and an explicit filter set.
/// All checks are conjunctive.
pub fn matches(record: &AssetRecord, query: &StructuredQuery, filters: &FilterSet) -> bool {
    if let Some(wanted) = query.blockchain.as_deref() {
        if !wanted.is_empty() {
            let chain = record.chain.as_deref().map(str::to_lowercase);
            if chain.as_deref() != Some(wanted) {
                return false;
            }
        }
    }

    if let Some(file_type) = query.file_type.as_deref() {
        // Unrecognized literals impose no constraint
        let class: Option<&[&str]> = match file_type {
            "image" => Some(&IMAGE_KEYWORDS),
            "video" => Some(&VIDEO_KEYWORDS),
            _ => None,
        };
        if let Some(keywords) = class {
            let image = record.image.to_lowercase();
            let name = record.name.to_lowercase();
            if !keywords.iter().any(|k| image.contains(k) || name.contains(k)) {
                return false;
            }
        }
    }

    if let Some(token_id) = query.token_id.as_deref() {
        if !token_id.is_empty() {
            let tagged = format!("#{token_id}");
            if !record.id.contains(token_id) && !record.name.to_lowercase().contains(&tagged) {
                return false;
            }
        }
    }

    if !query.terms.is_empty() {
        let haystack = searchable_text(record);
        if !query.terms.iter().all(|term| haystack.contains(term.as_str())) {
            return false;
        }
    }

    if !filters.chains.is_empty() {
        match record.chain.as_ref() {
            Some(chain) if filters.chains.contains(chain) => {}
            _ => return false,
        }
    }

    if !filters.collections.is_empty() {
        match record.collection.as_ref() {
            Some(collection) if filters.collections.contains(collection) => {}
            _ => return false,
        }
    }

    if let Some(range) = &filters.date_range {
        if range.is_active() {
            match record.parsed_mint_date() {
                Some(date) if range.contains(date) => {}
                // an absent or unreadable date cannot be ordered against
                // a bound, so an active range excludes the record
                _ => return false,
            }
        }
    }

    true
}

/// Filter the full catalog, preserving store order.
pub fn apply(
    records: &[AssetRecord],
    query: &StructuredQuery,
    filters: &FilterSet,
) -> Vec<AssetRecord> {
    records
        .iter()
        .filter(|record| matches(record, query, filters))
        .cloned()
        .collect()
}

/// The haystack for free-text terms: every searchable field of the
/// record, space-joined and lowercased.
fn searchable_text(record: &AssetRecord) -> String {
    let mut parts: Vec<String> = vec![
        record.name.clone(),
        record.collection.clone().unwrap_or_default(),
        record.description.clone(),
        record.chain.clone().unwrap_or_default(),
    ];
    for attr in &record.attributes {
        parts.push(format!("{} {}", attr.trait_type, attr.value));
    }
    parts.join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TraitAttribute;
    use crate::query::parse;

    fn punk() -> AssetRecord {
        let mut record = AssetRecord::new("1", "CryptoPunk #1234");
        record.image = "https://images.example/punk-1234.png".to_string();
        record.description = "A rare CryptoPunk with unique traits".to_string();
        record.attributes = vec![
            TraitAttribute::new("Type", "Male"),
            TraitAttribute::new("Eyes", "Sunglasses"),
        ];
        record.collection = Some("CryptoPunks".to_string());
        record.chain = Some("Ethereum".to_string());
        record.mint_date = Some("2021-06-12".to_string());
        record
    }

    fn no_filters() -> FilterSet {
        FilterSet::new()
    }

    #[test]
    fn unconstrained_query_passes_everything() {
        assert!(matches(&punk(), &parse(""), &no_filters()));
    }

    #[test]
    fn blockchain_check_is_case_insensitive() {
        assert!(matches(&punk(), &parse("chain:ethereum"), &no_filters()));
        assert!(matches(&punk(), &parse("chain:ETHEREUM"), &no_filters()));
        assert!(!matches(&punk(), &parse("chain:polygon"), &no_filters()));
    }

    #[test]
    fn chain_mismatch_excludes_despite_matching_terms() {
        // "rare" appears in the description, but the chain check fails
        assert!(!matches(&punk(), &parse("chain:polygon rare"), &no_filters()));
    }

    #[test]
    fn blockchain_check_fails_records_without_chain() {
        let mut record = punk();
        record.chain = None;
        assert!(!matches(&record, &parse("chain:ethereum"), &no_filters()));
    }

    #[test]
    fn file_type_image_scans_url_and_name() {
        assert!(matches(&punk(), &parse("type:image"), &no_filters()));

        let mut clip = AssetRecord::new("2", "Concert Clip");
        clip.image = "https://media.example/clip.mp4".to_string();
        assert!(matches(&clip, &parse("type:video"), &no_filters()));
        assert!(!matches(&clip, &parse("type:image"), &no_filters()));
    }

    #[test]
    fn unrecognized_file_type_is_inert() {
        assert!(matches(&punk(), &parse("type:audio"), &no_filters()));
    }

    #[test]
    fn token_id_matches_id_substring_or_tagged_name() {
        // punk id is "1" and name carries "#1234"
        assert!(matches(&punk(), &parse("#1234"), &no_filters()));
        assert!(matches(&punk(), &parse("#1"), &no_filters()));
        assert!(!matches(&punk(), &parse("#9999"), &no_filters()));

        let mut record = AssetRecord::new("555777", "Unnumbered");
        assert!(matches(&record, &parse("#5577"), &no_filters()));
        record.id = "x".to_string();
        assert!(!matches(&record, &parse("#5577"), &no_filters()));
    }

    #[test]
    fn terms_search_name_collection_description_chain_and_attributes() {
        let filters = no_filters();
        assert!(matches(&punk(), &parse("cryptopunk"), &filters));
        assert!(matches(&punk(), &parse("cryptopunks"), &filters));
        assert!(matches(&punk(), &parse("unique"), &filters));
        assert!(matches(&punk(), &parse("ethereum"), &filters));
        assert!(matches(&punk(), &parse("sunglasses"), &filters));
        // attribute pair is searchable as "<trait> <value>"
        assert!(matches(&punk(), &parse("\"eyes sunglasses\""), &filters));
    }

    #[test]
    fn all_terms_must_match() {
        assert!(matches(&punk(), &parse("rare male"), &no_filters()));
        assert!(!matches(&punk(), &parse("rare golden"), &no_filters()));
    }

    #[test]
    fn explicit_chain_set_requires_membership() {
        let filters = FilterSet::new().with_chain("Polygon");
        assert!(!matches(&punk(), &parse(""), &filters));

        let filters = filters.with_chain("Ethereum");
        assert!(matches(&punk(), &parse(""), &filters));
    }

    #[test]
    fn explicit_collection_set_requires_membership() {
        let filters = FilterSet::new().with_collection("Doodles");
        assert!(!matches(&punk(), &parse(""), &filters));

        let filters = FilterSet::new().with_collection("CryptoPunks");
        assert!(matches(&punk(), &parse(""), &filters));

        let mut record = punk();
        record.collection = None;
        let filters = FilterSet::new().with_collection("CryptoPunks");
        assert!(!matches(&record, &parse(""), &filters));
    }

    #[test]
    fn date_range_bounds_are_inclusive() {
        let day = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();

        let filters =
            FilterSet::new().with_date_range(DateRange::new(Some(day(2021, 6, 12)), None));
        assert!(matches(&punk(), &parse(""), &filters));

        let filters =
            FilterSet::new().with_date_range(DateRange::new(Some(day(2021, 6, 13)), None));
        assert!(!matches(&punk(), &parse(""), &filters));

        let filters =
            FilterSet::new().with_date_range(DateRange::new(None, Some(day(2021, 6, 12))));
        assert!(matches(&punk(), &parse(""), &filters));

        let filters =
            FilterSet::new().with_date_range(DateRange::new(None, Some(day(2021, 6, 11))));
        assert!(!matches(&punk(), &parse(""), &filters));
    }

    #[test]
    fn missing_or_malformed_date_fails_active_bound() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let filters = FilterSet::new().with_date_range(DateRange::new(Some(day), None));

        let mut record = punk();
        record.mint_date = None;
        assert!(!matches(&record, &parse(""), &filters));

        record.mint_date = Some("not-a-date".to_string());
        assert!(!matches(&record, &parse(""), &filters));

        // an all-open range is no constraint at all
        let inert = FilterSet::new().with_date_range(DateRange::default());
        assert!(matches(&record, &parse(""), &inert));
    }

    #[test]
    fn single_failing_constraint_excludes() {
        // passes every active constraint
        let filters = FilterSet::new().with_chain("Ethereum");
        assert!(matches(&punk(), &parse("rare #1234 type:image"), &filters));
        // flip exactly one
        assert!(!matches(&punk(), &parse("rare #9999 type:image"), &filters));
    }

    #[test]
    fn apply_preserves_store_order() {
        let mut a = AssetRecord::new("1", "Alpha");
        a.chain = Some("Ethereum".to_string());
        let mut b = AssetRecord::new("2", "Beta");
        b.chain = Some("Polygon".to_string());
        let mut c = AssetRecord::new("3", "Gamma");
        c.chain = Some("Ethereum".to_string());

        let records = vec![a, b, c];
        let kept = apply(&records, &parse("chain:ethereum"), &no_filters());
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
