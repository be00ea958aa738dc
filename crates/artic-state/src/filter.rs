//! Local filter over the loaded page.
//!
//! Case-insensitive substring match on title, artist and origin. Never
//! fetches and never touches the selection.

use artic_model::ArtworkRecord;

/// Records of `records` matching `term`, in their original order.
///
/// An empty term matches everything.
pub fn filter_records<'a>(records: &'a [ArtworkRecord], term: &str) -> Vec<&'a ArtworkRecord> {
    filter_refs(records, term)
}

/// Same as [`filter_records`] over any sequence of record references, so an
/// already filtered view can be narrowed again.
pub fn filter_refs<'a, I>(records: I, term: &str) -> Vec<&'a ArtworkRecord>
where
    I: IntoIterator<Item = &'a ArtworkRecord>,
{
    if term.is_empty() {
        return records.into_iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

fn matches(record: &ArtworkRecord, needle: &str) -> bool {
    record
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}
