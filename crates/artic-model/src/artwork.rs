//! Artwork records as returned by the collection API and as displayed.
//!
//! The API omits fields freely (absent keys, `null`, empty strings), so the
//! wire shape [`RawArtwork`] is all-optional and [`ArtworkRecord`] is the
//! normalized form the rest of the workspace works with.

use serde::{Deserialize, Serialize};

use crate::ids::ArtworkId;

/// Placeholder for a missing title, origin or artist.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder for missing inscriptions.
pub const NO_INSCRIPTIONS: &str = "None";

/// Artwork exactly as it appears in the API `data` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawArtwork {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

/// Normalized artwork row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i32,
    pub date_end: i32,
}

impl ArtworkRecord {
    /// Normalize a raw record, filling sentinels for missing text and `0` for
    /// missing years.
    ///
    /// Returns `None` when the record has no identifier: without one it can
    /// neither be selected nor told apart from its neighbours.
    pub fn from_raw(raw: RawArtwork) -> Option<Self> {
        let id = ArtworkId::new(raw.id?);
        Some(Self {
            id,
            title: text_or(raw.title, UNKNOWN),
            place_of_origin: text_or(raw.place_of_origin, UNKNOWN),
            artist_display: text_or(raw.artist_display, UNKNOWN),
            inscriptions: text_or(raw.inscriptions, NO_INSCRIPTIONS),
            date_start: raw.date_start.unwrap_or(0),
            date_end: raw.date_end.unwrap_or(0),
        })
    }

    /// Fields the local filter searches, in display order.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [&self.title, &self.artist_display, &self.place_of_origin]
    }
}

fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_title_becomes_unknown() {
        let raw = RawArtwork {
            id: Some(1),
            ..RawArtwork::default()
        };
        let record = ArtworkRecord::from_raw(raw).unwrap();
        assert_eq!(record.title, "Unknown");
        assert_eq!(record.place_of_origin, "Unknown");
        assert_eq!(record.artist_display, "Unknown");
        assert_eq!(record.inscriptions, "None");
        assert_eq!(record.date_start, 0);
        assert_eq!(record.date_end, 0);
    }

    #[test]
    fn empty_text_is_treated_as_missing() {
        let raw = RawArtwork {
            id: Some(2),
            title: Some(String::new()),
            inscriptions: Some(String::new()),
            ..RawArtwork::default()
        };
        let record = ArtworkRecord::from_raw(raw).unwrap();
        assert_eq!(record.title, UNKNOWN);
        assert_eq!(record.inscriptions, NO_INSCRIPTIONS);
    }

    #[test]
    fn record_without_id_is_dropped() {
        let raw = RawArtwork {
            title: Some("Untitled".to_string()),
            ..RawArtwork::default()
        };
        assert!(ArtworkRecord::from_raw(raw).is_none());
    }

    #[test]
    fn null_fields_deserialize_as_missing() {
        let json = r#"{"id": 5, "title": null, "date_start": -200, "date_end": null}"#;
        let raw: RawArtwork = serde_json::from_str(json).unwrap();
        let record = ArtworkRecord::from_raw(raw).unwrap();
        assert_eq!(record.title, UNKNOWN);
        assert_eq!(record.date_start, -200);
        assert_eq!(record.date_end, 0);
    }
}
