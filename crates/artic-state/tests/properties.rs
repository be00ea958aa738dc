//! Property tests for bulk selection, page selection and the local filter.

mod common;

use artic_model::{ArtworkId, ArtworkRecord, PageSize, RawArtwork};
use artic_state::{
    BulkMessage, PageMessage, SearchMessage, SelectionMap, SelectionMessage, TableView,
    filter_records, filter_refs,
};
use common::{dispatch, open};
use proptest::prelude::*;

fn page_size() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PageSize::ALL.to_vec())
}

fn record() -> impl Strategy<Value = ArtworkRecord> {
    (1u64..10_000, "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}", "[a-zA-Z ]{0,12}").prop_map(
        |(id, title, artist, origin)| {
            ArtworkRecord::from_raw(RawArtwork {
                id: Some(id),
                title: Some(title),
                artist_display: Some(artist),
                place_of_origin: Some(origin),
                ..RawArtwork::default()
            })
            .unwrap()
        },
    )
}

proptest! {
    #[test]
    fn bulk_selects_min_of_target_and_total(
        size in page_size(),
        total in 1u64..200,
        target in 1i64..250,
    ) {
        let mut state = open(size, total);
        dispatch(&mut state, BulkMessage::InputChanged(Some(target)), total);
        dispatch(&mut state, BulkMessage::Apply, total);

        let pages = target.unsigned_abs().div_ceil(u64::from(size.rows()));
        for _ in 1..pages {
            dispatch(&mut state, PageMessage::Next, total);
        }

        let expected = target.unsigned_abs().min(total);
        prop_assert_eq!(state.selection.len() as u64, expected);
        prop_assert!(state.selection.iter().all(|id| id.get() <= expected));
    }

    #[test]
    fn page_toggle_round_trip_restores_selection(
        size in page_size(),
        elsewhere in prop::collection::btree_set(1_000u64..2_000, 0..20),
    ) {
        let mut state = open(size, 500);
        state.selection = elsewhere.iter().copied().map(ArtworkId::new).collect::<SelectionMap>();
        let before = state.selection.clone();

        dispatch(&mut state, SelectionMessage::PageToggled(true), 500);
        prop_assert!(state.selection.all_selected(&state.records));
        dispatch(&mut state, SelectionMessage::PageToggled(false), 500);

        prop_assert_eq!(state.selection, before);
    }

    #[test]
    fn filter_is_idempotent(
        records in prop::collection::vec(record(), 0..30),
        term in "[a-zA-Z ]{0,4}",
    ) {
        let once = filter_records(&records, &term);
        let twice = filter_refs(once.iter().copied(), &term);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn clearing_search_restores_the_page(
        size in page_size(),
        term in "[a-zA-Z ]{1,6}",
    ) {
        let mut state = open(size, 100);
        dispatch(&mut state, SearchMessage::Changed(term), 100);
        dispatch(&mut state, SearchMessage::Changed(String::new()), 100);

        let view = TableView::from_state(&state);
        let shown: Vec<_> = view.rows.iter().map(|row| row.record.id).collect();
        let loaded: Vec<_> = state.records.iter().map(|record| record.id).collect();
        prop_assert_eq!(shown, loaded);
    }
}
