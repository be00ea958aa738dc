//! Rendered table and status text.

use artic_cli::render::{frame, render, status_lines};
use artic_model::{
    ApiResponse, ArtworkId, ArtworkPage, PageNumber, PageSize, Pagination, RawArtwork,
};
use artic_state::{
    AppState, BulkMessage, Command, Message, PageMessage, SearchMessage, SelectionMessage,
    TableView, update,
};

fn first_page(total: u64) -> ArtworkPage {
    let data = (1..=total.min(6))
        .map(|id| RawArtwork {
            id: Some(id),
            title: Some(format!("Artwork {id}")),
            artist_display: Some("Winslow Homer".into()),
            place_of_origin: Some("United States".into()),
            date_start: (id != 6).then_some(1880),
            ..RawArtwork::default()
        })
        .collect();
    ArtworkPage::from_response(
        PageNumber::FIRST,
        ApiResponse {
            pagination: Pagination {
                total,
                limit: 6,
                offset: 0,
                total_pages: u32::try_from(total.div_ceil(6)).unwrap(),
                current_page: 1,
            },
            data,
        },
    )
}

fn loaded(result: Result<ArtworkPage, String>) -> AppState {
    let (mut state, command) = AppState::init(PageNumber::FIRST, PageSize::Six);
    let Command::FetchPage { request, .. } = command else {
        panic!("expected a fetch");
    };
    let _ = update(&mut state, Message::PageLoaded { request, result });
    state
}

#[test]
fn status_lines_for_a_filtered_selection() {
    let mut state = loaded(Ok(first_page(20)));
    let _ = update(&mut state, SelectionMessage::Add(ArtworkId::new(2)).into());
    let _ = update(&mut state, SelectionMessage::Add(ArtworkId::new(5)).into());
    let _ = update(&mut state, SearchMessage::Changed("artwork 1".into()).into());

    let lines = status_lines(&TableView::from_state(&state));
    insta::assert_snapshot!(lines.join("\n"), @r#"
    Showing 1 to 6 of 20 entries  (page 1 of 4, 6 rows per page)
    2 of 20 artworks selected  (`clear` to clear)
    Filter "artwork 1": 1 of the loaded rows match
    "#);
}

#[test]
fn bulk_target_is_announced() {
    let mut state = loaded(Ok(first_page(4)));
    let _ = update(&mut state, BulkMessage::InputChanged(Some(10)).into());
    let _ = update(&mut state, BulkMessage::Apply.into());

    let lines = status_lines(&TableView::from_state(&state));
    insta::assert_snapshot!(lines.join("\n"), @r"
    Showing 1 to 4 of 4 entries  (page 1 of 1, 6 rows per page)
    4 of 4 artworks selected  (`clear` to clear)
    Selecting the first 4 artworks
    ");
}

#[test]
fn table_marks_selected_rows() {
    let mut state = loaded(Ok(first_page(20)));
    let _ = update(&mut state, SelectionMessage::PageToggled(true).into());

    let out = render(&TableView::from_state(&state), 120);
    assert!(out.contains("Artwork 6"));
    assert!(out.contains("Winslow Homer"));
    assert!(out.contains("1880"));
    assert_eq!(out.matches("[x]").count(), 7);
    assert!(!out.contains("[ ]"));
}

#[test]
fn failed_first_load_shows_the_error() {
    let state = loaded(Err("network error: connection refused".into()));
    let out = frame(&state, 100);
    assert!(out.contains("Showing 0 to 0 of 0 entries"));
    assert!(out.contains("Error: network error: connection refused"));
}

#[test]
fn loading_frame_is_one_line() {
    let mut state = loaded(Ok(first_page(20)));
    let _ = update(&mut state, PageMessage::Next.into());
    assert_eq!(frame(&state, 100), "Loading page 2...");
}
