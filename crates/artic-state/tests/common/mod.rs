//! In-memory collection used to drive the reducer without a server.

#![allow(dead_code)]

use artic_model::{ApiResponse, ArtworkPage, PageNumber, PageSize, Pagination, RawArtwork};
use artic_state::{AppState, Command, Message, update};

/// Page `page` of a collection of `total` artworks with ids `1..=total`.
pub fn collection_page(page: PageNumber, size: PageSize, total: u64) -> ArtworkPage {
    let offset = size.first_row(page);
    let end = (offset + u64::from(size.rows())).min(total);
    let data = (offset..end)
        .map(|index| RawArtwork {
            id: Some(index + 1),
            title: Some(format!("Artwork {}", index + 1)),
            artist_display: Some(
                if index % 2 == 0 {
                    "Claude Monet"
                } else {
                    "Mary Cassatt"
                }
                .into(),
            ),
            place_of_origin: Some("France".into()),
            date_start: Some(1890),
            date_end: Some(1891),
            ..RawArtwork::default()
        })
        .collect();
    let total_pages = u32::try_from(total.div_ceil(u64::from(size.rows()))).unwrap();

    ArtworkPage::from_response(
        page,
        ApiResponse {
            pagination: Pagination {
                total,
                limit: size.rows(),
                offset,
                total_pages,
                current_page: page.get(),
            },
            data,
        },
    )
}

/// Answer every fetch the reducer asks for until it is idle.
pub fn settle(state: &mut AppState, mut command: Command, total: u64) {
    while let Command::FetchPage {
        request,
        page,
        size,
    } = command
    {
        command = update(
            state,
            Message::PageLoaded {
                request,
                result: Ok(collection_page(page, size, total)),
            },
        );
    }
}

pub fn dispatch(state: &mut AppState, message: impl Into<Message>, total: u64) {
    let command = update(state, message.into());
    settle(state, command, total);
}

/// Browser with page 1 of a `total`-artwork collection loaded.
pub fn open(size: PageSize, total: u64) -> AppState {
    let (mut state, command) = AppState::init(PageNumber::FIRST, size);
    settle(&mut state, command, total);
    state
}

pub fn page(n: u32) -> PageNumber {
    PageNumber::new(n).unwrap()
}
