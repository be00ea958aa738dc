//! Pagination state and the in-flight fetch bookkeeping.

use artic_model::{PageNumber, PageSize};

use crate::command::{Command, RequestId};

/// Which page is on screen and how large pages are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    /// Displayed page (1-based).
    pub page: PageNumber,
    pub size: PageSize,
}

impl PageState {
    pub fn new(page: PageNumber, size: PageSize) -> Self {
        Self { page, size }
    }

    /// Scroll offset: absolute index of the first row of the page.
    pub fn first_row(&self) -> u64 {
        self.size.first_row(self.page)
    }
}

/// A fetch that has been issued and not yet answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFetch {
    pub request: RequestId,
    pub page: PageNumber,
    pub size: PageSize,
}

/// Issues request ids and remembers the latest outstanding fetch.
#[derive(Debug, Clone, Default)]
pub struct LoaderState {
    last_request: u64,
    pending: Option<PendingFetch>,
}

impl LoaderState {
    /// Start a fetch, superseding any outstanding one.
    pub fn begin(&mut self, page: PageNumber, size: PageSize) -> Command {
        self.last_request += 1;
        let request = RequestId::new(self.last_request);
        if let Some(previous) = self.pending.replace(PendingFetch {
            request,
            page,
            size,
        }) {
            tracing::debug!(
                superseded = %previous.request,
                page = %previous.page,
                "Superseding outstanding page fetch"
            );
        }
        Command::FetchPage {
            request,
            page,
            size,
        }
    }

    /// Take the outstanding fetch if `request` is the one it is waiting for.
    ///
    /// Returns `None` for stale responses, which must be ignored.
    pub fn complete(&mut self, request: RequestId) -> Option<PendingFetch> {
        match self.pending {
            Some(pending) if pending.request == request => self.pending.take(),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingFetch> {
        self.pending.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[test]
    fn request_ids_are_monotonic() {
        let mut loader = LoaderState::default();
        let first = loader.begin(page(1), PageSize::Twelve);
        let second = loader.begin(page(2), PageSize::Twelve);
        let (Command::FetchPage { request: a, .. }, Command::FetchPage { request: b, .. }) =
            (first, second)
        else {
            panic!("expected fetch commands");
        };
        assert!(b > a);
    }

    #[test]
    fn only_latest_request_completes() {
        let mut loader = LoaderState::default();
        let Command::FetchPage { request: old, .. } = loader.begin(page(1), PageSize::Twelve)
        else {
            panic!("expected fetch command");
        };
        let Command::FetchPage { request: new, .. } = loader.begin(page(2), PageSize::Twelve)
        else {
            panic!("expected fetch command");
        };

        assert!(loader.complete(old).is_none());
        assert!(loader.is_loading());

        let pending = loader.complete(new).unwrap();
        assert_eq!(pending.page, page(2));
        assert!(!loader.is_loading());
    }

    #[test]
    fn first_row_tracks_page_and_size() {
        let state = PageState::new(page(4), PageSize::Six);
        assert_eq!(state.first_row(), 18);
    }
}
