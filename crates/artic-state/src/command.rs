//! Side effects requested by the reducer.
//!
//! `update()` never performs I/O. When a message calls for a fetch it returns
//! a [`Command`] and the runtime executes it, posting the outcome back as
//! [`crate::Message::PageLoaded`].

use std::fmt;

use artic_model::{PageNumber, PageSize};

/// Monotonic identifier of a page fetch.
///
/// Only the response carrying the latest id is applied; anything older is a
/// stale answer to a page the user already navigated away from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work for the runtime after a message has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Command {
    /// Nothing to do.
    None,
    /// Fetch one page and answer with `Message::PageLoaded { request, .. }`.
    FetchPage {
        request: RequestId,
        page: PageNumber,
        size: PageSize,
    },
}

impl Command {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
