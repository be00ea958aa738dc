//! Observable wrapper around [`AppState`].

use crate::command::Command;
use crate::message::Message;
use crate::state::AppState;
use crate::update::update;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&AppState) + Send>;

/// Owns the state, runs the reducer and notifies observers after every
/// dispatched message.
pub struct Store {
    state: AppState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register `observer`; it is called with the new state after each
    /// dispatch until unsubscribed.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&AppState) + Send + 'static,
    {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn dispatch(&mut self, message: Message) -> Command {
        let command = update(&mut self.state, message);
        for (_, observer) in &mut self.observers {
            observer(&self.state);
        }
        command
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}
