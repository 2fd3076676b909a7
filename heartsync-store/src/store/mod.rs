mod auth;
mod chat;
mod filters;
mod premium;
mod profile;
mod swipe;

use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::broadcast;

use heartsync_shared::errors::AppResult;
use heartsync_shared::types::event::Event;
use heartsync_shared::types::pagination::{Paginated, PaginationParams};

use crate::config::StoreConfig;
use crate::env::Environment;
use crate::events::publisher::EventPublisher;
use crate::events::StoreEvent;
use crate::fixtures::Seed;
use crate::matching::queue::SwipeQueue;
use crate::models::{FilterSettings, Match, Message, PremiumSubscription, User};

pub use swipe::SwipeOutcome;

/// Everything the presentation layer can observe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub current_user: Option<User>,
    pub queue: SwipeQueue,
    pub matches: Vec<Match>,
    /// Chat threads keyed by match id.
    pub chats: HashMap<String, Vec<Message>>,
    pub is_authenticated: bool,
    pub filters: FilterSettings,
    pub has_unsaved_changes: bool,
    pub premium: Option<PremiumSubscription>,
}

impl StoreState {
    fn fresh(seed: &Seed) -> Self {
        Self {
            current_user: None,
            queue: SwipeQueue::new(seed.users.clone()),
            matches: Vec::new(),
            chats: HashMap::new(),
            is_authenticated: false,
            filters: FilterSettings::default(),
            has_unsaved_changes: false,
            premium: None,
        }
    }
}

/// The single writer of all session state.
///
/// Every operation takes `&mut self` and runs to completion before the next
/// one can start; the async ones hold the borrow across their simulated
/// latency, so nothing interleaves with them either.
pub struct Store<E: Environment> {
    env: E,
    config: StoreConfig,
    seed: Seed,
    state: StoreState,
    events: EventPublisher,
    next_seq: u64,
}

impl<E: Environment> Store<E> {
    pub fn new(env: E, config: StoreConfig, seed: Seed) -> Self {
        let events = EventPublisher::new(config.event_capacity);
        let state = StoreState::fresh(&seed);
        tracing::debug!(candidates = state.queue.len(), "store initialized");
        Self {
            env,
            config,
            seed,
            state,
            events,
            next_seq: 0,
        }
    }

    /// Builds a store from `config`, reading fixtures from
    /// `config.fixtures_path` when set and the embedded seed otherwise.
    pub fn from_config(env: E, config: StoreConfig) -> AppResult<Self> {
        let seed = match &config.fixtures_path {
            Some(path) => Seed::from_path(path)?,
            None => Seed::embedded()?,
        };
        Ok(Self::new(env, config, seed))
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event<StoreEvent>> {
        self.events.subscribe()
    }

    // --- Selectors ---

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.state.has_unsaved_changes
    }

    pub fn candidates(&self) -> &[User] {
        self.state.queue.candidates()
    }

    pub fn all_users(&self) -> &[User] {
        self.state.queue.master()
    }

    pub fn matches(&self) -> &[Match] {
        &self.state.matches
    }

    pub fn chats(&self) -> &HashMap<String, Vec<Message>> {
        &self.state.chats
    }

    pub fn filters(&self) -> &FilterSettings {
        &self.state.filters
    }

    pub fn match_by_id(&self, match_id: &str) -> Option<&Match> {
        self.state.matches.iter().find(|m| m.id == match_id)
    }

    /// The match formed with `user_id`, if any. Newest wins.
    pub fn match_for_user(&self, user_id: &str) -> Option<&Match> {
        self.state.matches.iter().find(|m| m.user.id == user_id)
    }

    /// Empty when the thread does not exist.
    pub fn thread(&self, match_id: &str) -> &[Message] {
        self.state
            .chats
            .get(match_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Newest messages first.
    pub fn thread_page(&self, match_id: &str, params: &PaginationParams) -> Paginated<Message> {
        let thread = self.thread(match_id);
        let items = thread
            .iter()
            .rev()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .cloned()
            .collect();
        Paginated::new(items, thread.len() as u64, params)
    }

    pub fn total_unread(&self) -> u32 {
        self.state.matches.iter().map(|m| m.unread_count).sum()
    }

    /// Looks in the deck first, then the master list.
    pub fn find_user(&self, user_id: &str) -> Option<&User> {
        self.state
            .queue
            .find(user_id)
            .or_else(|| self.state.queue.find_in_master(user_id))
    }

    // --- Internals ---

    fn current_user_id(&self) -> Option<&str> {
        self.state.current_user.as_ref().map(|u| u.id.as_str())
    }

    fn publish(&self, event: StoreEvent) {
        self.events
            .publish(event, self.current_user_id(), self.env.now());
    }

    /// `{prefix}-{millis}-{seq}`; the sequence keeps ids unique within a
    /// millisecond.
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_seq += 1;
        format!(
            "{prefix}-{}-{}",
            self.env.now().timestamp_millis(),
            self.next_seq
        )
    }
}
