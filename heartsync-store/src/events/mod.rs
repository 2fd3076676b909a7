pub mod publisher;

use serde::Serialize;

use heartsync_shared::types::event::routing_keys;

use crate::matching::gesture::SwipeDirection;

/// Payloads published after each state transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    LoggedIn { user_id: String },
    Registered { user_id: String, name: String },
    LoggedOut,
    AccountDeleted,
    ProfileUpdated { user_id: String },
    ProfileSaved { user_id: String },
    Swiped { user_id: String, direction: SwipeDirection },
    MatchCreated { match_id: String, user_id: String },
    MessageSent { match_id: String, message_id: String },
    ThreadRead { match_id: String },
    FiltersUpdated,
    FiltersApplied { candidates: usize },
    FiltersCleared,
    PremiumActivated { plan_id: String },
}

impl StoreEvent {
    pub fn routing_key(&self) -> &'static str {
        match self {
            Self::LoggedIn { .. } => routing_keys::AUTH_USER_LOGGED_IN,
            Self::Registered { .. } => routing_keys::AUTH_USER_REGISTERED,
            Self::LoggedOut => routing_keys::AUTH_USER_LOGGED_OUT,
            Self::AccountDeleted => routing_keys::AUTH_ACCOUNT_DELETED,
            Self::ProfileUpdated { .. } => routing_keys::PROFILE_UPDATED,
            Self::ProfileSaved { .. } => routing_keys::PROFILE_SAVED,
            Self::Swiped { direction: SwipeDirection::Left, .. } => routing_keys::SWIPE_USER_PASSED,
            Self::Swiped { direction: SwipeDirection::Right, .. } => routing_keys::SWIPE_USER_LIKED,
            Self::MatchCreated { .. } => routing_keys::SWIPE_MATCH_CREATED,
            Self::MessageSent { .. } => routing_keys::CHAT_MESSAGE_SENT,
            Self::ThreadRead { .. } => routing_keys::CHAT_THREAD_READ,
            Self::FiltersUpdated => routing_keys::FILTERS_UPDATED,
            Self::FiltersApplied { .. } => routing_keys::FILTERS_APPLIED,
            Self::FiltersCleared => routing_keys::FILTERS_CLEARED,
            Self::PremiumActivated { .. } => routing_keys::PREMIUM_ACTIVATED,
        }
    }
}
