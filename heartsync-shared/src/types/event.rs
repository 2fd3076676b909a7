use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event envelope wrapping every state-store notification.
///
/// Routing key format: `heartsync.{domain}.{entity}.{action}`
/// Example: `heartsync.swipe.match.created`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event<T: Serialize> {
    pub id: Uuid,
    pub source: String,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: Option<String>,
    pub data: T,
}

impl<T: Serialize> Event<T> {
    pub fn new(source: impl Into<String>, event_type: impl Into<String>, data: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: source.into(),
            event_type: event_type.into(),
            timestamp: Utc::now(),
            user_id: None,
            data,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Overrides the wall-clock timestamp, used when the caller owns a
    /// virtual clock.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Store routing keys
pub mod routing_keys {
    // Auth events
    pub const AUTH_USER_LOGGED_IN: &str = "heartsync.auth.user.logged_in";
    pub const AUTH_USER_REGISTERED: &str = "heartsync.auth.user.registered";
    pub const AUTH_USER_LOGGED_OUT: &str = "heartsync.auth.user.logged_out";
    pub const AUTH_ACCOUNT_DELETED: &str = "heartsync.auth.account.deleted";

    // Profile events
    pub const PROFILE_UPDATED: &str = "heartsync.profile.user.updated";
    pub const PROFILE_SAVED: &str = "heartsync.profile.user.saved";

    // Swipe events
    pub const SWIPE_USER_PASSED: &str = "heartsync.swipe.user.passed";
    pub const SWIPE_USER_LIKED: &str = "heartsync.swipe.user.liked";
    pub const SWIPE_MATCH_CREATED: &str = "heartsync.swipe.match.created";

    // Chat events
    pub const CHAT_MESSAGE_SENT: &str = "heartsync.chat.message.sent";
    pub const CHAT_THREAD_READ: &str = "heartsync.chat.thread.read";

    // Filter events
    pub const FILTERS_UPDATED: &str = "heartsync.filters.settings.updated";
    pub const FILTERS_APPLIED: &str = "heartsync.filters.queue.applied";
    pub const FILTERS_CLEARED: &str = "heartsync.filters.queue.cleared";

    // Premium events
    pub const PREMIUM_ACTIVATED: &str = "heartsync.premium.subscription.activated";
}
