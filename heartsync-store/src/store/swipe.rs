use heartsync_shared::middleware::{record_match, record_swipe};

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::matching::gesture::{CardRelease, SwipeDirection, SwipeGesture};
use crate::models::{Match, User};

use super::Store;

/// Result of releasing the top card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeOutcome {
    pub release: CardRelease,
    /// The user on the card, if the deck was not empty.
    pub user_id: Option<String>,
    /// Set when a right swipe formed a match.
    pub match_id: Option<String>,
}

impl<E: Environment> Store<E> {
    /// Head of the deck. Calling it repeatedly without a mutation in between
    /// returns the same user.
    pub fn get_next_user(&self) -> Option<&User> {
        self.state.queue.head()
    }

    /// Drops `user_id` from the deck. Unknown ids are ignored.
    pub fn swipe_left(&mut self, user_id: &str) {
        if !self.remove_candidate(user_id) {
            return;
        }
        record_swipe(SwipeDirection::Left.as_str());
        self.publish(StoreEvent::Swiped {
            user_id: user_id.to_string(),
            direction: SwipeDirection::Left,
        });
    }

    /// Likes `user_id`: draws once to decide whether a match forms, creates
    /// it if so, then drops the user from the deck.
    ///
    /// Returns the new match id. Unknown ids are ignored and draw nothing.
    pub fn swipe_right(&mut self, user_id: &str) -> Option<String> {
        let Some(user) = self.state.queue.find(user_id).cloned() else {
            tracing::debug!(user_id = %user_id, "right swipe on user not in deck ignored");
            return None;
        };

        let roll = self.env.random_f64();
        let is_match = roll < self.config.match_probability;
        tracing::debug!(user_id = %user_id, roll, is_match, "right swipe");

        let match_id = is_match.then(|| self.add_match(user));

        self.remove_candidate(user_id);
        record_swipe(SwipeDirection::Right.as_str());
        self.publish(StoreEvent::Swiped {
            user_id: user_id.to_string(),
            direction: SwipeDirection::Right,
        });
        match_id
    }

    pub fn swipe(&mut self, user_id: &str, direction: SwipeDirection) -> Option<String> {
        match direction {
            SwipeDirection::Left => {
                self.swipe_left(user_id);
                None
            }
            SwipeDirection::Right => self.swipe_right(user_id),
        }
    }

    /// Creates a match with a fresh id and an empty thread. Newest matches
    /// come first.
    pub fn add_match(&mut self, user: User) -> String {
        let match_id = self.next_id("match");
        let user_id = user.id.clone();

        self.state.matches.insert(
            0,
            Match {
                id: match_id.clone(),
                user,
                matched_at: self.env.now(),
                last_message: None,
                unread_count: 0,
            },
        );
        self.state.chats.insert(match_id.clone(), Vec::new());

        tracing::info!(match_id = %match_id, user_id = %user_id, "match created");
        record_match();
        self.publish(StoreEvent::MatchCreated {
            match_id: match_id.clone(),
            user_id,
        });
        match_id
    }

    /// Resolves a drag release of the top card into a swipe, or a snap back.
    pub fn release_card(&mut self, dx: f64) -> SwipeOutcome {
        let release = SwipeGesture::new(self.config.swipe_threshold).resolve(dx);
        let user_id = self.get_next_user().map(|u| u.id.clone());

        let match_id = match (release, user_id.as_deref()) {
            (CardRelease::Swipe(direction), Some(id)) => self.swipe(id, direction),
            _ => None,
        };

        SwipeOutcome {
            release,
            user_id,
            match_id,
        }
    }

    /// Pull-to-refresh: waits out the simulated latency, then re-applies the
    /// current filters.
    pub async fn refresh(&mut self) -> usize {
        self.env.sleep(self.config.refresh_delay()).await;
        self.apply_filters()
    }

    fn remove_candidate(&mut self, user_id: &str) -> bool {
        let removed = self.state.queue.remove(user_id);
        if !removed {
            tracing::debug!(user_id = %user_id, "swipe on user not in deck ignored");
        }
        removed
    }
}
