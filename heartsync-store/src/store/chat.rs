use heartsync_shared::middleware::record_message_sent;

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::models::{Message, CURRENT_USER_SENDER};

use super::Store;

impl<E: Environment> Store<E> {
    /// Appends an unread message to the thread of `match_id` and points the
    /// match's `last_message` at it. Blank text is ignored.
    ///
    /// The thread is created if missing. Returns the new message id.
    pub fn send_message(&mut self, match_id: &str, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            tracing::debug!(match_id = %match_id, "blank message ignored");
            return None;
        }

        let message_id = self.next_id("msg");
        let message = Message {
            id: message_id.clone(),
            sender_id: CURRENT_USER_SENDER.to_string(),
            receiver_id: match_id.to_string(),
            text: text.to_string(),
            timestamp: self.env.now(),
            read: false,
        };

        match self.state.matches.iter_mut().find(|m| m.id == match_id) {
            Some(m) => m.last_message = Some(message.clone()),
            None => tracing::debug!(match_id = %match_id, "message sent to thread without a match"),
        }
        self.state
            .chats
            .entry(match_id.to_string())
            .or_default()
            .push(message);

        tracing::debug!(match_id = %match_id, message_id = %message_id, "message sent");
        record_message_sent();
        self.publish(StoreEvent::MessageSent {
            match_id: match_id.to_string(),
            message_id: message_id.clone(),
        });
        Some(message_id)
    }

    /// Zeroes the unread count and marks every message in the thread read.
    pub fn mark_messages_as_read(&mut self, match_id: &str) {
        if let Some(m) = self.state.matches.iter_mut().find(|m| m.id == match_id) {
            m.unread_count = 0;
            if let Some(last) = m.last_message.as_mut() {
                last.read = true;
            }
        }
        for message in self.state.chats.entry(match_id.to_string()).or_default() {
            message.read = true;
        }

        self.publish(StoreEvent::ThreadRead {
            match_id: match_id.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::store::test_support::store;
    use heartsync_shared::types::auth::AuthCredentials;
    use heartsync_shared::types::pagination::PaginationParams;

    async fn signed_in() -> crate::store::Store<crate::env::SimEnv> {
        let mut store = store();
        assert!(store.login(&AuthCredentials::new("alex@example.com", "secret")).await);
        store
    }

    #[tokio::test]
    async fn blank_text_is_ignored() {
        let mut store = signed_in().await;
        let before = store.match_by_id("match-1").cloned();

        assert!(store.send_message("match-1", "").is_none());
        assert!(store.send_message("match-1", "   \n").is_none());

        assert_eq!(store.thread("match-1").len(), 3);
        assert_eq!(store.match_by_id("match-1").cloned(), before);
    }

    #[tokio::test]
    async fn send_appends_one_unread_message() {
        let mut store = signed_in().await;
        let id = store.send_message("match-1", "hi").unwrap();

        let thread = store.thread("match-1");
        assert_eq!(thread.len(), 4);
        let last = thread.last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.text, "hi");
        assert_eq!(last.sender_id, "current-user");
        assert_eq!(last.receiver_id, "match-1");
        assert!(!last.read);
        assert_eq!(store.match_by_id("match-1").unwrap().last_message.as_ref(), Some(last));
    }

    #[tokio::test]
    async fn send_creates_missing_thread() {
        let mut store = signed_in().await;
        store.send_message("match-404", "anyone?").unwrap();
        assert_eq!(store.thread("match-404").len(), 1);
        assert!(store.match_by_id("match-404").is_none());
    }

    #[test]
    fn signed_out_sender_is_current_user() {
        let mut store = store();
        store.send_message("match-1", "hello").unwrap();
        assert_eq!(store.thread("match-1")[0].sender_id, "current-user");
    }

    #[tokio::test]
    async fn registered_account_sends_as_current_user() {
        let mut store = store();
        let creds = AuthCredentials::new("bee@example.com", "secret").with_name("Bee");
        assert!(store.register(&creds).await);
        assert_ne!(store.current_user().unwrap().id, "current-user");

        let user = store.all_users()[0].clone();
        let match_id = store.add_match(user);
        store.send_message(&match_id, "hey").unwrap();
        assert_eq!(store.thread(&match_id)[0].sender_id, "current-user");
    }

    #[tokio::test]
    async fn mark_read_is_idempotent() {
        let mut store = signed_in().await;
        assert!(store.total_unread() > 0);

        store.mark_messages_as_read("match-2");
        let once = store.snapshot();
        store.mark_messages_as_read("match-2");
        let twice = store.snapshot();

        assert_eq!(once.matches, twice.matches);
        assert_eq!(once.chats, twice.chats);
        let m = store.match_by_id("match-2").unwrap();
        assert_eq!(m.unread_count, 0);
        assert!(store.thread("match-2").iter().all(|msg| msg.read));
        assert_eq!(m.last_message.as_ref(), store.thread("match-2").last());
    }

    #[tokio::test]
    async fn thread_page_is_newest_first() {
        let mut store = signed_in().await;
        let page = store.thread_page("match-1", &PaginationParams::new(1, 2));
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items[0].id, "msg-3");

        let page = store.thread_page("match-1", &PaginationParams::new(2, 2));
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, "msg-1");

        store.mark_messages_as_read("match-1");
        assert_eq!(store.thread_page("match-1", &PaginationParams::default()).items.len(), 3);
    }
}
