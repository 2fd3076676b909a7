use heartsync_shared::middleware::record_auth_attempt;
use heartsync_shared::types::auth::AuthCredentials;

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::matching::queue::SwipeQueue;

use super::Store;

impl<E: Environment> Store<E> {
    /// Signs in with the fixture profile. Returns `false`, leaving state
    /// untouched, when the credentials fail validation.
    pub async fn login(&mut self, credentials: &AuthCredentials) -> bool {
        self.env.sleep(self.config.login_delay()).await;

        if let Err(e) = credentials.validate_login() {
            tracing::warn!(code = %e.code(), error = %e, "login rejected");
            record_auth_attempt("login", false);
            return false;
        }

        let mut user = self.seed.current_user.clone();
        user.email = Some(credentials.email.clone());
        let user_id = user.id.clone();

        self.state.is_authenticated = true;
        self.state.current_user = Some(user);
        self.state.matches = self.seed.matches.clone();
        self.state.chats = self.seed.messages.clone();
        self.state.premium = None;

        tracing::info!(
            user_id = %user_id,
            matches = self.state.matches.len(),
            "user logged in"
        );
        record_auth_attempt("login", true);
        self.publish(StoreEvent::LoggedIn { user_id });
        true
    }

    /// Creates a fresh account with no matches. The new id is the current
    /// time in milliseconds.
    pub async fn register(&mut self, credentials: &AuthCredentials) -> bool {
        self.env.sleep(self.config.register_delay()).await;

        let name = match credentials.validate_registration() {
            Ok(name) => name.to_string(),
            Err(e) => {
                tracing::warn!(code = %e.code(), error = %e, "registration rejected");
                record_auth_attempt("register", false);
                return false;
            }
        };

        let mut user = self.seed.current_user.clone();
        user.id = self.env.now().timestamp_millis().to_string();
        user.name = name.clone();
        user.email = Some(credentials.email.clone());
        let user_id = user.id.clone();

        self.state.is_authenticated = true;
        self.state.current_user = Some(user);
        self.state.matches.clear();
        self.state.chats.clear();
        self.state.premium = None;

        tracing::info!(user_id = %user_id, "user registered");
        record_auth_attempt("register", true);
        self.publish(StoreEvent::Registered { user_id, name });
        true
    }

    pub fn logout(&mut self) {
        let user_id = self.end_session();
        tracing::info!(user_id = ?user_id, "user logged out");
        self.publish(StoreEvent::LoggedOut);
    }

    /// There is no account backend; deleting resets the session like
    /// `logout` but reports only `AccountDeleted`.
    pub fn delete_account(&mut self) {
        let user_id = self.end_session();
        tracing::info!(user_id = ?user_id, "account deleted");
        self.publish(StoreEvent::AccountDeleted);
    }

    /// Drops everything tied to the signed-in account and restores the full
    /// deck. Returns the id that was signed in.
    fn end_session(&mut self) -> Option<String> {
        let user_id = self.state.current_user.take().map(|u| u.id);

        self.state.is_authenticated = false;
        self.state.matches.clear();
        self.state.chats.clear();
        self.state.has_unsaved_changes = false;
        self.state.premium = None;
        self.state.queue = SwipeQueue::new(self.seed.users.clone());
        user_id
    }
}
