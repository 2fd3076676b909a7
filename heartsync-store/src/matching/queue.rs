use serde::Serialize;

use crate::models::{FilterSettings, User};

use super::filters::filter_users;

/// The working candidate deck plus the master list it is rebuilt from.
///
/// Swiping only ever removes from `candidates`; `master` is never touched, so
/// re-filtering brings back anyone who passes, swiped or not.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeQueue {
    master: Vec<User>,
    candidates: Vec<User>,
}

impl SwipeQueue {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            candidates: users.clone(),
            master: users,
        }
    }

    pub fn head(&self) -> Option<&User> {
        self.candidates.first()
    }

    pub fn find(&self, user_id: &str) -> Option<&User> {
        self.candidates.iter().find(|u| u.id == user_id)
    }

    pub fn find_in_master(&self, user_id: &str) -> Option<&User> {
        self.master.iter().find(|u| u.id == user_id)
    }

    /// Returns whether anything was removed.
    pub fn remove(&mut self, user_id: &str) -> bool {
        let before = self.candidates.len();
        self.candidates.retain(|u| u.id != user_id);
        self.candidates.len() != before
    }

    /// Rebuilds the deck from the master list.
    pub fn apply(&mut self, filters: &FilterSettings) -> usize {
        self.candidates = filter_users(&self.master, filters);
        self.candidates.len()
    }

    pub fn reset(&mut self) {
        self.candidates = self.master.clone();
    }

    pub fn candidates(&self) -> &[User] {
        &self.candidates
    }

    pub fn master(&self) -> &[User] {
        &self.master
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Seed;

    fn queue() -> SwipeQueue {
        SwipeQueue::new(Seed::embedded().unwrap().users)
    }

    #[test]
    fn head_is_stable() {
        let q = queue();
        let first = q.head().map(|u| u.id.clone());
        assert_eq!(q.head().map(|u| u.id.clone()), first);
        assert_eq!(first.as_deref(), Some("1"));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut q = queue();
        assert!(q.remove("1"));
        assert!(!q.remove("1"));
        assert!(q.find("1").is_none());
        assert_eq!(q.len(), 9);
        assert_eq!(q.master().len(), 10);
    }

    #[test]
    fn apply_resurfaces_swiped_users() {
        let mut q = queue();
        q.remove("8");
        let open = FilterSettings {
            gender: vec![],
            ..FilterSettings::default()
        };
        q.apply(&open);
        assert!(q.find("8").is_some());
    }

    #[test]
    fn reset_restores_master() {
        let mut q = queue();
        q.remove("1");
        q.remove("2");
        q.reset();
        assert_eq!(q.candidates(), q.master());
    }
}
