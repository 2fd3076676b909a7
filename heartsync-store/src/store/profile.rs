use heartsync_shared::errors::{AppError, AppResult, ErrorCode};

use crate::env::Environment;
use crate::events::StoreEvent;
use crate::models::{User, UserUpdate};

use super::Store;

impl<E: Environment> Store<E> {
    /// Merges `update` into the signed-in user and marks the profile dirty.
    /// Returns `false` (and changes nothing) when nobody is signed in.
    pub fn update_current_user(&mut self, update: UserUpdate) -> bool {
        let Some(user) = self.state.current_user.as_mut() else {
            tracing::debug!("profile update ignored, no current user");
            return false;
        };
        user.apply(update);
        let user_id = user.id.clone();
        self.state.has_unsaved_changes = true;

        tracing::debug!(user_id = %user_id, "profile updated");
        self.publish(StoreEvent::ProfileUpdated { user_id });
        true
    }

    /// Nothing is persisted; this only clears the dirty flag.
    pub fn save_profile(&mut self) {
        self.state.has_unsaved_changes = false;
        if let Some(user_id) = self.current_user_id().map(str::to_string) {
            tracing::info!(user_id = %user_id, "profile saved");
            self.publish(StoreEvent::ProfileSaved { user_id });
        }
    }

    /// The presentation layer reads this flag to intercept navigation away
    /// from the editor; the store never blocks navigation itself.
    pub fn set_unsaved_changes(&mut self, value: bool) {
        self.state.has_unsaved_changes = value;
    }

    /// Replaces the photo at `index`, or appends when `index` is one past
    /// the end.
    pub fn set_photo(&mut self, index: usize, url: impl Into<String>) -> AppResult<()> {
        let mut photos = self.require_user()?.photos.clone();
        match index.cmp(&photos.len()) {
            std::cmp::Ordering::Less => photos[index] = url.into(),
            std::cmp::Ordering::Equal => photos.push(url.into()),
            std::cmp::Ordering::Greater => return Err(photo_out_of_range(index, photos.len())),
        }
        self.update_photos(photos);
        Ok(())
    }

    /// The main photo (index 0) cannot be deleted.
    pub fn delete_photo(&mut self, index: usize) -> AppResult<()> {
        let mut photos = self.require_user()?.photos.clone();
        if index == 0 {
            return Err(AppError::new(ErrorCode::CannotDeleteMainPhoto, "cannot delete main photo"));
        }
        if index >= photos.len() {
            return Err(photo_out_of_range(index, photos.len()));
        }
        photos.remove(index);
        self.update_photos(photos);
        Ok(())
    }

    pub fn add_interest(&mut self, interest: &str) -> AppResult<()> {
        let interest = interest.trim();
        if interest.is_empty() {
            return Err(AppError::Validation("interest must not be empty".into()));
        }
        let mut interests = self.require_user()?.interests.clone();
        if interests.iter().any(|i| i.eq_ignore_ascii_case(interest)) {
            return Err(AppError::new(
                ErrorCode::InterestAlreadyExists,
                format!("{interest} is already listed"),
            ));
        }
        interests.push(interest.to_string());
        self.update_current_user(UserUpdate {
            interests: Some(interests),
            ..Default::default()
        });
        Ok(())
    }

    /// Removing an interest that is not listed is a no-op.
    pub fn remove_interest(&mut self, interest: &str) -> AppResult<()> {
        let mut interests = self.require_user()?.interests.clone();
        let before = interests.len();
        interests.retain(|i| i != interest);
        if interests.len() != before {
            self.update_current_user(UserUpdate {
                interests: Some(interests),
                ..Default::default()
            });
        }
        Ok(())
    }

    fn require_user(&self) -> AppResult<&User> {
        self.state
            .current_user
            .as_ref()
            .ok_or_else(AppError::not_authenticated)
    }

    fn update_photos(&mut self, photos: Vec<String>) {
        self.update_current_user(UserUpdate {
            photos: Some(photos),
            ..Default::default()
        });
    }
}

fn photo_out_of_range(index: usize, len: usize) -> AppError {
    AppError::with_details(
        ErrorCode::PhotoIndexOutOfRange,
        format!("no photo slot {index}"),
        serde_json::json!({ "index": index, "photos": len }),
    )
}
