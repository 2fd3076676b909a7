use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use heartsync_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{Match, Message, User};

const EMBEDDED_SEED: &str = include_str!("../fixtures/seed.json");

/// Static data a fresh session starts from.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seed {
    pub current_user: User,
    pub users: Vec<User>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub messages: HashMap<String, Vec<Message>>,
}

impl Seed {
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_path(path: &Path) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read fixtures from {}", path.display()))?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        let mut seed: Seed = serde_json::from_str(raw)?;
        seed.validate()?;
        seed.ensure_threads();
        Ok(seed)
    }

    /// Every user that can be swiped on or matched with needs a main photo.
    fn validate(&self) -> AppResult<()> {
        let swipeable = self.users.iter();
        let matched = self.matches.iter().map(|m| &m.user);
        if let Some(user) = swipeable.chain(matched).find(|u| u.photos.is_empty()) {
            return Err(AppError::with_details(
                ErrorCode::InvalidFixture,
                format!("user {} has no photos", user.id),
                serde_json::json!({ "user_id": user.id }),
            ));
        }
        Ok(())
    }

    fn ensure_threads(&mut self) {
        for m in &self.matches {
            self.messages.entry(m.id.clone()).or_default();
        }
    }
}
