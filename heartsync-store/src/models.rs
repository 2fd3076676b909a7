use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender id stamped on every outgoing message. Threads tell the two sides
/// apart by this value, not by the account id.
pub const CURRENT_USER_SENDER: &str = "current-user";

// --- User ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub occupation: String,
    pub location: String,
    /// Kilometers from the viewer.
    pub distance: f64,
    /// The first entry is the main photo.
    pub photos: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub details: UserDetails,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    pub fn main_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }

    pub fn gender(&self) -> Option<&str> {
        self.details.gender.as_deref()
    }

    pub fn speaks_any(&self, languages: &[String]) -> bool {
        languages.iter().any(|lang| self.languages.contains(lang))
    }

    /// Merges every `Some` field of `update` into this record.
    pub fn apply(&mut self, update: UserUpdate) {
        let UserUpdate {
            name,
            age,
            bio,
            occupation,
            location,
            distance,
            photos,
            interests,
            languages,
            details,
            verified,
            pronouns,
            is_online,
            email,
        } = update;

        if let Some(v) = name { self.name = v; }
        if let Some(v) = age { self.age = v; }
        if let Some(v) = bio { self.bio = v; }
        if let Some(v) = occupation { self.occupation = v; }
        if let Some(v) = location { self.location = v; }
        if let Some(v) = distance { self.distance = v; }
        if let Some(v) = photos { self.photos = v; }
        if let Some(v) = interests { self.interests = v; }
        if let Some(v) = languages { self.languages = v; }
        if let Some(v) = details { self.details = v; }
        if let Some(v) = verified { self.verified = Some(v); }
        if let Some(v) = pronouns { self.pronouns = Some(v); }
        if let Some(v) = is_online { self.is_online = Some(v); }
        if let Some(v) = email { self.email = Some(v); }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    pub height: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub pets: Option<String>,
    pub children: Option<String>,
    pub zodiac: Option<String>,
    pub religion: Option<String>,
    pub education: Option<String>,
    pub gender: Option<String>,
}

/// Partial user record; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub bio: Option<String>,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub distance: Option<f64>,
    pub photos: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub details: Option<UserDetails>,
    pub verified: Option<bool>,
    pub pronouns: Option<String>,
    pub is_online: Option<bool>,
    pub email: Option<String>,
}

// --- FilterSettings ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSettings {
    pub gender: Vec<String>,
    /// Inclusive on both ends.
    pub age_range: (u32, u32),
    pub distance: f64,
    pub show_nearby_when_empty: bool,
    /// Empty means no language restriction.
    pub languages: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            gender: vec!["Female".to_string()],
            age_range: (18, 80),
            distance: 50.0,
            show_nearby_when_empty: true,
            languages: Vec::new(),
        }
    }
}

impl FilterSettings {
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(v) = update.gender { self.gender = v; }
        if let Some(v) = update.age_range { self.age_range = v; }
        if let Some(v) = update.distance { self.distance = v; }
        if let Some(v) = update.show_nearby_when_empty { self.show_nearby_when_empty = v; }
        if let Some(v) = update.languages { self.languages = v; }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    pub gender: Option<Vec<String>>,
    pub age_range: Option<(u32, u32)>,
    pub distance: Option<f64>,
    pub show_nearby_when_empty: Option<bool>,
    pub languages: Option<Vec<String>>,
}

// --- Match ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub user: User,
    pub matched_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
    #[serde(default)]
    pub unread_count: u32,
}

// --- Message ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    /// The match id; threads are keyed by match, not by recipient.
    pub receiver_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

// --- Premium ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumSubscription {
    pub plan_id: String,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: "Emma".to_string(),
            age: 26,
            bio: String::new(),
            occupation: "Designer".to_string(),
            location: "Brooklyn".to_string(),
            distance: 3.0,
            photos: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            interests: vec![],
            languages: vec!["English".to_string()],
            details: UserDetails::default(),
            verified: None,
            pronouns: None,
            is_online: None,
            email: None,
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut u = user("1");
        u.apply(UserUpdate {
            bio: Some("Coffee first".into()),
            pronouns: Some("she/her".into()),
            ..Default::default()
        });

        assert_eq!(u.bio, "Coffee first");
        assert_eq!(u.pronouns.as_deref(), Some("she/her"));
        assert_eq!(u.name, "Emma");
        assert_eq!(u.main_photo(), Some("a.jpg"));
    }

    #[test]
    fn filter_defaults() {
        let f = FilterSettings::default();
        assert_eq!(f.gender, vec!["Female".to_string()]);
        assert_eq!(f.age_range, (18, 80));
        assert_eq!(f.distance, 50.0);
        assert!(f.show_nearby_when_empty);
        assert!(f.languages.is_empty());
    }

    #[test]
    fn filter_update_is_a_pure_merge() {
        let mut f = FilterSettings::default();
        // inverted range is accepted; validation belongs to the caller
        f.apply(FilterUpdate {
            age_range: Some((40, 30)),
            gender: Some(vec![]),
            ..Default::default()
        });
        assert_eq!(f.age_range, (40, 30));
        assert!(f.gender.is_empty());
        assert_eq!(f.distance, 50.0);
    }

    #[test]
    fn user_deserializes_camel_case_with_missing_optionals() {
        let json = r#"{
            "id": "7", "name": "Maya", "age": 24, "bio": "", "occupation": "Chef",
            "location": "Queens", "distance": 5, "photos": ["m.jpg"],
            "isOnline": true, "details": {"gender": "Female"}
        }"#;
        let u: User = serde_json::from_str(json).unwrap();
        assert_eq!(u.is_online, Some(true));
        assert_eq!(u.gender(), Some("Female"));
        assert!(u.languages.is_empty());
    }
}
