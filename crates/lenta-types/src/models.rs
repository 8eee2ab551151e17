use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog-assigned user id. Assignment is append-only (`catalog length
/// + 1` at registration); ids are never reused because users are never
/// deleted.
pub type UserId = i64;

pub type StoryId = i64;

/// An account known to the client. The signed-in user is one of these,
/// and the same record is what gets serialized into the session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
    pub is_verified: bool,
    pub last_seen: DateTime<Utc>,
}

/// An ephemeral text/image post. `viewers` is ordered by first view and
/// holds each viewer at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: StoryId,
    pub user_id: UserId,
    pub image_url: Option<String>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub views: Option<u32>,
    #[serde(default)]
    pub viewers: Vec<User>,
}

/// Placeholder-avatar service every account avatar is derived from.
const AVATAR_SERVICE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Deterministic avatar URI for a username. Registration and the seed
/// data both go through this, so the same username always yields the
/// same image.
pub fn avatar_url_for(seed: &str) -> String {
    format!("{AVATAR_SERVICE}?seed={seed}")
}
