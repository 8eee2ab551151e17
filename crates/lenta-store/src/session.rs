//! The session store: exclusive owner of the catalogs and the current
//! session. Every session mutation is mirrored into the persisted
//! snapshot before the in-memory state moves, so a write failure leaves
//! the store unchanged.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use lenta_types::forms::{LoginForm, ProfilePatch, RegisterForm};
use lenta_types::models::{Story, StoryId, User, UserId, avatar_url_for};

use crate::catalog::{StoryCatalog, UserCatalog};
use crate::seed;
use crate::snapshot::{Snapshot, SnapshotError};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a signed-in user.
    #[error("no active session")]
    NoSession,
    /// The login stub signs in as the first catalog entry; an empty
    /// catalog has none.
    #[error("user catalog is empty")]
    EmptyCatalog,
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

pub struct SessionStore {
    users: UserCatalog,
    stories: StoryCatalog,
    current: Option<UserId>,
    snapshot: Snapshot,
}

impl SessionStore {
    pub fn new(users: UserCatalog, stories: StoryCatalog, snapshot: Snapshot) -> Self {
        Self {
            users,
            stories,
            current: None,
            snapshot,
        }
    }

    /// Store over freshly seeded catalogs, relative timestamps anchored
    /// at the current instant.
    pub fn seeded(snapshot: Snapshot) -> Self {
        let now = Utc::now();
        Self::new(
            UserCatalog::new(seed::seed_users(now)),
            StoryCatalog::new(seed::seed_stories(now)),
            snapshot,
        )
    }

    pub fn users(&self) -> &[User] {
        self.users.users()
    }

    pub fn stories(&self) -> &[Story] {
        self.stories.stories()
    }

    pub fn story(&self, id: StoryId) -> Option<&Story> {
        self.stories.find(id)
    }

    pub fn stories_by(&self, user_id: UserId) -> impl Iterator<Item = &Story> {
        self.stories.by_author(user_id)
    }

    /// The signed-in user, looked up in the catalog. A set session always
    /// resolves: every way of setting it puts the user in the catalog.
    pub fn current_user(&self) -> Option<&User> {
        self.current.and_then(|id| self.users.find(id))
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    // -- Session operations --

    /// Credential stub: any input signs in as the first seeded account.
    /// The signed-in user's `last_seen` is touched, catalog entry and
    /// session in lockstep.
    pub fn login(&mut self, _form: &LoginForm) -> Result<User, StoreError> {
        let mut user = self.users.first().cloned().ok_or(StoreError::EmptyCatalog)?;
        user.last_seen = Utc::now();
        self.snapshot.save(&user)?;
        self.users.upsert(user.clone());
        self.current = Some(user.id);
        info!(user = %user.username, "signed in");
        Ok(user)
    }

    /// Create an account from the register form and sign it in. The
    /// password is accepted and dropped: there is no credential store.
    pub fn register(&mut self, form: &RegisterForm) -> Result<User, StoreError> {
        let user = User {
            id: self.users.next_id(),
            email: form.email.clone(),
            username: form.username.clone(),
            display_name: form.display_name.clone(),
            bio: String::new(),
            avatar_url: avatar_url_for(&form.username),
            is_verified: false,
            last_seen: Utc::now(),
        };
        self.snapshot.save(&user)?;
        self.users.push(user.clone());
        self.current = Some(user.id);
        info!(user = %user.username, id = user.id, "registered");
        Ok(user)
    }

    /// Merge the patch onto the session user and its catalog entry.
    /// Input is trusted: no uniqueness or format checks happen here.
    pub fn update_profile(&mut self, patch: &ProfilePatch) -> Result<User, StoreError> {
        let id = self.current.ok_or(StoreError::NoSession)?;
        let mut user = self.users.find(id).cloned().ok_or(StoreError::NoSession)?;
        if let Some(display_name) = &patch.display_name {
            user.display_name = display_name.clone();
        }
        if let Some(username) = &patch.username {
            user.username = username.clone();
        }
        if let Some(bio) = &patch.bio {
            user.bio = bio.clone();
        }
        if let Some(avatar_url) = &patch.avatar_url {
            user.avatar_url = avatar_url.clone();
        }
        self.snapshot.save(&user)?;
        self.users.upsert(user.clone());
        info!(user = %user.username, "profile updated");
        Ok(user)
    }

    /// Clear the session and drop the persisted snapshot.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.snapshot.clear()?;
        self.current = None;
        info!("signed out");
        Ok(())
    }

    /// Pick up the persisted session, if any. The restored user is
    /// upserted into the catalog by id so the session keeps referring to
    /// a catalog entry. A record that fails to parse is removed and
    /// treated as "no session"; the failure never surfaces past here.
    pub fn restore_session(&mut self) -> Option<User> {
        match self.snapshot.load() {
            Ok(Some(user)) => {
                self.users.upsert(user.clone());
                self.current = Some(user.id);
                info!(user = %user.username, "session restored");
                Some(user)
            }
            Ok(None) => None,
            Err(err) => {
                warn!(%err, "discarding unreadable session snapshot");
                if let Err(err) = self.snapshot.clear() {
                    warn!(%err, "could not remove unreadable snapshot");
                }
                None
            }
        }
    }

    // -- Story operations --

    /// Publish a story authored by the signed-in user.
    pub fn publish_story(
        &mut self,
        text: String,
        image_url: Option<String>,
    ) -> Result<Story, StoreError> {
        let author = self.current.ok_or(StoreError::NoSession)?;
        let story = self.stories.create(author, text, image_url, Utc::now());
        info!(story = story.id, "story published");
        Ok(story)
    }

    /// Count a story view by the signed-in user. Repeat views of the
    /// same story are ignored. Returns whether the view was counted.
    pub fn view_story(&mut self, story_id: StoryId) -> Result<bool, StoreError> {
        let viewer = self.current_user().cloned().ok_or(StoreError::NoSession)?;
        Ok(self.stories.record_view(story_id, &viewer))
    }
}
