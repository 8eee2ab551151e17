//! In-memory catalogs of known users and stories, insertion-ordered.

use chrono::{DateTime, Utc};

use lenta_types::models::{Story, StoryId, User, UserId};

// -- Users --

#[derive(Debug, Default)]
pub struct UserCatalog {
    users: Vec<User>,
}

impl UserCatalog {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn first(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// Next id under append-only assignment.
    pub fn next_id(&self) -> UserId {
        self.users.len() as UserId + 1
    }

    pub fn push(&mut self, user: User) {
        self.users.push(user);
    }

    /// Replace the entry carrying this user's id, or append when the id
    /// is unknown. Session restore uses this to bring a previously
    /// registered user back into a freshly seeded catalog.
    pub fn upsert(&mut self, user: User) {
        match self.find_mut(user.id) {
            Some(slot) => *slot = user,
            None => self.users.push(user),
        }
    }
}

// -- Stories --

#[derive(Debug, Default)]
pub struct StoryCatalog {
    stories: Vec<Story>,
}

impl StoryCatalog {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn find(&self, id: StoryId) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn by_author(&self, user_id: UserId) -> impl Iterator<Item = &Story> {
        self.stories.iter().filter(move |s| s.user_id == user_id)
    }

    pub fn next_id(&self) -> StoryId {
        self.stories.len() as StoryId + 1
    }

    /// Append a freshly composed story: no views, no viewers.
    pub fn create(
        &mut self,
        user_id: UserId,
        text: String,
        image_url: Option<String>,
        now: DateTime<Utc>,
    ) -> Story {
        let story = Story {
            id: self.next_id(),
            user_id,
            image_url,
            text,
            created_at: now,
            views: Some(0),
            viewers: Vec::new(),
        };
        self.stories.push(story.clone());
        story
    }

    /// Record that `viewer` opened a story. Each viewer is counted once
    /// per story; repeat views leave the counter and viewer list alone.
    /// Returns whether the view was counted.
    pub fn record_view(&mut self, story_id: StoryId, viewer: &User) -> bool {
        let Some(story) = self.stories.iter_mut().find(|s| s.id == story_id) else {
            return false;
        };
        if story.viewers.iter().any(|v| v.id == viewer.id) {
            return false;
        }
        story.viewers.push(viewer.clone());
        story.views = Some(story.views.unwrap_or(0) + 1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lenta_types::models::avatar_url_for;

    fn user(id: UserId, username: &str) -> User {
        User {
            id,
            email: format!("{username}@example.ru"),
            username: username.into(),
            display_name: username.into(),
            bio: String::new(),
            avatar_url: avatar_url_for(username),
            is_verified: false,
            last_seen: Utc::now(),
        }
    }

    #[test]
    fn ids_are_append_only() {
        let mut catalog = UserCatalog::default();
        assert_eq!(catalog.next_id(), 1);
        catalog.push(user(1, "anna"));
        catalog.push(user(2, "dmitry"));
        assert_eq!(catalog.next_id(), 3);
    }

    #[test]
    fn upsert_replaces_by_id_or_appends() {
        let mut catalog = UserCatalog::new(vec![user(1, "anna")]);
        let mut renamed = user(1, "anna");
        renamed.display_name = "Анна".into();
        catalog.upsert(renamed);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(1).unwrap().display_name, "Анна");

        catalog.upsert(user(5, "maria"));
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find(5).is_some());
    }

    #[test]
    fn created_story_gets_next_id_and_no_views() {
        let mut stories = StoryCatalog::default();
        let story = stories.create(2, "Новая история".into(), None, Utc::now());
        assert_eq!(story.id, 1);
        assert_eq!(story.views, Some(0));
        assert!(story.viewers.is_empty());
        assert_eq!(stories.stories().len(), 1);
    }

    #[test]
    fn a_viewer_is_counted_once() {
        let mut stories = StoryCatalog::default();
        let id = stories.create(1, "text".into(), None, Utc::now()).id;
        let anna = user(2, "anna");

        assert!(stories.record_view(id, &anna));
        assert!(!stories.record_view(id, &anna));

        let story = stories.find(id).unwrap();
        assert_eq!(story.views, Some(1));
        assert_eq!(story.viewers.len(), 1);
    }

    #[test]
    fn viewing_an_unknown_story_is_a_no_op() {
        let mut stories = StoryCatalog::default();
        assert!(!stories.record_view(99, &user(1, "anna")));
    }
}
