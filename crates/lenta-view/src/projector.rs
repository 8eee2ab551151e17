//! Pure derivations over the catalogs: input in, value out, no side
//! effects. Recomputed on every render; the data volumes are tiny, so
//! nothing here memoizes.

use chrono::{DateTime, Utc};

use lenta_types::models::{Story, User};

/// A story joined to its author. `author` is absent when the catalog has
/// no entry for `story.user_id`; [`StoryWithAuthor::authored`] keeps
/// such stories out of author-dependent views.
#[derive(Debug, Clone, Copy)]
pub struct StoryWithAuthor<'a> {
    pub story: &'a Story,
    pub author: Option<&'a User>,
}

impl<'a> StoryWithAuthor<'a> {
    /// The (story, author) pair, when the author is known.
    pub fn authored(self) -> Option<(&'a Story, &'a User)> {
        self.author.map(|author| (self.story, author))
    }
}

/// Relative "time ago" label. Floor division at each unit threshold:
/// under a minute is "just now", under an hour counts minutes, under a
/// day counts hours, everything else counts whole days.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - timestamp;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    if minutes < 1 {
        return "just now".into();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    if hours < 24 {
        return format!("{hours} hours ago");
    }
    format!("{} days ago", hours / 24)
}

/// Case-insensitive substring match on username OR display name. The
/// empty query matches everyone; catalog order is preserved.
pub fn filter_users<'a>(query: &str, catalog: &'a [User]) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|u| {
            u.username.to_lowercase().contains(&needle)
                || u.display_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Join each story to the catalog entry its `user_id` names. Stories
/// with no matching entry keep an absent author rather than a placeholder.
pub fn join_story_authors<'a>(stories: &'a [Story], catalog: &'a [User]) -> Vec<StoryWithAuthor<'a>> {
    stories
        .iter()
        .map(|story| StoryWithAuthor {
            story,
            author: catalog.iter().find(|u| u.id == story.user_id),
        })
        .collect()
}
