pub mod projector;

pub use projector::{StoryWithAuthor, filter_users, join_story_authors, time_ago};
