//! Ephemeral view state: lives for the lifetime of the view, never
//! persisted. The renderer binds to this; the shell mutates it.

use lenta_types::forms::{LoginForm, ProfileForm, RegisterForm};
use lenta_types::models::StoryId;

/// The five mutually exclusive top-level views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Feed,
    Search,
    Stories,
    Notifications,
    Profile,
}

/// Which pane the unauthenticated view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub auth_mode: AuthMode,
    pub search_query: String,
    pub selected_story: Option<StoryId>,
    pub edit_profile: bool,
    pub login_form: LoginForm,
    pub register_form: RegisterForm,
    pub profile_form: ProfileForm,
}
