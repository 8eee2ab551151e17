//! The application shell: owns the session store and the view state and
//! exposes the synchronous handlers a renderer dispatches. All state
//! transitions happen here, one discrete interaction at a time; the
//! renderer only reads.

use lenta_store::{SessionStore, Snapshot, StoreError};
use lenta_types::forms::{LoginForm, ProfileForm, RegisterForm};
use lenta_types::models::{Story, StoryId, User};
use lenta_view::{StoryWithAuthor, filter_users, join_story_authors};

use crate::config::Config;
use crate::state::{AuthMode, Tab, ViewState};

pub struct App {
    store: SessionStore,
    view: ViewState,
}

impl App {
    /// Boot the shell over freshly seeded catalogs and pick up any
    /// persisted session. A restored session pre-fills the profile form
    /// with the restored user's editable fields.
    pub fn bootstrap(config: &Config) -> Self {
        let mut store = SessionStore::seeded(Snapshot::new(&config.session_file));
        let mut view = ViewState::default();
        if let Some(user) = store.restore_session() {
            view.profile_form = ProfileForm::from_user(&user);
        }
        Self { store, view }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn current_user(&self) -> Option<&User> {
        self.store.current_user()
    }

    pub fn is_signed_in(&self) -> bool {
        self.store.is_signed_in()
    }

    // -- Unauthenticated view --

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.view.auth_mode = mode;
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.view.login_form
    }

    pub fn register_form_mut(&mut self) -> &mut RegisterForm {
        &mut self.view.register_form
    }

    /// Submit the login form. The store's credential stub decides who
    /// signs in; the shell seeds the profile form from the result.
    pub fn submit_login(&mut self) -> Result<User, StoreError> {
        let form = self.view.login_form.clone();
        let user = self.store.login(&form)?;
        self.view.profile_form = ProfileForm::from_user(&user);
        Ok(user)
    }

    pub fn submit_register(&mut self) -> Result<User, StoreError> {
        let form = self.view.register_form.clone();
        let user = self.store.register(&form)?;
        self.view.profile_form = ProfileForm::from_user(&user);
        Ok(user)
    }

    // -- Navigation & search --

    pub fn select_tab(&mut self, tab: Tab) {
        self.view.active_tab = tab;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.view.search_query = query.into();
    }

    // -- Stories --

    /// Open a story in the viewer dialog, counting the view for the
    /// signed-in user (once per story).
    pub fn open_story(&mut self, id: StoryId) -> Result<(), StoreError> {
        self.store.view_story(id)?;
        self.view.selected_story = Some(id);
        Ok(())
    }

    pub fn close_story(&mut self) {
        self.view.selected_story = None;
    }

    pub fn publish_story(
        &mut self,
        text: String,
        image_url: Option<String>,
    ) -> Result<Story, StoreError> {
        self.store.publish_story(text, image_url)
    }

    // -- Profile --

    pub fn set_edit_profile(&mut self, editing: bool) {
        self.view.edit_profile = editing;
    }

    pub fn profile_form_mut(&mut self) -> &mut ProfileForm {
        &mut self.view.profile_form
    }

    /// Save the edit-profile dialog: apply the buffer as a patch, reseed
    /// the buffer from the stored result, close the dialog.
    pub fn save_profile(&mut self) -> Result<User, StoreError> {
        let patch = self.view.profile_form.to_patch();
        let user = self.store.update_profile(&patch)?;
        self.view.profile_form = ProfileForm::from_user(&user);
        self.view.edit_profile = false;
        Ok(user)
    }

    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.store.logout()
    }

    // -- Derived views --

    /// The feed and the story rail: stories joined to their authors,
    /// author-less stories excluded.
    pub fn feed(&self) -> Vec<(&Story, &User)> {
        join_story_authors(self.store.stories(), self.store.users())
            .into_iter()
            .filter_map(StoryWithAuthor::authored)
            .collect()
    }

    /// Accounts matching the current search query, catalog order.
    pub fn search_results(&self) -> Vec<&User> {
        filter_users(&self.view.search_query, self.store.users())
    }

    /// The story open in the viewer dialog, joined to its author.
    pub fn selected_story(&self) -> Option<(&Story, &User)> {
        let story = self.view.selected_story.and_then(|id| self.store.story(id))?;
        let author = self.store.users().iter().find(|u| u.id == story.user_id)?;
        Some((story, author))
    }

    /// Stories authored by the signed-in user, for the profile view.
    pub fn my_stories(&self) -> Vec<&Story> {
        match self.store.current_user() {
            Some(user) => self.store.stories_by(user.id).collect(),
            None => Vec::new(),
        }
    }
}
