//! Form buffers the renderer binds its inputs to. These live only for
//! the lifetime of the view and are never persisted.

use crate::models::User;

// -- Auth --

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub username: String,
    pub display_name: String,
}

// -- Profile editing --

/// Buffer behind the edit-profile dialog: the four editable fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub display_name: String,
    pub username: String,
    pub bio: String,
    pub avatar_url: String,
}

impl ProfileForm {
    /// Seed the buffer from a user's current editable fields.
    pub fn from_user(user: &User) -> Self {
        Self {
            display_name: user.display_name.clone(),
            username: user.username.clone(),
            bio: user.bio.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }

    /// The patch a save produces. The dialog always submits the whole
    /// buffer, so every field is present.
    pub fn to_patch(&self) -> ProfilePatch {
        ProfilePatch {
            display_name: Some(self.display_name.clone()),
            username: Some(self.username.clone()),
            bio: Some(self.bio.clone()),
            avatar_url: Some(self.avatar_url.clone()),
        }
    }
}

/// Partial overwrite of the editable profile fields. `None` leaves the
/// current value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub display_name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}
