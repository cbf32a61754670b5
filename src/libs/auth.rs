//! Login gate.
//!
//! The gate only keeps casual users of a shared workstation out of the
//! data; it is not an authorization layer. Credential checking sits behind
//! [`CredentialCheck`] so a different policy can be plugged in without
//! touching the commands.

use super::config::AuthConfig;
use super::profile::UserProfile;

pub trait CredentialCheck {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// Accepts the configured account email with the profile password.
pub struct ProfileCredentials<'a> {
    auth: &'a AuthConfig,
    profile: &'a UserProfile,
}

impl<'a> ProfileCredentials<'a> {
    pub fn new(auth: &'a AuthConfig, profile: &'a UserProfile) -> Self {
        Self { auth, profile }
    }
}

impl CredentialCheck for ProfileCredentials<'_> {
    fn verify(&self, email: &str, password: &str) -> bool {
        email.trim() == self.auth.email && password == self.profile.effective_password(&self.auth.default_password)
    }
}
