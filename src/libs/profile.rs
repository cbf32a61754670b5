use super::error::ValidationError;
use base64::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PROFILE_NAME: &str = "Usuário LogiCheck";
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub email: String,
    /// `None` until the user sets a password; the configured default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: DEFAULT_PROFILE_NAME.to_string(),
            photo: None,
            email: String::new(),
            password: None,
        }
    }
}

impl UserProfile {
    /// The password currently accepted for this profile.
    pub fn effective_password<'a>(&'a self, default_password: &'a str) -> &'a str {
        self.password.as_deref().filter(|p| !p.is_empty()).unwrap_or(default_password)
    }

    /// Applies a password change after checking the usual form rules.
    pub fn change_password(&mut self, default_password: &str, current: &str, new: &str, confirm: &str) -> Result<(), ValidationError> {
        if current != self.effective_password(default_password) {
            return Err(ValidationError::WrongCurrentPassword);
        }
        if new.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if new != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        self.password = Some(new.to_string());
        Ok(())
    }
}

/// Encodes an image as a `data:` URL suitable for the profile photo.
pub fn photo_data_url(path: &Path, bytes: &[u8]) -> String {
    let mime = match path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    };
    format!("data:{};base64,{}", mime, BASE64_STANDARD.encode(bytes))
}
