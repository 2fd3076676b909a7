use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult, ErrorCode};

/// Minimum password length, in UTF-16 code units as the app's text fields
/// report it.
pub const MIN_PASSWORD_LEN: usize = 6;

fn validate_password_len(password: &str) -> Result<(), ValidationError> {
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new("password_too_short"));
    }
    Ok(())
}

/// Credentials entered on the login and register screens.
///
/// Validation is deliberately shallow: the email only has to be present and
/// the password long enough. There is no account lookup behind it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AuthCredentials {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(custom = "validate_password_len")]
    pub password: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
}

impl AuthCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Checks the rules shared by login and registration.
    pub fn validate_login(&self) -> AppResult<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        if fields.contains_key("email") {
            Err(AppError::new(ErrorCode::InvalidCredentials, "email is required"))
        } else if fields.contains_key("password") {
            Err(AppError::new(
                ErrorCode::PasswordTooWeak,
                format!("password must be at least {MIN_PASSWORD_LEN} characters"),
            ))
        } else {
            // only the name can be left; login does not care about it
            Ok(())
        }
    }

    /// Login rules plus a non-empty display name.
    pub fn validate_registration(&self) -> AppResult<&str> {
        self.validate_login()?;
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(AppError::new(ErrorCode::NameRequired, "name is required")),
        }
    }
}
