use serde::{Deserialize, Serialize};

/// Application error codes following the pattern E{domain}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Auth errors
/// - E2xxx: Profile errors
/// - E3xxx: Matching errors
/// - E4xxx: Premium errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    ValidationError,

    // Auth (E1xxx)
    InvalidCredentials,
    PasswordTooWeak,
    NameRequired,
    NotAuthenticated,

    // Profile (E2xxx)
    CannotDeleteMainPhoto,
    PhotoIndexOutOfRange,
    InterestAlreadyExists,

    // Matching (E3xxx)
    InvalidFixture,

    // Premium (E4xxx)
    PlanNotFound,
    AlreadyPremium,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            // Shared
            Self::InternalError => "E0001",
            Self::ValidationError => "E0002",

            // Auth
            Self::InvalidCredentials => "E1001",
            Self::PasswordTooWeak => "E1002",
            Self::NameRequired => "E1003",
            Self::NotAuthenticated => "E1004",

            // Profile
            Self::CannotDeleteMainPhoto => "E2001",
            Self::PhotoIndexOutOfRange => "E2002",
            Self::InterestAlreadyExists => "E2003",

            // Matching
            Self::InvalidFixture => "E3001",

            // Premium
            Self::PlanNotFound => "E4001",
            Self::AlreadyPremium => "E4002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated, "no user is signed in")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// The error code to report, mapping the non-`Known` variants onto the
    /// shared range.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Known { code, .. } => *code,
            AppError::Internal(_) => ErrorCode::InternalError,
            AppError::Json(_) | AppError::Validation(_) => ErrorCode::ValidationError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_domain_ranges() {
        assert_eq!(ErrorCode::InternalError.code(), "E0001");
        assert_eq!(ErrorCode::InvalidCredentials.code(), "E1001");
        assert_eq!(ErrorCode::CannotDeleteMainPhoto.code(), "E2001");
        assert_eq!(ErrorCode::InvalidFixture.code(), "E3001");
        assert_eq!(ErrorCode::PlanNotFound.code(), "E4001");
    }

    #[test]
    fn known_error_displays_message() {
        let err = AppError::new(ErrorCode::PlanNotFound, "no plan named 2weeks");
        assert_eq!(err.to_string(), "no plan named 2weeks");
        assert_eq!(err.code(), ErrorCode::PlanNotFound);
    }

    #[test]
    fn non_known_variants_map_to_shared_codes() {
        let err = AppError::Validation("bad".into());
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.code(), ErrorCode::InternalError);
    }
}
