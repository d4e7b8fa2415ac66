//! Error codes for the Galaxy API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. Codes are
//! SCREAMING_SNAKE_CASE and are attached to every error log line.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// `user_id` missing from a favorite request body
    UserIdRequired,
    /// General validation error
    ValidationError,
    /// Malformed request (body could not be read or parsed)
    BadRequest,

    // Resource Not Found
    PlanetNotFound,
    PersonNotFound,
    FavoriteNotFound,
    /// Unknown route or unparsable path parameter
    NotFound,

    // Conflicts
    UniqueEmail,
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    ConstraintViolation,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UserIdRequired => "USER_ID_REQUIRED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::PersonNotFound => "PERSON_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::ConstraintViolation => "CONSTRAINT_VIOLATION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
