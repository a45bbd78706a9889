//! Error codes for the Scorebook backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid season id in the path
    InvalidSeasonId,

    // Resource Not Found
    /// Player not found in the season player map
    PlayerNotFound,
    /// Team not found
    TeamNotFound,
    /// Match not found
    MatchNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Player is referenced by the live match
    PlayerLocked,
    /// Match already submitted
    AlreadySubmitted,
    /// Unique constraint
    UniqueViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Submission to the stats pipeline failed
    SubmissionFailed,
    /// Internal server error
    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidSeasonId => "INVALID_SEASON_ID",

            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::PlayerLocked => "PLAYER_LOCKED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::SubmissionFailed => "SUBMISSION_FAILED",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
