// Unit tests for error mapping - pure domain logic without HTTP or database dependencies
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation("total overs must be positive");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let locked = DomainError::conflict(ConflictKind::PlayerLocked, "at the crease");
    let app: AppError = locked.into();
    assert_eq!(app.code().as_str(), "PLAYER_LOCKED");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_missing_player_to_404() {
    let nf = DomainError::missing_player("ghost");
    let app: AppError = nf.into();
    assert_eq!(app.code(), ErrorCode::PlayerNotFound);
    assert_eq!(app.status().as_u16(), 404);
    assert!(app.detail().contains("ghost"));
}

#[test]
fn maps_not_found_kinds() {
    let team: AppError = DomainError::not_found(NotFoundKind::Team, "no team").into();
    assert_eq!(team.code(), ErrorCode::TeamNotFound);
    let m: AppError = DomainError::not_found(NotFoundKind::Match, "no match").into();
    assert_eq!(m.code(), ErrorCode::MatchNotFound);
}

#[test]
fn maps_infra() {
    let t: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(t.code().as_str(), "DB_TIMEOUT");
    assert_eq!(t.status().as_u16(), 504);
    assert!(matches!(t, AppError::Timeout { .. }));

    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(down.status().as_u16(), 503);

    let sub: AppError = DomainError::infra(InfraErrorKind::Submission, "refused").into();
    assert_eq!(sub.code(), ErrorCode::SubmissionFailed);
    assert_eq!(sub.status().as_u16(), 502);

    let corr: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(corr.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(corr.status().as_u16(), 500);
}
