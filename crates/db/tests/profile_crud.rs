//! Integration tests for profile and session repositories.

use chrono::{Duration, Utc};
use findit_db::models::profile::{CreateProfile, Profile};
use findit_db::models::session::CreateSession;
use findit_db::repositories::{ProfileRepo, SessionRepo};
use sqlx::PgPool;

async fn new_profile(pool: &PgPool, email: &str) -> Profile {
    ProfileRepo::create(
        pool,
        &CreateProfile {
            name: "Test".to_string(),
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: "user".to_string(),
        },
    )
    .await
    .unwrap()
}

fn session_for(profile: &Profile, hash: &str, expires_in: Duration) -> CreateSession {
    CreateSession {
        profile_id: profile.id,
        refresh_token_hash: hash.to_string(),
        expires_at: Utc::now() + expires_in,
    }
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_profile(pool: PgPool) {
    let created = new_profile(&pool, "ada@test.com").await;
    assert_eq!(created.role, "user");

    let by_id = ProfileRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.email, "ada@test.com");

    let by_email = ProfileRepo::find_by_email(&pool, "ada@test.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_email.id, created.id);

    assert!(ProfileRepo::find_by_email(&pool, "nobody@test.com")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    new_profile(&pool, "dup@test.com").await;

    let err = ProfileRepo::create(
        &pool,
        &CreateProfile {
            name: "Other".to_string(),
            email: "dup@test.com".to_string(),
            password_hash: "x".to_string(),
            role: "user".to_string(),
        },
    )
    .await
    .unwrap_err();

    let db_err = err.as_database_error().unwrap();
    assert_eq!(db_err.constraint(), Some("uq_profiles_email"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_violates_check(pool: PgPool) {
    let profile = new_profile(&pool, "role@test.com").await;

    let result = ProfileRepo::update_role(&pool, profile.id, "superuser").await;

    assert!(result.is_err());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_grant_role_by_email_promotes_listed_profiles_once(pool: PgPool) {
    let listed = new_profile(&pool, "boss@test.com").await;
    let other = new_profile(&pool, "staff@test.com").await;
    let emails = vec!["boss@test.com".to_string(), "ghost@test.com".to_string()];

    let changed = ProfileRepo::grant_role_by_email(&pool, &emails, "admin").await.unwrap();
    assert_eq!(changed, 1);

    let again = ProfileRepo::grant_role_by_email(&pool, &emails, "admin").await.unwrap();
    assert_eq!(again, 0);

    let listed = ProfileRepo::find_by_id(&pool, listed.id).await.unwrap().unwrap();
    let other = ProfileRepo::find_by_id(&pool, other.id).await.unwrap().unwrap();
    assert_eq!(listed.role, "admin");
    assert_eq!(other.role, "user");
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_session_lookup_skips_revoked_and_expired(pool: PgPool) {
    let profile = new_profile(&pool, "s@test.com").await;
    let live = SessionRepo::create(&pool, &session_for(&profile, "live", Duration::days(7)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_for(&profile, "stale", Duration::days(-1)))
        .await
        .unwrap();

    let found = SessionRepo::find_active_by_refresh_token_hash(&pool, "live")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, live.id);
    assert!(SessionRepo::find_active_by_refresh_token_hash(&pool, "stale")
        .await
        .unwrap()
        .is_none());

    assert!(SessionRepo::revoke(&pool, live.id).await.unwrap());
    assert!(!SessionRepo::revoke(&pool, live.id).await.unwrap());
    assert!(SessionRepo::find_active_by_refresh_token_hash(&pool, "live")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_for_profile(pool: PgPool) {
    let a = new_profile(&pool, "a@test.com").await;
    let b = new_profile(&pool, "b@test.com").await;
    for hash in ["a1", "a2"] {
        SessionRepo::create(&pool, &session_for(&a, hash, Duration::days(1)))
            .await
            .unwrap();
    }
    SessionRepo::create(&pool, &session_for(&b, "b1", Duration::days(1)))
        .await
        .unwrap();

    assert_eq!(SessionRepo::revoke_all_for_profile(&pool, a.id).await.unwrap(), 2);
    assert!(SessionRepo::find_active_by_refresh_token_hash(&pool, "b1")
        .await
        .unwrap()
        .is_some());
}
