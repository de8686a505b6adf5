use std::error::Error;
use std::str::FromStr;
use assert_fs::TempDir;
use mocks::MockIo;
use super::*;


fn storage_in(dir: &TempDir) -> SessionStorageImpl<MockIo> {
    SessionStorageImpl::new_internal(dir.path().join("sessions.json"), MockIo::new())
}

fn user(name: &str) -> UsernameString {
    UsernameString::from_str(name).unwrap()
}

#[tokio::test]
async fn created_session_is_found_by_its_token() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let (session, token) = storage
        .create_session(&user("alice"), Duration::hours(24))
        .await?;

    assert_eq!(session.username, user("alice"));
    assert_eq!(session.expires_at - session.created_at, Duration::hours(24));
    assert_eq!(storage.find_session(&token).await?, Some(session));
    Ok(())
}

#[tokio::test]
async fn secret_is_not_stored_in_the_clear() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let (_, token) = storage
        .create_session(&user("alice"), Duration::hours(1))
        .await?;

    let on_disk = std::fs::read_to_string(dir.path().join("sessions.json"))?;
    assert!(!on_disk.contains(&hex::encode(token.secret())));
    assert!(on_disk.contains(&token.secret_hash()));
    Ok(())
}

#[tokio::test]
async fn token_of_another_user_does_not_match() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let (_, token) = storage
        .create_session(&user("alice"), Duration::hours(1))
        .await?;

    let forged = SessionToken::from_str(
        &format!("mallory:{}", hex::encode(token.secret())),
    )?;
    assert_eq!(storage.find_session(&forged).await?, None);
    Ok(())
}

#[tokio::test]
async fn expired_sessions_are_dropped_on_create() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let (old, old_token) = storage
        .create_session(&user("alice"), Duration::hours(1))
        .await?;

    storage.io.advance(Duration::hours(1));
    let found = storage.find_session(&old_token).await?;
    assert!(found.is_some_and(|s| s.is_expired(storage.io.get_time())));
    assert!(!old.is_expired(storage.io.get_time() - Duration::SECOND));

    let (_, new_token) = storage
        .create_session(&user("bob"), Duration::hours(1))
        .await?;
    assert_eq!(storage.find_session(&old_token).await?, None);
    assert!(storage.find_session(&new_token).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn delete_session_reports_whether_it_existed() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let (session, token) = storage
        .create_session(&user("alice"), Duration::hours(1))
        .await?;

    assert!(storage.delete_session(session.session_id).await?);
    assert!(!storage.delete_session(session.session_id).await?);
    assert_eq!(storage.find_session(&token).await?, None);
    Ok(())
}

#[tokio::test]
async fn delete_user_sessions_keeps_other_users() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    storage.create_session(&user("alice"), Duration::hours(1)).await?;
    storage.create_session(&user("alice"), Duration::hours(1)).await?;
    let (_, bob_token) = storage
        .create_session(&user("bob"), Duration::hours(1))
        .await?;

    assert_eq!(storage.delete_user_sessions("alice").await?, 2);
    assert_eq!(storage.delete_user_sessions("alice").await?, 0);
    assert!(storage.find_session(&bob_token).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn oversized_lifetime_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let storage = storage_in(&dir);
    let result = storage
        .create_session(&user("alice"), Duration::seconds(i64::MAX))
        .await;

    assert!(matches!(result, Err(SessionStorageError::LifetimeOverflow(_))));
    assert!(!dir.path().join("sessions.json").exists());
    Ok(())
}

#[tokio::test]
async fn corrupt_table_fails_lookups() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    std::fs::write(dir.path().join("sessions.json"), "{ not json")?;
    let storage = storage_in(&dir);
    let token = SessionToken::from_str("alice:abcd")?;
    assert!(matches!(
        storage.find_session(&token).await,
        Err(SessionStorageError::Store(_)),
    ));
    Ok(())
}
