use std::error::Error;
use assert_fs::TempDir;
use crate::session_storage::SessionStorageError;
use super::*;

fn user(username: &str, password: &str) -> User {
    User {
        username: username.into(),
        password: password.into(),
        profile_image: None,
    }
}

async fn granter_in(
    dir: &TempDir,
    session_lifetime: Duration,
) -> Result<ProductionAccessGranter, Box<dyn Error>> {
    let users = Arc::new(RecordStore::new(dir.path().join("users.json")));
    users.save(&[user("admin", "root"), user("alice", "wonderland")]).await?;
    Ok(
        AccessGranterImpl::new_internal(
            ProductionSessionStorage::new(dir.path().join("sessions.json")),
            users,
            vec!["admin".to_owned()],
            session_lifetime,
        )
    )
}

#[tokio::test]
async fn login_then_access() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    let login = granter.login_user("alice", "wonderland").await?;
    assert_eq!(login.user.username, "alice");
    assert_eq!(login.token.username().as_str(), "alice");

    let session = granter.authenticate(&login.token.to_string()).await?;
    assert_eq!(session.username.as_str(), "alice");
    Ok(())
}

#[tokio::test]
async fn wrong_password_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    assert!(matches!(
        granter.login_user("alice", "rabbit").await,
        Err(AccessGranterError::InvalidCredentials),
    ));
    assert!(matches!(
        granter.login_user("nobody", "wonderland").await,
        Err(AccessGranterError::InvalidCredentials),
    ));
    Ok(())
}

#[tokio::test]
async fn forged_token_is_rejected() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    granter.login_user("alice", "wonderland").await?;

    let forged = format!("alice:{}", "ab".repeat(64));
    assert!(matches!(
        granter.check_user_access(&forged).await,
        Err(AccessGranterError::InvalidToken),
    ));
    assert!(matches!(
        granter.check_user_access("alice").await,
        Err(AccessGranterError::InvalidToken),
    ));
    Ok(())
}

#[tokio::test]
async fn expired_session_is_reported() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::seconds(-1)).await?;
    let login = granter.login_user("alice", "wonderland").await?;
    let cookie = login.token.to_string();

    assert!(matches!(
        granter.check_user_access(&cookie).await?,
        SessionInfo::Expired(_),
    ));
    assert!(matches!(
        granter.authenticate(&cookie).await,
        Err(AccessGranterError::SessionExpired),
    ));
    Ok(())
}

#[tokio::test]
async fn oversized_lifetime_fails_login() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::seconds(i64::MAX)).await?;
    assert!(matches!(
        granter.login_user("alice", "wonderland").await,
        Err(AccessGranterError::SessionStorage(SessionStorageError::LifetimeOverflow(_))),
    ));
    Ok(())
}

#[tokio::test]
async fn logout_revokes_the_token() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    let first = granter.login_user("alice", "wonderland").await?.token.to_string();
    let second = granter.login_user("alice", "wonderland").await?.token.to_string();

    granter.logout_user(&first).await?;
    assert!(granter.authenticate(&first).await.is_err());
    assert!(granter.authenticate(&second).await.is_ok());

    granter.logout_user(&first).await?;
    granter.logout_user("garbage").await?;
    Ok(())
}

#[tokio::test]
async fn revoking_user_sessions() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    let alice = granter.login_user("alice", "wonderland").await?.token.to_string();
    let admin = granter.login_user("admin", "root").await?.token.to_string();

    granter.revoke_user_sessions("alice").await?;
    assert!(granter.authenticate(&alice).await.is_err());
    assert!(granter.authenticate(&admin).await.is_ok());
    Ok(())
}

#[tokio::test]
async fn admin_classification() -> Result<(), Box<dyn Error>> {
    let dir = TempDir::new()?;
    let granter = granter_in(&dir, Duration::hours(24)).await?;
    assert!(granter.is_admin("admin"));
    assert!(!granter.is_admin("alice"));
    assert!(!granter.is_admin("Admin"));
    Ok(())
}
