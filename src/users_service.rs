use std::str::FromStr;
use std::sync::Arc;
use log::{debug, info};
use crate::data::{PublicUser, User, UserChanges};
use crate::record_store::RecordStore;
use crate::username_string::UsernameString;
use crate::util::StrExt;

mod errors;

pub use errors::UsersError;

pub struct UsersService {
    users: Arc<RecordStore<User>>,
}

impl UsersService {
    pub fn new(users: Arc<RecordStore<User>>) -> Self {
        UsersService { users }
    }

    pub async fn list_users(&self) -> Vec<PublicUser> {
        self.users
            .load_or_empty()
            .await
            .iter()
            .map(PublicUser::from)
            .collect()
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        profile_image: Option<String>,
    ) -> Result<PublicUser, UsersError> {
        let username = UsernameString::from_str(username)?;
        if password.is_blank() {
            return Err(UsersError::BlankPassword);
        }
        let user = User {
            username: username.into_string(),
            password: password.to_owned(),
            profile_image,
        };
        let created = self.users
            .update(move |users| {
                if users.iter().any(|u| u.username == user.username) {
                    return Err(UsersError::Conflict(user.username));
                }
                let created = PublicUser::from(&user);
                users.push(user);
                Ok(created)
            })
            .await?;
        info!("created user \"{}\"", created.username);
        Ok(created)
    }

    /// A blank password leaves the old one in place, as does a missing
    /// image.
    pub async fn update_user(
        &self,
        username: &str,
        changes: UserChanges,
    ) -> Result<PublicUser, UsersError> {
        let updated = self.users
            .update(|users| {
                let user = users
                    .iter_mut()
                    .find(|u| u.username == username)
                    .ok_or_else(|| UsersError::NotFound(username.to_owned()))?;
                if let Some(password) = changes.password
                    && !password.is_blank()
                {
                    debug!("changing the password of user \"{username}\"");
                    user.password = password;
                }
                if let Some(profile_image) = changes.profile_image {
                    debug!("changing the profile image of user \"{username}\"");
                    user.profile_image = Some(profile_image);
                }
                Ok::<_, UsersError>(PublicUser::from(&*user))
            })
            .await?;
        info!("updated user \"{username}\"");
        Ok(updated)
    }

    pub async fn delete_user(&self, username: &str) -> Result<(), UsersError> {
        self.users
            .update(|users| {
                let index = users
                    .iter()
                    .position(|u| u.username == username)
                    .ok_or_else(|| UsersError::NotFound(username.to_owned()))?;
                users.remove(index);
                Ok::<_, UsersError>(())
            })
            .await?;
        info!("deleted user \"{username}\"");
        Ok(())
    }

    pub async fn update_own_profile(
        &self,
        username: &UsernameString,
        changes: UserChanges,
    ) -> Result<PublicUser, UsersError> {
        self.update_user(username.as_str(), changes).await
    }

    pub async fn check_auth(
        &self,
        username: &UsernameString,
    ) -> Result<PublicUser, UsersError> {
        self.users
            .load_or_empty()
            .await
            .iter()
            .find(|u| u.username == username.as_str())
            .map(PublicUser::from)
            .ok_or_else(|| UsersError::NotFound(username.to_string()))
    }
}
