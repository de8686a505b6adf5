use rocket::FromForm;
use rocket::fs::TempFile;
use crate::data::UserChanges;

/// Missing fields come through as blank and are rejected by the users
/// service.
#[derive(Debug, FromForm)]
pub struct CreateUserForm<'r> {
    #[field(default = String::new())]
    pub username: String,

    #[field(default = String::new())]
    pub password: String,

    #[field(name = "profileImage")]
    pub profile_image: Option<TempFile<'r>>,
}

#[derive(Debug, FromForm)]
pub struct UserUpdateForm<'r> {
    pub password: Option<String>,

    #[field(name = "profileImage")]
    pub profile_image: Option<TempFile<'r>>,
}

impl UserUpdateForm<'_> {
    pub fn changes(&self, profile_image: Option<String>) -> UserChanges {
        UserChanges {
            password: self.password.clone(),
            profile_image,
        }
    }
}
