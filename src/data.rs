use serde::{Deserialize, Serialize};

pub type NoteId = i64;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_edited_by: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub last_edited_by: Option<String>,
}

/// Fields absent from the request are left as they are.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,

    #[serde(default)]
    pub last_edited_by: Option<String>,
}

impl NewNote {
    pub fn into_note(self, id: NoteId) -> Note {
        Note {
            id,
            title: self.title,
            content: self.content,
            created_by: self.created_by,
            last_edited_by: self.last_edited_by,
        }
    }
}

impl Note {
    pub fn merge(&mut self, update: NoteUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(created_by) = update.created_by {
            self.created_by = Some(created_by);
        }
        if let Some(last_edited_by) = update.last_edited_by {
            self.last_edited_by = Some(last_edited_by);
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password: String,

    #[serde(default)]
    pub profile_image: Option<String>,
}

/// What leaves the server about a user: never the password.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub username: String,
    pub profile_image: Option<String>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        PublicUser {
            username: user.username.clone(),
            profile_image: user.profile_image.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserChanges {
    pub password: Option<String>,
    pub profile_image: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
    pub profile_image: Option<String>,
}

impl From<PublicUser> for LoginResponse {
    fn from(user: PublicUser) -> Self {
        LoginResponse {
            success: true,
            username: user.username,
            profile_image: user.profile_image,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shopping() -> Note {
        Note {
            id: 1,
            title: "shopping".into(),
            content: "milk".into(),
            created_by: Some("alice".into()),
            last_edited_by: None,
        }
    }

    #[test]
    fn merge_keeps_absent_fields() {
        let mut note = shopping();
        note.merge(NoteUpdate {
            content: Some("milk, eggs".into()),
            ..Default::default()
        });
        assert_eq!(note.title, "shopping");
        assert_eq!(note.content, "milk, eggs");
        assert_eq!(note.created_by.as_deref(), Some("alice"));
    }

    #[test]
    fn update_ignores_id() {
        let update: NoteUpdate = serde_json::from_str(r#"{"id": 5, "title": "X"}"#)
            .unwrap();
        let mut note = shopping();
        note.merge(update);
        assert_eq!(note.id, 1);
        assert_eq!(note.title, "X");
    }

    #[test]
    fn note_json_omits_missing_authors() {
        let mut note = shopping();
        note.created_by = None;
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::json!({"id": 1, "title": "shopping", "content": "milk"}),
        );
    }

    #[test]
    fn public_user_has_no_password() {
        let user = User {
            username: "alice".into(),
            password: "secret".into(),
            profile_image: None,
        };
        let json = serde_json::to_value(PublicUser::from(&user)).unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice", "profileImage": null}));
    }
}
