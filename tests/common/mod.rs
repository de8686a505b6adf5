#![allow(dead_code)]

use std::error::Error;
use std::path::PathBuf;
use assert_fs::TempDir;
use notesd::config::figment::FigmentExt;
use notesd::data::User;
use notesd::record_store::RecordStore;
use notesd::server::build_rocket;
use notesd::AUTH_COOKIE_NAME;
use rocket::figment::Figment;
use rocket::http::{ContentType, Cookie, Status};
use rocket::local::asynchronous::Client;

pub const ADMIN: (&str, &str) = ("admin", "admin-password");
pub const ALICE: (&str, &str) = ("alice", "wonderland");

pub struct TestApp {
    pub dir: TempDir,
    pub client: Client,
}

impl TestApp {
    pub fn data_file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn public_directory(&self) -> PathBuf {
        self.dir.path().join("public")
    }
}

pub fn figment_for(dir: &TempDir) -> Figment {
    Figment::from(rocket::Config::default())
        .setup_app_config(None)
        .merge(("data_directory", dir.path()))
        .merge(("public_directory", dir.path().join("public")))
        .merge(("log_level", "off"))
}

pub fn seed_users() -> Vec<User> {
    [ADMIN, ALICE]
        .into_iter()
        .map(|(username, password)| User {
            username: username.into(),
            password: password.into(),
            profile_image: None,
        })
        .collect()
}

pub async fn spawn_app() -> Result<TestApp, Box<dyn Error>> {
    spawn_app_with(|figment| figment).await
}

pub async fn spawn_app_with(
    configure: impl FnOnce(Figment) -> Figment,
) -> Result<TestApp, Box<dyn Error>> {
    let dir = TempDir::new()?;
    RecordStore::new(dir.path().join("users.json"))
        .save(&seed_users())
        .await?;
    let client = Client::untracked(build_rocket(configure(figment_for(&dir)))).await?;
    Ok(TestApp { dir, client })
}

pub async fn log_in(
    client: &Client,
    (username, password): (&str, &str),
) -> Cookie<'static> {
    let response = client
        .post("/api/login")
        .header(ContentType::JSON)
        .body(serde_json::json!({"username": username, "password": password}).to_string())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok, "login of \"{username}\" failed");
    response
        .cookies()
        .get(AUTH_COOKIE_NAME)
        .expect("no session cookie after login")
        .clone()
        .into_owned()
}

pub const BOUNDARY: &str = "notesd-test-boundary";

/// A `multipart/form-data` body of text fields and at most one file.
pub fn multipart_body(
    fields: &[(&str, &str)],
    file: Option<(&str, &str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ).as_bytes()
        );
    }
    if let Some((name, file_name, content_type, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                    filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            ).as_bytes()
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> ContentType {
    ContentType::new("multipart", "form-data").with_params(("boundary", BOUNDARY))
}
