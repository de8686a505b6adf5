use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use log::{debug, error, info};
use rocket::fs::TempFile;
use thiserror::Error;
use time::OffsetDateTime;
use crate::lib_constants::UPLOADS_URL_PREFIX;
use crate::util::unix_millis;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to store upload at \"{path}\": {source}")]
    Store {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A profile image saved under the upload directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StoredUpload {
    pub path: PathBuf,
    pub url: String,
}

pub struct UploadStore {
    directory: PathBuf,
}

impl UploadStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        UploadStore {
            directory: directory.into(),
        }
    }

    /// An absent or empty file is no upload.
    pub async fn store(
        &self,
        username: &str,
        file: Option<&mut TempFile<'_>>,
    ) -> Result<Option<StoredUpload>, UploadError> {
        let Some(file) = file.filter(|f| f.len() > 0) else {
            return Ok(None);
        };
        let file_name = stored_file_name(
            username,
            unix_millis(OffsetDateTime::now_utc()),
            upload_extension(file).as_deref(),
        );
        let path = self.directory.join(&file_name);
        debug!("storing {} byte upload at \"{}\"", file.len(), path.display());
        file.move_copy_to(&path)
            .await
            .map_err(|e| UploadError::Store {
                path: path.clone(),
                source: e,
            })?;
        info!("stored profile image \"{file_name}\" for user \"{username}\"");
        Ok(
            Some(
                StoredUpload {
                    path,
                    url: format!("{UPLOADS_URL_PREFIX}/{file_name}"),
                }
            )
        )
    }

    /// Passes `result` through, removing the upload first if it failed.
    pub async fn discard_on_error<T, E>(
        &self,
        upload: Option<&StoredUpload>,
        result: Result<T, E>,
    ) -> Result<T, E> {
        if result.is_err()
            && let Some(upload) = upload
        {
            self.discard(upload).await;
        }
        result
    }

    pub async fn discard(&self, upload: &StoredUpload) {
        debug!("discarding upload \"{}\"", upload.path.display());
        match tokio::fs::remove_file(&upload.path).await {
            Ok(()) => {},
            Err(e) if e.kind() == ErrorKind::NotFound => {},
            Err(e) => error!(
                "failed to remove upload \"{}\": {e}",
                upload.path.display(),
            ),
        }
    }
}

/// `<username>_<millis><.ext>`, with anything unsafe for a file name in the
/// username replaced by `_`.
pub fn stored_file_name(username: &str, millis: i64, extension: Option<&str>) -> String {
    let username: String = username
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    match extension {
        Some(extension) => format!("{username}_{millis}.{extension}"),
        None => format!("{username}_{millis}"),
    }
}

fn upload_extension(file: &TempFile<'_>) -> Option<String> {
    file.raw_name()
        .map(|name| name.dangerous_unsafe_unsanitized_raw().as_str())
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| is_safe_extension(ext))
        .map(str::to_owned)
        .or_else(|| {
            file.content_type()
                .and_then(|ct| ct.extension())
                .map(|ext| ext.as_str().to_owned())
        })
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_keeps_a_plain_username() {
        assert_eq!(
            stored_file_name("alice", 1_700_000_000_000, Some("png")),
            "alice_1700000000000.png",
        );
        assert_eq!(stored_file_name("bob-2", 5, None), "bob-2_5");
    }

    #[test]
    fn file_name_cannot_escape_the_directory() {
        assert_eq!(
            stored_file_name("../../etc/passwd", 5, Some("jpg")),
            "______etc_passwd_5.jpg",
        );
        assert_eq!(stored_file_name("Andreas Rittsel", 5, None), "Andreas_Rittsel_5");
    }

    #[test]
    fn only_alphanumeric_extensions_are_kept() {
        assert!(is_safe_extension("png"));
        assert!(is_safe_extension("JPEG"));
        assert!(!is_safe_extension(""));
        assert!(!is_safe_extension("png;rm"));
        assert!(!is_safe_extension("tar.gz"));
    }
}
