use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};

use crate::errors::StoreError;

pub mod mock;

pub trait Store {
    /// Saves the given data under a sanitized version of `filename` and
    /// returns the stored path relative to the static directory.
    fn save(&self, filename: &str, raw: Vec<u8>) -> BoxFuture<Result<String, StoreError>>;
}

/// A store that writes review photos to the local upload directory.
pub struct DiskStore {
    /// Where files land on disk.
    upload_dir: PathBuf,

    /// The path prefix recorded in the database, relative to the static
    /// directory (e.g. `uploads`).
    public_prefix: String,
}

impl DiskStore {
    pub fn new(upload_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

impl Store for DiskStore {
    fn save(&self, filename: &str, raw: Vec<u8>) -> BoxFuture<Result<String, StoreError>> {
        let name = sanitize_filename(filename);
        let path = self.upload_dir.join(&name);
        let public_path = format!("{}/{}", self.public_prefix, name);

        async move {
            tokio::fs::write(&path, &raw)
                .await
                .map_err(|source| StoreError::Io { source })?;

            Ok(public_path)
        }
        .boxed()
    }
}

/// Reduces an untrusted filename to a safe basename.
///
/// Directory components are discarded, every character outside
/// `[A-Za-z0-9._-]` becomes `_`, and leading dots are stripped so the
/// result can never climb out of the upload directory or hide itself.
pub fn sanitize_filename(filename: &str) -> String {
    let basename = filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename);

    let cleaned: String = basename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "photo".to_owned()
    } else {
        cleaned.to_owned()
    }
}

/// Checks the filename extension against the configured allow-list,
/// case-insensitively. Files without any extension are rejected.
pub fn has_allowed_extension(filename: &str, allowed: &[String]) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_lowercase();
            allowed.iter().any(|a| *a == e)
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["png".into(), "jpg".into(), "jpeg".into(), "gif".into()]
    }

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert!(has_allowed_extension("photo.png", &allowed()));
        assert!(has_allowed_extension("photo.PNG", &allowed()));
        assert!(has_allowed_extension("dinner.Jpeg", &allowed()));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(!has_allowed_extension("malware.exe", &allowed()));
        assert!(!has_allowed_extension("noextension", &allowed()));
        assert!(!has_allowed_extension("", &allowed()));
        assert!(!has_allowed_extension("archive.tar.xz", &allowed()));
    }

    #[test]
    fn sanitizing_discards_directories() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("..\\..\\boot.ini"), "boot.ini");
        assert_eq!(sanitize_filename("uploads/x.png"), "x.png");
    }

    #[test]
    fn sanitizing_replaces_odd_characters() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("börsch.jpg"), "b_rsch.jpg");
    }

    #[test]
    fn sanitizing_strips_leading_dots() {
        assert_eq!(sanitize_filename(".hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("..."), "photo");
    }

    #[tokio::test]
    async fn disk_store_writes_under_the_upload_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = DiskStore::new(dir.path(), "uploads");

        let public = store
            .save("../escape attempt!.png", b"bytes".to_vec())
            .await
            .expect("save upload");

        assert_eq!(public, "uploads/escape_attempt_.png");
        let written = dir.path().join("escape_attempt_.png");
        assert_eq!(std::fs::read(written).expect("read back"), b"bytes");
    }
}
