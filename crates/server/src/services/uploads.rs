//! Storage of uploaded product images.

use std::path::Path;

use chrono::Utc;
use tokio::fs;

/// Store an uploaded image in the uploads directory and return the URL path
/// it will be served under.
///
/// The stored name is `<millis>-<original-name>`, with the original name
/// reduced to its final path component and any unusual characters replaced,
/// so a crafted filename cannot escape the uploads directory.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or the file
/// cannot be written.
pub async fn store_upload(
    uploads_dir: &Path,
    original_name: &str,
    bytes: &[u8],
) -> std::io::Result<String> {
    let name = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_filename(original_name)
    );

    fs::create_dir_all(uploads_dir).await?;
    fs::write(uploads_dir.join(&name), bytes).await?;

    Ok(format!("/uploads/{name}"))
}

/// Reduce a client-supplied filename to a safe single component.
fn sanitize_filename(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();

    let safe: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if safe.trim_matches(['.', '_']).is_empty() {
        "upload".to_string()
    } else {
        safe
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\temp\\shot.png"), "shot.png");
    }

    #[test]
    fn sanitize_replaces_unusual_characters() {
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
    }

    #[test]
    fn sanitize_rejects_empty_results() {
        assert_eq!(sanitize_filename("...."), "upload");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[tokio::test]
    async fn store_upload_writes_file_and_returns_url() {
        let dir = TempDir::new().unwrap();

        let url = store_upload(dir.path(), "pump.jpg", b"bytes").await.unwrap();

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with("-pump.jpg"));

        let stored = dir.path().join(url.trim_start_matches("/uploads/"));
        assert_eq!(std::fs::read(stored).unwrap(), b"bytes");
    }
}
