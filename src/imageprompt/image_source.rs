//! Image references and their normalization into something the model can consume.
//!
//! The model backend can fetch remote URLs by itself but has no access to the caller's
//! filesystem, so local content is always turned into an inline `data:` URL before it leaves
//! this crate. Remote URLs are passed through untouched; nothing here performs a fetch.
//!
//! ```rust
//! use imageprompt::image_source::{ImageReference, ImageSource};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let image = ImageReference::Inline { bytes: b"GIF89a".to_vec(), extension: "GIF".into() };
//! let source = image.normalize().await?;
//! assert_eq!(source.as_url(), "data:image/gif;base64,R0lGODlh");
//! # Ok(())
//! # }
//! ```

use crate::imageprompt::error::{PromptError, PromptResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

const REMOTE_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Where the image to describe comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageReference {
    /// An `http://` or `https://` URL the backend resolves on its own.
    Remote { url: String },
    /// A file on the caller's filesystem.
    LocalFile { path: PathBuf },
    /// Uploaded content; the media type is inferred from `extension`.
    Inline { bytes: Vec<u8>, extension: String },
}

/// Normalized image handed to the model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Url(String),
    /// Inline content, rendered as `data:<media_type>;base64,<payload>`.
    DataUrl { media_type: String, payload: String },
}

impl ImageReference {
    /// Build a remote reference, rejecting anything that is not `http://` or `https://`.
    pub fn remote(url: impl Into<String>) -> PromptResult<Self> {
        let url = url.into();
        if is_remote(&url) {
            Ok(ImageReference::Remote { url })
        } else {
            Err(PromptError::invalid_input(
                "Invalid image URL. Must start with http:// or https://",
            ))
        }
    }

    pub fn local(path: impl Into<PathBuf>) -> Self {
        ImageReference::LocalFile { path: path.into() }
    }

    /// Classify a raw "path or URL" string.
    ///
    /// `http(s)://` prefixes become [`ImageReference::Remote`]; any other `scheme://` prefix
    /// is rejected; everything else is treated as a local path.
    pub fn parse(path_or_url: &str) -> PromptResult<Self> {
        let trimmed = path_or_url.trim();
        if trimmed.is_empty() {
            return Err(PromptError::invalid_input(
                "No image uploaded or URL provided",
            ));
        }
        if is_remote(trimmed) {
            return Ok(ImageReference::Remote {
                url: trimmed.to_string(),
            });
        }
        if let Some(scheme) = foreign_scheme(trimmed) {
            return Err(PromptError::invalid_input(format!(
                "Unsupported image URL scheme {:?}. Must start with http:// or https://",
                scheme
            )));
        }
        Ok(ImageReference::local(trimmed))
    }

    /// Turn the reference into an [`ImageSource`], reading local content if needed.
    pub async fn normalize(&self) -> PromptResult<ImageSource> {
        match self {
            ImageReference::Remote { url } => {
                if !is_remote(url) {
                    return Err(PromptError::invalid_input(
                        "Invalid image URL. Must start with http:// or https://",
                    ));
                }
                Ok(ImageSource::Url(url.clone()))
            }
            ImageReference::LocalFile { path } => {
                let (extension, bytes) = read_local(path).await?;
                encode_off_thread(extension, bytes).await
            }
            ImageReference::Inline { bytes, extension } => {
                if extension.is_empty() {
                    return Err(PromptError::invalid_input(
                        "Cannot infer the media type of an upload without a file extension",
                    ));
                }
                encode_off_thread(extension.clone(), bytes.clone()).await
            }
        }
    }
}

impl ImageSource {
    /// Encode `bytes` as an inline image, `extension` is lowercased into the media type.
    pub fn inline(extension: &str, bytes: &[u8]) -> Self {
        ImageSource::DataUrl {
            media_type: format!("image/{}", extension.to_lowercase()),
            payload: STANDARD.encode(bytes),
        }
    }

    /// The string placed in the request's `image_url.url` field.
    pub fn as_url(&self) -> String {
        match self {
            ImageSource::Url(url) => url.clone(),
            ImageSource::DataUrl {
                media_type,
                payload,
            } => format!("data:{};base64,{}", media_type, payload),
        }
    }

    pub fn is_inline(&self) -> bool {
        matches!(self, ImageSource::DataUrl { .. })
    }
}

fn is_remote(candidate: &str) -> bool {
    REMOTE_SCHEMES
        .iter()
        .any(|scheme| candidate.starts_with(scheme))
}

fn foreign_scheme(candidate: &str) -> Option<&str> {
    let (scheme, _) = candidate.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if valid {
        Some(scheme)
    } else {
        None
    }
}

/// Read a local image, returning its file extension and contents.
///
/// The path is resolved against the working directory first. A missing file is reported as
/// `NotFound`; a file whose media type cannot be inferred from its extension is `InvalidInput`.
pub async fn read_local(path: &Path) -> PromptResult<(String, Vec<u8>)> {
    let resolved = match tokio::fs::canonicalize(path).await {
        Ok(resolved) => resolved,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Err(PromptError::not_found(format!(
                "Image file not found: {}",
                path.display()
            )));
        }
        Err(err) => return Err(err.into()),
    };

    let extension = match resolved.extension() {
        Some(ext) if !ext.is_empty() => ext.to_str().ok_or_else(|| {
            PromptError::invalid_input(format!(
                "Cannot infer the media type of {}: its file extension is not valid UTF-8",
                resolved.display()
            ))
        })?,
        _ => {
            return Err(PromptError::invalid_input(format!(
                "Cannot infer the media type of {} without a file extension",
                resolved.display()
            )));
        }
    }
    .to_string();

    let bytes = tokio::fs::read(&resolved).await?;
    log::debug!(
        "Read {} ({} bytes) for inline encoding",
        resolved.display(),
        bytes.len()
    );
    Ok((extension, bytes))
}

// Base64 of a multi-megabyte image is CPU work; keep it off the async workers.
async fn encode_off_thread(extension: String, bytes: Vec<u8>) -> PromptResult<ImageSource> {
    tokio::task::spawn_blocking(move || ImageSource::inline(&extension, &bytes))
        .await
        .map_err(|err| PromptError::invalid_input(format!("Image encoding failed: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imageprompt::error::ErrorKind;

    #[test]
    fn parse_classifies_remote_and_local() {
        assert_eq!(
            ImageReference::parse("https://example.com/a.png").unwrap(),
            ImageReference::Remote {
                url: "https://example.com/a.png".to_string()
            }
        );
        assert_eq!(
            ImageReference::parse("uploads/cat.JPG").unwrap(),
            ImageReference::local("uploads/cat.JPG")
        );
    }

    #[test]
    fn parse_rejects_foreign_schemes_and_empty_input() {
        let err = ImageReference::parse("ftp://bad").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().contains("ftp"));

        let err = ImageReference::parse("   ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn remote_constructor_checks_scheme() {
        assert!(ImageReference::remote("http://example.com/x.webp").is_ok());
        let err = ImageReference::remote("file:///etc/passwd").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn foreign_scheme_requires_a_plausible_scheme_name() {
        assert_eq!(foreign_scheme("s3://bucket/key"), Some("s3"));
        assert_eq!(foreign_scheme("./odd://name.png"), None);
        assert_eq!(foreign_scheme("plain/path.png"), None);
    }

    #[test]
    fn data_url_format() {
        let source = ImageSource::inline("PNG", &[0x89, b'P', b'N', b'G']);
        assert_eq!(source.as_url(), "data:image/png;base64,iVBORw==");
        assert!(source.is_inline());
    }

    #[tokio::test]
    async fn read_local_reports_missing_file_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_local(&dir.path().join("gone.png")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.message().contains("gone.png"));
    }

    #[tokio::test]
    async fn read_local_returns_extension_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.JPG");
        std::fs::write(&path, b"\xFF\xD8\xFF").unwrap();
        let (extension, bytes) = read_local(&path).await.unwrap();
        assert_eq!(extension, "JPG");
        assert_eq!(bytes, b"\xFF\xD8\xFF");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_utf8_extension_is_reported_as_such() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OsStr::from_bytes(b"a.p\xffg"));
        std::fs::write(&path, b"GIF89a").unwrap();

        let err = ImageReference::local(&path).normalize().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().contains("not valid UTF-8"), "{}", err.message());
        assert!(!err.message().contains("without a file extension"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn large_file_encodes_on_single_threaded_runtime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.png");
        let bytes: Vec<u8> = (0u8..=255).cycle().take(1024 * 1024).collect();
        std::fs::write(&path, &bytes).unwrap();

        let source = ImageReference::local(&path).normalize().await.unwrap();
        match source {
            ImageSource::DataUrl {
                media_type,
                payload,
            } => {
                assert_eq!(media_type, "image/png");
                assert_eq!(STANDARD.decode(payload).unwrap(), bytes);
            }
            ImageSource::Url(url) => panic!("expected inline image, got url {}", url),
        }
    }

    #[tokio::test]
    async fn inline_without_extension_is_invalid() {
        let image = ImageReference::Inline {
            bytes: vec![1, 2, 3],
            extension: String::new(),
        };
        let err = image.normalize().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
