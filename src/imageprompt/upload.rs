//! Boundary checks for uploaded images.
//!
//! Prompt generation itself accepts any extension and any size. Callers that receive uploads
//! from untrusted clients run them through an [`UploadPolicy`] first, which turns an accepted
//! upload into an [`ImageReference::Inline`].
//!
//! ```rust
//! use imageprompt::upload::UploadPolicy;
//!
//! let policy = UploadPolicy::default();
//! assert!(policy.allowed_file("holiday.JPEG"));
//! assert!(!policy.allowed_file("notes.txt"));
//! ```

use crate::imageprompt::error::{PromptError, PromptResult};
use crate::imageprompt::image_source::ImageReference;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// 16 MiB.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct UploadPolicy {
    /// Lowercase extensions, without the leading dot.
    pub allowed_extensions: Vec<String>,
    pub max_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        UploadPolicy {
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl UploadPolicy {
    /// Lowercased extension of `filename` if it is on the allow-list.
    pub fn allowed_extension(&self, filename: &str) -> Option<String> {
        let (_, extension) = filename.rsplit_once('.')?;
        let extension = extension.to_lowercase();
        if self.allowed_extensions.iter().any(|allowed| *allowed == extension) {
            Some(extension)
        } else {
            None
        }
    }

    pub fn allowed_file(&self, filename: &str) -> bool {
        self.allowed_extension(filename).is_some()
    }

    /// Validate an upload and wrap it as an inline image reference.
    pub fn accept(&self, filename: &str, bytes: Vec<u8>) -> PromptResult<ImageReference> {
        let extension = self.allowed_extension(filename).ok_or_else(|| {
            PromptError::invalid_input(format!(
                "Invalid file type. Please upload an image ({}).",
                self.allowed_extensions.join(", ")
            ))
        })?;

        if bytes.is_empty() {
            return Err(PromptError::invalid_input("Uploaded image is empty"));
        }

        if bytes.len() > self.max_bytes {
            log::info!(
                "Rejecting upload {:?}: {} bytes exceeds limit of {}",
                filename,
                bytes.len(),
                self.max_bytes
            );
            return Err(PromptError::invalid_input(format!(
                "Uploaded image is {} bytes, the limit is {} bytes",
                bytes.len(),
                self.max_bytes
            )));
        }

        Ok(ImageReference::Inline { bytes, extension })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imageprompt::error::ErrorKind;

    #[test]
    fn extension_checks() {
        let policy = UploadPolicy::default();
        assert!(policy.allowed_file("a.png"));
        assert!(policy.allowed_file("archive.tar.WEBP"));
        assert!(!policy.allowed_file("png"));
        assert!(!policy.allowed_file("a.bmp"));
        assert!(!policy.allowed_file("a."));
    }

    #[test]
    fn accept_lowercases_extension() {
        let policy = UploadPolicy::default();
        let image = policy.accept("Cat.JPG", vec![0xFF, 0xD8]).unwrap();
        assert_eq!(
            image,
            ImageReference::Inline {
                bytes: vec![0xFF, 0xD8],
                extension: "jpg".to_string()
            }
        );
    }

    #[test]
    fn accept_rejects_bad_type_and_size() {
        let policy = UploadPolicy {
            max_bytes: 4,
            ..UploadPolicy::default()
        };

        let err = policy.accept("doc.pdf", vec![1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().starts_with("Invalid file type"));

        let err = policy.accept("big.png", vec![0; 5]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert!(policy.accept("empty.png", Vec::new()).is_err());
        assert!(policy.accept("edge.png", vec![0; 4]).is_ok());
    }
}
