// File: src/attachment.rs
// Purpose: Profile picture checks and preview data

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// 5 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

const BYTES_PER_KB: u64 = 1024;
const BYTES_PER_MB: u64 = 1024 * BYTES_PER_KB;

/// A file picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Why an attachment was refused; `Display` is the user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachmentRejection {
    #[error("File size exceeds {} limit. Please choose a smaller file.", limit_label(.limit))]
    TooLarge { size: u64, limit: u64 },

    #[error("Please select an image file (PNG, JPG, GIF)")]
    WrongType { mime: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttachmentLimits {
    pub max_bytes: u64,
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self {
            max_bytes: MAX_ATTACHMENT_BYTES,
        }
    }
}

impl Attachment {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension
    ///
    /// Files over the size limit fail with [`AttachmentRejection::TooLarge`]
    /// before any content is read.
    pub fn load(path: impl AsRef<Path>, limits: &AttachmentLimits) -> Result<Self> {
        let path = path.as_ref();
        let size = fs::metadata(path)
            .with_context(|| format!("Failed to read attachment: {:?}", path))?
            .len();
        if size > limits.max_bytes {
            tracing::debug!(path = %path.display(), size, "attachment too large, not reading");
            return Err(AttachmentRejection::TooLarge {
                size,
                limit: limits.max_bytes,
            }
            .into());
        }

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read attachment: {:?}", path))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, guess_mime_type(path), bytes))
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// `data:` URL suitable for an `<img src>` preview
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    /// Preview caption, e.g. `avatar.png (12.50 KB)`
    pub fn caption(&self) -> String {
        format!("{} ({:.2} KB)", self.name, self.size() as f64 / 1024.0)
    }
}

/// Accepts images up to the size limit; size is checked first
pub fn validate_attachment(
    attachment: &Attachment,
    limits: &AttachmentLimits,
) -> Result<(), AttachmentRejection> {
    let size = attachment.size();
    if size > limits.max_bytes {
        tracing::debug!(name = %attachment.name, size, "attachment too large");
        return Err(AttachmentRejection::TooLarge {
            size,
            limit: limits.max_bytes,
        });
    }

    // Any MIME type mentioning "image" passes, as a browser's `type.match('image.*')` does
    if !attachment.mime_type.contains("image") {
        tracing::debug!(name = %attachment.name, mime = %attachment.mime_type, "attachment not an image");
        return Err(AttachmentRejection::WrongType {
            mime: attachment.mime_type.clone(),
        });
    }

    Ok(())
}

/// Whole megabytes print as `5MB`; smaller limits fall back to KB or bytes
fn limit_label(bytes: &u64) -> String {
    let bytes = *bytes;
    if bytes >= BYTES_PER_MB {
        if bytes % BYTES_PER_MB == 0 {
            format!("{}MB", bytes / BYTES_PER_MB)
        } else {
            format!("{:.2}MB", bytes as f64 / BYTES_PER_MB as f64)
        }
    } else if bytes >= BYTES_PER_KB {
        if bytes % BYTES_PER_KB == 0 {
            format!("{}KB", bytes / BYTES_PER_KB)
        } else {
            format!("{:.2}KB", bytes as f64 / BYTES_PER_KB as f64)
        }
    } else {
        format!("{} bytes", bytes)
    }
}

/// MIME type for common file extensions, `application/octet-stream` otherwise
pub fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
