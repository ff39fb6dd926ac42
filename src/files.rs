//! File Encoding Helpers
//!
//! Turn raw file bytes into the base64 payloads the domain stores:
//! attachments on questionnaire answers and data URLs for logos. No
//! size or type limits are enforced here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

use crate::domain::{Attachment, DomainError, DomainResult};

const FALLBACK_MIME: &str = "application/octet-stream";

/// Build an attachment from in-memory bytes. A missing MIME type is
/// guessed from the file name.
pub fn encode_attachment(name: &str, mime_type: Option<String>, bytes: &[u8]) -> Attachment {
    let mime = mime_type.unwrap_or_else(|| guess_mime(name));
    Attachment::new(name, mime, STANDARD.encode(bytes))
}

/// Read a file from disk and encode it as an attachment.
pub async fn read_attachment(path: &Path) -> DomainResult<Attachment> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::Internal(format!("Failed to read file: {}", e)))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| DomainError::InvalidInput("File has no usable name".to_string()))?;
    Ok(encode_attachment(name, None, &bytes))
}

/// Embeddable data URL, used for client logos.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Read a file from disk and render it as a data URL.
pub async fn file_to_data_url(path: &Path) -> DomainResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| DomainError::Internal(format!("Failed to read file: {}", e)))?;
    let mime = path
        .to_str()
        .map(guess_mime)
        .unwrap_or_else(|| FALLBACK_MIME.to_string());
    Ok(data_url(&mime, &bytes))
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or(FALLBACK_MIME)
        .to_string()
}
