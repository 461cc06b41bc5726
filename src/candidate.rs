//! Upload candidate: the image selected by the user, prior to submission.
//!
//! Drag-drop and the file picker both funnel into [`UploadCandidate::new`],
//! so validation happens in exactly one place regardless of which physical
//! input produced the file.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::SearchError;

/// An image the user has selected for search.
///
/// Construction validates the declared media type; a candidate that exists is
/// always submittable. The raw bytes are kept as-is for the multipart upload;
/// the preview encoding is a separate, purely local transform.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl UploadCandidate {
    /// Validate and accept a selected file.
    ///
    /// Rejects with [`SearchError::InvalidMediaType`] unless the declared
    /// media type starts with `image/`. No sniffing of the payload itself;
    /// the backend does its own decoding and reports failures there.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SearchError> {
        let media_type = media_type.into();
        if !media_type.starts_with("image/") {
            return Err(SearchError::InvalidMediaType(media_type));
        }
        Ok(Self {
            name: name.into(),
            media_type,
            bytes,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Inline `data:` URI for local preview.
    ///
    /// Runs before (and independent of) any network submission, so the user
    /// sees their query image immediately.
    pub fn preview_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.media_type, BASE64.encode(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image_media_types() {
        for media_type in ["image/jpeg", "image/png", "image/gif", "image/bmp"] {
            let candidate = UploadCandidate::new("photo.jpg", media_type, vec![1, 2, 3]);
            assert!(candidate.is_ok(), "{media_type} should be accepted");
        }
    }

    #[test]
    fn test_rejects_non_image_media_type() {
        let candidate = UploadCandidate::new("notes.txt", "text/plain", vec![1, 2, 3]);
        assert_eq!(
            candidate,
            Err(SearchError::InvalidMediaType("text/plain".to_string()))
        );
    }

    #[test]
    fn test_rejects_missing_media_type() {
        let candidate = UploadCandidate::new("mystery", "", vec![1, 2, 3]);
        assert_eq!(candidate, Err(SearchError::InvalidMediaType(String::new())));
    }

    #[test]
    fn test_preview_data_uri_encodes_payload() {
        let candidate = UploadCandidate::new("dot.png", "image/png", vec![0xff, 0x00]).unwrap();
        let uri = candidate.preview_data_uri();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.ends_with("/wA="));
    }

    #[test]
    fn test_size_reports_byte_length() {
        let candidate = UploadCandidate::new("a.png", "image/png", vec![0; 42]).unwrap();
        assert_eq!(candidate.size(), 42);
    }
}
