//! Acceptance rules for incoming files (file picker and drag-and-drop alike).

use thiserror::Error;

use super::aggregate::FileMeta;

pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "image/jpeg",
    "image/png",
    "text/plain",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Value for the file input `accept` attribute
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileRejection {
    #[error("{name}: unsupported file type '{mime_type}'")]
    UnsupportedType { name: String, mime_type: String },

    #[error("{name}: file is larger than {} MB", .limit / 1024 / 1024)]
    TooLarge { name: String, size: u64, limit: u64 },
}

impl FileRejection {
    pub fn file_name(&self) -> &str {
        match self {
            FileRejection::UnsupportedType { name, .. } => name,
            FileRejection::TooLarge { name, .. } => name,
        }
    }
}

pub fn is_allowed_type(mime_type: &str) -> bool {
    ALLOWED_MIME_TYPES.contains(&mime_type)
}

pub fn validate(file: &FileMeta) -> Result<(), FileRejection> {
    if !is_allowed_type(&file.mime_type) {
        return Err(FileRejection::UnsupportedType {
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        });
    }
    if file.size > MAX_FILE_SIZE {
        return Err(FileRejection::TooLarge {
            name: file.name.clone(),
            size: file.size,
            limit: MAX_FILE_SIZE,
        });
    }
    Ok(())
}
