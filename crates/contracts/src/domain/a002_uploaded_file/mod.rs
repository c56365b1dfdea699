pub mod aggregate;
pub mod events;
pub mod preview;
pub mod tracker;
pub mod validation;

pub use aggregate::{FileMeta, FileStatus, UploadedFileId, UploadedFileRecord};
pub use events::UploadEvent;
pub use preview::preview_data_url;
pub use tracker::UploadTracker;
pub use validation::{
    validate, FileRejection, ACCEPT_ATTRIBUTE, ALLOWED_MIME_TYPES, MAX_FILE_SIZE,
};
