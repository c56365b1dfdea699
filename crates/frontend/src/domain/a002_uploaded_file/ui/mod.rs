//! Document upload UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: browser File -> FileMeta, preview reading
//! - view_model.rs: UploadVm wrapping the UploadTracker core and pipelines
//! - view.rs: Main component UploadPage
//! - drop_zone.rs: drag-and-drop area and file picker
//! - file_row.rs: one record in the processing list

mod drop_zone;
mod file_row;
mod model;
mod view;
mod view_model;

pub use view::UploadPage;
pub use view_model::UploadVm;
