use serde::{Deserialize, Serialize};

use crate::domain::a003_analysis_result::AnalysisResult;

crate::uuid_id!(
    /// ID записи о загруженном файле
    UploadedFileId
);

/// Metadata of a browser file handle. The handle itself stays in the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Size in megabytes with two decimals, e.g. `2.40 MB`
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Uploading,
    Analyzing,
    Completed,
    Error,
}

impl FileStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, FileStatus::Completed | FileStatus::Error)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileStatus::Uploading => "Uploading...",
            FileStatus::Analyzing => "Analyzing...",
            FileStatus::Completed => "Analysis Complete",
            FileStatus::Error => "Error occurred",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileRecord {
    pub id: UploadedFileId,
    pub file: FileMeta,
    /// `data:` URL, images only, filled in independently of `status`
    pub preview: Option<String>,
    pub status: FileStatus,
    /// 0..=100
    pub progress: u8,
    pub analysis: Option<AnalysisResult>,
    pub error: Option<String>,
}

impl UploadedFileRecord {
    pub fn new(file: FileMeta) -> Self {
        Self {
            id: UploadedFileId::new_v4(),
            file,
            preview: None,
            status: FileStatus::Uploading,
            progress: 0,
            analysis: None,
            error: None,
        }
    }
}
