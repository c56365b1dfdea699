use crate::domain::a003_analysis_result::AnalysisResult;

/// Step of the upload/analysis pipeline for one record
#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    /// Transfer progress in percent; 100 moves the record to `Analyzing`
    Progress(u8),
    /// Analysis finished
    Completed(AnalysisResult),
    /// Analysis call failed
    Failed(String),
}

impl UploadEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            UploadEvent::Progress(_) => "progress",
            UploadEvent::Completed(_) => "completed",
            UploadEvent::Failed(_) => "failed",
        }
    }
}
