//! Ordered list of file-processing records with the forward-only status
//! progression `Uploading(0..=100) -> Analyzing -> Completed | Error`.

use super::aggregate::{FileMeta, FileStatus, UploadedFileId, UploadedFileRecord};
use super::events::UploadEvent;
use super::validation::{validate, FileRejection};

#[derive(Debug, Clone, Default)]
pub struct UploadTracker {
    records: Vec<UploadedFileRecord>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UploadedFileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: UploadedFileId) -> Option<&UploadedFileRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records whose analysis is ready, in upload order
    pub fn completed(&self) -> impl Iterator<Item = &UploadedFileRecord> {
        self.records
            .iter()
            .filter(|r| r.status == FileStatus::Completed)
    }

    /// Validates and appends a new record in `Uploading` at 0%.
    pub fn accept(&mut self, file: FileMeta) -> Result<UploadedFileId, FileRejection> {
        validate(&file)?;
        let record = UploadedFileRecord::new(file);
        let id = record.id;
        self.records.push(record);
        Ok(id)
    }

    /// Removes the record regardless of status. Unknown ids are a no-op.
    pub fn remove(&mut self, id: UploadedFileId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn set_preview(&mut self, id: UploadedFileId, data_url: String) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.preview = Some(data_url);
                true
            }
            None => false,
        }
    }

    /// Applies a pipeline event. Returns `false` when the event does not fit
    /// the record's current state (removed record, regressing progress,
    /// event after a terminal status) and was ignored.
    pub fn apply(&mut self, id: UploadedFileId, event: UploadEvent) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if record.status.is_terminal() {
            log::debug!("{} already {:?}, {} ignored", id, record.status, event.kind());
            return false;
        }

        match (record.status, event) {
            (FileStatus::Uploading, UploadEvent::Progress(progress)) => {
                let progress = progress.min(100);
                if progress < record.progress {
                    return false;
                }
                record.progress = progress;
                if progress == 100 {
                    record.status = FileStatus::Analyzing;
                }
                true
            }
            (FileStatus::Analyzing, UploadEvent::Completed(analysis)) => {
                record.analysis = Some(analysis);
                record.status = FileStatus::Completed;
                true
            }
            (FileStatus::Analyzing, UploadEvent::Failed(message)) => {
                record.error = Some(message);
                record.status = FileStatus::Error;
                true
            }
            (status, event) => {
                log::debug!(
                    "ignored {} event for {} in status {:?}",
                    event.kind(),
                    id,
                    status
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_analysis_result::synthesize;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pdf(name: &str) -> FileMeta {
        FileMeta::new(name, 2048, "application/pdf")
    }

    fn analysis() -> crate::domain::a003_analysis_result::AnalysisResult {
        synthesize("contract.pdf", &mut StdRng::seed_from_u64(3))
    }

    fn upload_to_analyzing(tracker: &mut UploadTracker, id: UploadedFileId) {
        for p in (0..=100).step_by(10) {
            assert!(tracker.apply(id, UploadEvent::Progress(p)));
        }
    }

    #[test]
    fn test_rejected_files_create_no_record() {
        let mut tracker = UploadTracker::new();
        assert!(tracker
            .accept(FileMeta::new("huge.pdf", 11 * 1024 * 1024, "application/pdf"))
            .is_err());
        assert!(tracker
            .accept(FileMeta::new("clip.mp4", 100, "video/mp4"))
            .is_err());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_progress_reaches_100_before_analyzing() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("brief.pdf")).unwrap();

        let mut last = 0;
        for p in (0..=90).step_by(10) {
            tracker.apply(id, UploadEvent::Progress(p));
            let record = tracker.get(id).unwrap();
            assert_eq!(record.status, FileStatus::Uploading);
            assert!(record.progress >= last);
            last = record.progress;
        }

        tracker.apply(id, UploadEvent::Progress(100));
        let record = tracker.get(id).unwrap();
        assert_eq!(record.progress, 100);
        assert_eq!(record.status, FileStatus::Analyzing);
    }

    #[test]
    fn test_progress_never_decreases() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("brief.pdf")).unwrap();

        tracker.apply(id, UploadEvent::Progress(50));
        assert!(!tracker.apply(id, UploadEvent::Progress(40)));
        assert_eq!(tracker.get(id).unwrap().progress, 50);
    }

    #[test]
    fn test_completion_only_from_analyzing() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("contract.pdf")).unwrap();

        assert!(!tracker.apply(id, UploadEvent::Completed(analysis())));
        assert_eq!(tracker.get(id).unwrap().status, FileStatus::Uploading);

        upload_to_analyzing(&mut tracker, id);
        assert!(tracker.apply(id, UploadEvent::Completed(analysis())));

        let record = tracker.get(id).unwrap();
        assert_eq!(record.status, FileStatus::Completed);
        assert_eq!(
            record.analysis.as_ref().map(|a| a.document_type.as_str()),
            Some("Service Agreement")
        );
        assert_eq!(tracker.completed().count(), 1);
    }

    #[test]
    fn test_failure_is_terminal() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("brief.pdf")).unwrap();
        upload_to_analyzing(&mut tracker, id);

        assert!(tracker.apply(id, UploadEvent::Failed("analyzer offline".into())));
        assert!(!tracker.apply(id, UploadEvent::Completed(analysis())));

        let record = tracker.get(id).unwrap();
        assert_eq!(record.status, FileStatus::Error);
        assert_eq!(record.error.as_deref(), Some("analyzer offline"));
        assert!(record.analysis.is_none());
    }

    #[test]
    fn test_completed_record_ignores_late_events() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("contract.pdf")).unwrap();
        upload_to_analyzing(&mut tracker, id);
        tracker.apply(id, UploadEvent::Completed(analysis()));

        assert!(!tracker.apply(id, UploadEvent::Failed("late".into())));
        assert!(!tracker.apply(id, UploadEvent::Progress(100)));

        let record = tracker.get(id).unwrap();
        assert!(record.status.is_terminal());
        assert_eq!(record.status, FileStatus::Completed);
        assert!(record.error.is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut tracker = UploadTracker::new();
        let a = tracker.accept(pdf("a.pdf")).unwrap();
        let b = tracker.accept(pdf("b.pdf")).unwrap();
        upload_to_analyzing(&mut tracker, b);

        assert!(tracker.remove(b));
        assert_eq!(tracker.len(), 1);
        assert!(!tracker.remove(b));
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.records()[0].id, a);
    }

    #[test]
    fn test_events_for_removed_record_are_ignored() {
        let mut tracker = UploadTracker::new();
        let id = tracker.accept(pdf("a.pdf")).unwrap();
        tracker.remove(id);

        assert!(!tracker.apply(id, UploadEvent::Progress(10)));
        assert!(!tracker.set_preview(id, "data:image/png;base64,".into()));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_preview_independent_of_status() {
        let mut tracker = UploadTracker::new();
        let id = tracker
            .accept(FileMeta::new("scan.png", 512, "image/png"))
            .unwrap();
        upload_to_analyzing(&mut tracker, id);
        tracker.apply(id, UploadEvent::Completed(analysis()));

        assert!(tracker.set_preview(id, "data:image/png;base64,AAAA".into()));
        let record = tracker.get(id).unwrap();
        assert_eq!(record.status, FileStatus::Completed);
        assert!(record.preview.is_some());
    }
}
