//! Drives one uploaded file through the simulated transfer and analysis.

use tokio_util::sync::CancellationToken;

use super::analyzer::DocumentAnalyzer;
use crate::domain::a002_uploaded_file::{FileMeta, UploadEvent};
use crate::shared::delay::Delay;
use crate::shared::timing::SimulationTiming;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineOutcome {
    Completed,
    Failed,
    Cancelled,
}

/// Emits progress `0..=100` on the upload tick, then the analysis result.
///
/// Nothing is emitted once `cancel` fires.
pub async fn run_pipeline<D, A, F>(
    file: &FileMeta,
    timing: &SimulationTiming,
    delay: &D,
    analyzer: &A,
    cancel: &CancellationToken,
    mut emit: F,
) -> PipelineOutcome
where
    D: Delay,
    A: DocumentAnalyzer,
    F: FnMut(UploadEvent),
{
    let work = async {
        for progress in timing.progress_steps() {
            delay.sleep(timing.upload_tick).await;
            emit(UploadEvent::Progress(progress));
        }

        match analyzer.analyze(file).await {
            Ok(analysis) => {
                emit(UploadEvent::Completed(analysis));
                PipelineOutcome::Completed
            }
            Err(e) => {
                log::warn!("analysis of {} failed: {}", file.name, e);
                emit(UploadEvent::Failed(e.to_string()));
                PipelineOutcome::Failed
            }
        }
    };

    let outcome = cancel
        .run_until_cancelled(work)
        .await
        .unwrap_or(PipelineOutcome::Cancelled);
    log::debug!("pipeline for {} finished: {:?}", file.name, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_uploaded_file::{FileStatus, UploadTracker};
    use crate::domain::a003_analysis_result::AnalysisResult;
    use crate::shared::test_utils::TokioDelay;
    use crate::usecases::u502_document_pipeline::analyzer::{AnalysisError, SimulatedAnalyzer};
    use std::cell::RefCell;
    use std::future::Future;
    use std::time::Duration;
    use tokio::time::Instant;

    struct FailingAnalyzer;

    impl DocumentAnalyzer for FailingAnalyzer {
        fn analyze(
            &self,
            _file: &FileMeta,
        ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> {
            std::future::ready(Err(AnalysisError::Unavailable("timeout".into())))
        }
    }

    fn contract() -> FileMeta {
        FileMeta::new("contract.pdf", 4096, "application/pdf")
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_run_completes_with_analysis() {
        let timing = SimulationTiming::default();
        let analyzer = SimulatedAnalyzer::with_seed(TokioDelay, timing, 11);
        let tracker = RefCell::new(UploadTracker::new());
        let file = contract();
        let id = tracker.borrow_mut().accept(file.clone()).unwrap();

        let mut statuses = Vec::new();
        let mut progress_seen = Vec::new();
        let started = Instant::now();
        let outcome = run_pipeline(
            &file,
            &timing,
            &TokioDelay,
            &analyzer,
            &CancellationToken::new(),
            |event| {
                let mut tracker = tracker.borrow_mut();
                tracker.apply(id, event);
                let record = tracker.get(id).unwrap();
                statuses.push(record.status);
                progress_seen.push(record.progress);
            },
        )
        .await;

        assert_eq!(outcome, PipelineOutcome::Completed);
        // 11 ticks of 100ms, then 3..5s of analysis
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(1100 + 3000));
        assert!(elapsed < Duration::from_millis(1100 + 5000));

        assert!(progress_seen.windows(2).all(|w| w[0] <= w[1]));
        let first_analyzing = statuses
            .iter()
            .position(|s| *s == FileStatus::Analyzing)
            .unwrap();
        assert_eq!(progress_seen[first_analyzing], 100);
        assert!(statuses[..first_analyzing]
            .iter()
            .all(|s| *s == FileStatus::Uploading));

        let tracker = tracker.borrow();
        let record = tracker.get(id).unwrap();
        assert_eq!(record.status, FileStatus::Completed);
        assert_eq!(
            record.analysis.as_ref().unwrap().document_type,
            "Service Agreement"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_analyzer_reaches_error() {
        let timing = SimulationTiming::default();
        let mut tracker = UploadTracker::new();
        let file = contract();
        let id = tracker.accept(file.clone()).unwrap();

        let outcome = run_pipeline(
            &file,
            &timing,
            &TokioDelay,
            &FailingAnalyzer,
            &CancellationToken::new(),
            |event| {
                tracker.apply(id, event);
            },
        )
        .await;

        assert_eq!(outcome, PipelineOutcome::Failed);
        let record = tracker.get(id).unwrap();
        assert_eq!(record.status, FileStatus::Error);
        assert_eq!(record.progress, 100);
        assert_eq!(
            record.error.as_deref(),
            Some("analysis service unavailable: timeout")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_emission() {
        let timing = SimulationTiming::default();
        let analyzer = SimulatedAnalyzer::with_seed(TokioDelay, timing, 5);
        let file = contract();
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(450)).await;
            trigger.cancel();
        });

        let mut events = Vec::new();
        let outcome = run_pipeline(&file, &timing, &TokioDelay, &analyzer, &cancel, |event| {
            events.push(event)
        })
        .await;

        assert_eq!(outcome, PipelineOutcome::Cancelled);
        // ticks at 100, 200, 300, 400ms
        assert_eq!(
            events,
            vec![
                UploadEvent::Progress(0),
                UploadEvent::Progress(10),
                UploadEvent::Progress(20),
                UploadEvent::Progress(30),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_files_interleave() {
        let timing = SimulationTiming::default();
        let analyzer = SimulatedAnalyzer::with_seed(TokioDelay, timing, 9);
        let tracker = RefCell::new(UploadTracker::new());
        let lease = FileMeta::new("lease.docx", 1024, "text/plain");
        let nda = FileMeta::new("nda.txt", 1024, "text/plain");
        let a = tracker.borrow_mut().accept(lease.clone()).unwrap();
        let b = tracker.borrow_mut().accept(nda.clone()).unwrap();
        let cancel = CancellationToken::new();

        let (first, second) = tokio::join!(
            run_pipeline(&lease, &timing, &TokioDelay, &analyzer, &cancel, |e| {
                tracker.borrow_mut().apply(a, e);
            }),
            run_pipeline(&nda, &timing, &TokioDelay, &analyzer, &cancel, |e| {
                tracker.borrow_mut().apply(b, e);
            }),
        );

        assert_eq!(first, PipelineOutcome::Completed);
        assert_eq!(second, PipelineOutcome::Completed);
        let tracker = tracker.borrow();
        assert_eq!(tracker.completed().count(), 2);
        assert_eq!(
            tracker.get(b).unwrap().analysis.as_ref().unwrap().document_type,
            "Non-Disclosure Agreement"
        );
    }
}
