//! Document upload - View Model

use std::collections::HashMap;
use std::sync::Arc;

use contracts::domain::a002_uploaded_file::{
    FileMeta, FileRejection, UploadTracker, UploadedFileId,
};
use contracts::shared::timing::SimulationTiming;
use contracts::usecases::u502_document_pipeline::{run_pipeline, SimulatedAnalyzer};
use leptos::prelude::*;
use leptos::task::spawn_local;
use tokio_util::sync::CancellationToken;
use web_sys::File;

use super::model;
use crate::shared::delay::GlooDelay;
use crate::shared::tasks::TaskScope;

#[derive(Clone, Copy)]
pub struct UploadVm {
    pub tracker: RwSignal<UploadTracker>,
    pub rejections: RwSignal<Vec<FileRejection>>,
    pub dragging: RwSignal<bool>,
    timing: SimulationTiming,
    analyzer: StoredValue<Arc<SimulatedAnalyzer<GlooDelay>>>,
    tasks: TaskScope,
    running: StoredValue<HashMap<UploadedFileId, CancellationToken>>,
}

impl UploadVm {
    /// Must be created inside the upload component: all pipelines are
    /// cancelled when it is cleaned up.
    pub fn new() -> Self {
        let timing = SimulationTiming::default();
        Self {
            tracker: RwSignal::new(UploadTracker::new()),
            rejections: RwSignal::new(Vec::new()),
            dragging: RwSignal::new(false),
            timing,
            analyzer: StoredValue::new(Arc::new(SimulatedAnalyzer::new(GlooDelay, timing))),
            tasks: TaskScope::new(),
            running: StoredValue::new(HashMap::new()),
        }
    }

    /// Picker and drop both end up here. Rejected files are reported, the
    /// rest start processing independently.
    pub fn add_files(&self, files: Vec<File>) {
        for file in files {
            let meta = model::file_meta(&file);
            match self.tracker.try_update(|t| t.accept(meta.clone())) {
                Some(Ok(id)) => {
                    log::info!("upload: accepted {} ({})", meta.name, meta.size_label());
                    self.start(id, file, meta);
                }
                Some(Err(rejection)) => {
                    log::warn!("upload: {}", rejection);
                    self.rejections.update(|list| list.push(rejection));
                }
                None => {}
            }
        }
    }

    fn start(&self, id: UploadedFileId, file: File, meta: FileMeta) {
        let Some(analyzer) = self.analyzer.try_get_value() else {
            return;
        };
        let cancel = self.tasks.child();
        self.running.update_value(|running| {
            running.insert(id, cancel.clone());
        });

        let tracker = self.tracker;
        let running = self.running;
        let timing = self.timing;

        if meta.is_image() {
            let cancel = cancel.clone();
            let meta = meta.clone();
            spawn_local(async move {
                match cancel.run_until_cancelled(model::read_preview(&file, &meta)).await {
                    Some(Ok(Some(url))) => {
                        let _ = tracker.try_update(|t| t.set_preview(id, url));
                    }
                    Some(Err(e)) => log::warn!("upload: no preview for {}: {}", meta.name, e),
                    _ => {}
                }
            });
        }

        spawn_local(async move {
            let outcome = run_pipeline(
                &meta,
                &timing,
                &GlooDelay,
                analyzer.as_ref(),
                &cancel,
                |event| {
                    let _ = tracker.try_update(|t| t.apply(id, event));
                },
            )
            .await;
            let _ = running.try_update_value(|running| running.remove(&id));
            log::info!("upload: {} -> {:?}", meta.name, outcome);
        });
    }

    /// Removes the record at any status and stops its timers
    pub fn remove(&self, id: UploadedFileId) {
        if let Some(token) = self
            .running
            .try_update_value(|running| running.remove(&id))
            .flatten()
        {
            token.cancel();
        }
        self.tracker.update(|t| {
            t.remove(id);
        });
    }

    pub fn dismiss_rejection(&self, index: usize) {
        self.rejections.update(|list| {
            if index < list.len() {
                list.remove(index);
            }
        });
    }
}
