use contracts::domain::a002_uploaded_file::{FileStatus, UploadedFileId};
use leptos::prelude::*;
use thaw::*;

use super::view_model::UploadVm;

/// css modifiers for the status label and the progress bar
fn status_tone(status: FileStatus) -> (&'static str, &'static str) {
    match status {
        FileStatus::Uploading | FileStatus::Analyzing => ("file-row__status--progress", ""),
        FileStatus::Completed => ("file-row__status--done", "progress__bar--done"),
        FileStatus::Error => ("file-row__status--error", "progress__bar--error"),
    }
}

#[component]
pub fn FileRow(vm: UploadVm, id: UploadedFileId) -> impl IntoView {
    let record = Memo::new(move |_| vm.tracker.with(|t| t.get(id).cloned()));

    move || {
        record.get().map(|record| {
            let (label_tone, bar_tone) = status_tone(record.status);
            let analyzing = record.status == FileStatus::Analyzing;
            view! {
                <div class="file-row">
                    <div class="file-row__head">
                        <div style="display: flex; align-items: center; gap: 12px;">
                            {record.preview.clone().map(|src| {
                                view! { <img class="file-row__preview" src=src alt="Preview" /> }
                            })}
                            <div>
                                <div style="font-weight: 500;">{record.file.name.clone()}</div>
                                <div style="font-size: 14px; color: var(--gray-500);">
                                    {record.file.size_label()}
                                </div>
                            </div>
                        </div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            attr:style="color: var(--red);"
                            on_click=move |_| vm.remove(id)
                        >
                            "Remove"
                        </Button>
                    </div>

                    <div class=format!("file-row__status {}", label_tone)>
                        <span>{record.status.label()}</span>
                        <span>{format!("{}%", record.progress)}</span>
                    </div>
                    <div class="progress">
                        <div
                            class=format!("progress__bar {}", bar_tone)
                            style=format!("width: {}%;", record.progress)
                        ></div>
                    </div>

                    {analyzing.then(|| view! {
                        <div style="display: flex; align-items: center; gap: 8px; margin-top: 8px; font-size: 14px; color: var(--brand);">
                            <span class="typing typing--small"><span></span><span></span><span></span></span>
                            <span>"AI analyzing document..."</span>
                        </div>
                    })}

                    {record.error.clone().map(|e| view! {
                        <div style="margin-top: 8px; font-size: 13px; color: var(--red);">{e}</div>
                    })}
                </div>
            }
        })
    }
}
