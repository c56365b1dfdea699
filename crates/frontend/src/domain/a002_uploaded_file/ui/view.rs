//! Document upload - View Component

use contracts::domain::a002_uploaded_file::FileRejection;
use leptos::prelude::*;
use thaw::*;

use super::drop_zone::DropZone;
use super::file_row::FileRow;
use super::view_model::UploadVm;
use crate::domain::a003_analysis_result::ui::AnalysisCard;
use crate::layout::{Footer, Header};
use crate::shared::icons::icon;

/// Position is part of the key: dismissing a notice shifts the ones after it
fn rejection_key(idx: usize, rejection: &FileRejection) -> String {
    format!("{}-{}", idx, rejection)
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let vm = UploadVm::new();

    let record_ids = move || {
        vm.tracker
            .with(|t| t.records().iter().map(|r| r.id).collect::<Vec<_>>())
    };
    let completed = move || vm.tracker.with(|t| t.completed().cloned().collect::<Vec<_>>());
    let rejection_items = move || {
        vm.rejections
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div style="min-height: 100vh; background: var(--gray-50);">
            <Header />
            <main class="container page">
                <div style="margin-bottom: 32px;">
                    <h1 class="page__title">"Document Analysis"</h1>
                    <p class="page__lead">"Upload legal documents for AI-powered analysis and insights"</p>
                </div>

                <div class="upload-layout">
                    <div style="display: flex; flex-direction: column; gap: 24px;">
                        <Card>
                            <h3 style="margin: 0;">"Upload Documents"</h3>
                            <p style="margin: 0; font-size: 14px; color: var(--gray-500);">
                                "Drag and drop files here or click to browse. Supports PDF, DOC, DOCX, TXT, JPG, PNG up to 10MB."
                            </p>
                            <DropZone vm=vm />
                            <For
                                each=rejection_items
                                key=|(idx, rejection)| rejection_key(*idx, rejection)
                                let:item
                            >
                                {{
                                    let (idx, rejection) = item;
                                    view! {
                                        <MessageBar intent=MessageBarIntent::Warning>
                                            <div style="display: flex; justify-content: space-between; align-items: center; width: 100%;">
                                                <span>{rejection.to_string()}</span>
                                                <Button
                                                    appearance=ButtonAppearance::Transparent
                                                    size=ButtonSize::Small
                                                    on_click=move |_| vm.dismiss_rejection(idx)
                                                >
                                                    {icon("close")}
                                                </Button>
                                            </div>
                                        </MessageBar>
                                    }
                                }}
                            </For>
                        </Card>

                        <Show when=move || !vm.tracker.with(|t| t.is_empty())>
                            <Card>
                                <h3 style="margin: 0;">"Processing Files"</h3>
                                <div style="display: flex; flex-direction: column; gap: 16px;">
                                    <For each=record_ids key=|id| *id let:id>
                                        <FileRow vm=vm id=id />
                                    </For>
                                </div>
                            </Card>
                        </Show>
                    </div>

                    <div class="results">
                        <Card>
                            <h3 style="margin: 0;">"Analysis Results"</h3>
                            <p style="margin: 0; font-size: 14px; color: var(--gray-500);">
                                "AI-powered insights from your documents"
                            </p>
                            <Show
                                when=move || vm.tracker.with(|t| t.completed().next().is_some())
                                fallback=|| view! {
                                    <div class="empty-state">
                                        <div style="margin-bottom: 8px;">{icon("robot")}</div>
                                        <p>"Upload documents to see AI analysis results here"</p>
                                    </div>
                                }
                            >
                                <For each=completed key=|record| record.id let:record>
                                    <AnalysisCard record=record />
                                </For>
                            </Show>
                        </Card>
                    </div>
                </div>
            </main>
            <Footer />
        </div>
    }
}
