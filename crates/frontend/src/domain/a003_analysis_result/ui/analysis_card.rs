use contracts::domain::a002_uploaded_file::UploadedFileRecord;
use contracts::domain::a003_analysis_result::{AnalysisDetails, RiskLevel};
use leptos::prelude::*;
use thaw::*;

/// Key points shown before "View Full Analysis"
const KEY_POINTS_PREVIEW: usize = 3;

pub fn risk_badge_color(risk: RiskLevel) -> BadgeColor {
    match risk {
        RiskLevel::High => BadgeColor::Danger,
        RiskLevel::Medium => BadgeColor::Warning,
        RiskLevel::Low => BadgeColor::Success,
    }
}

fn bullet_list(items: Vec<String>) -> impl IntoView {
    view! {
        <ul class="result__list">
            {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
        </ul>
    }
}

fn details_view(details: AnalysisDetails) -> impl IntoView {
    let rows = [
        ("Parties", details.parties),
        ("Key dates", details.dates),
        ("Amounts", details.amounts),
        ("Obligations", details.obligations),
    ];
    rows.into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| {
            view! {
                <h5 class="result__heading">{title}</h5>
                {bullet_list(items)}
            }
        })
        .collect_view()
}

/// Result of one completed file in the sidebar
#[component]
pub fn AnalysisCard(record: UploadedFileRecord) -> impl IntoView {
    let expanded = RwSignal::new(false);
    let name = record.file.name.clone();

    let Some(analysis) = record.analysis else {
        return view! { <div class="result">{name}</div> }.into_any();
    };
    let analysis = StoredValue::new(analysis);

    view! {
        <div class="result">
            <div class="result__name" title=name.clone()>{name.clone()}</div>
            <div class="result__meta">
                "Type: "
                <strong>{analysis.with_value(|a| a.document_type.clone())}</strong>
            </div>
            <div class="result__meta" style="display: flex; align-items: center; gap: 8px;">
                "Risk Level: "
                {analysis.with_value(|a| {
                    let risk = a.risk_level;
                    view! {
                        <Badge appearance=BadgeAppearance::Tint color=risk_badge_color(risk)>
                            {risk.as_str()}
                        </Badge>
                    }
                })}
            </div>

            <h5 class="result__heading">"Summary"</h5>
            <p class="result__text">{analysis.with_value(|a| a.summary.clone())}</p>

            <h5 class="result__heading">"Key Points"</h5>
            {move || {
                let limit = if expanded.get() { usize::MAX } else { KEY_POINTS_PREVIEW };
                bullet_list(analysis.with_value(|a| {
                    a.key_points.iter().take(limit).cloned().collect()
                }))
            }}

            <Show when=move || expanded.get()>
                {details_view(analysis.with_value(|a| a.details.clone()))}
                <h5 class="result__heading">"Recommendations"</h5>
                {bullet_list(analysis.with_value(|a| a.recommendations.clone()))}
            </Show>

            <div style="margin-top: 16px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    attr:style="width: 100%;"
                    on_click=move |_| expanded.update(|e| *e = !*e)
                >
                    {move || if expanded.get() { "Hide Details" } else { "View Full Analysis" }}
                </Button>
            </div>
        </div>
    }
    .into_any()
}
