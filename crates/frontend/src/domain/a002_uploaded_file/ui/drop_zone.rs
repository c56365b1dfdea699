use contracts::domain::a002_uploaded_file::ACCEPT_ATTRIBUTE;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use super::model::files_from_list;
use super::view_model::UploadVm;

#[component]
pub fn DropZone(vm: UploadVm) -> impl IntoView {
    let zone_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.dragging.set(true);
    };

    let on_drag_leave = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        // уход на дочерний элемент - не выход из зоны
        let still_inside = match (zone_ref.get_untracked(), ev.related_target()) {
            (Some(zone), Some(target)) => target
                .dyn_ref::<web_sys::Node>()
                .map(|node| zone.contains(Some(node)))
                .unwrap_or(false),
            _ => false,
        };
        if !still_inside {
            vm.dragging.set(false);
        }
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        vm.dragging.set(false);
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| files_from_list(&list))
            .unwrap_or_default();
        vm.add_files(files);
    };

    let on_change = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(list) = input.files() {
            vm.add_files(files_from_list(&list));
        }
        // иначе повторный выбор того же файла не сработает
        input.set_value("");
    };

    view! {
        <div
            node_ref=zone_ref
            class="drop-zone"
            class:drop-zone--active=move || vm.dragging.get()
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div style="font-size: 36px; color: var(--gray-400);">"📄"</div>
            <h3 style="font-size: 18px; font-weight: 500; margin: 16px 0 8px;">
                {move || {
                    if vm.dragging.get() { "Drop files here" } else { "Upload your documents" }
                }}
            </h3>
            <p style="color: var(--gray-500);">
                "Drag and drop files here, or "
                <button
                    class="drop-zone__browse"
                    on:click=move |_| {
                        if let Some(input) = input_ref.get_untracked() {
                            input.click();
                        }
                    }
                >
                    "browse files"
                </button>
            </p>
            <div class="drop-zone__hint">"Supported: PDF, DOC, DOCX, TXT, JPG, PNG (max 10MB each)"</div>
            <input
                node_ref=input_ref
                type="file"
                multiple
                accept=ACCEPT_ATTRIBUTE
                style="display: none;"
                on:change=on_change
            />
        </div>
    }
}
