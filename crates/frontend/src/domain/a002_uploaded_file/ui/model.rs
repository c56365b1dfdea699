//! Browser file glue: `web_sys::File` -> `FileMeta`, preview bytes

use contracts::domain::a002_uploaded_file::{preview_data_url, FileMeta};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileList};

pub fn file_meta(file: &File) -> FileMeta {
    // size приходит как f64
    FileMeta::new(file.name(), file.size().max(0.0) as u64, file.type_())
}

pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Reads the whole file and builds a data URL; `None` for non-images
pub async fn read_preview(file: &File, meta: &FileMeta) -> Result<Option<String>, String> {
    if !meta.is_image() {
        return Ok(None);
    }
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(preview_data_url(meta, &bytes))
}
