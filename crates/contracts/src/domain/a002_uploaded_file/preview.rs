use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::aggregate::FileMeta;

/// Inline preview for image files, `None` for everything else
pub fn preview_data_url(file: &FileMeta, bytes: &[u8]) -> Option<String> {
    if !file.is_image() {
        return None;
    }
    Some(format!("data:{};base64,{}", file.mime_type, STANDARD.encode(bytes)))
}
