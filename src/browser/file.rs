//! Image File Reading

use async_trait::async_trait;
use ecoleta_core::{ApiError, ApiResult, ImageSource, UploadedImage};
use wasm_bindgen_futures::JsFuture;

use super::describe_js_error;

/// A file chosen in the dropzone, read when the form is posted
pub struct PickedFile(pub web_sys::File);

#[async_trait(?Send)]
impl ImageSource for PickedFile {
    async fn read_image(&self) -> ApiResult<UploadedImage> {
        read_file(&self.0).await
    }
}

/// Read a picked `File` fully into memory
async fn read_file(file: &web_sys::File) -> ApiResult<UploadedImage> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ApiError::File(describe_js_error(&e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    log::debug!("[FILE] Read {} ({} bytes)", file.name(), bytes.len());
    Ok(UploadedImage {
        file_name: file.name(),
        content_type: file.type_(),
        bytes,
    })
}
