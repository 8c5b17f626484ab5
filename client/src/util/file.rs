//! Read a user-picked file into an upload part.
//!
//! Requires a browser environment; pages gate their upload handlers on the
//! `csr` feature.

#[cfg(feature = "csr")]
use portal::http::FilePart;

/// Bytes and metadata of the first file chosen in `input`, or `Ok(None)` if
/// the input is empty.
///
/// # Errors
///
/// Returns a display message if the browser fails to read the file.
#[cfg(feature = "csr")]
pub async fn read_selected(input: &web_sys::HtmlInputElement) -> Result<Option<FilePart>, String> {
    let Some(file) = input.files().and_then(|list| list.get(0)) else {
        return Ok(None);
    };
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| format!("Could not read {}.", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(FilePart { file_name: file.name(), content_type: file.type_(), bytes }))
}

/// Clear the picker after a successful upload so the same file can be sent
/// again.
#[cfg(feature = "csr")]
pub fn clear(input: &web_sys::HtmlInputElement) {
    input.set_value("");
}
