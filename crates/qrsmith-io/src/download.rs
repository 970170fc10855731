//! File download via data URIs.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads by pointing a temporary `<a>` element at a data URI and
//! programmatically clicking it.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a file download of `data_url` under `filename`.
///
/// Creates a temporary `<a download="filename">` element pointing at
/// the data URI and programmatically clicks it.  The browser's native
/// download flow takes over from there; there is no completion or
/// failure signal past the click.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., element creation, missing document body).
pub fn trigger_download(data_url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(data_url);
    anchor.set_download(filename);

    // Append to body, click, and remove.
    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    // Failures here should not be reported as "download failed".
    let _ = body.remove_child(&anchor);

    Ok(())
}
