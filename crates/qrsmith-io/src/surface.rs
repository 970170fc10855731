//! Canvas painting and serialization.
//!
//! The preview canvas is the drawable surface the QR raster is painted
//! onto and later exported from.  Painting resizes the canvas bitmap
//! to the raster's dimensions so exports are pixel-exact.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use image::RgbaImage;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Errors that can occur when painting or serializing the canvas.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// The canvas element is absent from the document.  A precondition
    /// violation in the page structure, not a runtime state to recover
    /// from.
    #[error("canvas #{0} not found in document")]
    MissingCanvas(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Look up the preview canvas by element id.
///
/// # Errors
///
/// Returns [`SurfaceError::MissingCanvas`] if no element with that id
/// exists or the element is not a `<canvas>`.
pub fn canvas_by_id(id: &str) -> Result<HtmlCanvasElement, SurfaceError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SurfaceError::JsError("no document".into()))?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingCanvas(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SurfaceError::MissingCanvas(id.to_owned()))
}

/// Paint an RGBA raster onto the canvas, replacing its content.
///
/// The canvas bitmap is resized to match the raster, so consecutive
/// paints of differently sized symbols never leave stale borders.
///
/// # Errors
///
/// Returns [`SurfaceError::JsError`] if the 2d context or `ImageData`
/// cannot be created.
pub fn paint(canvas: &HtmlCanvasElement, image: &RgbaImage) -> Result<(), SurfaceError> {
    canvas.set_width(image.width());
    canvas.set_height(image.height());

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| SurfaceError::JsError("no 2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::JsError("2d context has unexpected type".into()))?;

    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(image.as_raw().as_slice()),
        image.width(),
        image.height(),
    )?;
    context.put_image_data(&data, 0.0, 0.0)?;
    Ok(())
}

/// Serialize the canvas content as a data URI in the requested format.
///
/// The browser may silently substitute its default format for an
/// unsupported one; callers must negotiate against the returned URI's
/// declared type rather than trust the request.
///
/// # Errors
///
/// Returns [`SurfaceError::JsError`] if serialization fails (e.g., a
/// tainted canvas).
pub fn to_data_url(canvas: &HtmlCanvasElement, mime: &str) -> Result<String, SurfaceError> {
    Ok(canvas.to_data_url_with_type(mime)?)
}
