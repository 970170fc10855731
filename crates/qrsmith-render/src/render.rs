//! Raster QR rendering on top of the `qrcode` crate.
//!
//! Symbol construction (mode selection, error-correction coding,
//! masking) is entirely the encoder's job; this module maps the form's
//! request onto the encoder's API and produces an RGBA raster ready to
//! paint onto a canvas.

use image::{Rgba, RgbaImage};
use qrcode::QrCode;

use crate::options::{EcLevel, QrRequest};

/// Pixels per QR module in the rendered raster.
const MODULE_PIXELS: u32 = 8;

/// Errors a render can produce.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The request carried no text. Checked before the encoder is
    /// invoked, so an empty request never starts a generation.
    #[error("nothing to encode: text is empty")]
    EmptyText,

    /// The encoder rejected the input (e.g. too long for any symbol
    /// version at the requested error-correction level).
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
}

/// Render a request to an RGBA raster.
///
/// Light modules (and the quiet zone) take the request's background
/// color, dark modules the foreground color. The raster is square and
/// includes the standard four-module quiet zone.
///
/// # Errors
///
/// Returns [`RenderError::EmptyText`] if the request's text is empty.
/// Returns [`RenderError::Encode`] if the encoder cannot fit the text.
pub fn render_qr(request: &QrRequest) -> Result<RgbaImage, RenderError> {
    if request.text.is_empty() {
        return Err(RenderError::EmptyText);
    }

    let code = QrCode::with_error_correction_level(request.text.as_bytes(), ec(request.level))?;

    let [br, bg, bb] = request.background.rgb();
    let [fr, fg, fb] = request.foreground.rgb();

    let image = code
        .render::<Rgba<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .dark_color(Rgba([fr, fg, fb, 255]))
        .light_color(Rgba([br, bg, bb, 255]))
        .build();

    Ok(image)
}

/// Map the form-level enum onto the encoder's.
const fn ec(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::L => qrcode::EcLevel::L,
        EcLevel::M => qrcode::EcLevel::M,
        EcLevel::Q => qrcode::EcLevel::Q,
        EcLevel::H => qrcode::EcLevel::H,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn request(text: &str) -> QrRequest {
        QrRequest {
            text: text.to_owned(),
            ..QrRequest::default()
        }
    }

    #[test]
    fn empty_text_is_rejected_before_encoding() {
        let result = render_qr(&request(""));
        assert!(matches!(result, Err(RenderError::EmptyText)));
    }

    #[test]
    fn render_produces_square_raster_on_module_grid() {
        let image = render_qr(&request("https://example.com")).unwrap();
        assert_eq!(image.width(), image.height(), "QR rasters are square");
        assert_eq!(
            image.width() % MODULE_PIXELS,
            0,
            "dimensions are a whole number of modules"
        );
        assert!(image.width() > 0);
    }

    #[test]
    fn colors_flow_into_the_raster() {
        let req = QrRequest {
            text: "https://example.com".to_owned(),
            level: EcLevel::M,
            background: HexColor::normalize("#ffee00").unwrap(),
            foreground: HexColor::normalize("#336699").unwrap(),
        };
        let image = render_qr(&req).unwrap();

        // (0, 0) sits inside the quiet zone, which is always light.
        assert_eq!(image.get_pixel(0, 0).0, [0xff, 0xee, 0x00, 0xff]);

        // Four quiet-zone modules in, the finder pattern corner is dark.
        let inset = 4 * MODULE_PIXELS;
        assert_eq!(image.get_pixel(inset, inset).0, [0x33, 0x66, 0x99, 0xff]);
    }

    #[test]
    fn every_level_renders() {
        for level in EcLevel::ALL {
            let req = QrRequest {
                text: "level sweep".to_owned(),
                level,
                ..QrRequest::default()
            };
            let result = render_qr(&req);
            assert!(result.is_ok(), "level {level} failed: {result:?}");
        }
    }

    #[test]
    fn higher_redundancy_never_shrinks_the_symbol() {
        // Same text at H needs at least as many modules as at L.
        let low = render_qr(&QrRequest {
            text: "redundancy comparison payload".to_owned(),
            level: EcLevel::L,
            ..QrRequest::default()
        })
        .unwrap();
        let high = render_qr(&QrRequest {
            text: "redundancy comparison payload".to_owned(),
            level: EcLevel::H,
            ..QrRequest::default()
        })
        .unwrap();
        assert!(high.width() >= low.width());
    }

    #[test]
    fn oversized_text_reports_encode_error() {
        // QR capacity tops out below 3000 bytes at level H.
        let req = QrRequest {
            text: "x".repeat(8000),
            level: EcLevel::H,
            ..QrRequest::default()
        };
        let result = render_qr(&req);
        assert!(matches!(result, Err(RenderError::Encode(_))));
    }
}
