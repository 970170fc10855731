//! qrsmith-render: Pure QR rendering and format negotiation (sans-IO).
//!
//! Turns a snapshot of the settings form into an RGBA raster and
//! resolves download formats against what the canvas actually
//! produced. This crate has **no browser dependencies** -- everything
//! here runs (and is tested) natively. Canvas, DOM, and download
//! interaction live in `qrsmith-io`.

pub mod color;
pub mod format;
pub mod options;
pub mod render;

pub use color::HexColor;
pub use format::{DownloadTarget, FormatError};
pub use options::{EcLevel, QrRequest};
pub use render::{RenderError, render_qr};
