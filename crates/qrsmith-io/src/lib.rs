//! qrsmith-io: Browser I/O and Dioxus component library.
//!
//! Canvas painting and serialization, data-URI file downloads, and the
//! settings-form components for the qrsmith web application. All
//! browser interaction lives here; the rendering logic itself is in
//! `qrsmith-render`.

pub mod components;
pub mod download;
pub mod surface;

pub use components::{ColorInputGroup, DownloadPanel, QrSettings};
