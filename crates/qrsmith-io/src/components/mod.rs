//! Dioxus components for the qrsmith form surface.

pub mod color_input;
pub mod export;
pub mod settings;

pub use color_input::ColorInputGroup;
pub use export::DownloadPanel;
pub use settings::QrSettings;
