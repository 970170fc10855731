//! Download panel: format select and download trigger.

use dioxus::prelude::*;
use qrsmith_render::format::{self, FormatError};

use crate::download::{self, DownloadError};
use crate::surface::{self, SurfaceError};

/// Formats offered in the download select.  These are requests, not
/// guarantees: the browser may substitute its default, and negotiation
/// runs against the data URI it actually produces.
const FORMAT_OPTIONS: &[(&str, &str)] = &[
    ("image/png", "PNG"),
    ("image/jpeg", "JPEG"),
    ("image/webp", "WebP"),
];

/// Base filename for downloaded files; the extension is negotiated.
const DOWNLOAD_BASENAME: &str = "qrcode";

/// Props for the [`DownloadPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DownloadPanelProps {
    /// Element id of the canvas holding the rendered QR code.
    canvas_id: String,
}

/// Everything that can abort a download.
#[derive(Debug, thiserror::Error)]
enum ExportError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Format select plus a download button for the rendered QR code.
#[component]
pub fn DownloadPanel(props: DownloadPanelProps) -> Element {
    let mut selected_format = use_signal(|| FORMAT_OPTIONS[0].0.to_owned());
    let mut export_error = use_signal(|| Option::<String>::None);

    let on_download = {
        let canvas_id = props.canvas_id.clone();
        move |_| match export_canvas(&canvas_id, &selected_format()) {
            Ok(()) => export_error.set(None),
            Err(e) => export_error.set(Some(format!("Download failed: {e}"))),
        }
    };

    rsx! {
        div { class: "download-panel",
            if let Some(ref err) = export_error() {
                p { class: "export-error", "{err}" }
            }

            label { r#for: "qr-download-format", class: "field-label", "Format" }
            select {
                id: "qr-download-format",
                class: "format-select",
                value: "{selected_format}",
                onchange: move |e: FormEvent| {
                    selected_format.set(e.value());
                },

                for (value, display) in FORMAT_OPTIONS {
                    option {
                        value: "{value}",
                        selected: *value == selected_format(),
                        "{display}"
                    }
                }
            }

            button {
                id: "qr-download-btn",
                class: "download-button",
                onclick: on_download,
                "Download"
            }
        }
    }
}

/// Serialize the canvas in the requested format and hand the result to
/// the browser's native download flow.
///
/// The file is named after the *negotiated* format, so a browser that
/// substitutes PNG for an unsupported request still produces a
/// correctly named `qrcode.png`.  A produced format outside the known
/// table aborts the download instead of shipping a malformed filename.
fn export_canvas(canvas_id: &str, requested: &str) -> Result<(), ExportError> {
    let canvas = surface::canvas_by_id(canvas_id)?;
    let data_url = surface::to_data_url(&canvas, requested)?;
    let target = format::negotiate(requested, &data_url)?;

    if target.substituted {
        web_sys::console::warn_1(
            &format!(
                "requested format {requested} cannot be generated with this browser, \
                 defaulting to {}",
                target.mime
            )
            .into(),
        );
    }

    download::trigger_download(&data_url, &format!("{DOWNLOAD_BASENAME}.{}", target.extension))?;
    Ok(())
}
