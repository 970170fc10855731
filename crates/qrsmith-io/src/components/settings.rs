//! The QR settings form.
//!
//! Presents the text input, the error-correction select, and the two
//! color groups.  The form is stateless: it receives the current
//! request and fires `on_change` with a replacement whenever any field
//! changes, leaving regeneration to the app.

use dioxus::prelude::*;
use qrsmith_render::{EcLevel, QrRequest};

use super::color_input::ColorInputGroup;

/// Props for the [`QrSettings`] component.
#[derive(Props, Clone, PartialEq)]
pub struct QrSettingsProps {
    /// Current form state (read-only).
    request: QrRequest,
    /// Callback fired when any field changes.
    on_change: EventHandler<QrRequest>,
}

/// Settings form for text, error-correction level, and colors.
#[component]
pub fn QrSettings(props: QrSettingsProps) -> Element {
    let on_change = props.on_change;
    let request_text = props.request.clone();
    let request_level = props.request.clone();
    let request_background = props.request.clone();
    let request_foreground = props.request.clone();

    rsx! {
        div { class: "settings-panel",
            div { class: "field",
                label { r#for: "qr-text-input", class: "field-label", "Text" }
                input {
                    r#type: "text",
                    id: "qr-text-input",
                    class: "text-input",
                    placeholder: "Text or URL to encode",
                    value: "{props.request.text}",
                    onchange: move |e: FormEvent| {
                        let mut r = request_text.clone();
                        r.text = e.value();
                        on_change.call(r);
                    },
                }
            }

            div { class: "field",
                label { r#for: "qr-error-correction", class: "field-label",
                    "Error correction"
                }
                select {
                    id: "qr-error-correction",
                    class: "level-select",
                    value: "{props.request.level}",
                    onchange: move |e: FormEvent| {
                        let mut r = request_level.clone();
                        // Select options are generated from ALL, so an
                        // unknown value only appears if the DOM was
                        // tampered with; fall back to the default.
                        r.level = EcLevel::from_code(&e.value()).unwrap_or_default();
                        on_change.call(r);
                    },

                    for level in EcLevel::ALL {
                        option {
                            value: "{level.code()}",
                            selected: level == props.request.level,
                            "{level.label()}"
                        }
                    }
                }
            }

            ColorInputGroup {
                id: "qr-background-color",
                label: "Background",
                value: props.request.background.clone(),
                on_change: move |color| {
                    let mut r = request_background.clone();
                    r.background = color;
                    on_change.call(r);
                },
            }

            ColorInputGroup {
                id: "qr-foreground-color",
                label: "Foreground",
                value: props.request.foreground.clone(),
                on_change: move |color| {
                    let mut r = request_foreground.clone();
                    r.foreground = color;
                    on_change.call(r);
                },
            }
        }
    }
}
