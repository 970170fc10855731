//! Paired free-text + native color picker input group.
//!
//! The picker (the parent-owned `value` prop) only ever holds a
//! normalized color; the text field is free-typed and may be
//! transiently invalid while the user edits.  The group keeps the two
//! consistent:
//!
//! - text live edit: a valid value is pushed to the picker immediately,
//!   an invalid one leaves the picker untouched
//! - text commit (blur/Enter): a valid value is pushed, an invalid one
//!   is discarded and the field reverts to the picker's value
//! - picker change: always overwrites the text field

use dioxus::prelude::*;
use qrsmith_render::HexColor;

/// Props for the [`ColorInputGroup`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ColorInputGroupProps {
    /// Id prefix for the two inputs (`<id>-text`, `<id>-picker`).
    id: String,
    /// Visible label for the group.
    label: String,
    /// Current normalized color, owned by the parent.
    value: HexColor,
    /// Fired whenever a valid color is selected or committed.
    on_change: EventHandler<HexColor>,
}

/// A text field synchronized with a native color picker.
#[component]
pub fn ColorInputGroup(props: ColorInputGroupProps) -> Element {
    // Seed the text field from the picker's value on mount.
    let mut text = use_signal(|| props.value.as_str().to_owned());

    let live_edit = move |e: FormEvent| {
        let typed = e.value();
        // Push only valid values; never overwrite the picker with
        // partial input while the user is still typing.
        if let Some(color) = HexColor::normalize(&typed) {
            props.on_change.call(color);
        }
        text.set(typed);
    };

    let picker_value = props.value.clone();
    let commit = move |e: FormEvent| match HexColor::normalize(&e.value()) {
        Some(color) => props.on_change.call(color),
        // Invalid commit: drop the edit and fall back to the picker.
        None => text.set(picker_value.as_str().to_owned()),
    };

    // The picker always wins over the text field, whether the change
    // came from the native UI or a programmatic value push.
    let mut mirror_picker = move |value: String| match HexColor::normalize(&value) {
        Some(color) => {
            text.set(color.as_str().to_owned());
            props.on_change.call(color);
        }
        None => {
            web_sys::console::warn_1(
                &format!("color picker produced a non-hex value: {value:?}").into(),
            );
        }
    };

    rsx! {
        div { class: "color-input-group",
            label { r#for: "{props.id}-text", class: "field-label", "{props.label}" }
            input {
                r#type: "text",
                id: "{props.id}-text",
                class: "color-text",
                spellcheck: "false",
                value: "{text}",
                oninput: live_edit,
                onchange: commit,
            }
            input {
                r#type: "color",
                id: "{props.id}-picker",
                class: "color-picker",
                value: "{props.value.as_str()}",
                oninput: move |e: FormEvent| mirror_picker(e.value()),
                onchange: move |e: FormEvent| mirror_picker(e.value()),
            }
        }
    }
}
