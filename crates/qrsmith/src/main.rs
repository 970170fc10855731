use dioxus::prelude::*;
use qrsmith_io::{DownloadPanel, QrSettings, surface};
use qrsmith_render::{QrRequest, render_qr};

/// Element id of the preview canvas; shared with the download panel.
const PREVIEW_CANVAS_ID: &str = "qr-preview";

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the form state and the generation lifecycle: every change to
/// the request re-renders the QR code onto the preview canvas, with the
/// output region hidden while an encode is in flight.
fn app() -> Element {
    // --- Application state ---
    let mut request = use_signal(QrRequest::default);
    let mut loading = use_signal(|| false);
    let mut generation = use_signal(|| 0u64);

    // --- Generation effect ---
    // Runs once at startup with the default form values and again on
    // every request change.
    use_effect(move || {
        let req = request();

        // Empty text never starts a generation; whatever is already on
        // the canvas stays visible and the loading state is untouched.
        if req.text.is_empty() {
            web_sys::console::error_1(&format!("invalid QR text: {:?}", req.text).into());
            return;
        }

        // Increment generation so any in-flight run from a prior
        // trigger knows it is stale and should discard its result.
        generation += 1;
        let my_generation = *generation.peek();

        loading.set(true);

        spawn(async move {
            // Yield to the browser event loop so the hidden/loading
            // state paints before the synchronous encode blocks the
            // thread.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = render_qr(&req);

            // A newer run superseded this one; let it own the UI state.
            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(image) => {
                    if let Err(e) = surface::canvas_by_id(PREVIEW_CANVAS_ID)
                        .and_then(|canvas| surface::paint(&canvas, &image))
                    {
                        web_sys::console::error_1(
                            &format!("failed to paint QR code: {e}").into(),
                        );
                    }
                }
                Err(e) => {
                    // Previous canvas content stays visible.
                    web_sys::console::error_1(&format!("{e}").into());
                }
            }

            // Clear the loading state on success and failure alike so
            // the output region never sticks in a hidden state.
            loading.set(false);
        });
    });

    // --- Form change handler ---
    let on_request_change = move |new_request: QrRequest| {
        request.set(new_request);
    };

    let visibility = if loading() { "hidden" } else { "" };
    let backdrop = request().background.as_str().to_owned();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { "qrsmith" }
                p { class: "tagline", "Type text, pick colors, download a QR code" }
            }

            main { class: "app-main",
                section { class: "settings",
                    QrSettings {
                        request: request(),
                        on_change: on_request_change,
                    }
                }

                section { class: "output",
                    // The backdrop follows the background color even
                    // when generation itself is skipped or fails.
                    div {
                        class: "qr-output-wrapper {visibility}",
                        style: "background-color: {backdrop};",
                        canvas { id: PREVIEW_CANVAS_ID, class: "qr-preview" }
                    }

                    DownloadPanel { canvas_id: PREVIEW_CANVAS_ID.to_string() }
                }
            }
        }
    }
}
