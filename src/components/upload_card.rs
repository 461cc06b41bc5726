use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::error;
use dioxus::prelude::*;

use crate::candidate::UploadCandidate;

/// Upload zone accepting drag-drop or the file picker.
///
/// Both physical inputs funnel into the same ingestion path, so validation
/// happens once regardless of how the file arrived. A rejected file is
/// surfaced inline here and never reaches the session.
#[component]
pub fn UploadCard(busy: bool, on_select: EventHandler<UploadCandidate>) -> Element {
    let mut rejection = use_signal(|| Option::<String>::None);
    let mut dragover = use_signal(|| false);

    let ingest = move |files: Vec<FileData>| {
        let Some(file) = files.into_iter().next() else {
            return;
        };
        spawn(async move {
            let name = file.name();
            let media_type = file.content_type().unwrap_or_default();
            match file.read_bytes().await {
                Ok(bytes) => match UploadCandidate::new(name, media_type, bytes.to_vec()) {
                    Ok(candidate) => {
                        rejection.set(None);
                        on_select.call(candidate);
                    }
                    Err(e) => rejection.set(Some(e.to_string())),
                },
                Err(e) => {
                    error!("❌ Failed to read selected file: {e}");
                    rejection.set(Some(format!("Failed to read file: {e}")));
                }
            }
        });
    };

    let zone_class = if dragover() {
        "ll-upload-zone ll-upload-zone--dragover"
    } else {
        "ll-upload-zone"
    };

    rsx! {
        section { class: "ll-upload-section",
            div {
                class: zone_class,
                ondragover: move |evt| {
                    // Without this the browser navigates to the dropped file
                    evt.prevent_default();
                    // Fires continuously while hovering; only write on the edge
                    if !dragover() {
                        dragover.set(true);
                    }
                },
                ondragleave: move |_| dragover.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    dragover.set(false);
                    ingest(evt.files());
                },

                div { class: "ll-upload-content",
                    p { class: "ll-upload-text",
                        "Drag & drop an image here or click to browse"
                    }
                    p { class: "ll-upload-hint", "Supports: JPG, PNG, GIF, BMP" }
                }

                input {
                    class: "ll-file-input",
                    r#type: "file",
                    accept: "image/*",
                    multiple: false,
                    disabled: busy,
                    onchange: move |evt| ingest(evt.files()),
                }
            }

            if let Some(msg) = rejection.read().clone() {
                p { class: "ll-upload-rejection", "{msg}" }
            }
        }
    }
}
