//! Attachment section for the post detail page
//!
//! Shows the attached file with a save-a-copy action, renders image
//! attachments inline, and gives the author a picker to attach or
//! replace the file.

use dioxus::prelude::*;
use educonnect_core::{PostId, ResourceRef, ALLOWED_EXTENSIONS};
use rfd::FileDialog;

use crate::context::use_engine;

#[component]
pub fn ResourceSection(
    /// Post the attachment belongs to
    post_id: PostId,
    /// Current attachment, if any
    resource: Option<ResourceRef>,
    /// Authors get the attach / replace picker
    is_author: bool,
    /// Callback with the new reference after a successful attach
    on_attached: EventHandler<ResourceRef>,
) -> Element {
    let engine = use_engine();
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut image_uri = use_signal(|| Option::<String>::None);

    // Render image attachments inline as a data URI
    let inline_target = resource.clone();
    use_effect(move || {
        let target = inline_target.clone();
        spawn(async move {
            let Some(res) = target else {
                image_uri.set(None);
                return;
            };
            if !res.is_image() {
                image_uri.set(None);
                return;
            }

            let shared = engine();
            let guard = shared.read().await;
            if let Some(ref eng) = *guard {
                match eng.load_resource(&res.hash) {
                    Ok(data) => {
                        use base64::Engine;
                        let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
                        let ext = res.extension().unwrap_or_else(|| "png".to_string());
                        image_uri.set(Some(format!("data:image/{};base64,{}", ext, encoded)));
                    }
                    Err(e) => {
                        error.set(Some(format!("Failed to load attachment: {}", e)));
                    }
                }
            }
        });
    });

    let attach_pid = post_id.clone();
    let handle_attach = move |_| {
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        let post_id = attach_pid.clone();
        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("study files", ALLOWED_EXTENSIONS)
                    .set_title("Attach a file")
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => {
                    let filename = path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("attachment")
                        .to_string();

                    match tokio::fs::read(&path).await {
                        Ok(data) => {
                            let shared = engine();
                            let mut guard = shared.write().await;
                            if let Some(ref mut eng) = *guard {
                                match eng.attach_resource(&post_id, &filename, data) {
                                    Ok(res) => on_attached.call(res),
                                    Err(e) => error.set(Some(format!("{}", e))),
                                }
                            }
                        }
                        Err(e) => {
                            error.set(Some(format!("Failed to read file: {}", e)));
                        }
                    }
                }
                Ok(None) => {
                    // User cancelled
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {}", e)));
                }
            }
            busy.set(false);
        });
    };

    let save_target = resource.clone();
    let handle_save = move |_| {
        let Some(res) = save_target.clone() else {
            return;
        };
        if busy() {
            return;
        }
        busy.set(true);
        error.set(None);

        spawn(async move {
            let bytes = {
                let shared = engine();
                let guard = shared.read().await;
                match guard.as_ref() {
                    Some(eng) => eng.load_resource(&res.hash),
                    None => {
                        busy.set(false);
                        return;
                    }
                }
            };

            match bytes {
                Ok(data) => {
                    let filename = res.filename.clone();
                    let dest = tokio::task::spawn_blocking(move || {
                        FileDialog::new()
                            .set_file_name(&filename)
                            .set_title("Save a copy")
                            .save_file()
                    })
                    .await;

                    if let Ok(Some(dest)) = dest {
                        if let Err(e) = tokio::fs::write(&dest, &data).await {
                            error.set(Some(format!("Failed to save file: {}", e)));
                        }
                    }
                }
                Err(e) => {
                    error.set(Some(format!("{}", e)));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "resource-section",
            if let Some(ref res) = resource {
                div { class: "attachment-chip",
                    span { "\u{1F4CE} {res.filename}" }
                    span { class: "attachment-size", "{format_size(res.size)}" }
                    button {
                        r#type: "button",
                        class: "btn-badge",
                        disabled: busy(),
                        onclick: handle_save,
                        "Save a copy"
                    }
                }

                if let Some(uri) = image_uri() {
                    img {
                        class: "attachment-image",
                        src: "{uri}",
                        alt: "{res.filename}",
                    }
                }
            }

            if is_author {
                button {
                    r#type: "button",
                    class: "btn-ghost",
                    disabled: busy(),
                    onclick: handle_attach,
                    if busy() {
                        "Working..."
                    } else if resource.is_some() {
                        "Replace file"
                    } else {
                        "Attach a file"
                    }
                }
                span { class: "muted", " PDF, images, and office docs up to 10 MB." }
            }

            if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            }
        }
    }
}

/// Human-readable size for attachment chips
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
