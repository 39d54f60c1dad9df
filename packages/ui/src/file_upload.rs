use dioxus::prelude::*;
use registration::models::data_url;
use registration::ProfilePicture;

use crate::components::Label;

/// Image picker with a local preview.
///
/// The file is read asynchronously; once the read finishes the preview is
/// shown and `on_file_change` receives a reference to the file. Reads are not
/// cancelled, so a slow read that completes after a newer one still wins.
#[component]
pub fn FileUpload(
    #[props(default = "profile-picture".to_string())] id: String,
    on_file_change: EventHandler<ProfilePicture>,
    #[props(default)] error: Option<String>,
) -> Element {
    let mut preview = use_signal(|| Option::<String>::None);

    let handle_change = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        let content_type = file.content_type();

        match file.read_bytes().await {
            Ok(bytes) => {
                preview.set(Some(data_url(content_type.as_deref(), &bytes)));
                on_file_change.call(ProfilePicture {
                    file_name,
                    content_type,
                    size: bytes.len() as u64,
                });
            }
            Err(e) => {
                tracing::error!("Failed to read {}: {}", file_name, e);
            }
        }
    };

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "Profile Picture" }
            input {
                id,
                r#type: "file",
                accept: "image/*",
                class: "file-input",
                onchange: handle_change,
            }
            if let Some(src) = preview() {
                img { class: "file-preview", src: "{src}", alt: "Preview" }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
