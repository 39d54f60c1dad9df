use dioxus::prelude::*;

use crate::components::{Input, Label};

/// One labelled form field with its inline error.
///
/// Holds no validation logic: changes and blurs are forwarded to the parent,
/// which decides what `error` to show.
#[component]
pub fn InputField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    error: Option<String>,
    oninput: EventHandler<String>,
    onblur: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), "{label}" }
            Input {
                id: id,
                r#type: r#type,
                value: value,
                invalid: error.is_some(),
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
                onblur: move |_| onblur.call(()),
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
