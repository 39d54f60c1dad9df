use dioxus::prelude::*;

use crate::components::Label;

/// Labelled `<select>` with an empty placeholder option.
#[component]
pub fn PreferenceSelector(
    id: String,
    label: Element,
    value: String,
    options: Vec<String>,
    #[props(default = "Select a location".to_string())] placeholder: String,
    #[props(default)] error: Option<String>,
    onchange: EventHandler<String>,
) -> Element {
    let state_class = if error.is_some() { "select select--invalid" } else { "select" };

    rsx! {
        div {
            class: "field",
            Label { html_for: id.clone(), {label} }
            select {
                id,
                class: state_class,
                value,
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", "{placeholder}" }
                for opt in options {
                    option {
                        key: "{opt}",
                        value: "{opt}",
                        "{opt}"
                    }
                }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
