use dioxus::prelude::*;

/// Text-like `<input>` with the shared field styling. Marks itself invalid
/// when `invalid` is set.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    value: String,
    #[props(default)] invalid: bool,
    oninput: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    let input_type = r#type;
    let state_class = if invalid { "input input--invalid" } else { "input" };

    rsx! {
        input {
            id,
            r#type: input_type,
            class: state_class,
            value,
            "aria-invalid": invalid,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = onblur {
                    handler.call(evt);
                }
            },
        }
    }
}
