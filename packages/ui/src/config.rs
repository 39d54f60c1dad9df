//! Form configuration context for the UI.

use dioxus::prelude::*;
use registration::FormConfig;

/// Get the form configuration provided by [`FormConfigProvider`].
pub fn use_form_config() -> Signal<FormConfig> {
    use_context::<Signal<FormConfig>>()
}

/// Provider component that makes `config` available to the registration views.
#[component]
pub fn FormConfigProvider(config: FormConfig, children: Element) -> Element {
    let config = use_signal(move || config);
    use_context_provider(|| config);

    rsx! {
        {children}
    }
}
