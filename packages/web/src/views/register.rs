//! Registration page view with the two-step buyer form.

use dioxus::prelude::*;
use ui::BuyerRegistrationForm;

/// Register page component.
#[component]
pub fn Register() -> Element {
    rsx! {
        div {
            class: "register-page",
            BuyerRegistrationForm {}
        }
    }
}
