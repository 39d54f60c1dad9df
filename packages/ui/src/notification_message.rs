use dioxus::prelude::*;

use crate::icons::FaCircleCheck;
use crate::Icon;

/// Success notification that replaces the wizard once a registration is in.
#[component]
pub fn NotificationMessage(message: String) -> Element {
    rsx! {
        div {
            class: "notification",
            div {
                class: "notification-title",
                Icon { icon: FaCircleCheck, width: 24, height: 24 }
                p { "{message}" }
            }
            p {
                class: "notification-body",
                "Our AI-powered system will analyze your preferences and match you with the best available options. You'll receive personalized recommendations shortly."
            }
        }
    }
}
