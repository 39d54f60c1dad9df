use dioxus::prelude::*;

use crate::icons::FaBuilding;
use crate::Icon;

/// Site header with the brand name. Clicking the brand calls `on_home`.
#[component]
pub fn Header(on_home: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-header-inner",
                button {
                    class: "brand",
                    r#type: "button",
                    onclick: move |_| on_home.call(()),
                    Icon { icon: FaBuilding, width: 28, height: 28 }
                    span { class: "brand-name", "TrustAsset Hub" }
                }
            }
        }
    }
}
