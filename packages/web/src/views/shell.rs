use dioxus::prelude::*;
use ui::{Footer, Header};

use crate::Route;

/// Header and footer around every page.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "app",
            Header {
                on_home: move |_| {
                    nav.push(Route::Home {});
                },
            }
            main {
                class: "app-main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
