use dioxus::prelude::*;
use ui::LandingPage;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        LandingPage {
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}
