use dioxus::prelude::*;

use registration::FormConfig;
use ui::FormConfigProvider;
use views::{Home, Register, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/register")]
        Register {},
}

/// Form configuration baked into the binary.
const FORM_CONFIG: &str = include_str!("../registration.toml");

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .expect("Failed to start tokio runtime")
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    tracing_subscriber::fmt::init();

    api::configure_server(&FormConfig::from_toml_or_default(FORM_CONFIG));

    // Serves the app and the `register_buyer` server function
    let router = axum::Router::new().serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            return;
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router.into_make_service()).await {
        tracing::error!("Server error: {}", e);
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| FormConfig::from_toml_or_default(FORM_CONFIG));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::REGISTRATION_CSS }
        document::Title { "TrustAsset Hub" }

        FormConfigProvider {
            config: config,
            Router::<Route> {}
        }
    }
}
