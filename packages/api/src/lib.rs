//! # API crate — buyer registration endpoint and gateways
//!
//! Defines the Dioxus server function the registration form submits to, along
//! with the [`SubmissionGateway`] implementations the UI picks from.
//!
//! ## Server functions exposed here
//!
//! `register_buyer` is annotated with `#[post(...)]` and compiled twice: once
//! with the server logic (behind `#[cfg(feature = "server")]`) and once as a
//! client stub that forwards the call over HTTP. There is no backend behind
//! it; the server waits the configured delay and echoes the request. The
//! server binary hands its [`FormConfig`] over once with [`configure_server`]
//! so both gateways share one `delay_ms`.
//!
//! ## Gateways
//!
//! | Type | Behaviour |
//! |------|-----------|
//! | [`SimulatedGateway`] | Waits the configured delay in the client and echoes. Needs no server. |
//! | [`ServerGateway`] | Calls `register_buyer`. |
//! | [`Gateway`] | Either of the above, chosen from [`FormConfig`]. |

use std::sync::OnceLock;
use std::time::Duration;

use dioxus::prelude::*;
use registration::{
    BuyerRegistration, FormConfig, GatewayKind, RegistrationResponse, SubmissionError,
    SubmissionGateway,
};

/// How long the server pretends to work on a registration.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

/// Delay used by `register_buyer`, set once at server start.
static SERVER_DELAY: OnceLock<Duration> = OnceLock::new();

/// Adopt the submission settings for the server side of `register_buyer`.
///
/// Only the first call takes effect.
pub fn configure_server(config: &FormConfig) {
    if SERVER_DELAY.set(config.delay()).is_err() {
        tracing::warn!("Server submission settings already configured; ignoring");
    }
}

/// The delay `register_buyer` waits, [`SIMULATED_DELAY`] until configured.
pub fn server_delay() -> Duration {
    SERVER_DELAY.get().copied().unwrap_or(SIMULATED_DELAY)
}

/// Register a buyer. Resolves after [`server_delay`] with an echo.
#[cfg(feature = "server")]
#[post("/api/buyers/register")]
pub async fn register_buyer(
    request: BuyerRegistration,
) -> Result<RegistrationResponse, ServerFnError> {
    tracing::info!(
        "Registering buyer {} (skip_preferences = {})",
        request.email,
        request.skip_preferences
    );
    sleep(server_delay()).await;
    Ok(RegistrationResponse::accepted(request))
}

#[cfg(not(feature = "server"))]
#[post("/api/buyers/register")]
pub async fn register_buyer(
    request: BuyerRegistration,
) -> Result<RegistrationResponse, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Platform-appropriate timer.
async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Client-side stand-in for the registration endpoint.
#[derive(Clone, Debug)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(SIMULATED_DELAY)
    }
}

impl SubmissionGateway for SimulatedGateway {
    async fn submit(
        &self,
        request: BuyerRegistration,
    ) -> Result<RegistrationResponse, SubmissionError> {
        sleep(self.delay).await;
        Ok(RegistrationResponse::accepted(request))
    }
}

/// Submits through the `register_buyer` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerGateway;

impl SubmissionGateway for ServerGateway {
    async fn submit(
        &self,
        request: BuyerRegistration,
    ) -> Result<RegistrationResponse, SubmissionError> {
        register_buyer(request)
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))
    }
}

/// The gateway selected by configuration.
#[derive(Clone, Debug)]
pub enum Gateway {
    Simulated(SimulatedGateway),
    Server(ServerGateway),
}

impl Gateway {
    pub fn from_config(config: &FormConfig) -> Self {
        match config.submission.gateway {
            GatewayKind::Simulated => Gateway::Simulated(SimulatedGateway::new(config.delay())),
            GatewayKind::Server => Gateway::Server(ServerGateway),
        }
    }
}

impl SubmissionGateway for Gateway {
    async fn submit(
        &self,
        request: BuyerRegistration,
    ) -> Result<RegistrationResponse, SubmissionError> {
        match self {
            Gateway::Simulated(gateway) => gateway.submit(request).await,
            Gateway::Server(gateway) => gateway.submit(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration::{Field, FormState, RegistrationForm, SubmitOrigin};

    #[test]
    fn test_gateway_from_config() {
        let config = FormConfig::from_toml("[submission]\ndelay_ms = 20\n").unwrap();
        match Gateway::from_config(&config) {
            Gateway::Simulated(gateway) => assert_eq!(gateway.delay, Duration::from_millis(20)),
            other => panic!("unexpected gateway: {other:?}"),
        }

        let config = FormConfig::from_toml("[submission]\ngateway = \"server\"\n").unwrap();
        assert!(matches!(Gateway::from_config(&config), Gateway::Server(_)));
    }

    #[test]
    fn test_server_delay_follows_config() {
        let config = FormConfig::from_toml("[submission]\ndelay_ms = 250\n").unwrap();
        configure_server(&config);
        assert_eq!(server_delay(), Duration::from_millis(250));

        let Gateway::Simulated(gateway) = Gateway::from_config(&config) else {
            panic!("expected the simulated gateway");
        };
        assert_eq!(gateway.delay, server_delay());

        // Later calls do not override the first.
        configure_server(&FormConfig::default());
        assert_eq!(server_delay(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_simulated_gateway_echoes() {
        let gateway = SimulatedGateway::new(Duration::from_millis(5));
        let form = RegistrationForm::default()
            .set_field(Field::Name, "Grace Hopper")
            .set_field(Field::Email, "grace@navy.mil")
            .set_field(Field::Phone, "555-0100-42")
            .set_field(Field::BankAccount, "0042");

        let request = form.draft().to_request(false);
        let response = gateway.submit(request.clone()).await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, request);

        let form = form.submit_with(&gateway, SubmitOrigin::Skip).await;
        assert_eq!(form.state(), FormState::Submitted);
    }
}
