pub mod config;
pub mod form;
pub mod gateway;
pub mod models;
pub mod validation;

pub use config::{FormConfig, GatewayKind};
pub use form::{FormState, RegistrationForm, Step, SubmitOrigin, Submission};
pub use gateway::{EchoGateway, SubmissionError, SubmissionGateway};
pub use models::{
    BuyerRegistration, ProfilePicture, PropertyType, RegistrationDraft, RegistrationResponse,
};
pub use validation::{Field, FieldErrors};
