//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const REGISTRATION_CSS: Asset = asset!("/assets/registration.css");

mod config;
pub use config::{use_form_config, FormConfigProvider};

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

mod landing;
pub use landing::LandingPage;

mod input_field;
pub use input_field::InputField;

mod file_upload;
pub use file_upload::FileUpload;

mod preference_selector;
pub use preference_selector::PreferenceSelector;

mod basic_credentials_form;
pub use basic_credentials_form::BasicCredentialsForm;

mod preferences_form;
pub use preferences_form::PreferencesForm;

mod notification_message;
pub use notification_message::NotificationMessage;

mod registration_form;
pub use registration_form::BuyerRegistrationForm;
