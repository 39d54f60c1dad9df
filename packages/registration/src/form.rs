//! # Registration form controller
//!
//! [`RegistrationForm`] owns everything the wizard knows: the draft, the error
//! map, the current step, the skip flag and the submission lifecycle. It is a
//! plain value. Every operation consumes the current form and returns the
//! next one, so a UI can keep it in a single signal and replace it wholesale.
//!
//! ## States
//!
//! | [`FormState`] | Meaning |
//! |---------------|---------|
//! | `Step1Editing` | Basic credentials are shown. |
//! | `Step2Editing` | Preferences are shown. |
//! | `Submitting` | A gateway call is in flight; edits are ignored. |
//! | `Submitted` | Terminal. The success notification replaces the form. |
//!
//! ## Transitions
//!
//! - [`advance`](RegistrationForm::advance): step 1 → 2 only when all four
//!   credential validators pass. The whole step is re-validated either way.
//! - [`back`](RegistrationForm::back): step 2 → 1, keeping values and errors.
//! - [`begin_submit`](RegistrationForm::begin_submit): re-validates step 1,
//!   records whether preferences were skipped and hands out the payload.
//! - [`finish_submit`](RegistrationForm::finish_submit): applies the gateway
//!   result. Failures return to the initiating step with a retry prompt.
//!
//! [`submit_with`](RegistrationForm::submit_with) drives the last two against
//! a [`SubmissionGateway`] in one call.

use crate::config::FormConfig;
use crate::gateway::{SubmissionError, SubmissionGateway};
use crate::models::{
    feature_catalog, BuyerRegistration, ProfilePicture, PropertyType, RegistrationDraft,
    RegistrationResponse,
};
use crate::validation::{Field, FieldErrors};

/// Shown after a successful registration with preferences.
pub const SUCCESS_TAILORED: &str =
    "Registration successful! You will receive tailored offers based on your preferences.";

/// Shown after a successful registration that skipped preferences.
pub const SUCCESS_SKIPPED: &str = "Registration successful! Note: You can set up your preferences later to receive personalized recommendations.";

/// Shown after a failed submission until the next attempt.
pub const FAILURE_PROMPT: &str = "Registration failed. Please try again.";

/// Page of the wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Credentials,
    Preferences,
}

impl Step {
    /// 1-based position shown in the step indicator.
    pub fn number(self) -> u8 {
        match self {
            Step::Credentials => 1,
            Step::Preferences => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormState {
    Step1Editing,
    Step2Editing,
    Submitting,
    Submitted,
}

/// Which button started a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOrigin {
    /// "Skip Preferences" on step 1.
    Skip,
    /// "Complete Registration" on step 2.
    Complete,
}

/// Multi-step registration state machine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    errors: FieldErrors,
    step: Step,
    skip_preferences: bool,
    submission: Submission,
    failure: Option<SubmissionError>,
}

impl RegistrationForm {
    /// A fresh form whose preference defaults come from `config`.
    pub fn new(config: &FormConfig) -> Self {
        let draft = RegistrationDraft {
            max_amount: config.defaults.max_amount.clone(),
            monthly_savings: config.defaults.monthly_savings.clone(),
            ..RegistrationDraft::default()
        };
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn skip_preferences(&self) -> bool {
        self.skip_preferences
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// The last submission failure, cleared when a new attempt starts.
    pub fn failure(&self) -> Option<&SubmissionError> {
        self.failure.as_ref()
    }

    pub fn state(&self) -> FormState {
        match (self.submission, self.step) {
            (Submission::Submitted, _) => FormState::Submitted,
            (Submission::Submitting, _) => FormState::Submitting,
            (Submission::Idle, Step::Credentials) => FormState::Step1Editing,
            (Submission::Idle, Step::Preferences) => FormState::Step2Editing,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    fn is_editable(&self) -> bool {
        self.submission == Submission::Idle
    }

    /// Notification text for the submitted state.
    pub fn success_message(&self) -> &'static str {
        if self.skip_preferences {
            SUCCESS_SKIPPED
        } else {
            SUCCESS_TAILORED
        }
    }

    pub fn set_field(mut self, field: Field, value: impl Into<String>) -> Self {
        if self.is_editable() {
            *field.value_mut(&mut self.draft) = value.into();
        }
        self
    }

    pub fn set_profile_picture(mut self, picture: Option<ProfilePicture>) -> Self {
        if self.is_editable() {
            self.draft.profile_picture = picture;
        }
        self
    }

    /// Select a property type. Features always reset, even when the new
    /// catalog shares names with the old one.
    pub fn set_property_type(mut self, property_type: PropertyType) -> Self {
        if self.is_editable() {
            self.draft.property_type = Some(property_type);
            self.draft.features.clear();
        }
        self
    }

    /// Add `feature` if absent, remove it if present. Names outside the
    /// current catalog are ignored.
    pub fn toggle_feature(mut self, feature: &str) -> Self {
        if !self.is_editable() || !feature_catalog(self.draft.property_type).contains(&feature) {
            return self;
        }
        let features = &mut self.draft.features;
        match features.iter().position(|f| f == feature) {
            Some(index) => {
                features.remove(index);
            }
            None => features.push(feature.to_string()),
        }
        self
    }

    /// On-blur validation: refresh only `field`'s entry.
    pub fn validate_field(mut self, field: Field) -> Self {
        if self.is_editable() {
            self.errors.set(field, field.check(&self.draft));
        }
        self
    }

    /// Re-validate all credential fields, replacing their entries.
    fn validate_credentials(&mut self) -> bool {
        let mut valid = true;
        for field in Field::CREDENTIALS {
            let error = field.check(&self.draft);
            valid &= error.is_none();
            self.errors.set(field, error);
        }
        valid
    }

    /// Move from credentials to preferences if every credential passes.
    pub fn advance(mut self) -> Self {
        if self.state() == FormState::Step1Editing && self.validate_credentials() {
            self.step = Step::Preferences;
        }
        self
    }

    pub fn back(mut self) -> Self {
        if self.state() == FormState::Step2Editing {
            self.step = Step::Credentials;
        }
        self
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the payload to send when the form accepted the attempt, or
    /// `None` when validation failed or the form is not idle.
    pub fn begin_submit(mut self, origin: SubmitOrigin) -> (Self, Option<BuyerRegistration>) {
        if !self.is_editable() {
            return (self, None);
        }
        if !self.validate_credentials() {
            tracing::debug!(
                "Submission blocked by {} invalid field(s)",
                self.errors.failing().count()
            );
            return (self, None);
        }

        self.skip_preferences = origin == SubmitOrigin::Skip;
        self.submission = Submission::Submitting;
        self.failure = None;
        let request = self.draft.to_request(self.skip_preferences);
        (self, Some(request))
    }

    /// Apply the gateway's answer to an in-flight submission.
    pub fn finish_submit(
        mut self,
        result: Result<RegistrationResponse, SubmissionError>,
    ) -> Self {
        if !self.is_submitting() {
            return self;
        }

        let result = result.and_then(|response| {
            if response.success {
                Ok(response)
            } else {
                Err(SubmissionError::Rejected)
            }
        });

        match result {
            Ok(_) => {
                tracing::info!(
                    "Registration submitted (skip_preferences = {})",
                    self.skip_preferences
                );
                self.submission = Submission::Submitted;
            }
            Err(e) => {
                tracing::error!("Registration failed: {}", e);
                self.submission = Submission::Idle;
                self.failure = Some(e);
            }
        }
        self
    }

    /// Run a full submission against `gateway`.
    pub async fn submit_with<G: SubmissionGateway>(self, gateway: &G, origin: SubmitOrigin) -> Self {
        let (form, request) = self.begin_submit(origin);
        let Some(request) = request else {
            return form;
        };
        let result = gateway.submit(request).await;
        form.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::EchoGateway;
    use crate::models::{PROPERTY_FEATURES, VEHICLE_FEATURES};

    fn valid_form() -> RegistrationForm {
        RegistrationForm::default()
            .set_field(Field::Name, "Ada Lovelace")
            .set_field(Field::Email, "ada@example.com")
            .set_field(Field::Phone, "+44 20 7946 0958")
            .set_field(Field::BankAccount, "GB29NWBK60161331926819")
    }

    #[test]
    fn test_new_uses_config_defaults() {
        let mut config = FormConfig::default();
        config.defaults.max_amount = "750000".to_string();

        let form = RegistrationForm::new(&config);
        assert_eq!(form.draft().max_amount, "750000");
        assert_eq!(form.draft().monthly_savings, "5000");
        assert_eq!(form.state(), FormState::Step1Editing);
        assert_eq!(form.step().number(), 1);
        assert!(!form.skip_preferences());
    }

    #[test]
    fn test_advance_blocked_by_missing_name() {
        let form = RegistrationForm::default()
            .set_field(Field::Email, "a@b.com")
            .set_field(Field::Phone, "12345678")
            .set_field(Field::BankAccount, "123")
            .advance();

        assert_eq!(form.state(), FormState::Step1Editing);
        assert_eq!(form.errors().get(Field::Name), Some("Full Name is required"));
        for field in [Field::Email, Field::Phone, Field::BankAccount] {
            assert!(form.errors().is_validated(field));
            assert_eq!(form.errors().get(field), None);
        }
    }

    #[test]
    fn test_advance_revalidates_whole_step() {
        let form = RegistrationForm::default().advance();
        assert_eq!(form.errors().failing().count(), 4);

        // Fixing the fields without blurring still clears every entry on advance.
        let form = valid_form().advance();
        assert_eq!(form.state(), FormState::Step2Editing);
        assert!(!form.errors().has_errors());
    }

    #[test]
    fn test_advance_requires_every_credential() {
        for field in Field::CREDENTIALS {
            let form = valid_form().set_field(field, "").advance();
            assert_eq!(form.state(), FormState::Step1Editing, "{field:?}");
            assert!(form.errors().get(field).is_some());
        }
    }

    #[test]
    fn test_blur_touches_only_that_field() {
        let form = RegistrationForm::default()
            .validate_field(Field::Email)
            .set_field(Field::Name, "Ada")
            .validate_field(Field::Name);

        assert_eq!(form.errors().get(Field::Email), Some("Email is required"));
        assert!(form.errors().is_validated(Field::Name));
        assert_eq!(form.errors().get(Field::Name), None);
        assert!(!form.errors().is_validated(Field::Phone));
    }

    #[test]
    fn test_back_preserves_values_and_errors() {
        let on_step_two = valid_form()
            .set_field(Field::Phone, "123")
            .validate_field(Field::Phone)
            .set_field(Field::Phone, "12345678")
            .advance();
        assert_eq!(on_step_two.state(), FormState::Step2Editing);

        let back = on_step_two.clone().back();
        assert_eq!(back.state(), FormState::Step1Editing);
        assert_eq!(back.draft(), on_step_two.draft());
        assert_eq!(back.errors(), on_step_two.errors());
    }

    #[test]
    fn test_back_ignored_on_step_one() {
        let form = RegistrationForm::default();
        assert_eq!(form.clone().back(), form);
    }

    #[test]
    fn test_property_type_change_clears_features() {
        let form = valid_form()
            .set_property_type(PropertyType::House)
            .toggle_feature("Pool")
            .toggle_feature("Garage");
        assert_eq!(form.draft().features, vec!["Pool", "Garage"]);

        let form = form.set_property_type(PropertyType::Villa);
        assert!(form.draft().features.is_empty());

        let form = form
            .toggle_feature("Garden")
            .set_property_type(PropertyType::Villa);
        assert!(form.draft().features.is_empty());
    }

    #[test]
    fn test_toggle_feature_respects_catalog() {
        let form = RegistrationForm::default()
            .set_property_type(PropertyType::Vehicle)
            .toggle_feature("Pool")
            .toggle_feature("Sunroof");
        assert_eq!(form.draft().features, vec!["Sunroof"]);

        let form = form.toggle_feature("Sunroof");
        assert!(form.draft().features.is_empty());

        for ty in PropertyType::ALL {
            let mut form = RegistrationForm::default().set_property_type(ty);
            for feature in VEHICLE_FEATURES.iter().chain(PROPERTY_FEATURES.iter()) {
                form = form.toggle_feature(feature);
            }
            assert!(form
                .draft()
                .features
                .iter()
                .all(|f| ty.features().contains(&f.as_str())));
            assert_eq!(form.draft().features.len(), ty.features().len());
        }
    }

    #[test]
    fn test_begin_submit_blocked_when_invalid() {
        let (form, request) = RegistrationForm::default()
            .set_field(Field::Name, "Ada")
            .begin_submit(SubmitOrigin::Skip);

        assert!(request.is_none());
        assert_eq!(form.state(), FormState::Step1Editing);
        assert!(!form.skip_preferences());
        assert_eq!(form.errors().get(Field::Email), Some("Email is required"));
    }

    #[test]
    fn test_skip_sets_flag_in_payload() {
        let (form, request) = valid_form().begin_submit(SubmitOrigin::Skip);
        let request = request.unwrap();

        assert_eq!(form.state(), FormState::Submitting);
        assert!(form.skip_preferences());
        assert!(request.skip_preferences);
        assert_eq!(request.name, "Ada Lovelace");
    }

    #[test]
    fn test_edits_ignored_while_submitting() {
        let (form, _) = valid_form().begin_submit(SubmitOrigin::Skip);
        let frozen = form.clone();

        let form = form
            .set_field(Field::Name, "")
            .set_property_type(PropertyType::Vehicle)
            .advance()
            .back();
        assert_eq!(form, frozen);

        let (form, request) = form.begin_submit(SubmitOrigin::Skip);
        assert!(request.is_none());
        assert_eq!(form, frozen);
    }

    #[test]
    fn test_finish_ignored_when_not_submitting() {
        let form = valid_form();
        let response = RegistrationResponse::accepted(form.draft().to_request(false));
        assert_eq!(form.clone().finish_submit(Ok(response)), form);
    }

    #[tokio::test]
    async fn test_complete_submission_tailored_message() {
        let gateway = EchoGateway::new();
        let form = valid_form()
            .advance()
            .set_field(Field::Location, "Miami")
            .set_property_type(PropertyType::Townhouse)
            .toggle_feature("Balcony")
            .submit_with(&gateway, SubmitOrigin::Complete)
            .await;

        assert_eq!(form.state(), FormState::Submitted);
        assert_eq!(form.success_message(), SUCCESS_TAILORED);

        let sent = gateway.received();
        assert_eq!(sent.len(), 1);
        assert!(!sent[0].skip_preferences);
        assert_eq!(sent[0].location, "Miami");
        assert_eq!(sent[0].property_type, Some(PropertyType::Townhouse));
        assert_eq!(sent[0].features, vec!["Balcony"]);
    }

    #[tokio::test]
    async fn test_skip_submission_message() {
        let gateway = EchoGateway::new();
        let form = valid_form().submit_with(&gateway, SubmitOrigin::Skip).await;

        assert_eq!(form.state(), FormState::Submitted);
        assert_eq!(form.success_message(), SUCCESS_SKIPPED);
        assert!(gateway.received()[0].skip_preferences);
    }

    #[tokio::test]
    async fn test_submitted_is_terminal() {
        let gateway = EchoGateway::new();
        let form = valid_form().submit_with(&gateway, SubmitOrigin::Skip).await;
        let done = form.clone();

        let form = form
            .set_field(Field::Email, "")
            .back()
            .submit_with(&gateway, SubmitOrigin::Complete)
            .await;
        assert_eq!(form, done);
        assert_eq!(gateway.received().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_returns_to_initiating_step() {
        let gateway = EchoGateway::new();
        gateway.fail_with(Some(SubmissionError::Transport("timeout".to_string())));

        let form = valid_form()
            .advance()
            .submit_with(&gateway, SubmitOrigin::Complete)
            .await;
        assert_eq!(form.state(), FormState::Step2Editing);
        assert_eq!(
            form.failure(),
            Some(&SubmissionError::Transport("timeout".to_string()))
        );
        assert!(!form.errors().has_errors());

        let form = valid_form().submit_with(&gateway, SubmitOrigin::Skip).await;
        assert_eq!(form.state(), FormState::Step1Editing);
        assert!(form.failure().is_some());

        // Retry clears the prompt.
        gateway.fail_with(None);
        let (form, request) = form.begin_submit(SubmitOrigin::Skip);
        assert!(request.is_some());
        assert!(form.failure().is_none());
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn test_unsuccessful_response_is_rejection() {
        let (form, request) = valid_form().advance().begin_submit(SubmitOrigin::Complete);
        let response = RegistrationResponse {
            success: false,
            data: request.unwrap(),
        };

        let form = form.finish_submit(Ok(response));
        assert_eq!(form.state(), FormState::Step2Editing);
        assert_eq!(form.failure(), Some(&SubmissionError::Rejected));
    }

    #[tokio::test]
    async fn test_retry_after_skip_failure_from_step_two() {
        let gateway = EchoGateway::new();
        gateway.fail_with(Some(SubmissionError::Rejected));
        let form = valid_form().submit_with(&gateway, SubmitOrigin::Skip).await;
        assert!(form.skip_preferences());

        gateway.fail_with(None);
        let form = form
            .advance()
            .submit_with(&gateway, SubmitOrigin::Complete)
            .await;
        assert_eq!(form.state(), FormState::Submitted);
        assert!(!form.skip_preferences());
        assert_eq!(form.success_message(), SUCCESS_TAILORED);
    }
}
