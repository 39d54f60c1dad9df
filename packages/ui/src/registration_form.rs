//! The registration wizard.
//!
//! [`BuyerRegistrationForm`] keeps the whole [`RegistrationForm`] in one
//! signal and replaces it on every event. The step forms below it only
//! render and forward events.

use api::Gateway;
use dioxus::prelude::*;
use registration::form::FAILURE_PROMPT;
use registration::{
    Field, FormConfig, FormState, ProfilePicture, PropertyType, RegistrationForm, Step,
    SubmissionGateway, SubmitOrigin,
};

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowLeft, FaArrowRight, FaTriangleExclamation};
use crate::{use_form_config, BasicCredentialsForm, Icon, NotificationMessage, PreferencesForm};

/// Apply one transition to the form held in `form`.
fn update(
    mut form: Signal<RegistrationForm>,
    transition: impl FnOnce(RegistrationForm) -> RegistrationForm,
) {
    let next = transition(form());
    form.set(next);
}

/// Enter `Submitting` and spawn the gateway call.
fn submit(mut form: Signal<RegistrationForm>, config: Signal<FormConfig>, origin: SubmitOrigin) {
    let (next, request) = form().begin_submit(origin);
    form.set(next);
    let Some(request) = request else {
        return;
    };

    let gateway = Gateway::from_config(&config.read());
    spawn(async move {
        let result = gateway.submit(request).await;
        update(form, |current| current.finish_submit(result));
    });
}

/// Two-step buyer registration form.
#[component]
pub fn BuyerRegistrationForm() -> Element {
    let config = use_form_config();
    let form = use_signal(|| RegistrationForm::new(&config.peek()));

    let current = form();
    if current.state() == FormState::Submitted {
        return rsx! {
            div {
                class: "card",
                NotificationMessage { message: current.success_message().to_string() }
            }
        };
    }

    let step = current.step();
    let step_number = step.number();
    let submitting = current.is_submitting();
    let failed = current.failure().is_some();
    let draft = current.draft().clone();
    let errors = current.errors().clone();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let step = form.peek().step();
        match step {
            Step::Credentials => update(form, RegistrationForm::advance),
            Step::Preferences => submit(form, config, SubmitOrigin::Complete),
        }
    };

    rsx! {
        div {
            class: "card",
            div {
                class: "step-indicator",
                div {
                    class: "step-dots",
                    span { class: if step == Step::Credentials { "step-dot step-dot--active" } else { "step-dot" } }
                    span { class: if step == Step::Preferences { "step-dot step-dot--active" } else { "step-dot" } }
                }
                span { class: "step-count", "Step {step_number} of 2" }
            }

            form {
                class: "wizard",
                onsubmit: handle_submit,

                if failed {
                    div { class: "form-alert", "role": "alert", "{FAILURE_PROMPT}" }
                }

                {match step {
                    Step::Credentials => rsx! {
                        BasicCredentialsForm {
                            draft: draft.clone(),
                            errors: errors.clone(),
                            on_change: move |(field, value): (Field, String)| update(form, |f| f.set_field(field, value)),
                            on_validate: move |field: Field| update(form, |f| f.validate_field(field)),
                            on_picture: move |picture: ProfilePicture| update(form, |f| f.set_profile_picture(Some(picture))),
                        }
                        div {
                            class: "hint",
                            Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
                            p {
                                "Setting up preferences helps us provide personalized recommendations. You can skip this step and set them up later."
                            }
                        }
                    },
                    Step::Preferences => rsx! {
                        PreferencesForm {
                            draft: draft.clone(),
                            errors: errors.clone(),
                            on_change: move |(field, value): (Field, String)| update(form, |f| f.set_field(field, value)),
                            on_validate: move |field: Field| update(form, |f| f.validate_field(field)),
                            on_property_type: move |ty: PropertyType| update(form, |f| f.set_property_type(ty)),
                            on_toggle_feature: move |feature: String| update(form, |f| f.toggle_feature(&feature)),
                        }
                    },
                }}

                div {
                    class: "wizard-actions",
                    if step == Step::Preferences {
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: submitting,
                            onclick: move |_| update(form, RegistrationForm::back),
                            Icon { icon: FaArrowLeft, width: 14, height: 14 }
                            "Back"
                        }
                        Button {
                            r#type: "submit",
                            class: "wizard-actions-end",
                            disabled: submitting,
                            if submitting { "Submitting..." } else { "Complete Registration" }
                        }
                    } else {
                        div {
                            class: "wizard-actions-end",
                            Button {
                                variant: ButtonVariant::Secondary,
                                disabled: submitting,
                                onclick: move |_| submit(form, config, SubmitOrigin::Skip),
                                if submitting { "Submitting..." } else { "Skip Preferences" }
                            }
                            Button {
                                disabled: submitting,
                                onclick: move |_| update(form, RegistrationForm::advance),
                                "Next"
                                Icon { icon: FaArrowRight, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}
