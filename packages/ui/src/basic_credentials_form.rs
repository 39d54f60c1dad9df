use dioxus::prelude::*;
use registration::{Field, FieldErrors, ProfilePicture, RegistrationDraft};

use crate::{FileUpload, InputField};

/// Step 1: name, email, phone, profile picture and bank account.
#[component]
pub fn BasicCredentialsForm(
    draft: RegistrationDraft,
    errors: FieldErrors,
    on_change: EventHandler<(Field, String)>,
    on_validate: EventHandler<Field>,
    on_picture: EventHandler<ProfilePicture>,
) -> Element {
    let error = |field: Field| errors.get(field).map(str::to_string);

    rsx! {
        div {
            class: "step",
            div {
                class: "step-heading",
                h2 { "Create Your Account" }
                p { "Let's get started with your basic information" }
            }

            InputField {
                id: "name",
                label: "Full Name",
                value: draft.name.clone(),
                error: error(Field::Name),
                oninput: move |value: String| on_change.call((Field::Name, value)),
                onblur: move |_| on_validate.call(Field::Name),
            }
            InputField {
                id: "email",
                label: "Email Address",
                r#type: "email",
                value: draft.email.clone(),
                error: error(Field::Email),
                oninput: move |value: String| on_change.call((Field::Email, value)),
                onblur: move |_| on_validate.call(Field::Email),
            }
            InputField {
                id: "phone",
                label: "Phone Number",
                r#type: "tel",
                value: draft.phone.clone(),
                error: error(Field::Phone),
                oninput: move |value: String| on_change.call((Field::Phone, value)),
                onblur: move |_| on_validate.call(Field::Phone),
            }
            FileUpload {
                on_file_change: move |picture: ProfilePicture| on_picture.call(picture),
            }
            InputField {
                id: "bank-account",
                label: "Bank Account Number",
                value: draft.bank_account.clone(),
                error: error(Field::BankAccount),
                oninput: move |value: String| on_change.call((Field::BankAccount, value)),
                onblur: move |_| on_validate.call(Field::BankAccount),
            }
        }
    }
}
