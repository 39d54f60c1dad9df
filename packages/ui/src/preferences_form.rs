use dioxus::prelude::*;
use registration::models::{budget_range, feature_catalog, format_usd, LOCATIONS};
use registration::{Field, FieldErrors, PropertyType, RegistrationDraft};

use crate::icons::{FaCar, FaCheck, FaHouse, FaLocationDot, FaSliders};
use crate::{Icon, InputField, PreferenceSelector};

/// Step 2: budget, location, property type and features.
///
/// Stateless; every change goes to the parent. Picking a property type is
/// reported as its own event because the parent must clear the features.
/// Errors shown here never block submission.
#[component]
pub fn PreferencesForm(
    draft: RegistrationDraft,
    errors: FieldErrors,
    on_change: EventHandler<(Field, String)>,
    on_validate: EventHandler<Field>,
    on_property_type: EventHandler<PropertyType>,
    on_toggle_feature: EventHandler<String>,
) -> Element {
    let is_vehicle = draft.property_type.is_some_and(PropertyType::is_vehicle);
    let budget = budget_range(draft.property_type);
    let (min, max, step) = (budget.min.to_string(), budget.max.to_string(), budget.step.to_string());
    let budget_label = format_usd(&draft.max_amount);
    let features = feature_catalog(draft.property_type);
    let locations: Vec<String> = LOCATIONS.iter().map(|l| l.to_string()).collect();

    rsx! {
        div {
            class: "step",
            div {
                class: "step-heading",
                h2 { "Personalize Your Experience" }
                p { "Help us find the perfect options for you" }
            }

            div {
                class: "field",
                label {
                    r#for: "max-amount",
                    class: "label label--icon",
                    Icon { icon: FaSliders, width: 14, height: 14 }
                    "Budget Range"
                }
                input {
                    id: "max-amount",
                    r#type: "range",
                    class: "range",
                    min,
                    max,
                    step,
                    value: draft.max_amount.clone(),
                    oninput: move |evt| on_change.call((Field::MaxAmount, evt.value())),
                }
                div { class: "range-value", "Up to {budget_label}" }
            }

            InputField {
                id: "monthly-savings",
                label: "Monthly Savings",
                r#type: "number",
                value: draft.monthly_savings.clone(),
                error: errors.get(Field::MonthlySavings).map(str::to_string),
                oninput: move |value: String| on_change.call((Field::MonthlySavings, value)),
                onblur: move |_| on_validate.call(Field::MonthlySavings),
            }

            PreferenceSelector {
                id: "location",
                label: rsx! {
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    "Preferred Location"
                },
                value: draft.location.clone(),
                options: locations,
                onchange: move |value: String| on_change.call((Field::Location, value)),
            }

            div {
                class: "field",
                span {
                    class: "label label--icon",
                    if is_vehicle {
                        Icon { icon: FaCar, width: 14, height: 14 }
                        "Vehicle Type"
                    } else {
                        Icon { icon: FaHouse, width: 14, height: 14 }
                        "Property Type"
                    }
                }
                div {
                    class: "choice-grid",
                    for ty in PropertyType::ALL {
                        button {
                            key: "{ty}",
                            r#type: "button",
                            class: if draft.property_type == Some(ty) { "choice choice--selected" } else { "choice" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_property_type.call(ty);
                            },
                            "{ty}"
                        }
                    }
                }
            }

            div {
                class: "field",
                span {
                    class: "label label--icon",
                    Icon { icon: FaCheck, width: 14, height: 14 }
                    if is_vehicle { "Vehicle Features" } else { "Property Features" }
                }
                div {
                    class: "choice-grid",
                    for feature in features.iter().copied() {
                        button {
                            key: "{feature}",
                            r#type: "button",
                            class: if draft.features.iter().any(|f| f == feature) { "choice choice--selected" } else { "choice" },
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                on_toggle_feature.call(feature.to_string());
                            },
                            "{feature}"
                        }
                    }
                }
            }
        }
    }
}
