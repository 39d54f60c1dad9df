//! # Domain models for buyer registration
//!
//! Defines the in-progress [`RegistrationDraft`], the catalogs the preferences
//! step offers, and the request/response pair exchanged with a
//! [`crate::SubmissionGateway`]. The wire types are `Serialize + Deserialize`
//! with camelCase field names so they can cross the server/client boundary via
//! Dioxus server functions.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`RegistrationDraft`] | Every field the wizard collects, across both steps. |
//! | [`ProfilePicture`] | A reference to the picked image file. Only the name travels with the submission. |
//! | [`PropertyType`] | The fixed property/vehicle catalog. Each type knows its feature catalog and budget range. |
//! | [`BudgetRange`] | Slider bounds for the budget input. |
//! | [`BuyerRegistration`] | The submission payload. |
//! | [`RegistrationResponse`] | The gateway's answer: a success flag and an echo of the payload. |

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Locations offered by the preferences step.
pub const LOCATIONS: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Miami", "Seattle"];

/// Features offered when the buyer is looking for a vehicle.
pub const VEHICLE_FEATURES: [&str; 8] = [
    "Automatic",
    "Hybrid/Electric",
    "Leather Seats",
    "Navigation",
    "Backup Camera",
    "Bluetooth",
    "Sunroof",
    "Premium Audio",
];

/// Features offered for every kind of real estate.
pub const PROPERTY_FEATURES: [&str; 8] = [
    "Garage",
    "Pool",
    "Garden",
    "Security",
    "Smart Home",
    "Furnished",
    "Balcony",
    "Storage",
];

/// What the buyer is shopping for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    Townhouse,
    Vehicle,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Villa,
        PropertyType::Townhouse,
        PropertyType::Vehicle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Vehicle => "Vehicle",
        }
    }

    pub fn is_vehicle(self) -> bool {
        self == PropertyType::Vehicle
    }

    /// Feature names a buyer may pick for this type.
    pub fn features(self) -> &'static [&'static str] {
        if self.is_vehicle() {
            &VEHICLE_FEATURES
        } else {
            &PROPERTY_FEATURES
        }
    }

    /// Slider bounds for the budget input.
    pub fn budget(self) -> BudgetRange {
        if self.is_vehicle() {
            BudgetRange {
                min: 5_000,
                max: 200_000,
                step: 1_000,
            }
        } else {
            BudgetRange::PROPERTY
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feature catalog for an optional property type. Without a selection the
/// real-estate catalog is shown.
pub fn feature_catalog(property_type: Option<PropertyType>) -> &'static [&'static str] {
    property_type.map_or(&PROPERTY_FEATURES[..], PropertyType::features)
}

/// Budget slider bounds for an optional property type.
pub fn budget_range(property_type: Option<PropertyType>) -> BudgetRange {
    property_type.map_or(BudgetRange::PROPERTY, PropertyType::budget)
}

/// Bounds of the budget slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl BudgetRange {
    const PROPERTY: BudgetRange = BudgetRange {
        min: 50_000,
        max: 1_000_000,
        step: 10_000,
    };
}

/// Reference to the image the buyer picked as a profile picture.
///
/// The decoded content is never kept here; the preview lives with the upload
/// widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfilePicture {
    pub file_name: String,
    pub content_type: Option<String>,
    pub size: u64,
}

/// Encode image bytes as a `data:` URL suitable for an `<img src>` preview.
pub fn data_url(content_type: Option<&str>, bytes: &[u8]) -> String {
    let mime = content_type.unwrap_or("application/octet-stream");
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{mime};base64,{encoded}")
}

/// The in-progress registration record.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub bank_account: String,
    pub profile_picture: Option<ProfilePicture>,
    /// Upper budget as entered on the slider.
    pub max_amount: String,
    pub monthly_savings: String,
    pub location: String,
    pub property_type: Option<PropertyType>,
    /// Selected features, in the order they were picked.
    pub features: Vec<String>,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            bank_account: String::new(),
            profile_picture: None,
            max_amount: "500000".to_string(),
            monthly_savings: "5000".to_string(),
            location: String::new(),
            property_type: None,
            features: Vec::new(),
        }
    }
}

impl RegistrationDraft {
    /// Build the submission payload.
    pub fn to_request(&self, skip_preferences: bool) -> BuyerRegistration {
        BuyerRegistration {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            profile_pic: self.profile_picture.as_ref().map(|p| p.file_name.clone()),
            bank_account: self.bank_account.clone(),
            max_amount: self.max_amount.clone(),
            monthly_savings: self.monthly_savings.clone(),
            location: self.location.clone(),
            property_type: self.property_type,
            features: self.features.clone(),
            skip_preferences,
        }
    }
}

/// Submission payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// File name of the profile picture, if one was picked.
    pub profile_pic: Option<String>,
    pub bank_account: String,
    pub max_amount: String,
    pub monthly_savings: String,
    pub location: String,
    pub property_type: Option<PropertyType>,
    pub features: Vec<String>,
    pub skip_preferences: bool,
}

/// What the gateway returns for a submission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    /// Echo of the submitted payload.
    pub data: BuyerRegistration,
}

impl RegistrationResponse {
    pub fn accepted(data: BuyerRegistration) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Format the leading integer of `value` as whole US dollars, e.g.
/// `"500000"` → `"$500,000"`. Anything that does not start with a number
/// renders as `"$0"`.
pub fn format_usd(value: &str) -> String {
    let amount = leading_integer(value).unwrap_or(0);
    let digits = amount.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

fn leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_uses_vehicle_catalog() {
        assert_eq!(PropertyType::Vehicle.features(), &VEHICLE_FEATURES);
        for ty in [
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Villa,
            PropertyType::Townhouse,
        ] {
            assert_eq!(ty.features(), &PROPERTY_FEATURES);
        }
        assert_eq!(feature_catalog(None), &PROPERTY_FEATURES);
    }

    #[test]
    fn test_budget_ranges() {
        let vehicle = PropertyType::Vehicle.budget();
        assert_eq!((vehicle.min, vehicle.max, vehicle.step), (5_000, 200_000, 1_000));

        let house = budget_range(Some(PropertyType::House));
        assert_eq!((house.min, house.max, house.step), (50_000, 1_000_000, 10_000));
        assert_eq!(budget_range(None), house);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd("500000"), "$500,000");
        assert_eq!(format_usd("1000000"), "$1,000,000");
        assert_eq!(format_usd("999"), "$999");
        assert_eq!(format_usd("0"), "$0");
        assert_eq!(format_usd(""), "$0");
        assert_eq!(format_usd("abc"), "$0");
        assert_eq!(format_usd("1500.75"), "$1,500");
        assert_eq!(format_usd("-2500"), "-$2,500");
    }

    #[test]
    fn test_request_carries_file_name_only() {
        let draft = RegistrationDraft {
            name: "Ada".to_string(),
            profile_picture: Some(ProfilePicture {
                file_name: "me.png".to_string(),
                content_type: Some("image/png".to_string()),
                size: 2048,
            }),
            ..RegistrationDraft::default()
        };

        let request = draft.to_request(true);
        assert_eq!(request.profile_pic.as_deref(), Some("me.png"));
        assert_eq!(request.max_amount, "500000");
        assert_eq!(request.monthly_savings, "5000");
        assert!(request.skip_preferences);
    }

    #[test]
    fn test_request_wire_names() {
        let request = RegistrationDraft {
            property_type: Some(PropertyType::Villa),
            ..RegistrationDraft::default()
        }
        .to_request(false);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["profilePic"], serde_json::Value::Null);
        assert_eq!(json["bankAccount"], "");
        assert_eq!(json["maxAmount"], "500000");
        assert_eq!(json["propertyType"], "Villa");
        assert_eq!(json["skipPreferences"], false);
    }

    #[test]
    fn test_data_url() {
        assert_eq!(data_url(Some("image/png"), b"hi"), "data:image/png;base64,aGk=");
        assert_eq!(
            data_url(None, b""),
            "data:application/octet-stream;base64,"
        );
    }
}
