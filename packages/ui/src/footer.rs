use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer {
            class: "site-footer",
            p { "© {year} TrustAsset Hub. All rights reserved." }
        }
    }
}

/// Calendar year in UTC, so the server render and the hydrated page agree.
#[cfg(target_arch = "wasm32")]
fn current_year() -> i32 {
    js_sys::Date::new_0().get_utc_full_year() as i32
}

#[cfg(not(target_arch = "wasm32"))]
fn current_year() -> i32 {
    year_of(chrono::Utc::now())
}

#[cfg(not(target_arch = "wasm32"))]
fn year_of(at: chrono::DateTime<chrono::Utc>) -> i32 {
    use chrono::Datelike;
    at.year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_year_at_boundaries() {
        let new_year = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(year_of(new_year), 2024);

        let eve = Utc.with_ymd_and_hms(2024, 12, 31, 18, 0, 0).unwrap();
        assert_eq!(year_of(eve), 2024);

        let leap = Utc.with_ymd_and_hms(2028, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(year_of(leap), 2028);
    }
}
