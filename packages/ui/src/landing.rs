//! Marketing landing page served at `/`.

use dioxus::prelude::*;

use crate::icons::{
    FaBuilding, FaCar, FaDollarSign, FaHouse, FaShieldHalved, FaStar, FaUsers,
    FaWandMagicSparkles,
};
use crate::Icon;

/// `on_register` is called from both registration calls to action.
#[component]
pub fn LandingPage(on_register: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "landing",

            section {
                class: "hero",
                div {
                    class: "hero-content",
                    h1 {
                        "Find Your Perfect"
                        span { class: "accent", " Asset" }
                    }
                    p { "Your trusted platform for secure real estate and automotive trading" }
                    div {
                        class: "hero-actions",
                        button { class: "cta", r#type: "button", onclick: move |_| on_register.call(()), "Get Started" }
                        a { class: "cta cta--ghost", href: "#why", "Learn More" }
                    }
                }
            }

            section {
                class: "stats",
                StatCard { icon: rsx! { Icon { icon: FaHouse, width: 24, height: 24 } }, number: "1000+", label: "Properties Listed" }
                StatCard { icon: rsx! { Icon { icon: FaCar, width: 24, height: 24 } }, number: "500+", label: "Vehicles Available" }
                StatCard { icon: rsx! { Icon { icon: FaUsers, width: 24, height: 24 } }, number: "10K+", label: "Happy Customers" }
                StatCard { icon: rsx! { Icon { icon: FaStar, width: 24, height: 24 } }, number: "4.9", label: "User Rating" }
            }

            section {
                id: "why",
                class: "why",
                h2 { "Why Choose Our Platform?" }
                div {
                    class: "why-grid",
                    FeatureCard {
                        icon: rsx! { Icon { icon: FaShieldHalved, width: 32, height: 32 } },
                        title: "Secure Trading",
                        description: "Advanced security measures to protect your valuable assets",
                    }
                    FeatureCard {
                        icon: rsx! { Icon { icon: FaBuilding, width: 32, height: 32 } },
                        title: "Verified Listings",
                        description: "Every property and vehicle listing is thoroughly verified",
                    }
                    FeatureCard {
                        icon: rsx! { Icon { icon: FaDollarSign, width: 32, height: 32 } },
                        title: "Best Value",
                        description: "Competitive prices and transparent transactions",
                    }
                    FeatureCard {
                        icon: rsx! { Icon { icon: FaWandMagicSparkles, width: 32, height: 32 } },
                        title: "AI-Powered",
                        description: "Smart matching algorithm for optimal deals",
                    }
                }
            }

            section {
                class: "closing",
                h2 { "Ready to Start Your Journey?" }
                p { "Join thousands of satisfied users who trust our platform for their asset trading needs." }
                button { class: "cta", r#type: "button", onclick: move |_| on_register.call(()), "Register Now" }
            }
        }
    }
}

#[component]
fn StatCard(
    icon: Element,
    number: String,
    label: String,
) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-icon", {icon} }
            div { class: "stat-number", "{number}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[component]
fn FeatureCard(
    icon: Element,
    title: String,
    description: String,
) -> Element {
    rsx! {
        div {
            class: "why-card",
            div { class: "why-icon", {icon} }
            h3 { "{title}" }
            p { "{description}" }
        }
    }
}
