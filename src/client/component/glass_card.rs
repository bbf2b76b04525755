use dioxus::prelude::*;

/// Frosted-glass container for page content.
///
/// Renders children inside a styled box with two visual variants (static and
/// hover-emphasis) and an optional entrance animation with a configurable
/// delay. Purely presentational; holds no state.
#[component]
pub fn GlassCard(
    class: Option<&'static str>,
    hover: Option<bool>,
    animate: Option<bool>,
    delay: Option<f32>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or_default();
    let variant = if hover.unwrap_or(false) {
        "glass-card-hover"
    } else {
        "glass-card"
    };

    if animate.unwrap_or(true) {
        let delay = delay.unwrap_or(0.0);

        return rsx!(
            div {
                class: "{variant} glass-card-enter rounded-2xl {class}",
                style: "animation-delay: {delay}s",
                {children}
            }
        );
    }

    rsx!(
        div {
            class: "{variant} rounded-2xl {class}",
            {children}
        }
    )
}
