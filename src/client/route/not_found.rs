use dioxus::prelude::*;

use crate::client::component::{GlassCard, Page};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page {
            class: "flex items-center justify-center",
            GlassCard {
                class: "p-8 text-center",
                h1 {
                    class: "text-2xl font-bold mb-2",
                    "Page not found"
                }
                p {
                    "The page /{path} does not exist."
                }
            }
        }
    )
}
