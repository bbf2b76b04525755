use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaServer, Icon};

use crate::client::constant::SITE_NAME;

#[component]
pub fn Header() -> Element {
    rsx!(
        header {
            class: "site-header flex items-center gap-2 p-4",
            Icon {
                width: 20,
                height: 20,
                icon: FaServer
            }
            p {
                class: "text-xl font-bold",
                {SITE_NAME}
            }
        }
    )
}
