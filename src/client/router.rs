use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Home, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
