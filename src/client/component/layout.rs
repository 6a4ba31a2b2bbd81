use dioxus::prelude::*;

use crate::client::{component::Header, router::Route};

/// Page chrome shared by every route except the study screen.
#[component]
pub fn Layout() -> Element {
    rsx!(div {
        class: "min-h-screen bg-base-100",
        Header {  }
        main {
            Outlet::<Route> {}
        }
    })
}
