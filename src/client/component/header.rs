use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaChartLine, FaClockRotateLeft, FaLayerGroup},
    Icon,
};

use crate::client::{constant::SITE_NAME, router::Route, store::user::UserState};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let email = user_store.read().user.as_ref().map(|u| u.email.clone());
    let fetch_completed = user_store.read().fetched;

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = logout().await {
                tracing::error!("Failed to log out: {}", err);
            }
            user_store.write().user = None;
            nav.push(Route::Login {});
        });
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::DeckList {},
                class: "flex items-center gap-3",
                Icon { width: 28, height: 28, icon: FaLayerGroup }
                p {
                    class: "md:text-xl text-wrap font-semibold",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if fetch_completed {
                if let Some(email) = email {
                    Link {
                        to: Route::History {},
                        class: "btn btn-ghost gap-2",
                        Icon { width: 16, height: 16, icon: FaClockRotateLeft }
                        span { class: "hidden sm:inline", "History" }
                    }
                    Link {
                        to: Route::Usage {},
                        class: "btn btn-ghost gap-2",
                        Icon { width: 16, height: 16, icon: FaChartLine }
                        span { class: "hidden sm:inline", "Usage" }
                    }
                    span { class: "hidden md:inline text-sm opacity-70", "{email}" }
                    button {
                        class: "btn btn-outline",
                        onclick: on_logout,
                        "Logout"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-outline",
                        "Login"
                    }
                    Link {
                        to: Route::Register {},
                        class: "btn btn-primary",
                        "Register"
                    }
                }
            }
        }
    })
}
