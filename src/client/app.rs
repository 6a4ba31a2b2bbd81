use dioxus::prelude::*;

use crate::{
    client::{constant::SITE_NAME, model::cache::Cache, router::Route, store::user::UserState},
    model::category::CategoryDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::auth::get_user;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context_provider(|| Signal::new(UserState::default()));
    use_context_provider(|| Signal::new(Cache::<Vec<CategoryDto>>::NotFetched));

    // Fetch the signed-in user once on load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);

        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                let user = match result {
                    Ok(user) => user.clone(),
                    Err(err) => {
                        tracing::error!("Failed to fetch user: {}", err);
                        None
                    }
                };
                user_store.set(UserState {
                    user,
                    fetched: true,
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Flashcard decks with AI-generated cards and timed study sessions"
        }
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
