use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, router::Route};

/// Sends signed-in users straight to their decks.
#[component]
pub fn Home() -> Element {
    let nav = navigator();

    use_effect(move || {
        nav.replace(Route::DeckList {});
    });

    rsx! {
        LoadingPage {}
    }
}
