use dioxus::prelude::*;
use uuid::Uuid;

use crate::client::component::{Layout, RequiresLoggedIn};
use crate::client::route::{
    DeckDetail, DeckList, History, Home, Login, NotFound, Register, Study, Usage,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/login")]
        Login {},

        #[route("/register")]
        Register {},

        #[layout(RequiresLoggedIn)]
            #[route("/")]
            Home {},

            #[nest("/decks")]
                #[route("/")]
                DeckList {},

                #[route("/:deck_id")]
                DeckDetail { deck_id: Uuid },
            #[end_nest]

            #[route("/history")]
            History {},

            #[route("/usage")]
            Usage {},
        #[end_layout]
    #[end_layout]

    // Full-screen study view without the header
    #[layout(RequiresLoggedIn)]
        #[route("/decks/:deck_id/study")]
        Study { deck_id: Uuid },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
