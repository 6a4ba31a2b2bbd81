mod create_deck_modal;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            CategoryPicker, Page, Pagination,
        },
        constant::{DECKS_PER_PAGE, SITE_NAME},
        model::error::ApiError,
        router::Route,
    },
    model::deck::PaginatedDecksDto,
};

use create_deck_modal::CreateDeckModal;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::deck::get_decks;

const SORT_OPTIONS: [(&str, &str); 5] = [
    ("created_at:desc", "Newest"),
    ("created_at:asc", "Oldest"),
    ("updated_at:desc", "Recently updated"),
    ("name:asc", "Name A-Z"),
    ("name:desc", "Name Z-A"),
];

#[component]
pub fn DeckList() -> Element {
    let mut page = use_signal(|| 1u64);
    let mut sort = use_signal(|| SORT_OPTIONS[0].0.to_string());
    let category_filter = use_signal(Vec::<Uuid>::new);
    let refetch_trigger = use_signal(|| 0u32);
    let mut show_create_modal = use_signal(|| false);

    #[allow(unused_mut)]
    let mut decks = use_signal(|| None::<PaginatedDecksDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    // Changing the filter starts again from the first page
    use_effect(move || {
        let _ = category_filter.read();
        page.set(1);
    });

    // Resource re-runs whenever page, sort, filter or refetch_trigger change
    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger();
        get_decks(page(), DECKS_PER_PAGE, &sort(), &category_filter()).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    decks.set(Some(list.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch decks: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    rsx! {
        Title { "Decks | {SITE_NAME}" }
        if let Some(list) = decks() {
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl flex flex-col gap-6",
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4",
                        h1 { class: "text-2xl font-bold", "Your decks" }
                        div {
                            class: "flex items-center gap-2",
                            select {
                                class: "select select-bordered select-sm",
                                value: "{sort}",
                                onchange: move |evt| {
                                    sort.set(evt.value());
                                    page.set(1);
                                },
                                for (value, label) in SORT_OPTIONS {
                                    option { value, "{label}" }
                                }
                            }
                            button {
                                class: "btn btn-primary",
                                onclick: move |_| show_create_modal.set(true),
                                "New deck"
                            }
                        }
                    }

                    div {
                        class: "flex flex-col gap-1",
                        span { class: "text-sm opacity-70", "Filter by category" }
                        CategoryPicker { selected: category_filter }
                    }

                    if list.data.is_empty() {
                        div {
                            class: "text-center py-16 opacity-60",
                            if category_filter.read().is_empty() {
                                "No decks yet. Create your first deck to start adding cards."
                            } else {
                                "No decks match the selected categories."
                            }
                        }
                    } else {
                        div {
                            class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                            for deck in list.data.clone() {
                                {
                                    let updated = deck.updated_at.format("%Y-%m-%d").to_string();
                                    rsx! {
                                        Link {
                                            key: "{deck.id}",
                                            to: Route::DeckDetail { deck_id: deck.id },
                                            class: "card bg-base-200 hover:bg-base-300 transition-colors",
                                            div {
                                                class: "card-body",
                                                h2 { class: "card-title", "{deck.name}" }
                                                if let Some(description) = &deck.description {
                                                    p { class: "opacity-70 line-clamp-2", "{description}" }
                                                }
                                                div {
                                                    class: "flex justify-between text-sm opacity-70 mt-2",
                                                    span {
                                                        if let Some(limit) = deck.card_limit {
                                                            "{deck.card_count} / {limit} cards"
                                                        } else {
                                                            "{deck.card_count} cards"
                                                        }
                                                    }
                                                    span { "{updated}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        Pagination {
                            meta: list.meta,
                            on_page_change: move |new_page| page.set(new_page),
                        }
                    }
                }
            }
            CreateDeckModal { show: show_create_modal, refetch_trigger }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
