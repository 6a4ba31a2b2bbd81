mod ai_jobs;
mod card_form;
mod card_table;
mod edit_deck_modal;
mod generate_form;

use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            ConfirmationModal, Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
    },
    model::deck::DeckDto,
};

use ai_jobs::AiJobList;
use card_table::CardTable;
use edit_deck_modal::EditDeckModal;
use generate_form::GenerateForm;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::deck::{delete_deck, get_deck};

#[derive(Clone, Copy, PartialEq)]
enum DeckTab {
    Cards,
    Generate,
    Jobs,
}

#[component]
pub fn DeckDetail(deck_id: Uuid) -> Element {
    #[allow(unused_mut)]
    let mut deck = use_signal(|| None::<DeckDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    let mut active_tab = use_signal(|| DeckTab::Cards);
    let mut show_edit_modal = use_signal(|| false);
    let mut show_delete_modal = use_signal(|| false);
    #[allow(unused_mut)]
    let mut is_deleting = use_signal(|| false);
    // Bumped whenever cards change so the deck header and lists reload
    let cards_changed = use_signal(|| 0u32);
    #[cfg(feature = "web")]
    let nav = navigator();

    #[cfg(feature = "web")]
    let future = use_resource(use_reactive!(|deck_id| async move {
        let _ = cards_changed();
        get_deck(deck_id).await
    }));

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(loaded) => {
                    deck.set(Some(loaded.clone()));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to fetch deck: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        {
            is_deleting.set(true);
            spawn(async move {
                match delete_deck(deck_id).await {
                    Ok(()) => {
                        show_delete_modal.set(false);
                        nav.push(Route::DeckList {});
                    }
                    Err(err) => {
                        tracing::error!("Failed to delete deck: {}", err);
                        error.set(Some(err));
                    }
                }
                is_deleting.set(false);
            });
        }
    };

    let tab_class = move |tab: DeckTab| {
        if active_tab() == tab {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    rsx! {
        if let Some(current) = deck() {
            Title { "{current.name} | {SITE_NAME}" }
            Page {
                class: "flex flex-col items-center w-full h-full",
                div {
                    class: "w-full max-w-6xl flex flex-col gap-6",
                    div {
                        class: "flex flex-wrap items-start justify-between gap-4",
                        div {
                            class: "flex flex-col gap-2",
                            Link { to: Route::DeckList {}, class: "link text-sm opacity-70", "← All decks" }
                            h1 { class: "text-2xl font-bold", "{current.name}" }
                            if let Some(description) = &current.description {
                                p { class: "opacity-70", "{description}" }
                            }
                            div {
                                class: "flex flex-wrap gap-2 items-center",
                                span {
                                    class: "text-sm opacity-70",
                                    if let Some(limit) = current.card_limit {
                                        "{current.card_count} / {limit} cards"
                                    } else {
                                        "{current.card_count} cards"
                                    }
                                }
                                for category in current.categories.clone() {
                                    span { key: "{category.id}", class: "badge badge-outline", "{category.name}" }
                                }
                            }
                        }
                        div {
                            class: "flex gap-2",
                            Link {
                                to: Route::Study { deck_id },
                                class: if current.card_count == 0 { "btn btn-primary btn-disabled" } else { "btn btn-primary" },
                                "Study"
                            }
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| show_edit_modal.set(true),
                                "Edit"
                            }
                            button {
                                class: "btn btn-outline btn-error",
                                onclick: move |_| show_delete_modal.set(true),
                                "Delete"
                            }
                        }
                    }

                    div {
                        role: "tablist",
                        class: "tabs tabs-bordered",
                        button { role: "tab", class: tab_class(DeckTab::Cards), onclick: move |_| active_tab.set(DeckTab::Cards), "Cards" }
                        button { role: "tab", class: tab_class(DeckTab::Generate), onclick: move |_| active_tab.set(DeckTab::Generate), "Generate with AI" }
                        button { role: "tab", class: tab_class(DeckTab::Jobs), onclick: move |_| active_tab.set(DeckTab::Jobs), "Generation history" }
                    }

                    match active_tab() {
                        DeckTab::Cards => rsx! { CardTable { deck_id, cards_changed } },
                        DeckTab::Generate => rsx! { GenerateForm { deck_id, cards_changed } },
                        DeckTab::Jobs => rsx! { AiJobList { deck_id, cards_changed } },
                    }
                }
            }
            EditDeckModal { show: show_edit_modal, deck: current.clone(), on_saved: move |updated| deck.set(Some(updated)) }
            ConfirmationModal {
                show: show_delete_modal,
                title: "Delete deck".to_string(),
                message: format!("Delete \"{}\" with all of its cards? This cannot be undone.", current.name),
                confirm_text: "Delete".to_string(),
                is_processing: is_deleting(),
                on_confirm: on_delete,
            }
        } else if let Some(err) = error() {
            ErrorPage { status: err.status, message: err.message }
        } else {
            LoadingPage {}
        }
    }
}
