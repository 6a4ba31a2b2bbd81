use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        component::{ConfirmationModal, Pagination},
        constant::CARDS_PER_PAGE,
        model::error::ApiError,
    },
    model::card::{CardDto, CardStatus, PaginatedCardsDto},
};

use super::card_form::CardFormModal;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::card::{delete_card, get_cards, update_card_status};

#[derive(Clone, Copy, PartialEq)]
enum BulkAction {
    Accept,
    Reject,
    Delete,
}

/// Folds the results of concurrent requests into one message, if any failed.
fn bulk_error(results: &[Result<(), ApiError>]) -> Option<String> {
    let failures: Vec<&ApiError> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    let first = failures.first()?;

    Some(format!(
        "{} of {} actions failed: {}",
        failures.len(),
        results.len(),
        first.message
    ))
}

fn status_badge(status: CardStatus) -> &'static str {
    match status {
        CardStatus::Pending => "badge badge-ghost",
        CardStatus::Accepted => "badge badge-success",
        CardStatus::Rejected => "badge badge-error",
    }
}

#[component]
pub fn CardTable(deck_id: Uuid, mut cards_changed: Signal<u32>) -> Element {
    let mut status_filter = use_signal(|| None::<CardStatus>);
    let mut page = use_signal(|| 1u64);
    let mut selected = use_signal(Vec::<Uuid>::new);
    #[allow(unused_mut)]
    let mut cards = use_signal(|| None::<PaginatedCardsDto>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_processing = use_signal(|| false);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<CardDto>);
    let mut show_bulk_delete = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = cards_changed();
        get_cards(deck_id, status_filter(), page(), CARDS_PER_PAGE).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => {
                    cards.set(Some(list.clone()));
                    selected.set(Vec::new());
                }
                Err(err) => {
                    tracing::error!("Failed to fetch cards: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
        }
    });

    // Runs one request per selected card concurrently, then reloads the list
    let mut run_bulk = move |action: BulkAction| {
        let ids = selected();
        if ids.is_empty() {
            return;
        }

        #[cfg(feature = "web")]
        {
            is_processing.set(true);
            error.set(None);
            spawn(async move {
                let requests = ids.into_iter().map(|card_id| async move {
                    match action {
                        BulkAction::Accept => update_card_status(card_id, CardStatus::Accepted)
                            .await
                            .map(|_| ()),
                        BulkAction::Reject => update_card_status(card_id, CardStatus::Rejected)
                            .await
                            .map(|_| ()),
                        BulkAction::Delete => delete_card(deck_id, card_id).await,
                    }
                });
                let results = futures::future::join_all(requests).await;

                if let Some(message) = bulk_error(&results) {
                    tracing::warn!("{}", message);
                    error.set(Some(message));
                }
                is_processing.set(false);
                show_bulk_delete.set(false);
                cards_changed.set(cards_changed() + 1);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = action;
    };

    let mut set_status = move |card_id: Uuid, status: CardStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_card_status(card_id, status).await {
                Ok(_) => cards_changed.set(cards_changed() + 1),
                Err(err) => error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (card_id, status);
    };

    let mut remove_card = move |card_id: Uuid| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_card(deck_id, card_id).await {
                Ok(()) => cards_changed.set(cards_changed() + 1),
                Err(err) => error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = card_id;
    };

    let list = cards();
    let page_ids: Vec<Uuid> = list
        .as_ref()
        .map(|l| l.data.iter().map(|c| c.id).collect())
        .unwrap_or_default();
    let all_selected = !page_ids.is_empty() && page_ids.iter().all(|id| selected.read().contains(id));
    let selected_count = selected.read().len();

    rsx! {
        div {
            class: "flex flex-col gap-4",
            div {
                class: "flex flex-wrap items-center justify-between gap-2",
                select {
                    class: "select select-bordered select-sm",
                    onchange: move |evt| {
                        status_filter.set(evt.value().parse::<CardStatus>().ok());
                        page.set(1);
                    },
                    option { value: "", "All statuses" }
                    for status in CardStatus::ALL {
                        option { value: status.as_str(), "{status}" }
                    }
                }
                div {
                    class: "flex flex-wrap gap-2",
                    if selected_count > 0 {
                        span { class: "self-center text-sm opacity-70", "{selected_count} selected" }
                        button {
                            class: "btn btn-sm btn-success",
                            disabled: is_processing(),
                            onclick: move |_| run_bulk(BulkAction::Accept),
                            "Accept"
                        }
                        button {
                            class: "btn btn-sm btn-warning",
                            disabled: is_processing(),
                            onclick: move |_| run_bulk(BulkAction::Reject),
                            "Reject"
                        }
                        button {
                            class: "btn btn-sm btn-error",
                            disabled: is_processing(),
                            onclick: move |_| show_bulk_delete.set(true),
                            "Delete"
                        }
                    }
                    button {
                        class: "btn btn-sm btn-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        "Add card"
                    }
                }
            }

            if let Some(message) = error() {
                div { class: "alert alert-error text-sm", "{message}" }
            }

            match list {
                None => rsx! {
                    div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
                },
                Some(list) if list.data.is_empty() => rsx! {
                    div { class: "text-center py-8 opacity-50", "No cards yet" }
                },
                Some(list) => rsx! {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra w-full",
                            thead {
                                tr {
                                    th {
                                        input {
                                            r#type: "checkbox",
                                            class: "checkbox checkbox-sm",
                                            checked: all_selected,
                                            onchange: move |_| {
                                                if all_selected {
                                                    selected.set(Vec::new());
                                                } else {
                                                    selected.set(page_ids.clone());
                                                }
                                            },
                                        }
                                    }
                                    th { "Question" }
                                    th { "Answer" }
                                    th { "Status" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for card in list.data.clone() {
                                    {
                                        let card_id = card.id;
                                        let is_selected = selected.read().contains(&card_id);
                                        let edit_card = card.clone();
                                        rsx! {
                                            tr {
                                                key: "{card_id}",
                                                td {
                                                    input {
                                                        r#type: "checkbox",
                                                        class: "checkbox checkbox-sm",
                                                        checked: is_selected,
                                                        onchange: move |_| {
                                                            let mut ids = selected.write();
                                                            if let Some(pos) = ids.iter().position(|id| *id == card_id) {
                                                                ids.remove(pos);
                                                            } else {
                                                                ids.push(card_id);
                                                            }
                                                        },
                                                    }
                                                }
                                                td { class: "max-w-xs", "{card.question}" }
                                                td { class: "max-w-xs opacity-80", "{card.answer}" }
                                                td { span { class: status_badge(card.status), "{card.status}" } }
                                                td {
                                                    div {
                                                        class: "flex gap-1 justify-end",
                                                        if card.status != CardStatus::Accepted {
                                                            button {
                                                                class: "btn btn-xs btn-success",
                                                                onclick: move |_| set_status(card_id, CardStatus::Accepted),
                                                                "Accept"
                                                            }
                                                        }
                                                        if card.status != CardStatus::Rejected {
                                                            button {
                                                                class: "btn btn-xs btn-warning",
                                                                onclick: move |_| set_status(card_id, CardStatus::Rejected),
                                                                "Reject"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-xs",
                                                            onclick: move |_| {
                                                                editing.set(Some(edit_card.clone()));
                                                                show_form.set(true);
                                                            },
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-xs btn-error",
                                                            onclick: move |_| remove_card(card_id),
                                                            "Delete"
                                                        }
                                                    }
                                                }
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
                },
            }
        }

        CardFormModal { show: show_form, deck_id, card: editing(), cards_changed }
        ConfirmationModal {
            show: show_bulk_delete,
            title: "Delete cards".to_string(),
            message: format!("Delete {} selected cards? This cannot be undone.", selected_count),
            confirm_text: "Delete".to_string(),
            is_processing: is_processing(),
            on_confirm: move |_| run_bulk(BulkAction::Delete),
        }
    }
}
