use dioxus::prelude::*;
use uuid::Uuid;

use crate::{client::component::Modal, model::card::CardDto};

#[cfg(feature = "web")]
use crate::{
    client::api::card::{create_card, update_card},
    model::card::{CreateCardDto, UpdateCardDto},
};

const MAX_QUESTION_LEN: usize = 200;
const MAX_ANSWER_LEN: usize = 500;

/// Creates a card, or edits `card` when one is given.
#[component]
pub fn CardFormModal(
    mut show: Signal<bool>,
    deck_id: Uuid,
    card: Option<CardDto>,
    mut cards_changed: Signal<u32>,
) -> Element {
    let mut question = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let editing_id = card.as_ref().map(|c| c.id);

    use_effect(use_reactive!(|card| {
        question.set(card.as_ref().map(|c| c.question.clone()).unwrap_or_default());
        answer.set(card.as_ref().map(|c| c.answer.clone()).unwrap_or_default());
        error.set(None);
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let q = question().trim().to_string();
        let a = answer().trim().to_string();
        if q.is_empty() {
            error.set(Some("Question is required".to_string()));
            return;
        }
        if a.is_empty() {
            error.set(Some("Answer is required".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            spawn(async move {
                let result = match editing_id {
                    Some(card_id) => update_card(
                        deck_id,
                        card_id,
                        UpdateCardDto {
                            question: Some(q),
                            answer: Some(a),
                        },
                    )
                    .await,
                    None => create_card(
                        deck_id,
                        CreateCardDto {
                            question: q,
                            answer: a,
                            source_fragment: None,
                        },
                    )
                    .await,
                };

                match result {
                    Ok(_) => {
                        question.set(String::new());
                        answer.set(String::new());
                        show.set(false);
                        cards_changed.set(cards_changed() + 1);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (q, a, deck_id);
    };

    let title = if editing_id.is_some() { "Edit card" } else { "New card" };

    rsx!(
        Modal {
            show,
            title: title.to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                if let Some(message) = error() {
                    div { class: "alert alert-error text-sm", "{message}" }
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Question",
                    maxlength: "{MAX_QUESTION_LEN}",
                    value: "{question}",
                    oninput: move |evt| question.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full h-28",
                    placeholder: "Answer",
                    maxlength: "{MAX_ANSWER_LEN}",
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Save"
                    }
                }
            }
        }
    )
}
