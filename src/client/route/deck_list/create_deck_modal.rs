use dioxus::prelude::*;
use uuid::Uuid;

use crate::client::component::{CategoryPicker, Modal};

#[cfg(feature = "web")]
use crate::{
    client::{api::deck::create_deck, router::Route},
    model::deck::CreateDeckDto,
};

const MAX_NAME_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

#[component]
pub fn CreateDeckModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut card_limit = use_signal(String::new);
    let mut category_ids = use_signal(Vec::<Uuid>::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);
    #[cfg(feature = "web")]
    let nav = navigator();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if name().trim().is_empty() {
            error.set(Some("Deck name is required".to_string()));
            return;
        }
        let limit = match card_limit().trim() {
            "" => None,
            raw => match raw.parse::<i32>() {
                Ok(value) if (1..=1000).contains(&value) => Some(value),
                _ => {
                    error.set(Some("Card limit must be between 1 and 1000".to_string()));
                    return;
                }
            },
        };

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            let payload = CreateDeckDto {
                name: name().trim().to_string(),
                description: Some(description().trim().to_string()).filter(|d| !d.is_empty()),
                card_limit: limit,
                category_ids: category_ids(),
            };

            spawn(async move {
                match create_deck(payload).await {
                    Ok(deck) => {
                        name.set(String::new());
                        description.set(String::new());
                        card_limit.set(String::new());
                        category_ids.set(Vec::new());
                        show.set(false);
                        refetch_trigger.set(refetch_trigger() + 1);
                        nav.push(Route::DeckDetail { deck_id: deck.id });
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = limit;
    };

    rsx!(
        Modal {
            show,
            title: "New deck".to_string(),
            prevent_close: is_submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                if let Some(message) = error() {
                    div { class: "alert alert-error text-sm", "{message}" }
                }
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Name",
                    maxlength: "{MAX_NAME_LEN}",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description (optional)",
                    maxlength: "{MAX_DESCRIPTION_LEN}",
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                input {
                    r#type: "number",
                    class: "input input-bordered w-full",
                    placeholder: "Card limit (optional)",
                    min: "1",
                    max: "1000",
                    value: "{card_limit}",
                    oninput: move |evt| card_limit.set(evt.value()),
                }
                span { class: "text-sm opacity-70", "Categories" }
                CategoryPicker { selected: category_ids, allow_create: true }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        disabled: is_submitting(),
                        onclick: move |_| {
                            error.set(None);
                            show.set(false);
                        },
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        if is_submitting() {
                            span { class: "loading loading-spinner loading-sm" }
                        }
                        "Create"
                    }
                }
            }
        }
    )
}
