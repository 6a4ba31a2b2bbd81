use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::component::{CategoryPicker, Modal},
    model::deck::DeckDto,
};

#[cfg(feature = "web")]
use crate::{client::api::deck::update_deck, model::deck::UpdateDeckDto};

#[component]
pub fn EditDeckModal(mut show: Signal<bool>, deck: DeckDto, on_saved: EventHandler<DeckDto>) -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut card_limit = use_signal(String::new);
    let mut category_ids = use_signal(Vec::<Uuid>::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);
    let deck_id = deck.id;

    use_effect(use_reactive!(|deck| {
        name.set(deck.name.clone());
        description.set(deck.description.clone().unwrap_or_default());
        card_limit.set(deck.card_limit.map(|l| l.to_string()).unwrap_or_default());
        category_ids.set(deck.categories.iter().map(|c| c.id).collect());
    }));

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
            let description = description().trim().to_string();
            let payload = UpdateDeckDto {
                name: Some(name().trim().to_string()),
                description: Some(Some(description).filter(|d| !d.is_empty())),
                card_limit: Some(limit),
                category_ids: Some(category_ids()),
            };

            spawn(async move {
                match update_deck(deck_id, payload).await {
                    Ok(updated) => {
                        error.set(None);
                        show.set(false);
                        on_saved.call(updated);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (limit, deck_id, on_saved);
    };

    rsx!(
        Modal {
            show,
            title: "Edit deck".to_string(),
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
                    maxlength: "100",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                textarea {
                    class: "textarea textarea-bordered w-full",
                    placeholder: "Description (optional)",
                    maxlength: "500",
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
                        onclick: move |_| show.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting(),
                        "Save"
                    }
                }
            }
        }
    )
}
