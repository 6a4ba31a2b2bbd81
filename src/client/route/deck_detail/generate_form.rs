use dioxus::prelude::*;
use uuid::Uuid;

#[cfg(feature = "web")]
use crate::{client::api::ai_job::create_ai_job, model::ai_job::CreateAiJobDto};

const MAX_INPUT_CHARS: usize = 10_000;
const MAX_CARD_COUNT: i32 = 100;
const DEFAULT_CARD_COUNT: i32 = 10;

/// Sends source text to the generator and reports how many cards were added.
#[component]
pub fn GenerateForm(deck_id: Uuid, mut cards_changed: Signal<u32>) -> Element {
    let mut input_text = use_signal(String::new);
    let mut card_count = use_signal(|| DEFAULT_CARD_COUNT.to_string());
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_generating = use_signal(|| false);

    let char_count = input_text.read().chars().count();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let text = input_text().trim().to_string();
        if text.is_empty() {
            error.set(Some("Source text is required".to_string()));
            return;
        }
        if text.chars().count() > MAX_INPUT_CHARS {
            error.set(Some(format!(
                "Source text must be at most {} characters",
                MAX_INPUT_CHARS
            )));
            return;
        }
        let count = match card_count().trim().parse::<i32>() {
            Ok(value) if (1..=MAX_CARD_COUNT).contains(&value) => value,
            _ => {
                error.set(Some(format!(
                    "Number of cards must be between 1 and {}",
                    MAX_CARD_COUNT
                )));
                return;
            }
        };

        #[cfg(feature = "web")]
        {
            is_generating.set(true);
            error.set(None);
            notice.set(None);

            spawn(async move {
                let payload = CreateAiJobDto {
                    input_text: text,
                    requested_card_count: count,
                };
                match create_ai_job(deck_id, payload).await {
                    Ok(_) => {
                        notice.set(Some(format!(
                            "Generated {} cards. Review them in the Cards tab.",
                            count
                        )));
                        input_text.set(String::new());
                        cards_changed.set(cards_changed() + 1);
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_generating.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (text, count, deck_id);
    };

    rsx!(
        form {
            class: "flex flex-col gap-4 max-w-3xl",
            onsubmit: on_submit,
            if let Some(message) = error() {
                div { class: "alert alert-error text-sm", "{message}" }
            }
            if let Some(message) = notice() {
                div { class: "alert alert-success text-sm", "{message}" }
            }
            textarea {
                class: "textarea textarea-bordered w-full h-64",
                placeholder: "Paste the text to learn from",
                disabled: is_generating(),
                value: "{input_text}",
                oninput: move |evt| input_text.set(evt.value()),
            }
            div {
                class: "flex flex-wrap items-center justify-between gap-4",
                span {
                    class: if char_count > MAX_INPUT_CHARS { "text-sm text-error" } else { "text-sm opacity-70" },
                    "{char_count} / {MAX_INPUT_CHARS} characters"
                }
                div {
                    class: "flex items-center gap-2",
                    label { class: "text-sm", "Cards" }
                    input {
                        r#type: "number",
                        class: "input input-bordered input-sm w-24",
                        min: "1",
                        max: "{MAX_CARD_COUNT}",
                        disabled: is_generating(),
                        value: "{card_count}",
                        oninput: move |evt| card_count.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_generating(),
                        if is_generating() {
                            span { class: "loading loading-spinner loading-sm" }
                            "Generating…"
                        } else {
                            "Generate"
                        }
                    }
                }
            }
        }
    )
}
