use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::{
        component::page::{ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::error::ApiError,
        router::Route,
        study::{format_elapsed, StudyCommand, StudySession, StudySummary},
    },
    model::card::CardStatus,
};

#[cfg(feature = "web")]
use chrono::Utc;
#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::{
    api::{
        card::{get_study_cards, update_card_status},
        deck::get_deck,
    },
    study::{BrowserStorage, RecordOutcome, StudyHistory},
};

/// Full-screen study run over every card of a deck.
#[component]
pub fn Study(deck_id: Uuid) -> Element {
    #[allow(unused_mut)]
    let mut session = use_signal(|| None::<StudySession>);
    #[allow(unused_mut)]
    let mut deck_name = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_saving = use_signal(|| false);
    let mut reload = use_signal(|| 0u32);
    let nav = navigator();

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = reload();
        let deck = get_deck(deck_id).await?;
        let cards = get_study_cards(deck_id).await?;
        Ok::<_, ApiError>((deck.name, cards))
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok((name, cards)) => {
                    deck_name.set(name.clone());
                    session.set(Some(StudySession::new(cards.clone())));
                    error.set(None);
                }
                Err(err) => {
                    tracing::error!("Failed to load study cards: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    // One tick per second while a session runs
    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            if let Some(current) = session.write().as_mut() {
                current.tick();
            }
        }
    });

    // Focus the study area once per loaded card list, not on every timer tick
    #[cfg(feature = "web")]
    let loaded = use_memo(move || focus_key(session.read().as_ref()));

    #[cfg(feature = "web")]
    use_effect(move || {
        if loaded().is_some() {
            document::eval(r#"document.getElementById('study-root')?.focus()"#);
        }
    });

    #[allow(unused_mut)]
    let mut answer = move |status: CardStatus| {
        let Some(card_id) = session.read().as_ref().and_then(|s| s.current()).map(|c| c.id) else {
            return;
        };
        if is_saving() {
            return;
        }

        #[cfg(feature = "web")]
        {
            is_saving.set(true);
            spawn(async move {
                match update_card_status(card_id, status).await {
                    Ok(_) => {
                        let outcome = session.write().as_mut().and_then(|s| s.record(status));
                        if let Some(RecordOutcome::Finished(_)) = outcome {
                            save_history(session, deck_id, deck_name());
                        }
                        notice.set(Some(match status {
                            CardStatus::Accepted => "Marked as known".to_string(),
                            _ => "Marked for review".to_string(),
                        }));
                    }
                    Err(err) => {
                        tracing::error!("Failed to update card status: {}", err);
                        notice.set(Some("Failed to update card status".to_string()));
                    }
                }
                is_saving.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (card_id, status);
    };

    let on_keydown = move |evt: KeyboardEvent| {
        let summary_open = session.read().as_ref().is_some_and(|s| s.is_finished());
        let Some(command) = StudyCommand::from_key(&evt.key().to_string(), summary_open) else {
            return;
        };
        evt.prevent_default();

        match command {
            StudyCommand::Prev => {
                if let Some(s) = session.write().as_mut() {
                    s.prev();
                }
            }
            StudyCommand::Next => {
                if let Some(s) = session.write().as_mut() {
                    s.next();
                }
            }
            StudyCommand::Flip => {
                if let Some(s) = session.write().as_mut() {
                    s.flip();
                }
            }
            StudyCommand::StudyAgain => reload.set(reload() + 1),
            StudyCommand::BackToDeck => {
                nav.push(Route::DeckDetail { deck_id });
            }
        }
    };

    let Some(current_session) = session() else {
        return rsx! {
            Title { "Study | {SITE_NAME}" }
            if let Some(err) = error() {
                ErrorPage { status: err.status, message: err.message }
            } else {
                LoadingPage {}
            }
        };
    };

    let position = current_session.index() + 1;
    let card_count = current_session.len();

    rsx! {
        Title { "Study {deck_name} | {SITE_NAME}" }
        div {
            id: "study-root",
            class: "fixed inset-0 bg-neutral text-neutral-content flex flex-col items-center outline-none",
            tabindex: "0",
            onkeydown: on_keydown,

            div {
                class: "w-full flex justify-between items-center p-4",
                Link { to: Route::History {}, class: "btn btn-ghost btn-sm", "History" }
                StudyStats { summary: current_session.summary() }
                Link {
                    to: Route::DeckDetail { deck_id },
                    class: "btn btn-ghost btn-sm",
                    aria_label: "Exit study mode",
                    "✕"
                }
            }

            if current_session.is_empty() {
                div {
                    class: "flex-1 flex items-center justify-center",
                    p { "No cards to study" }
                }
            } else if current_session.is_finished() {
                SummaryScreen {
                    summary: current_session.summary(),
                    on_again: move |_| reload.set(reload() + 1),
                    on_back: move |_| {
                        nav.push(Route::DeckDetail { deck_id });
                    },
                }
            } else if let Some(card) = current_session.current().cloned() {
                div {
                    class: "flex-1 w-full flex items-center justify-center gap-4 px-4",
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Previous card",
                        disabled: current_session.is_first(),
                        onclick: move |_| {
                            if let Some(s) = session.write().as_mut() {
                                s.prev();
                            }
                        },
                        "←"
                    }
                    div {
                        class: "flex flex-col items-center gap-8 w-full max-w-2xl",
                        div {
                            class: "flashcard w-full h-72 cursor-pointer",
                            onclick: move |_| {
                                if let Some(s) = session.write().as_mut() {
                                    s.flip();
                                }
                            },
                            div {
                                class: if current_session.is_flipped() { "flashcard-inner flipped" } else { "flashcard-inner" },
                                div {
                                    class: "flashcard-face bg-base-100 text-base-content text-xl text-center",
                                    "{card.question}"
                                }
                                div {
                                    class: "flashcard-face back bg-base-200 text-base-content text-lg text-center",
                                    "{card.answer}"
                                }
                            }
                        }
                        div {
                            class: if current_session.actions_visible() { "study-actions flex gap-4" } else { "study-actions hidden-actions flex gap-4" },
                            button {
                                class: "btn btn-error",
                                disabled: is_saving(),
                                onclick: move |_| answer(CardStatus::Rejected),
                                "Don't know"
                            }
                            button {
                                class: "btn btn-success",
                                disabled: is_saving(),
                                onclick: move |_| answer(CardStatus::Accepted),
                                "Know it"
                            }
                        }
                    }
                    button {
                        class: "btn btn-ghost",
                        aria_label: "Next card",
                        disabled: current_session.is_last(),
                        onclick: move |_| {
                            if let Some(s) = session.write().as_mut() {
                                s.next();
                            }
                        },
                        "→"
                    }
                }
                div {
                    class: "w-full p-4 flex flex-col items-center gap-2",
                    progress {
                        class: "progress progress-primary w-full max-w-2xl",
                        value: "{position}",
                        max: "{card_count}",
                    }
                    span {
                        class: "text-sm opacity-70",
                        "Card {position} of {card_count} · ← → to move, space to flip"
                    }
                    if let Some(message) = notice() {
                        span { class: "text-sm", "{message}" }
                    }
                }
            }
        }
    }
}

/// Changes only when a card list is loaded; timer ticks and answers leave it as is.
#[cfg(any(feature = "web", test))]
fn focus_key(session: Option<&StudySession>) -> Option<usize> {
    session.map(StudySession::len)
}

#[cfg(feature = "web")]
fn save_history(session: Signal<Option<StudySession>>, deck_id: Uuid, deck_name: String) {
    let Some(entry) = session
        .read()
        .as_ref()
        .map(|s| s.history_entry(deck_id, deck_name, Utc::now()))
    else {
        return;
    };

    if let Err(err) = StudyHistory::new(BrowserStorage).record(entry) {
        tracing::warn!("Failed to save study history: {}", err);
    }
}

#[component]
fn StudyStats(summary: StudySummary) -> Element {
    let elapsed = format_elapsed(summary.elapsed_seconds);

    rsx!(
        div {
            class: "flex gap-4 text-sm",
            span { "Total: {summary.total}" }
            span { class: "text-success", "Known: {summary.known}" }
            span { class: "text-error", "Unknown: {summary.unknown}" }
            span { "{elapsed}" }
        }
    )
}

#[component]
fn SummaryScreen(
    summary: StudySummary,
    on_again: EventHandler<()>,
    on_back: EventHandler<()>,
) -> Element {
    let percent = summary.known_percent();
    let elapsed = summary.elapsed_label();

    rsx!(
        div {
            class: "flex-1 flex items-center justify-center",
            div {
                class: "card bg-base-100 text-base-content w-full max-w-md",
                div {
                    class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Study session complete!" }
                    div {
                        class: "flex justify-between text-sm",
                        span { "Success rate" }
                        span { "{percent}%" }
                    }
                    progress { class: "progress progress-success w-full", value: "{percent}", max: "100" }
                    div {
                        class: "grid grid-cols-3 gap-2 text-center",
                        div { p { class: "text-2xl font-bold", "{summary.total}" } p { class: "text-xs opacity-70", "Cards" } }
                        div { p { class: "text-2xl font-bold text-success", "{summary.known}" } p { class: "text-xs opacity-70", "Known" } }
                        div { p { class: "text-2xl font-bold text-error", "{summary.unknown}" } p { class: "text-xs opacity-70", "Unknown" } }
                    }
                    p { class: "text-center", "Time: {elapsed}" }
                    div {
                        class: "card-actions justify-end",
                        button { class: "btn", onclick: move |_| on_back.call(()), "Back to deck (Esc)" }
                        button { class: "btn btn-primary", onclick: move |_| on_again.call(()), "Study again (Enter)" }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::model::card::CardDto;

    fn card(question: &str) -> CardDto {
        let now = Utc::now();
        CardDto {
            id: Uuid::new_v4(),
            deck_id: Uuid::nil(),
            question: question.to_string(),
            answer: format!("{} answer", question),
            status: CardStatus::Pending,
            source_fragment: None,
            job_id: None,
            review_started_at: None,
            review_finished_at: None,
            time_spent: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn focus_key_ignores_ticks_and_answers() {
        let mut session = StudySession::new(vec![card("Q1"), card("Q2"), card("Q3")]);
        let before = focus_key(Some(&session));

        session.tick();
        session.tick();
        session.flip();
        session.record(CardStatus::Accepted);

        assert_eq!(focus_key(Some(&session)), before);
        assert_eq!(before, Some(3));
    }

    #[test]
    fn focus_key_changes_when_cards_load() {
        let loaded = StudySession::new(vec![card("Q1")]);

        assert_eq!(focus_key(None), None);
        assert_ne!(focus_key(None), focus_key(Some(&loaded)));
    }
}
