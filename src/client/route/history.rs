use dioxus::prelude::*;

use crate::client::{
    component::{ConfirmationModal, Page},
    constant::SITE_NAME,
    router::Route,
    study::{format_elapsed, StudyHistoryEntry},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::study::{BrowserStorage, StudyHistory};

/// Past study sessions kept in the browser.
#[component]
pub fn History() -> Element {
    #[allow(unused_mut)]
    let mut entries = use_signal(Vec::<StudyHistoryEntry>::new);
    let mut show_clear = use_signal(|| false);

    #[cfg(feature = "web")]
    use_effect(move || {
        entries.set(StudyHistory::new(BrowserStorage).entries());
    });

    let on_clear = move |_| {
        #[cfg(feature = "web")]
        {
            match StudyHistory::new(BrowserStorage).clear() {
                Ok(()) => entries.set(Vec::new()),
                Err(err) => tracing::error!("Failed to clear study history: {}", err),
            }
        }
        show_clear.set(false);
    };

    rsx!(
        Title { "Study History | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-4xl flex flex-col gap-4",
                div {
                    class: "flex justify-between items-center",
                    h1 { class: "text-2xl font-bold", "Study History" }
                    button {
                        class: "btn btn-outline btn-error btn-sm",
                        disabled: entries.read().is_empty(),
                        onclick: move |_| show_clear.set(true),
                        "Clear history"
                    }
                }
                if entries.read().is_empty() {
                    p { class: "opacity-70", "No study sessions yet." }
                } else {
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "table table-zebra",
                            thead {
                                tr {
                                    th { "Deck" }
                                    th { "Date" }
                                    th { "Known" }
                                    th { "Unknown" }
                                    th { "Total" }
                                    th { "Time" }
                                }
                            }
                            tbody {
                                for entry in entries() {
                                    {
                                        let date = entry.timestamp.format("%Y-%m-%d %H:%M").to_string();
                                        let elapsed = format_elapsed(entry.elapsed_seconds);
                                        let row_key = format!("{}-{}", entry.timestamp.timestamp_millis(), entry.deck_id);
                                        rsx! {
                                            tr {
                                                key: "{row_key}",
                                                td {
                                                    Link {
                                                        to: Route::DeckDetail { deck_id: entry.deck_id },
                                                        class: "link link-hover",
                                                        "{entry.deck_name}"
                                                    }
                                                }
                                                td { "{date}" }
                                                td { class: "text-success", "{entry.known}" }
                                                td { class: "text-error", "{entry.unknown}" }
                                                td { "{entry.total}" }
                                                td { "{elapsed}" }
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
        ConfirmationModal {
            show: show_clear,
            title: "Clear study history?".to_string(),
            message: "All saved study sessions will be removed from this browser.".to_string(),
            confirm_text: "Clear".to_string(),
            is_processing: false,
            on_confirm: on_clear,
        }
    )
}
