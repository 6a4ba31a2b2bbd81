use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    client::component::Modal,
    model::ai_job::{AiJobDetailDto, AiJobDto, AiJobStatus},
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::ai_job::{get_ai_job, get_ai_jobs};

fn status_badge(status: AiJobStatus) -> &'static str {
    match status {
        AiJobStatus::Pending | AiJobStatus::Running => "badge badge-info",
        AiJobStatus::Succeeded => "badge badge-success",
        AiJobStatus::Failed => "badge badge-error",
    }
}

/// Past generation jobs of a deck; selecting one shows its source text and cards.
#[component]
pub fn AiJobList(deck_id: Uuid, cards_changed: Signal<u32>) -> Element {
    #[allow(unused_mut)]
    let mut jobs = use_signal(|| None::<Vec<AiJobDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    let mut selected_job = use_signal(|| None::<Uuid>);
    #[allow(unused_mut)]
    let mut detail = use_signal(|| None::<AiJobDetailDto>);
    let mut show_detail = use_signal(|| false);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = cards_changed();
        get_ai_jobs(deck_id).await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(list) => jobs.set(Some(list.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch AI jobs: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        let Some(job_id) = selected_job() else {
            return;
        };
        detail.set(None);
        spawn(async move {
            match get_ai_job(deck_id, job_id).await {
                Ok(loaded) => detail.set(Some(loaded)),
                Err(err) => error.set(Some(err.message)),
            }
        });
    });

    rsx! {
        if let Some(message) = error() {
            div { class: "alert alert-error text-sm", "{message}" }
        }
        match jobs() {
            None => rsx! {
                div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
            },
            Some(list) if list.is_empty() => rsx! {
                div { class: "text-center py-8 opacity-50", "No generation jobs yet" }
            },
            Some(list) => rsx! {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra w-full",
                        thead {
                            tr {
                                th { "Created" }
                                th { "Status" }
                                th { "Cards" }
                                th { "Tokens" }
                                th { "Model" }
                                th {}
                            }
                        }
                        tbody {
                            for job in list {
                                {
                                    let job_id = job.id;
                                    let created = job.created_at.format("%Y-%m-%d %H:%M").to_string();
                                    let produced = job
                                        .actual_card_count
                                        .map_or_else(|| "-".to_string(), |c| c.to_string());
                                    let tokens = job
                                        .tokens_used
                                        .map_or_else(|| "-".to_string(), |t| t.to_string());
                                    rsx! {
                                        tr {
                                            key: "{job_id}",
                                            td { "{created}" }
                                            td {
                                                span { class: status_badge(job.status), "{job.status}" }
                                                if let Some(message) = &job.error_message {
                                                    p { class: "text-xs text-error mt-1", "{message}" }
                                                }
                                            }
                                            td { "{produced} / {job.requested_card_count}" }
                                            td { "{tokens}" }
                                            td { class: "text-xs opacity-70", "{job.model}" }
                                            td {
                                                button {
                                                    class: "btn btn-xs",
                                                    onclick: move |_| {
                                                        selected_job.set(Some(job_id));
                                                        show_detail.set(true);
                                                    },
                                                    "Details"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }

        Modal {
            show: show_detail,
            title: "Generation job".to_string(),
            prevent_close: false,
            wide: true,
            if let Some(job) = detail() {
                div {
                    class: "flex flex-col gap-4",
                    div {
                        class: "flex gap-2 items-center",
                        span { class: status_badge(job.job.status), "{job.job.status}" }
                        span { class: "text-sm opacity-70", "{job.job.model}" }
                    }
                    details {
                        class: "collapse collapse-arrow bg-base-200",
                        summary { class: "collapse-title", "Source text" }
                        div {
                            class: "collapse-content whitespace-pre-wrap text-sm",
                            "{job.input_text}"
                        }
                    }
                    if job.cards.is_empty() {
                        p { class: "opacity-50", "This job produced no cards" }
                    } else {
                        ul {
                            class: "flex flex-col gap-2",
                            for card in job.cards {
                                li {
                                    key: "{card.id}",
                                    class: "p-3 rounded-box bg-base-200",
                                    p { class: "font-medium", "{card.question}" }
                                    p { class: "opacity-80", "{card.answer}" }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "flex justify-center py-8", span { class: "loading loading-spinner" } }
            }
        }
    }
}
