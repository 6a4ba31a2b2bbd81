use dioxus::prelude::*;

use crate::{
    client::{
        component::{
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::error::ApiError,
    },
    model::usage::TokenUsageDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::usage::get_token_usage;

/// Daily AI token usage of the signed-in user.
#[component]
pub fn Usage() -> Element {
    #[allow(unused_mut)]
    let mut usage = use_signal(|| None::<Vec<TokenUsageDto>>);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<ApiError>);

    #[cfg(feature = "web")]
    let future = use_resource(|| async move { get_token_usage().await });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = future.read_unchecked().as_ref() {
            match result {
                Ok(rows) => usage.set(Some(rows.clone())),
                Err(err) => {
                    tracing::error!("Failed to fetch token usage: {}", err);
                    error.set(Some(err.clone()));
                }
            }
        }
    });

    if let Some(err) = error() {
        return rsx! {
            Title { "Token Usage | {SITE_NAME}" }
            ErrorPage { status: err.status, message: err.message }
        };
    }

    let Some(rows) = usage() else {
        return rsx! {
            Title { "Token Usage | {SITE_NAME}" }
            LoadingPage {}
        };
    };

    let total: i64 = rows.iter().map(|row| row.tokens_used).sum();

    rsx!(
        Title { "Token Usage | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-2xl flex flex-col gap-4",
                h1 { class: "text-2xl font-bold", "Token Usage" }
                div {
                    class: "stats shadow",
                    div {
                        class: "stat",
                        div { class: "stat-title", "Total tokens" }
                        div { class: "stat-value", "{total}" }
                    }
                }
                if rows.is_empty() {
                    p { class: "opacity-70", "No AI generation usage recorded yet." }
                } else {
                    table {
                        class: "table table-zebra",
                        thead {
                            tr {
                                th { "Date" }
                                th { class: "text-right", "Tokens" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    key: "{row.date}",
                                    td { "{row.date}" }
                                    td { class: "text-right", "{row.tokens_used}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
