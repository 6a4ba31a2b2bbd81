use dioxus::prelude::*;

use super::Modal;
use crate::model::api::PaginationMetaDto;

/// Page controls for a paginated list. Pages are numbered from 1.
#[component]
pub fn Pagination(meta: PaginationMetaDto, on_page_change: EventHandler<u64>) -> Element {
    let mut show_page_jump = use_signal(|| false);
    let mut jump_page_input = use_signal(String::new);

    let total_pages = meta.total_pages();
    let first_shown = if meta.total == 0 {
        0
    } else {
        (meta.page - 1) * meta.limit + 1
    };
    let last_shown = (meta.page * meta.limit).min(meta.total);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            span {
                class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                "Showing {first_shown} to {last_shown} of {meta.total}"
            }
            div {
                class: "join",
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: meta.page <= 1,
                    onclick: move |_| {
                        if meta.page > 1 {
                            on_page_change.call(meta.page - 1);
                        }
                    },
                    "«"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    onclick: move |_| {
                        jump_page_input.set(meta.page.to_string());
                        show_page_jump.set(true);
                    },
                    "Page {meta.page} of {total_pages}"
                }
                button {
                    class: "join-item btn btn-xs sm:btn-sm",
                    disabled: !meta.has_more,
                    onclick: move |_| {
                        if meta.has_more {
                            on_page_change.call(meta.page + 1);
                        }
                    },
                    "»"
                }
            }
        }

        Modal {
            show: show_page_jump,
            title: "Jump to Page".to_string(),
            prevent_close: false,
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    if let Ok(target_page) = jump_page_input().parse::<u64>() {
                        if target_page > 0 && target_page <= total_pages {
                            on_page_change.call(target_page);
                            show_page_jump.set(false);
                        }
                    }
                },
                div {
                    class: "form-control w-full flex flex-col gap-3",
                    label {
                        class: "label",
                        span {
                            class: "label-text",
                            "Page number (1-{total_pages})"
                        }
                    }
                    input {
                        r#type: "number",
                        class: "input input-bordered w-full",
                        min: "1",
                        max: "{total_pages}",
                        value: "{jump_page_input()}",
                        oninput: move |evt| jump_page_input.set(evt.value()),
                        autofocus: true,
                    }
                }
                div {
                    class: "modal-action",
                    button {
                        r#type: "button",
                        class: "btn",
                        onclick: move |_| show_page_jump.set(false),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "Jump"
                    }
                }
            }
        }
    )
}
