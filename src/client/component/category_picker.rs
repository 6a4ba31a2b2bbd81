use dioxus::prelude::*;
use uuid::Uuid;

use crate::{client::model::cache::Cache, model::category::CategoryDto};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::category::{create_category, get_categories};

/// Loads the shared category list into the context cache on first use.
pub fn use_categories() -> Signal<Cache<Vec<CategoryDto>>> {
    #[allow(unused_mut)]
    let mut cache = use_context::<Signal<Cache<Vec<CategoryDto>>>>();

    #[cfg(feature = "web")]
    use_effect(move || {
        if cache.peek().is_fetched() {
            return;
        }
        cache.set(Cache::Loading);
        spawn(async move {
            match get_categories().await {
                Ok(categories) => cache.set(Cache::Fetched(categories)),
                Err(err) => {
                    tracing::error!("Failed to fetch categories: {}", err);
                    cache.set(Cache::Error(err));
                }
            }
        });
    });

    cache
}

/// Toggleable category badges bound to `selected`.
///
/// With `allow_create`, a text field adds a new category and selects it.
#[component]
pub fn CategoryPicker(selected: Signal<Vec<Uuid>>, #[props(default)] allow_create: bool) -> Element {
    #[allow(unused_mut)]
    let mut cache = use_categories();
    let mut new_name = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);

    let categories = cache.read().data().cloned().unwrap_or_default();

    let on_create = move |_| {
        let name = new_name().trim().to_string();
        if name.is_empty() {
            return;
        }

        #[cfg(feature = "web")]
        spawn(async move {
            match create_category(name).await {
                Ok(category) => {
                    let id = category.id;
                    let mut categories = cache.peek().data().cloned().unwrap_or_default();
                    categories.push(category);
                    categories.sort_by(|a, b| a.name.cmp(&b.name));
                    cache.set(Cache::Fetched(categories));
                    selected.write().push(id);
                    new_name.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.message)),
            }
        });
    };

    rsx!(
        div {
            class: "flex flex-col gap-2",
            div {
                class: "flex flex-wrap gap-2",
                for category in categories {
                    {
                        let id = category.id;
                        let is_selected = selected.read().contains(&id);
                        rsx! {
                            button {
                                key: "{id}",
                                r#type: "button",
                                class: if is_selected { "badge badge-primary cursor-pointer" } else { "badge badge-outline cursor-pointer" },
                                onclick: move |_| {
                                    let mut ids = selected.write();
                                    if let Some(pos) = ids.iter().position(|s| *s == id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(id);
                                    }
                                },
                                "{category.name}"
                            }
                        }
                    }
                }
            }
            if allow_create {
                div {
                    class: "join w-full",
                    input {
                        class: "input input-bordered input-sm join-item w-full",
                        placeholder: "New category",
                        maxlength: "50",
                        value: "{new_name}",
                        oninput: move |evt| new_name.set(evt.value()),
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm join-item",
                        onclick: on_create,
                        "Add"
                    }
                }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
        }
    )
}
