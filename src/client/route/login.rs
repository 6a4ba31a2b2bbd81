use dioxus::prelude::*;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    router::Route,
    store::user::UserState,
};

#[cfg(feature = "web")]
use crate::{client::api::auth::login, model::user::CredentialsDto};

#[component]
pub fn Login() -> Element {
    #[allow(unused_mut)]
    let mut user_store = use_context::<Signal<UserState>>();
    let nav = navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let user_logged_in = user_store.read().user.is_some();
    let fetch_completed = user_store.read().fetched;

    // Signed-in users have nothing to do here
    use_effect(use_reactive!(|user_logged_in| {
        if user_logged_in {
            nav.push(Route::DeckList {});
        }
    }));

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error.set(None);

            let credentials = CredentialsDto {
                email: email(),
                password: password(),
            };

            spawn(async move {
                match login(credentials).await {
                    Ok(response) => {
                        user_store.set(UserState {
                            user: Some(response.user),
                            fetched: true,
                        });
                        nav.push(Route::DeckList {});
                    }
                    Err(err) => error.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetch_completed || user_logged_in {
            LoadingPage {}
        } else {
            Page {
                class: "flex flex-col items-center justify-center w-full h-full",
                div {
                    class: "card bg-base-200 w-full max-w-sm",
                    form {
                        class: "card-body flex flex-col gap-4",
                        onsubmit: on_submit,
                        h1 { class: "card-title text-2xl", "Log in to {SITE_NAME}" }
                        if let Some(message) = error() {
                            div { class: "alert alert-error text-sm", "{message}" }
                        }
                        input {
                            r#type: "email",
                            class: "input input-bordered w-full",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Password",
                            required: true,
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Log in"
                        }
                        p {
                            class: "text-sm opacity-70",
                            "No account yet? "
                            Link { to: Route::Register {}, class: "link", "Register" }
                        }
                    }
                }
            }
        }
    }
}
