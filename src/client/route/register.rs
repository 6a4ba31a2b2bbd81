use dioxus::prelude::*;

use crate::client::{component::Page, constant::SITE_NAME, router::Route};

#[cfg(feature = "web")]
use crate::{client::api::auth::register, model::user::CredentialsDto};

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn Register() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut success = use_signal(|| None::<String>);
    #[allow(unused_mut)]
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        if password().chars().count() < MIN_PASSWORD_LEN {
            error.set(Some(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
            return;
        }
        if password() != confirm() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }

        #[cfg(feature = "web")]
        {
            is_submitting.set(true);
            error.set(None);

            let credentials = CredentialsDto {
                email: email(),
                password: password(),
            };

            spawn(async move {
                match register(credentials).await {
                    Ok(response) => success.set(Some(response.message)),
                    Err(err) => error.set(Some(err.message)),
                }
                is_submitting.set(false);
            });
        }
    };

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center justify-center w-full h-full",
            div {
                class: "card bg-base-200 w-full max-w-sm",
                if let Some(message) = success() {
                    div {
                        class: "card-body flex flex-col gap-4",
                        h1 { class: "card-title text-2xl", "Welcome!" }
                        p { "{message}" }
                        Link { to: Route::Login {}, class: "btn btn-primary", "Go to login" }
                    }
                } else {
                    form {
                        class: "card-body flex flex-col gap-4",
                        onsubmit: on_submit,
                        h1 { class: "card-title text-2xl", "Create an account" }
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
                        input {
                            r#type: "password",
                            class: "input input-bordered w-full",
                            placeholder: "Confirm password",
                            required: true,
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary",
                            disabled: is_submitting(),
                            if is_submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Register"
                        }
                        p {
                            class: "text-sm opacity-70",
                            "Already registered? "
                            Link { to: Route::Login {}, class: "link", "Log in" }
                        }
                    }
                }
            }
        }
    }
}
