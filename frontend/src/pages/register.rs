use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::components::input_value;
use crate::services::api::ApiClient;
use crate::state::forms::auth::RegisterForm;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Page>,
}

#[derive(Clone, Copy)]
enum Field {
    Username,
    Email,
    Password,
}

const VERIFY_NOTICE: &str = "A verification link has been sent to your email. \
    Open it and click the verify button before signing in.";

/// Sign-up form; a successful registration is followed by the email
/// verification notice instead of signing in.
#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let form = use_state(RegisterForm::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let confirmation = use_state(|| Option::<String>::None);

    let to_login = props.on_navigate.reform(|_: MouseEvent| Page::Login);

    if let Some(message) = (*confirmation).clone() {
        return html! {
            <div class="auth-page">
                <div class="auth-card auth-notice">
                    <h2 class="auth-title">{"Check your email"}</h2>
                    <p>{message}</p>
                    <button type="button" class="btn btn-primary btn-block" onclick={to_login}>
                        {"Back to Login"}
                    </button>
                </div>
            </div>
        };
    }

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let value = input_value(&e);
            let mut next = (*form).clone();
            match field {
                Field::Username => next.username = value,
                Field::Email => next.email = value,
                Field::Password => next.password = value,
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let confirmation = confirmation.clone();
        let api_client = props.api_client.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let request = match form.validate() {
                Ok(request) => request,
                Err(message) => {
                    error_message.set(Some(message));
                    return;
                }
            };

            is_submitting.set(true);
            error_message.set(None);

            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let confirmation = confirmation.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.register(&request).await {
                    Ok(message) => {
                        log::info!("registered {}", request.username);
                        if let Some(message) = message {
                            log::debug!("register response: {}", message);
                        }
                        confirmation.set(Some(VERIFY_NOTICE.to_string()));
                    }
                    Err(err) => {
                        log::warn!("registration failed: {}", err);
                        error_message.set(Some(err.user_message("Registration failed")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h2 class="auth-title">{"Create account"}</h2>
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="auth-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="register-username">{"Username"}</label>
                    <input id="register-username" type="text" class="auth-input"
                        value={form.username.clone()} oninput={on_field(Field::Username)} disabled={*is_submitting} />
                </div>
                <div class="form-group">
                    <label for="register-email">{"Email"}</label>
                    <input id="register-email" type="email" class="auth-input"
                        value={form.email.clone()} oninput={on_field(Field::Email)} disabled={*is_submitting} />
                </div>
                <div class="form-group">
                    <label for="register-password">{"Password"}</label>
                    <input id="register-password" type="password" class="auth-input" autocomplete="new-password"
                        value={form.password.clone()} oninput={on_field(Field::Password)} disabled={*is_submitting} />
                </div>
                <button type="submit" class="btn btn-primary btn-block" disabled={*is_submitting}>
                    {if *is_submitting { "Creating account..." } else { "Register" }}
                </button>
                <div class="auth-links">
                    <button type="button" class="btn btn-link" onclick={to_login}>{"Already have an account? Sign in"}</button>
                </div>
            </form>
        </div>
    }
}
