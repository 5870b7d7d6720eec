use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::components::input_value;
use crate::services::api::ApiClient;
use crate::state::forms::auth::LoginForm;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Page>,
}

/// A successful login starts the session; the app shell moves on from there.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let form = use_state(LoginForm::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    let on_username = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(LoginForm { username: input_value(&e), ..(*form).clone() });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(LoginForm { password: input_value(&e), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
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
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.login(&request).await {
                    Ok(()) => log::info!("logged in as {}", request.username),
                    Err(err) => {
                        log::warn!("login failed: {}", err);
                        error_message.set(Some(err.user_message("Login failed. Please check your credentials.")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let to_register = props.on_navigate.reform(|_: MouseEvent| Page::Register);
    let to_reset = props.on_navigate.reform(|_: MouseEvent| Page::ResetPassword);

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h2 class="auth-title">{"Sign in"}</h2>
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="auth-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="login-username">{"Username"}</label>
                    <input id="login-username" type="text" class="auth-input" autocomplete="username"
                        value={form.username.clone()} oninput={on_username} disabled={*is_submitting} />
                </div>
                <div class="form-group">
                    <label for="login-password">{"Password"}</label>
                    <input id="login-password" type="password" class="auth-input" autocomplete="current-password"
                        value={form.password.clone()} oninput={on_password} disabled={*is_submitting} />
                </div>
                <button type="submit" class="btn btn-primary btn-block" disabled={*is_submitting}>
                    {if *is_submitting { "Signing in..." } else { "Sign in" }}
                </button>
                <div class="auth-links">
                    <button type="button" class="btn btn-link" onclick={to_reset}>{"Forgot password?"}</button>
                    <button type="button" class="btn btn-link" onclick={to_register}>{"Create an account"}</button>
                </div>
            </form>
        </div>
    }
}
