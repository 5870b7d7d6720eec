use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::app::Page;
use crate::components::input_value;
use crate::services::api::ApiClient;
use crate::state::forms::auth::ResetPasswordForm;

#[derive(Properties, PartialEq)]
pub struct ResetPasswordPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Page>,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordPageProps) -> Html {
    let form = use_state(ResetPasswordForm::default);
    let is_submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);
    let success_message = use_state(|| Option::<String>::None);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ResetPasswordForm { email: input_value(&e), ..(*form).clone() });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ResetPasswordForm { password: input_value(&e), ..(*form).clone() });
        })
    };
    let on_confirm = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            form.set(ResetPasswordForm { confirm_password: input_value(&e), ..(*form).clone() });
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let error_message = error_message.clone();
        let success_message = success_message.clone();
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
            success_message.set(None);

            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let error_message = error_message.clone();
            let success_message = success_message.clone();
            let api_client = api_client.clone();
            spawn_local(async move {
                match api_client.reset_password(&request).await {
                    Ok(message) => {
                        log::info!("password reset requested");
                        form.set(ResetPasswordForm::default());
                        success_message.set(Some(
                            message.unwrap_or_else(|| "Password has been reset. You can sign in now.".to_string()),
                        ));
                    }
                    Err(err) => {
                        log::warn!("password reset failed: {}", err);
                        error_message.set(Some(err.user_message("Failed to reset password")));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let to_login = props.on_navigate.reform(|_: MouseEvent| Page::Login);

    html! {
        <div class="auth-page">
            <form class="auth-card" onsubmit={on_submit}>
                <h2 class="auth-title">{"Reset password"}</h2>
                {if let Some(error) = (*error_message).clone() {
                    html! { <div class="auth-error">{error}</div> }
                } else {
                    html! {}
                }}
                {if let Some(success) = (*success_message).clone() {
                    html! { <div class="auth-success">{success}</div> }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label for="reset-email">{"Email"}</label>
                    <input id="reset-email" type="email" class="auth-input"
                        value={form.email.clone()} oninput={on_email} disabled={*is_submitting} />
                </div>
                <div class="form-group">
                    <label for="reset-password">{"New Password"}</label>
                    <input id="reset-password" type="password" class="auth-input" autocomplete="new-password"
                        value={form.password.clone()} oninput={on_password} disabled={*is_submitting} />
                </div>
                <div class="form-group">
                    <label for="reset-confirm">{"Confirm New Password"}</label>
                    <input id="reset-confirm" type="password" class="auth-input" autocomplete="new-password"
                        value={form.confirm_password.clone()} oninput={on_confirm} disabled={*is_submitting} />
                </div>
                <button type="submit" class="btn btn-primary btn-block" disabled={*is_submitting}>
                    {if *is_submitting { "Resetting..." } else { "Reset password" }}
                </button>
                <div class="auth-links">
                    <button type="button" class="btn btn-link" onclick={to_login}>{"Back to sign in"}</button>
                </div>
            </form>
        </div>
    }
}
