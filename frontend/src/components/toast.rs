use yew::prelude::*;

use crate::state::toast::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    let Some(toast) = props.toast.clone() else {
        return html! {};
    };
    let on_dismiss = props.on_dismiss.reform(|_: MouseEvent| ());

    html! {
        <div class={toast.kind.css_class()} role="status">
            <span class="toast-message">{toast.message}</span>
            <button type="button" class="toast-close" onclick={on_dismiss} aria-label="Close">{"×"}</button>
        </div>
    }
}
