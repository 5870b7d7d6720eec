use yew::prelude::*;

use super::modal_frame::ModalFrame;

#[derive(Properties, PartialEq)]
pub struct ConfirmDeleteModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    pub message: String,
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ConfirmDeleteModal)]
pub fn confirm_delete_modal(props: &ConfirmDeleteModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
    let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

    html! {
        <ModalFrame title={props.title.clone()} busy={props.busy} on_close={props.on_cancel.clone()}>
            <p class="confirm-message">{props.message.clone()}</p>
            <div class="modal-buttons">
                <button type="button" class="btn btn-danger" onclick={on_confirm} disabled={props.busy}>
                    {if props.busy { "Deleting..." } else { "Delete" }}
                </button>
                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={props.busy}>
                    {"Cancel"}
                </button>
            </div>
        </ModalFrame>
    }
}
