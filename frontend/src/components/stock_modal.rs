use yew::prelude::*;

use super::input_value;
use super::modal_frame::ModalFrame;
use crate::hooks::use_entity_modal::UseEntityModalActions;
use crate::state::forms::stock::StockForm;
use crate::state::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct StockModalProps {
    pub state: ModalState<StockForm>,
    pub actions: UseEntityModalActions<StockForm>,
}

#[function_component(StockModal)]
pub fn stock_modal(props: &StockModalProps) -> Html {
    let state = &props.state;
    let Some(product) = state.form.product.as_ref().filter(|_| state.is_open()) else {
        return html! {};
    };
    let busy = state.submitting;

    let on_amount = props.actions.change.reform(|e: InputEvent| input_value(&e));
    let on_submit = props.actions.submit.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = props.actions.cancel.reform(|_: MouseEvent| ());

    html! {
        <ModalFrame title="Add Stock" {busy} on_close={props.actions.cancel.clone()} error={state.error.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <p class="stock-summary">
                    {format!("{}: {} in stock", product.product_name, product.stock)}
                </p>
                <div class="form-group">
                    <label for="stock-amount">{"Amount to add"}</label>
                    <input id="stock-amount" type="text" inputmode="numeric" class="modal-input"
                        value={state.form.amount.clone()} oninput={on_amount} disabled={busy} />
                </div>
                {if let Some(total) = state.form.new_stock() {
                    html! { <p class="stock-preview">{format!("New stock: {}", total)}</p> }
                } else {
                    html! {}
                }}
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        {if busy { "Saving..." } else { "Add Stock" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
