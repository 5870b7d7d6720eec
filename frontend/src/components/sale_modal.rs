use shared::money::format_rupiah;
use shared::Product;
use yew::prelude::*;

use super::date_selector::DateField;
use super::modal_frame::ModalFrame;
use super::stepper::Stepper;
use super::{select_value, textarea_value};
use crate::hooks::use_entity_modal::UseEntityModalActions;
use crate::state::forms::sale::{SaleChange, SaleForm};
use crate::state::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct SaleModalProps {
    pub state: ModalState<SaleForm>,
    pub actions: UseEntityModalActions<SaleForm>,
    pub products: Vec<Product>,
}

#[function_component(SaleModal)]
pub fn sale_modal(props: &SaleModalProps) -> Html {
    let state = &props.state;
    if !state.is_open() {
        return html! {};
    }
    let form = &state.form;
    let busy = state.submitting;
    let change = props.actions.change.clone();

    let on_product = {
        let products = props.products.clone();
        change.reform(move |e: Event| {
            let id = select_value(&e);
            SaleChange::Product(products.iter().find(|product| product.id.to_string() == id).cloned())
        })
    };
    let on_step = change.reform(SaleChange::Step);
    let on_quantity = change.reform(SaleChange::Quantity);
    let on_description = change.reform(|e: InputEvent| SaleChange::Description(textarea_value(&e)));
    let on_date = change.reform(SaleChange::Date);
    let on_submit = props.actions.submit.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = props.actions.cancel.reform(|_: MouseEvent| ());

    let selected_id = form.product.as_ref().map(|product| product.id.to_string());

    html! {
        <ModalFrame title="Record Sale" {busy} on_close={props.actions.cancel.clone()} error={state.error.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Date"}</label>
                    <DateField value={form.date} on_change={on_date} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="sale-product">{"Product"}</label>
                    <select id="sale-product" class="modal-input" onchange={on_product} disabled={busy}>
                        <option value="" selected={selected_id.is_none()}>{"Select product"}</option>
                        {for props.products.iter().map(|product| {
                            let id = product.id.to_string();
                            let selected = selected_id.as_deref() == Some(id.as_str());
                            html! {
                                <option value={id} {selected} disabled={product.stock <= 0}>
                                    {format!("{} (stock: {})", product.product_name, product.stock)}
                                </option>
                            }
                        })}
                    </select>
                </div>
                {if let Some(product) = &form.product {
                    html! {
                        <div class="sale-product-info">
                            <span>{format!("Price: {}", format_rupiah(product.price))}</span>
                            <span>{format!("Available: {}", product.stock)}</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div class="form-group">
                    <label>{"Quantity"}</label>
                    <Stepper value={form.quantity} {on_step} on_input={on_quantity}
                        disabled={busy || form.product.is_none()} />
                </div>
                <div class="form-group">
                    <label for="sale-description">{"Description"}</label>
                    <textarea id="sale-description" class="modal-input" rows="2" placeholder="Optional"
                        value={form.description.clone()} oninput={on_description} disabled={busy} />
                </div>
                <div class="form-total">
                    <span>{"Total"}</span>
                    <strong>{format_rupiah(form.total())}</strong>
                </div>
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        {if busy { "Saving..." } else { "Save Sale" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
