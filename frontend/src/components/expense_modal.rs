use shared::money::{format_rupiah, group_thousands, parse_digits};
use shared::ExpenseCategory;
use yew::prelude::*;

use super::date_selector::DateField;
use super::modal_frame::ModalFrame;
use super::stepper::Stepper;
use super::{input_value, select_value};
use crate::hooks::use_entity_modal::UseEntityModalActions;
use crate::state::forms::expense::{ExpenseChange, ExpenseForm};
use crate::state::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct ExpenseModalProps {
    pub state: ModalState<ExpenseForm>,
    pub actions: UseEntityModalActions<ExpenseForm>,
}

#[function_component(ExpenseModal)]
pub fn expense_modal(props: &ExpenseModalProps) -> Html {
    let state = &props.state;
    if !state.is_open() {
        return html! {};
    }
    let form = &state.form;
    let busy = state.submitting;
    let change = props.actions.change.clone();

    let on_date = change.reform(ExpenseChange::Date);
    let on_name = change.reform(|e: InputEvent| ExpenseChange::Name(input_value(&e)));
    let on_price = change.reform(|e: InputEvent| ExpenseChange::Price(input_value(&e)));
    let on_category = change.reform(|e: Event| ExpenseChange::Category(ExpenseCategory::parse(&select_value(&e))));
    let on_step = change.reform(|delta: i64| {
        if delta < 0 {
            ExpenseChange::DecrementItem
        } else {
            ExpenseChange::IncrementItem
        }
    });
    let on_item = change.reform(ExpenseChange::Item);
    let on_submit = props.actions.submit.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = props.actions.cancel.reform(|_: MouseEvent| ());

    let title = if state.is_editing() { "Edit Expense" } else { "Add Expense" };
    let price_display = parse_digits(&form.price).map(group_thousands).unwrap_or_default();

    html! {
        <ModalFrame {title} {busy} on_close={props.actions.cancel.clone()} error={state.error.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label>{"Date"}</label>
                    <DateField value={form.date} on_change={on_date} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="expense-name">{"Expense Name"}</label>
                    <input id="expense-name" type="text" class="modal-input" placeholder="e.g. Gas refill"
                        value={form.name.clone()} oninput={on_name} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="expense-category">{"Category"}</label>
                    <select id="expense-category" class="modal-input" onchange={on_category} disabled={busy}>
                        <option value="" selected={form.category.is_none()}>{"Select category"}</option>
                        {for ExpenseCategory::ALL.into_iter().map(|category| html! {
                            <option value={category.label()} selected={form.category == Some(category)}>
                                {category.label()}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Items"}</label>
                        <Stepper value={form.item} {on_step} on_input={on_item} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label for="expense-price">{"Price per Item (Rp)"}</label>
                        <input id="expense-price" type="text" inputmode="numeric" class="modal-input"
                            value={price_display} oninput={on_price} disabled={busy} />
                    </div>
                </div>
                <div class="form-total">
                    <span>{"Total"}</span>
                    <strong>{format_rupiah(form.total)}</strong>
                </div>
                <div class="modal-buttons">
                    <button type="submit" class="btn btn-primary" disabled={busy}>
                        {if busy { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={busy}>
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
