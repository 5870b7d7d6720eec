use shared::dates::format_display;
use shared::money::format_rupiah;
use shared::Expense;
use yew::prelude::*;

use super::list_body;
use crate::components::balance_card::BalanceCard;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::expense_modal::ExpenseModal;
use crate::components::toast::ToastView;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_entity_modal::use_entity_modal;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::state::forms::expense::ExpenseForm;

#[derive(Properties, PartialEq)]
pub struct ExpensesPageProps {
    pub api_client: ApiClient,
}

#[function_component(ExpensesPage)]
pub fn expenses_page(props: &ExpensesPageProps) -> Html {
    let toast = use_toast();
    let list = use_entity_list::<Expense>(&props.api_client, toast.show.clone());
    let modal = use_entity_modal::<ExpenseForm>(&props.api_client, list.actions.on_mutated.clone());

    let on_add = modal.actions.open_create.reform(|_: MouseEvent| ());
    let on_edit = {
        let state = modal.state.clone();
        Callback::from(move |expense: Expense| {
            let mut next = (*state).clone();
            next.open_edit(&expense);
            state.set(next);
        })
    };

    let render_row = |expense: &Expense| -> Html {
        let edit = {
            let expense = expense.clone();
            on_edit.reform(move |_: MouseEvent| expense.clone())
        };
        let delete = {
            let expense = expense.clone();
            list.actions.request_delete.reform(move |_: MouseEvent| expense.clone())
        };
        html! {
            <tr key={expense.id.to_string()}>
                <td>{format_display(expense.date)}</td>
                <td>{expense.name.clone()}</td>
                <td>{expense.category.label()}</td>
                <td>{expense.item}</td>
                <td>{format_rupiah(expense.price)}</td>
                <td>{format_rupiah(expense.total_price)}</td>
                <td class="row-actions">
                    <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                    <button type="button" class="btn btn-link btn-danger-text" onclick={delete}>{"Delete"}</button>
                </td>
            </tr>
        }
    };

    let render_card = |expense: &Expense| -> Html {
        let edit = {
            let expense = expense.clone();
            on_edit.reform(move |_: MouseEvent| expense.clone())
        };
        let delete = {
            let expense = expense.clone();
            list.actions.request_delete.reform(move |_: MouseEvent| expense.clone())
        };
        html! {
            <div class="record-card" key={expense.id.to_string()}>
                <div class="record-card-header">
                    <strong>{expense.name.clone()}</strong>
                    <span class="record-card-date">{format_display(expense.date)}</span>
                </div>
                <div class="record-card-body">
                    <span class="badge">{expense.category.label()}</span>
                    <span>{format!("{} × {}", expense.item, format_rupiah(expense.price))}</span>
                    <strong>{format_rupiah(expense.total_price)}</strong>
                </div>
                <div class="record-card-actions">
                    <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                    <button type="button" class="btn btn-link btn-danger-text" onclick={delete}>{"Delete"}</button>
                </div>
            </div>
        }
    };

    let rows = |expenses: &[Expense]| -> Html {
        html! {
            <>
                <table class="record-table desktop-only">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Name"}</th>
                            <th>{"Category"}</th>
                            <th>{"Items"}</th>
                            <th>{"Price"}</th>
                            <th>{"Total"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{for expenses.iter().map(render_row)}</tbody>
                </table>
                <div class="record-cards mobile-only">{for expenses.iter().map(render_card)}</div>
            </>
        }
    };

    let delete_message = list
        .state
        .pending_delete
        .as_ref()
        .map(|expense| format!("Delete \"{}\"? This cannot be undone.", expense.name));

    html! {
        <div class="page expenses-page">
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            <div class="page-header">
                <h2>{"Expenses"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_add}>{"Add Expense"}</button>
            </div>
            <BalanceCard api_client={props.api_client.clone()} revision={list.state.revision} />
            {list_body(list.state.view(), "expenses", rows)}
            <ExpenseModal state={(*modal.state).clone()} actions={modal.actions.clone()} />
            <ConfirmDeleteModal
                is_open={delete_message.is_some()}
                title="Delete Expense"
                message={delete_message.clone().unwrap_or_default()}
                busy={list.state.deleting}
                on_confirm={list.actions.confirm_delete.clone()}
                on_cancel={list.actions.cancel_delete.clone()}
            />
        </div>
    }
}
