use shared::dates::format_display;
use shared::money::format_rupiah;
use shared::{Product, Sale};
use yew::prelude::*;

use super::list_body;
use crate::components::balance_card::BalanceCard;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::sale_modal::SaleModal;
use crate::components::toast::ToastView;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_entity_modal::use_entity_modal;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::state::forms::sale::SaleForm;

#[derive(Properties, PartialEq)]
pub struct SalesPageProps {
    pub api_client: ApiClient,
}

fn total_label(sale: &Sale) -> String {
    sale.total().map(format_rupiah).unwrap_or_else(|| "-".to_string())
}

#[function_component(SalesPage)]
pub fn sales_page(props: &SalesPageProps) -> Html {
    let toast = use_toast();
    let list = use_entity_list::<Sale>(&props.api_client, toast.show.clone());
    let products = use_entity_list::<Product>(&props.api_client, toast.show.clone());

    let modal = use_entity_modal::<SaleForm>(&props.api_client, list.actions.on_mutated.clone());

    // Recording or deleting a sale moves stock, so the product picker refetches too
    {
        let refresh_products = products.actions.refresh.clone();
        use_effect_with(list.state.revision, move |revision| {
            if *revision > 0 {
                refresh_products.emit(());
            }
            || ()
        });
    }

    let on_add = modal.actions.open_create.reform(|_: MouseEvent| ());

    let delete_button = |sale: &Sale| -> Html {
        let sale = sale.clone();
        let onclick = list.actions.request_delete.reform(move |_: MouseEvent| sale.clone());
        html! { <button type="button" class="btn btn-link btn-danger-text" {onclick}>{"Delete"}</button> }
    };

    let rows = |sales: &[Sale]| -> Html {
        html! {
            <>
                <table class="record-table desktop-only">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Product"}</th>
                            <th>{"Quantity"}</th>
                            <th>{"Total"}</th>
                            <th>{"Description"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for sales.iter().map(|sale| html! {
                            <tr key={sale.id.to_string()}>
                                <td>{format_display(sale.date)}</td>
                                <td>{sale.product_name().to_string()}</td>
                                <td>{sale.quantity}</td>
                                <td>{total_label(sale)}</td>
                                <td>{sale.description.clone().unwrap_or_default()}</td>
                                <td class="row-actions">{delete_button(sale)}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
                <div class="record-cards mobile-only">
                    {for sales.iter().map(|sale| html! {
                        <div class="record-card" key={sale.id.to_string()}>
                            <div class="record-card-header">
                                <strong>{sale.product_name().to_string()}</strong>
                                <span class="record-card-date">{format_display(sale.date)}</span>
                            </div>
                            <div class="record-card-body">
                                <span>{format!("Qty {}", sale.quantity)}</span>
                                <strong>{total_label(sale)}</strong>
                            </div>
                            <div class="record-card-actions">{delete_button(sale)}</div>
                        </div>
                    })}
                </div>
            </>
        }
    };

    let delete_message = list.state.pending_delete.as_ref().map(|sale| {
        format!(
            "Delete the sale of {} × {} on {}?",
            sale.quantity,
            sale.product_name(),
            format_display(sale.date)
        )
    });

    html! {
        <div class="page sales-page">
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            <div class="page-header">
                <h2>{"Sales"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_add}>{"Record Sale"}</button>
            </div>
            <BalanceCard api_client={props.api_client.clone()} revision={list.state.revision} />
            {list_body(list.state.view(), "sales", rows)}
            <SaleModal
                state={(*modal.state).clone()}
                actions={modal.actions.clone()}
                products={products.state.items.clone()}
            />
            <ConfirmDeleteModal
                is_open={delete_message.is_some()}
                title="Delete Sale"
                message={delete_message.clone().unwrap_or_default()}
                busy={list.state.deleting}
                on_confirm={list.actions.confirm_delete.clone()}
                on_cancel={list.actions.cancel_delete.clone()}
            />
        </div>
    }
}
