use shared::money::format_rupiah;
use shared::Material;
use yew::prelude::*;

use super::list_body;
use crate::components::confirm_delete_modal::ConfirmDeleteModal;
use crate::components::material_modal::MaterialModal;
use crate::components::toast::ToastView;
use crate::hooks::use_entity_list::use_entity_list;
use crate::hooks::use_entity_modal::use_entity_modal;
use crate::hooks::use_toast::use_toast;
use crate::services::api::ApiClient;
use crate::state::forms::material::MaterialForm;

#[derive(Properties, PartialEq)]
pub struct MaterialsPageProps {
    pub api_client: ApiClient,
}

fn quantity(material: &Material) -> String {
    format!("{} {}", material.weight, material.weight_unit)
}

#[function_component(MaterialsPage)]
pub fn materials_page(props: &MaterialsPageProps) -> Html {
    let toast = use_toast();
    let list = use_entity_list::<Material>(&props.api_client, toast.show.clone());
    let modal = use_entity_modal::<MaterialForm>(&props.api_client, list.actions.on_mutated.clone());

    let on_add = modal.actions.open_create.reform(|_: MouseEvent| ());
    let on_edit = {
        let state = modal.state.clone();
        Callback::from(move |material: Material| {
            let mut next = (*state).clone();
            next.open_edit(&material);
            state.set(next);
        })
    };

    let actions = |material: &Material| -> Html {
        let edit = {
            let material = material.clone();
            on_edit.reform(move |_: MouseEvent| material.clone())
        };
        let delete = {
            let material = material.clone();
            list.actions.request_delete.reform(move |_: MouseEvent| material.clone())
        };
        html! {
            <>
                <button type="button" class="btn btn-link" onclick={edit}>{"Edit"}</button>
                <button type="button" class="btn btn-link btn-danger-text" onclick={delete}>{"Delete"}</button>
            </>
        }
    };

    let rows = |materials: &[Material]| -> Html {
        html! {
            <>
                <table class="record-table desktop-only">
                    <thead>
                        <tr>
                            <th>{"Material"}</th>
                            <th>{"Price"}</th>
                            <th>{"Quantity"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {for materials.iter().map(|material| html! {
                            <tr key={material.id.to_string()}>
                                <td>{material.material_name.clone()}</td>
                                <td>{format_rupiah(material.price_per_unit)}</td>
                                <td>{quantity(material)}</td>
                                <td class="row-actions">{actions(material)}</td>
                            </tr>
                        })}
                    </tbody>
                </table>
                <div class="record-cards mobile-only">
                    {for materials.iter().map(|material| html! {
                        <div class="record-card" key={material.id.to_string()}>
                            <div class="record-card-header">
                                <strong>{material.material_name.clone()}</strong>
                                <span>{quantity(material)}</span>
                            </div>
                            <div class="record-card-body">
                                <span>{format!("{} per {}", format_rupiah(material.price_per_unit), quantity(material))}</span>
                            </div>
                            <div class="record-card-actions">{actions(material)}</div>
                        </div>
                    })}
                </div>
            </>
        }
    };

    let delete_message = list
        .state
        .pending_delete
        .as_ref()
        .map(|material| format!("Delete \"{}\"? This cannot be undone.", material.material_name));

    html! {
        <div class="page materials-page">
            <ToastView toast={toast.current.clone()} on_dismiss={toast.dismiss.clone()} />
            <div class="page-header">
                <h2>{"Materials"}</h2>
                <button type="button" class="btn btn-primary" onclick={on_add}>{"Add Material"}</button>
            </div>
            {list_body(list.state.view(), "materials", rows)}
            <MaterialModal state={(*modal.state).clone()} actions={modal.actions.clone()} />
            <ConfirmDeleteModal
                is_open={delete_message.is_some()}
                title="Delete Material"
                message={delete_message.clone().unwrap_or_default()}
                busy={list.state.deleting}
                on_confirm={list.actions.confirm_delete.clone()}
                on_cancel={list.actions.cancel_delete.clone()}
            />
        </div>
    }
}
