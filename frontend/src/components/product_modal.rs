use shared::{Material, WeightUnit};
use yew::prelude::*;

use super::modal_frame::ModalFrame;
use super::{input_value, picked_file, select_value, textarea_value};
use crate::hooks::use_entity_modal::UseEntityModalActions;
use crate::state::forms::product::{ProductChange, ProductForm};
use crate::state::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct ProductModalProps {
    pub state: ModalState<ProductForm>,
    pub actions: UseEntityModalActions<ProductForm>,
    /// Materials the user can attach
    pub materials: Vec<Material>,
}

#[function_component(ProductModal)]
pub fn product_modal(props: &ProductModalProps) -> Html {
    let state = &props.state;
    if !state.is_open() {
        return html! {};
    }
    let form = &state.form;
    let busy = state.submitting;
    let change = props.actions.change.clone();

    let on_name = change.reform(|e: InputEvent| ProductChange::Name(input_value(&e)));
    let on_price = change.reform(|e: InputEvent| ProductChange::Price(input_value(&e)));
    let on_stock = change.reform(|e: InputEvent| ProductChange::Stock(input_value(&e)));
    let on_description = change.reform(|e: InputEvent| ProductChange::Description(textarea_value(&e)));
    let on_draft_material = change.reform(|e: Event| ProductChange::DraftMaterial(select_value(&e)));
    let on_draft_amount = change.reform(|e: InputEvent| ProductChange::DraftAmount(input_value(&e)));
    let on_draft_unit = change.reform(|e: Event| ProductChange::DraftUnit(WeightUnit::parse(&select_value(&e))));
    let on_image = change.reform(|e: Event| ProductChange::Image(picked_file(&e)));
    let on_add_material = {
        let materials = props.materials.clone();
        change.reform(move |_: MouseEvent| ProductChange::AddMaterial(materials.clone()))
    };
    let on_submit = props.actions.submit.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = props.actions.cancel.reform(|_: MouseEvent| ());

    let title = if state.is_editing() { "Edit Product" } else { "Add Product" };

    html! {
        <ModalFrame {title} {busy} on_close={props.actions.cancel.clone()} error={state.error.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="product-name">{"Product Name"}</label>
                    <input id="product-name" type="text" class="modal-input"
                        value={form.product_name.clone()} oninput={on_name} disabled={busy} />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="product-price">{"Price (Rp)"}</label>
                        <input id="product-price" type="number" min="0" class="modal-input"
                            value={form.price.clone()} oninput={on_price} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label for="product-stock">{"Stock"}</label>
                        <input id="product-stock" type="number" min="0" step="1" class="modal-input"
                            value={form.stock.clone()} oninput={on_stock} disabled={busy} />
                    </div>
                </div>
                <div class="form-group">
                    <label for="product-description">{"Description"}</label>
                    <textarea id="product-description" class="modal-input" rows="2"
                        value={form.description.clone()} oninput={on_description} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="product-image">{"Image"}</label>
                    {for form.current_image.as_ref().filter(|_| form.image.is_none()).map(|url| html! {
                        <img class="product-thumb" src={url.clone()} alt={form.product_name.clone()} />
                    })}
                    <input id="product-image" type="file" accept="image/*" class="modal-input"
                        onchange={on_image} disabled={busy} />
                    {for form.image.as_ref().map(|image| html! {
                        <p class="file-name">{image.file_name()}</p>
                    })}
                </div>

                <div class="form-group">
                    <label>{"Materials"}</label>
                    {if form.materials.is_empty() {
                        html! { <p class="empty-hint">{"No materials added yet"}</p> }
                    } else {
                        html! {
                            <ul class="material-lines">
                                {for form.materials.iter().map(|line| {
                                    let id = line.material_id.clone();
                                    let on_remove = change.reform(move |_: MouseEvent| ProductChange::RemoveMaterial(id.clone()));
                                    html! {
                                        <li class="material-line">
                                            <span>{format!("{} · {} {}", line.material_name, line.amount_per_product, line.weight_unit)}</span>
                                            <button type="button" class="btn btn-link" onclick={on_remove} disabled={busy}>
                                                {"Remove"}
                                            </button>
                                        </li>
                                    }
                                })}
                            </ul>
                        }
                    }}
                    <div class="material-draft">
                        <select class="modal-input" onchange={on_draft_material} disabled={busy}>
                            <option value="" selected={form.draft.material_id.is_empty()}>{"Select material"}</option>
                            {for props.materials.iter().map(|material| {
                                let id = material.id.to_string();
                                let selected = form.draft.material_id == id;
                                html! { <option value={id} {selected}>{material.material_name.clone()}</option> }
                            })}
                        </select>
                        <input type="number" min="0" step="any" class="modal-input" placeholder="Amount"
                            value={form.draft.amount.clone()} oninput={on_draft_amount} disabled={busy} />
                        <select class="modal-input" onchange={on_draft_unit} disabled={busy}>
                            <option value="" selected={form.draft.weight_unit.is_none()}>{"Unit"}</option>
                            {for WeightUnit::ALL.into_iter().map(|unit| html! {
                                <option value={unit.as_str()} selected={form.draft.weight_unit == Some(unit)}>
                                    {unit.as_str()}
                                </option>
                            })}
                        </select>
                        <button type="button" class="btn btn-secondary" onclick={on_add_material} disabled={busy}>
                            {"Add"}
                        </button>
                    </div>
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
