use shared::{MeasurementType, WeightUnit};
use yew::prelude::*;

use super::modal_frame::ModalFrame;
use super::{input_value, select_value};
use crate::hooks::use_entity_modal::UseEntityModalActions;
use crate::state::forms::material::{MaterialChange, MaterialForm};
use crate::state::modal::ModalState;

#[derive(Properties, PartialEq)]
pub struct MaterialModalProps {
    pub state: ModalState<MaterialForm>,
    pub actions: UseEntityModalActions<MaterialForm>,
}

#[function_component(MaterialModal)]
pub fn material_modal(props: &MaterialModalProps) -> Html {
    let state = &props.state;
    if !state.is_open() {
        return html! {};
    }
    let form = &state.form;
    let busy = state.submitting;
    let change = props.actions.change.clone();

    let on_name = change.reform(|e: InputEvent| MaterialChange::Name(input_value(&e)));
    let on_price = change.reform(|e: InputEvent| MaterialChange::PricePerUnit(input_value(&e)));
    let on_weight = change.reform(|e: InputEvent| MaterialChange::Weight(input_value(&e)));
    let on_measurement = change.reform(|e: Event| {
        MaterialChange::Measurement(MeasurementType::parse(&select_value(&e)).unwrap_or_default())
    });
    let on_unit = {
        let fallback = form.measurement.default_unit();
        change.reform(move |e: Event| MaterialChange::Unit(WeightUnit::parse(&select_value(&e)).unwrap_or(fallback)))
    };
    let on_submit = props.actions.submit.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = props.actions.cancel.reform(|_: MouseEvent| ());

    let title = if state.is_editing() { "Edit Material" } else { "Add Material" };

    html! {
        <ModalFrame {title} {busy} on_close={props.actions.cancel.clone()} error={state.error.clone()}>
            <form class="modal-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="material-name">{"Material Name"}</label>
                    <input id="material-name" type="text" class="modal-input" placeholder="e.g. Flour"
                        value={form.material_name.clone()} oninput={on_name} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="material-price">{"Price per Unit (Rp)"}</label>
                    <input id="material-price" type="number" min="0" class="modal-input"
                        value={form.price_per_unit.clone()} oninput={on_price} disabled={busy} />
                </div>
                <div class="form-group">
                    <label for="material-measurement">{"Measurement"}</label>
                    <select id="material-measurement" class="modal-input" onchange={on_measurement} disabled={busy}>
                        {for [MeasurementType::Weight, MeasurementType::Volume].into_iter().map(|measurement| html! {
                            <option value={measurement.as_str()} selected={measurement == form.measurement}>
                                {if measurement == MeasurementType::Weight { "Weight" } else { "Volume" }}
                            </option>
                        })}
                    </select>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="material-weight">{"Amount"}</label>
                        <input id="material-weight" type="number" min="0" step="any" class="modal-input"
                            value={form.weight.clone()} oninput={on_weight} disabled={busy} />
                    </div>
                    <div class="form-group">
                        <label for="material-unit">{"Unit"}</label>
                        <select id="material-unit" class="modal-input" onchange={on_unit} disabled={busy}>
                            {for form.measurement.units().into_iter().map(|unit| html! {
                                <option value={unit.as_str()} selected={unit == form.weight_unit}>{unit.as_str()}</option>
                            })}
                        </select>
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
