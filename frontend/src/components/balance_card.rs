use shared::money::format_rupiah;
use yew::prelude::*;

use super::input_value;
use super::modal_frame::ModalFrame;
use crate::hooks::use_balance::use_balance;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct BalanceCardProps {
    pub api_client: ApiClient,
    /// Refetches whenever this changes, and once on mount
    #[prop_or_default]
    pub revision: u32,
}

#[function_component(BalanceCard)]
pub fn balance_card(props: &BalanceCardProps) -> Html {
    let balance = use_balance(&props.api_client);
    let state = balance.state.clone();

    {
        let refresh = balance.actions.refresh.clone();
        use_effect_with(props.revision, move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_edit = balance.actions.start_edit.reform(|_: MouseEvent| ());
    let on_input = balance.actions.input.reform(|e: InputEvent| input_value(&e));
    let on_save = balance.actions.save.reform(|e: SubmitEvent| e.prevent_default());
    let on_cancel = balance.actions.cancel_edit.reform(|_: MouseEvent| ());

    let amount = if state.loading && state.balance.is_none() {
        html! { <span class="balance-loading">{"Loading..."}</span> }
    } else {
        html! { <span class="balance-amount">{format_rupiah(state.balance.unwrap_or(0.0))}</span> }
    };

    html! {
        <div class="balance-card">
            <div class="balance-header">
                <span class="balance-label">{"Balance"}</span>
                <button type="button" class="btn btn-link" onclick={on_edit} disabled={state.loading}>
                    {"Edit"}
                </button>
            </div>
            {amount}
            {if let (Some(error), None) = (state.error.clone(), state.editing.as_ref()) {
                html! { <div class="balance-error">{error}</div> }
            } else {
                html! {}
            }}
            {if let Some(editing) = state.editing.clone() {
                html! {
                    <ModalFrame
                        title="Edit Balance"
                        busy={state.saving}
                        on_close={balance.actions.cancel_edit.clone()}
                        error={state.error.clone()}
                    >
                        <form class="modal-form" onsubmit={on_save}>
                            <div class="form-group">
                                <label for="balance-amount">{"Balance (Rp)"}</label>
                                <input
                                    id="balance-amount"
                                    type="text"
                                    inputmode="numeric"
                                    class="modal-input"
                                    value={editing}
                                    oninput={on_input}
                                    disabled={state.saving}
                                />
                            </div>
                            <div class="modal-buttons">
                                <button type="submit" class="btn btn-primary" disabled={state.saving}>
                                    {if state.saving { "Saving..." } else { "Save" }}
                                </button>
                                <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={state.saving}>
                                    {"Cancel"}
                                </button>
                            </div>
                        </form>
                    </ModalFrame>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
