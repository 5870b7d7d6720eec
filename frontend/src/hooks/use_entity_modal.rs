use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::effects::{self, MutationEvent};
use crate::state::forms::EntityForm;
use crate::state::modal::ModalState;

pub struct UseEntityModalResult<F: EntityForm> {
    pub state: UseStateHandle<ModalState<F>>,
    pub actions: UseEntityModalActions<F>,
}

#[derive(Clone, PartialEq)]
pub struct UseEntityModalActions<F: EntityForm> {
    pub open_create: Callback<()>,
    pub change: Callback<F::Change>,
    pub submit: Callback<()>,
    pub cancel: Callback<()>,
}

/// Add/edit modal for one entity. `on_mutated` fires after the backend
/// accepted the form, right before the modal closes.
#[hook]
pub fn use_entity_modal<F: EntityForm>(
    api: &ApiClient,
    on_mutated: Callback<MutationEvent>,
) -> UseEntityModalResult<F> {
    let state = use_state(ModalState::<F>::closed);

    let open_create = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            next.open_create();
            state.set(next);
        })
    };

    let change = {
        let state = state.clone();
        Callback::from(move |change: F::Change| {
            let mut next = (*state).clone();
            next.change(change);
            state.set(next);
        })
    };

    let submit = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_| {
            let mut next = (*state).clone();
            let submission = next.begin_submit();
            state.set(next.clone());
            let Some(submission) = submission else {
                return;
            };

            let state = state.clone();
            let api = api.clone();
            let on_mutated = on_mutated.clone();
            spawn_local(async move {
                match effects::submit_form::<F::Record>(&api, &submission).await {
                    Ok(event) => {
                        on_mutated.emit(event);
                        state.set(ModalState::closed());
                    }
                    Err(message) => {
                        next.submit_failed(message);
                        state.set(next);
                    }
                }
            });
        })
    };

    let cancel = {
        let state = state.clone();
        Callback::from(move |_| state.set(ModalState::closed()))
    };

    UseEntityModalResult {
        state,
        actions: UseEntityModalActions {
            open_create,
            change,
            submit,
            cancel,
        },
    }
}
