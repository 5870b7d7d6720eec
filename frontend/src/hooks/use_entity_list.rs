use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::{ApiClient, Resource};
use crate::state::effects::{self, MutationEvent};
use crate::state::list::{ListAction, ListState};
use crate::state::toast::Toast;

pub struct UseEntityListResult<R: Resource> {
    pub state: UseReducerHandle<ListState<R>>,
    pub actions: UseEntityListActions<R>,
}

#[derive(Clone, PartialEq)]
pub struct UseEntityListActions<R: Resource> {
    pub refresh: Callback<()>,
    /// A modal saved something: refetch once and say so
    pub on_mutated: Callback<MutationEvent>,
    pub request_delete: Callback<R>,
    pub cancel_delete: Callback<()>,
    pub confirm_delete: Callback<()>,
}

/// Fetch a collection on mount and keep it in step with every mutation
#[hook]
pub fn use_entity_list<R: Resource>(api: &ApiClient, notify: Callback<Toast>) -> UseEntityListResult<R> {
    let state = use_reducer(ListState::<R>::default);

    let refresh = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_callback((), move |_, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                effects::load_list::<R>(&api, |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let on_mutated = {
        let api = api.clone();
        let notify = notify.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |event: MutationEvent| {
            notify.emit(Toast::success(event.success_message(R::SINGULAR)));
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                effects::refresh_after_mutation::<R>(&api, event, |action| dispatcher.dispatch(action)).await;
            });
        })
    };

    let request_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |record: R| dispatcher.dispatch(ListAction::RequestDelete(record)))
    };

    let cancel_delete = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(ListAction::CancelDelete))
    };

    let confirm_delete = {
        let state = state.clone();
        let api = api.clone();
        let on_mutated = on_mutated.clone();
        Callback::from(move |_| {
            if state.deleting {
                return;
            }
            let Some(record) = state.pending_delete.clone() else {
                return;
            };
            let api = api.clone();
            let dispatcher = state.dispatcher();
            let on_mutated = on_mutated.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match effects::delete_record(&api, &record, |action| dispatcher.dispatch(action)).await {
                    Ok(event) => on_mutated.emit(event),
                    Err(message) => notify.emit(Toast::error(message)),
                }
            });
        })
    };

    UseEntityListResult {
        state,
        actions: UseEntityListActions {
            refresh,
            on_mutated,
            request_delete,
            cancel_delete,
            confirm_delete,
        },
    }
}
