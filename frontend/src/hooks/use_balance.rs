use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::state::forms::balance::{BalanceAction, BalanceState};

pub struct UseBalanceResult {
    pub state: UseReducerHandle<BalanceState>,
    pub actions: UseBalanceActions,
}

#[derive(Clone)]
pub struct UseBalanceActions {
    pub refresh: Callback<()>,
    pub start_edit: Callback<()>,
    pub input: Callback<String>,
    pub cancel_edit: Callback<()>,
    pub save: Callback<()>,
}

/// Balance card state. Nothing is fetched until `refresh` is called.
#[hook]
pub fn use_balance(api: &ApiClient) -> UseBalanceResult {
    let state = use_reducer(BalanceState::default);

    let refresh = {
        let api = api.clone();
        let dispatcher = state.dispatcher();
        use_callback((), move |_, _| {
            let api = api.clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                dispatcher.dispatch(BalanceAction::FetchStarted);
                match api.get_balance().await {
                    Ok(balance) => dispatcher.dispatch(BalanceAction::Loaded(balance.balance)),
                    Err(err) => {
                        log::error!("failed to fetch balance: {}", err);
                        dispatcher.dispatch(BalanceAction::FetchFailed(err.user_message("Failed to fetch balance")));
                    }
                }
            });
        })
    };

    let start_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BalanceAction::StartEdit))
    };

    let input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |raw: String| dispatcher.dispatch(BalanceAction::Input(raw)))
    };

    let cancel_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(BalanceAction::CancelEdit))
    };

    let save = {
        let state = state.clone();
        let api = api.clone();
        Callback::from(move |_| {
            if state.saving {
                return;
            }
            let Some(amount) = state.pending_amount() else {
                return;
            };
            let api = api.clone();
            let dispatcher = state.dispatcher();
            dispatcher.dispatch(BalanceAction::SaveStarted);
            spawn_local(async move {
                match api.update_balance(amount).await {
                    Ok(balance) => {
                        log::info!("balance set to {}", balance.balance);
                        dispatcher.dispatch(BalanceAction::Saved(balance.balance));
                    }
                    Err(err) => {
                        log::error!("failed to update balance: {}", err);
                        dispatcher.dispatch(BalanceAction::SaveFailed(err.user_message("Failed to update balance")));
                    }
                }
            });
        })
    };

    UseBalanceResult {
        state,
        actions: UseBalanceActions {
            refresh,
            start_edit,
            input,
            cancel_edit,
            save,
        },
    }
}
