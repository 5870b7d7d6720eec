use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::state::toast::{Toast, ToastAction, ToastState, TOAST_DURATION_MS};

pub struct UseToastResult {
    pub current: Option<Toast>,
    pub show: Callback<Toast>,
    pub dismiss: Callback<()>,
}

/// One toast slot per page; each toast hides itself after three seconds
#[hook]
pub fn use_toast() -> UseToastResult {
    let state = use_reducer(ToastState::default);
    let counter = use_mut_ref(|| 0u32);

    let show = {
        let dispatcher = state.dispatcher();
        use_callback((), move |toast: Toast, _| {
            let id = {
                let mut counter = counter.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            dispatcher.dispatch(ToastAction::Show(id, toast));

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                TimeoutFuture::new(TOAST_DURATION_MS).await;
                dispatcher.dispatch(ToastAction::Dismiss(id));
            });
        })
    };

    let dismiss = {
        let state = state.clone();
        Callback::from(move |_| {
            if let Some((id, _)) = &state.current {
                state.dispatch(ToastAction::Dismiss(*id));
            }
        })
    };

    UseToastResult {
        current: state.toast().cloned(),
        show,
        dismiss,
    }
}
