pub mod expenses;
pub mod login;
pub mod materials;
pub mod products;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod sales;

use yew::prelude::*;

use crate::state::list::{empty_message, ListView};

/// Loading line, error banner, empty state or the page's own rows
pub fn list_body<R>(view: ListView<'_, R>, plural: &str, rows: impl FnOnce(&[R]) -> Html) -> Html {
    match view {
        ListView::Loading => html! { <div class="list-loading">{format!("Loading {}...", plural)}</div> },
        ListView::Failed(message) => html! { <div class="list-error">{message.to_string()}</div> },
        ListView::Empty => html! { <div class="list-empty">{empty_message(plural)}</div> },
        ListView::Rows(items) => rows(items),
    }
}
