pub mod balance_card;
pub mod confirm_delete_modal;
pub mod date_selector;
pub mod expense_modal;
pub mod material_modal;
pub mod modal_frame;
pub mod product_modal;
pub mod sale_modal;
pub mod sidebar;
pub mod stepper;
pub mod stock_modal;
pub mod toast;

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::upload::Upload;

pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

pub fn textarea_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

pub fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

/// First file chosen in an `<input type="file">`
pub fn picked_file(e: &Event) -> Option<Upload> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
        .map(Upload::from_file)
}
