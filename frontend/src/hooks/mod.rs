pub mod use_balance;
pub mod use_entity_list;
pub mod use_entity_modal;
pub mod use_toast;
