pub mod effects;
pub mod forms;
pub mod list;
pub mod modal;
pub mod toast;
