//! Field state and validation for each modal.
//!
//! Forms keep raw input strings the way the user typed them and only turn
//! them into a request body in `validate`, which reports the first problem
//! found as a ready-to-show sentence.

pub mod auth;
pub mod balance;
pub mod expense;
pub mod material;
pub mod product;
pub mod profile;
pub mod sale;
pub mod stock;

use crate::services::api::Resource;

pub trait EntityForm: Clone + PartialEq + Default + 'static {
    type Record: Resource;
    type Change: 'static;

    /// Apply one field edit. A returned message replaces the modal's error
    /// line; `None` clears it.
    fn apply(&mut self, change: Self::Change) -> Option<String>;

    fn validate(&self) -> Result<<Self::Record as Resource>::Payload, String>;
}

/// Forms that can also be opened on an existing record
pub trait EditableForm: EntityForm {
    fn from_record(record: &Self::Record) -> Self;
}
