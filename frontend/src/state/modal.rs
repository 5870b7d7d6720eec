use shared::EntityId;

use super::forms::{EditableForm, EntityForm};
use crate::services::api::Resource;

#[derive(Debug, Clone, PartialEq)]
pub enum ModalMode {
    Closed,
    Create,
    Edit(EntityId),
}

/// Where a validated form goes
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitTarget {
    Create,
    Update(EntityId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub target: SubmitTarget,
    pub payload: P,
}

/// One add/edit modal: its mode, field values and submit progress
#[derive(Debug, Clone, PartialEq)]
pub struct ModalState<F> {
    pub mode: ModalMode,
    pub form: F,
    pub submitting: bool,
    pub error: Option<String>,
}

impl<F: EntityForm> Default for ModalState<F> {
    fn default() -> Self {
        Self::closed()
    }
}

impl<F: EntityForm> ModalState<F> {
    pub fn closed() -> Self {
        Self {
            mode: ModalMode::Closed,
            form: F::default(),
            submitting: false,
            error: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.mode != ModalMode::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ModalMode::Edit(_))
    }

    pub fn open_create(&mut self) {
        *self = Self {
            mode: ModalMode::Create,
            ..Self::closed()
        };
    }

    pub fn open_edit(&mut self, record: &F::Record)
    where
        F: EditableForm,
    {
        *self = Self {
            mode: ModalMode::Edit(record.id().clone()),
            form: F::from_record(record),
            submitting: false,
            error: None,
        };
    }

    pub fn change(&mut self, change: F::Change) {
        if self.submitting {
            return;
        }
        self.error = self.form.apply(change);
    }

    /// Validate and, if the form is good, mark the modal busy.
    ///
    /// Returns `None` when there is nothing to send: the modal is closed, a
    /// request is already out, or validation failed (its message is now in
    /// `error`).
    pub fn begin_submit(&mut self) -> Option<Submission<<F::Record as Resource>::Payload>> {
        let target = match &self.mode {
            ModalMode::Closed => return None,
            ModalMode::Create => SubmitTarget::Create,
            ModalMode::Edit(id) => SubmitTarget::Update(id.clone()),
        };
        if self.submitting {
            return None;
        }
        match self.form.validate() {
            Ok(payload) => {
                self.submitting = true;
                self.error = None;
                Some(Submission { target, payload })
            }
            Err(message) => {
                log::debug!("{} form rejected: {}", <F::Record as Resource>::SINGULAR, message);
                self.error = Some(message);
                None
            }
        }
    }

    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Close and forget every field; also used for cancel
    pub fn close(&mut self) {
        *self = Self::closed();
    }
}
