//! Async steps shared by the list pages and their modals.
//!
//! Each function talks to the gateway and reports through a `dispatch`
//! closure, so hooks plug in a reducer dispatcher and tests plug in a plain
//! state cell.

use crate::services::api::{ApiClient, Resource};
use crate::state::list::{fetch_error_message, ListAction};
use crate::state::modal::{Submission, SubmitTarget};

/// A change the backend accepted. Lists refetch exactly once per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationEvent {
    Created,
    Updated,
    Deleted,
}

impl MutationEvent {
    pub fn success_message(&self, singular: &str) -> String {
        let verb = match self {
            MutationEvent::Created => "created",
            MutationEvent::Updated => "updated",
            MutationEvent::Deleted => "deleted",
        };
        format!("{} {} successfully", capitalize(singular), verb)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub async fn load_list<R: Resource>(api: &ApiClient, dispatch: impl Fn(ListAction<R>)) {
    dispatch(ListAction::FetchStarted);
    match api.list::<R>().await {
        Ok(items) => dispatch(ListAction::Loaded(items)),
        Err(err) => {
            log::error!("failed to fetch {}: {}", R::PLURAL, err);
            dispatch(ListAction::FetchFailed(fetch_error_message(R::PLURAL, &err)));
        }
    }
}

/// Reaction to an accepted mutation: bump the list revision, then refetch
/// the collection exactly once.
pub async fn refresh_after_mutation<R: Resource>(
    api: &ApiClient,
    event: MutationEvent,
    dispatch: impl Fn(ListAction<R>),
) {
    log::debug!("{:?} {}, refetching {}", event, R::SINGULAR, R::PLURAL);
    dispatch(ListAction::Mutated);
    load_list::<R>(api, &dispatch).await;
}

/// Send a validated form; the error is the line to show in the modal
pub async fn submit_form<R: Resource>(
    api: &ApiClient,
    submission: &Submission<R::Payload>,
) -> Result<MutationEvent, String> {
    let result = match &submission.target {
        SubmitTarget::Create => api
            .create::<R>(&submission.payload)
            .await
            .map(|_| MutationEvent::Created),
        SubmitTarget::Update(id) => api
            .update::<R>(id, &submission.payload)
            .await
            .map(|_| MutationEvent::Updated),
    };
    result.map_err(|err| {
        log::error!("failed to save {}: {}", R::SINGULAR, err);
        let verb = match submission.target {
            SubmitTarget::Create => "create",
            SubmitTarget::Update(_) => "update",
        };
        err.user_message(&format!("Failed to {} {}", verb, R::SINGULAR))
    })
}

/// Delete the record waiting in the confirmation dialog
pub async fn delete_record<R: Resource>(
    api: &ApiClient,
    record: &R,
    dispatch: impl Fn(ListAction<R>),
) -> Result<MutationEvent, String> {
    dispatch(ListAction::DeleteStarted);
    match api.delete::<R>(record.id()).await {
        Ok(()) => {
            dispatch(ListAction::DeleteFinished);
            Ok(MutationEvent::Deleted)
        }
        Err(err) => {
            log::error!("failed to delete {} {}: {}", R::SINGULAR, record.id(), err);
            dispatch(ListAction::DeleteFailed);
            Err(err.user_message(&format!("Failed to delete {}", R::SINGULAR)))
        }
    }
}
