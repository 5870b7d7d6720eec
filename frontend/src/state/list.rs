use std::rc::Rc;

use yew::Reducible;

use crate::services::api::Resource;
use crate::services::errors::ApiError;

/// Collection shown by a list page plus its delete-confirmation state
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    pub items: Vec<R>,
    pub loading: bool,
    /// At least one fetch has finished, successfully or not
    pub loaded: bool,
    pub error: Option<String>,
    /// Record waiting for the user to confirm deletion
    pub pending_delete: Option<R>,
    pub deleting: bool,
    /// Counts accepted mutations, for views that depend on this collection
    pub revision: u32,
}

impl<R> Default for ListState<R> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            loaded: false,
            error: None,
            pending_delete: None,
            deleting: false,
            revision: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<R> {
    FetchStarted,
    Loaded(Vec<R>),
    FetchFailed(String),
    RequestDelete(R),
    CancelDelete,
    DeleteStarted,
    DeleteFinished,
    DeleteFailed,
    Mutated,
}

/// What the page should render right now
#[derive(Debug, PartialEq)]
pub enum ListView<'a, R> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [R]),
}

impl<R: Resource> Reducible for ListState<R> {
    type Action = ListAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::FetchStarted => {
                next.loading = true;
                next.error = None;
            }
            ListAction::Loaded(items) => {
                next.items = items;
                next.loading = false;
                next.loaded = true;
            }
            ListAction::FetchFailed(message) => {
                next.items.clear();
                next.loading = false;
                next.loaded = true;
                next.error = Some(message);
            }
            ListAction::RequestDelete(record) => {
                if next.deleting {
                    return self;
                }
                next.pending_delete = Some(record);
            }
            ListAction::CancelDelete => {
                if next.deleting {
                    return self;
                }
                next.pending_delete = None;
            }
            ListAction::DeleteStarted => next.deleting = true,
            // The dialog closes either way; failures are reported by toast
            ListAction::DeleteFinished | ListAction::DeleteFailed => {
                next.deleting = false;
                next.pending_delete = None;
            }
            ListAction::Mutated => next.revision = next.revision.wrapping_add(1),
        }
        Rc::new(next)
    }
}

impl<R> ListState<R> {
    pub fn view(&self) -> ListView<'_, R> {
        if self.loading && !self.loaded {
            return ListView::Loading;
        }
        match (&self.error, self.items.is_empty()) {
            (Some(message), true) => ListView::Failed(message),
            (None, true) => ListView::Empty,
            (_, false) => ListView::Rows(&self.items),
        }
    }
}

/// Banner text for a failed collection fetch
pub fn fetch_error_message(plural: &str, err: &ApiError) -> String {
    if err.is_unauthorized() {
        format!("Please login to view {}", plural)
    } else {
        format!("Failed to fetch {}", plural)
    }
}

pub fn empty_message(plural: &str) -> String {
    format!("No {} found", plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{EntityId, Material, WeightUnit};

    fn material(id: i64, name: &str) -> Material {
        Material {
            id: EntityId::from(id),
            material_name: name.to_string(),
            price_per_unit: 1000.0,
            weight: 1.0,
            weight_unit: WeightUnit::Kg,
        }
    }

    fn apply(state: ListState<Material>, actions: Vec<ListAction<Material>>) -> Rc<ListState<Material>> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    #[test]
    fn test_initial_view_is_loading() {
        assert_eq!(ListState::<Material>::default().view(), ListView::Loading);
    }

    #[test]
    fn test_empty_collection_shows_empty_state() {
        let state = apply(ListState::default(), vec![ListAction::Loaded(vec![])]);
        assert_eq!(state.view(), ListView::Empty);
        assert_eq!(empty_message("materials"), "No materials found");
    }

    #[test]
    fn test_refetch_keeps_rows_visible() {
        let state = apply(
            ListState::default(),
            vec![ListAction::Loaded(vec![material(1, "Flour")]), ListAction::FetchStarted],
        );
        assert!(state.loading);
        assert!(matches!(state.view(), ListView::Rows(rows) if rows.len() == 1));
    }

    #[test]
    fn test_failure_clears_items() {
        let state = apply(
            ListState::default(),
            vec![
                ListAction::Loaded(vec![material(1, "Flour")]),
                ListAction::FetchFailed("Failed to fetch materials".into()),
            ],
        );
        assert_eq!(state.view(), ListView::Failed("Failed to fetch materials"));
    }

    #[test]
    fn test_delete_flow() {
        let state = apply(
            ListState::default(),
            vec![
                ListAction::Loaded(vec![material(1, "Flour")]),
                ListAction::RequestDelete(material(1, "Flour")),
                ListAction::DeleteStarted,
                // Ignored while the request is running
                ListAction::CancelDelete,
                ListAction::RequestDelete(material(2, "Sugar")),
            ],
        );
        assert_eq!(state.pending_delete.as_ref().map(|m| m.material_name.as_str()), Some("Flour"));

        let failed = apply((*state).clone(), vec![ListAction::DeleteFailed]);
        assert!(!failed.deleting);
        assert!(failed.pending_delete.is_none());

        let done = apply((*state).clone(), vec![ListAction::DeleteFinished]);
        assert!(done.pending_delete.is_none());
    }

    #[test]
    fn test_mutations_bump_revision() {
        let state = apply(ListState::default(), vec![ListAction::Mutated, ListAction::Mutated]);
        assert_eq!(state.revision, 2);
    }

    #[test]
    fn test_fetch_error_message() {
        assert_eq!(fetch_error_message("expenses", &ApiError::Unauthorized), "Please login to view expenses");
        assert_eq!(
            fetch_error_message("expenses", &ApiError::Network("down".into())),
            "Failed to fetch expenses"
        );
    }
}
