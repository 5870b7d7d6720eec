use std::rc::Rc;

use shared::money::{group_thousands, parse_digits};
use yew::Reducible;

/// Balance card: the fetched amount and its inline edit dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceState {
    pub balance: Option<f64>,
    pub loading: bool,
    pub error: Option<String>,
    /// Text in the edit box while the dialog is open
    pub editing: Option<String>,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceAction {
    FetchStarted,
    Loaded(f64),
    FetchFailed(String),
    StartEdit,
    Input(String),
    CancelEdit,
    SaveStarted,
    Saved(f64),
    SaveFailed(String),
}

/// Amount typed into the edit box; non-digits are dropped and nothing reads as 0
pub fn parse_balance_input(raw: &str) -> f64 {
    parse_digits(raw).unwrap_or(0) as f64
}

impl BalanceState {
    /// Value to send if the user saves now
    pub fn pending_amount(&self) -> Option<f64> {
        self.editing.as_deref().map(parse_balance_input)
    }
}

impl Reducible for BalanceState {
    type Action = BalanceAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BalanceAction::FetchStarted => {
                next.loading = true;
                next.error = None;
            }
            BalanceAction::Loaded(balance) => {
                next.balance = Some(balance);
                next.loading = false;
            }
            BalanceAction::FetchFailed(message) => {
                next.loading = false;
                next.error = Some(message);
            }
            BalanceAction::StartEdit => {
                let current = next.balance.unwrap_or(0.0).max(0.0).round() as u64;
                next.editing = Some(group_thousands(current));
                next.error = None;
            }
            BalanceAction::Input(raw) => {
                if next.editing.is_some() && !next.saving {
                    let digits = parse_digits(&raw);
                    next.editing = Some(digits.map(group_thousands).unwrap_or_default());
                }
            }
            BalanceAction::CancelEdit => {
                if next.saving {
                    return self;
                }
                next.editing = None;
            }
            BalanceAction::SaveStarted => next.saving = true,
            BalanceAction::Saved(balance) => {
                next.balance = Some(balance);
                next.saving = false;
                next.editing = None;
            }
            BalanceAction::SaveFailed(message) => {
                next.saving = false;
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}
