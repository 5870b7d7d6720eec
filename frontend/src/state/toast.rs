use std::rc::Rc;

use yew::Reducible;

/// How long a toast stays up
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), kind: ToastKind::Error }
    }
}

/// The toast on screen, tagged so a late dismiss timer cannot hide a newer one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub current: Option<(u32, Toast)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Show(u32, Toast),
    Dismiss(u32),
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(id, toast) => Rc::new(Self { current: Some((id, toast)) }),
            ToastAction::Dismiss(id) => match &self.current {
                Some((shown, _)) if *shown == id => Rc::new(Self::default()),
                _ => self,
            },
        }
    }
}

impl ToastState {
    pub fn toast(&self) -> Option<&Toast> {
        self.current.as_ref().map(|(_, toast)| toast)
    }
}
