use codeboard_core::{ToastState, ViewAction, ViewState};
use std::rc::Rc;
use yew::prelude::*;

/// Reducer wrapper around the view state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeView(pub ViewState);

impl Reducible for CodeView {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let resolved = match &action {
            ViewAction::Resolved { ticket, .. } => Some(*ticket),
            ViewAction::Select(_) => None,
        };
        match self.0.reduce(action) {
            Some(next) => Rc::new(Self(next)),
            None => {
                if let Some(ticket) = resolved {
                    log::debug!("discarding stale response (ticket {})", ticket.value());
                }
                self
            }
        }
    }
}

pub enum ToastAction {
    Show(String),
    Expire(u64),
}

/// Reducer wrapper around the toast overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastModel(pub ToastState);

impl Reducible for ToastModel {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Show(message) => Rc::new(Self(self.0.show(message))),
            ToastAction::Expire(generation) => match self.0.expire(generation) {
                Some(next) => Rc::new(Self(next)),
                None => self,
            },
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub view: UseReducerHandle<CodeView>,
    pub toast: UseReducerHandle<ToastModel>,
    pub clock: UseStateHandle<String>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        view: use_reducer(CodeView::default),
        toast: use_reducer(ToastModel::default),
        clock: use_state(super::clock::now_string),
        current_language: use_state(crate::i18n::current_lang),
    }
}
