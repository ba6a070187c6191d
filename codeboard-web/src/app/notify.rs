use super::state::{ToastAction, ToastModel};
use crate::dom::{self, ClipboardError};
use crate::i18n;
use codeboard_core::TOAST_DURATION_MS;
use yew::prelude::*;

/// Hide the toast 2 s after each show. A newer show supersedes the pending hide.
#[hook]
pub fn use_toast_expiry(toast: &UseReducerHandle<ToastModel>) {
    let generation = toast.0.generation();
    let visible = toast.0.visible();
    let dispatcher = toast.dispatcher();
    use_effect_with((generation, visible), move |&(generation, visible)| {
        if visible {
            wasm_bindgen_futures::spawn_local(async move {
                let delay = i32::try_from(TOAST_DURATION_MS).unwrap_or(i32::MAX);
                if let Err(err) = dom::sleep_ms(delay).await {
                    log::warn!("toast timer failed: {}", dom::js_error_message(&err));
                }
                dispatcher.dispatch(ToastAction::Expire(generation));
            });
        }
        || {}
    });
}

/// Toast text for the outcome of a clipboard write.
#[must_use]
pub fn copy_message(outcome: &Result<(), ClipboardError>) -> String {
    match outcome {
        Ok(()) => i18n::t("toast.copied"),
        Err(_) => i18n::t("toast.copy_failed"),
    }
}

/// Callback that copies a code and reports the outcome as a toast.
#[must_use]
pub fn copy_to_clipboard(toast: &UseReducerHandle<ToastModel>) -> Callback<AttrValue> {
    let dispatcher = toast.dispatcher();
    Callback::from(move |code: AttrValue| {
        let dispatcher = dispatcher.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = dom::write_clipboard(&code).await;
            if let Err(err) = &outcome {
                log::error!("copy failed for {code}: {err}");
            }
            dispatcher.dispatch(ToastAction::Show(copy_message(&outcome)));
        });
    })
}
