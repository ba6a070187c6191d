use super::state::CodeView;
use crate::source::HttpCodeSource;
use chrono::Local;
use codeboard_core::{LoadRequest, ViewAction, load_listing};
use yew::prelude::*;

/// Start a fetch whenever the view issues a new ticket.
///
/// Re-selecting the active tab issues no ticket, so no request goes out.
#[hook]
pub fn use_code_loader(view: &UseReducerHandle<CodeView>) {
    let request = view.0.pending_request();
    let dispatcher = view.dispatcher();
    use_effect_with(request, move |request| {
        if let Some(request) = *request {
            spawn_load(request, dispatcher);
        }
        || {}
    });
}

fn spawn_load(request: LoadRequest, dispatcher: UseReducerDispatcher<CodeView>) {
    log::debug!(
        "loading {} codes (ticket {})",
        request.game,
        request.ticket.value()
    );
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = load_listing(&HttpCodeSource, request.game, Local::now).await;
        match &outcome {
            Ok(listing) => log::debug!("loaded {} {} codes", listing.len(), request.game),
            Err(err) => log::error!(
                "failed to load {} codes ({}): {err}",
                request.game,
                request.game.backend_name()
            ),
        }
        dispatcher.dispatch(ViewAction::Resolved {
            ticket: request.ticket,
            outcome,
        });
    });
}
