use yew::prelude::*;

pub mod clock;
pub mod loader;
pub mod notify;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    clock::use_clock_ticker(&app_state.clock);
    loader::use_code_loader(&app_state.view);
    notify::use_toast_expiry(&app_state.toast);

    view::render_app(&app_state)
}
