use super::notify::copy_to_clipboard;
use super::state::AppState;
use crate::components::code_list::CodeList;
use crate::components::header::Header;
use crate::components::loading::LoadingIndicator;
use crate::components::tabs::CategoryTabs;
use crate::components::toast::Toast;
use codeboard_core::{GameType, ViewAction};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let view = &state.view.0;
    let lang = AttrValue::from((*state.current_language).clone());
    let loading = view.is_loading();

    let on_select = {
        let dispatcher = state.view.dispatcher();
        Callback::from(move |game: GameType| dispatcher.dispatch(ViewAction::Select(game)))
    };
    let on_lang_change = {
        let current = state.current_language.clone();
        Callback::from(move |lang: String| current.set(lang))
    };
    let on_copy = copy_to_clipboard(&state.toast);
    let content_style = if loading { "display: none" } else { "display: block" };

    html! {
        <div class="app">
            <Header
                clock={AttrValue::from((*state.clock).clone())}
                current_lang={lang.clone()}
                {on_lang_change}
            />
            <CategoryTabs active={view.game()} lang={lang.clone()} {on_select} />
            <main id="main" role="main" class="container">
                <LoadingIndicator visible={loading} lang={lang.clone()} />
                <div id="content" style={content_style}>
                    <CodeList phase={view.phase().clone()} {lang} {on_copy} />
                </div>
            </main>
            <Toast
                message={AttrValue::from(state.toast.0.message().to_string())}
                visible={state.toast.0.visible()}
            />
        </div>
    }
}
