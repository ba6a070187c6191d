use crate::i18n::t;
use codeboard_core::GameType;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: GameType,
    /// Current language; a change re-renders the labels.
    pub lang: AttrValue,
    pub on_select: Callback<GameType>,
}

/// The three category tabs. Clicking the active tab does nothing.
#[function_component(CategoryTabs)]
pub fn category_tabs(p: &Props) -> Html {
    html! {
        <nav class="tabs" role="tablist" aria-label={t("nav.categories")}>
            { for GameType::ALL.into_iter().map(|game| {
                let is_active = game == p.active;
                let onclick = {
                    let on_select = p.on_select.clone();
                    Callback::from(move |_: MouseEvent| {
                        if !is_active {
                            on_select.emit(game);
                        }
                    })
                };
                html! {
                    <button
                        id={game.tab_id()}
                        class={classes!("tab", is_active.then_some("active"))}
                        role="tab"
                        aria-selected={is_active.to_string()}
                        onclick={onclick}
                    >
                        { t(game.label_key()) }
                    </button>
                }
            }) }
        </nav>
    }
}
