use super::code_item::CodeItem;
use crate::i18n::t;
use codeboard_core::{Listing, ViewPhase};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: ViewPhase,
    pub lang: AttrValue,
    /// Receives the code of the clicked copy control.
    pub on_copy: Callback<AttrValue>,
}

/// Contents of the list container for the current fetch cycle.
#[function_component(CodeList)]
pub fn code_list(p: &Props) -> Html {
    let body = match &p.phase {
        ViewPhase::Loading => Html::default(),
        ViewPhase::Failed => html! { <p class="error">{ t("list.error") }</p> },
        ViewPhase::Ready(Listing::Empty) => html! { <p class="no-codes">{ t("list.empty") }</p> },
        ViewPhase::Ready(Listing::Entries(entries)) => html! {
            <ol class="code-items">
                { for entries.iter().map(|entry| html! {
                    <CodeItem
                        key={entry.index}
                        entry={entry.clone()}
                        lang={p.lang.clone()}
                        on_copy={p.on_copy.clone()}
                    />
                }) }
            </ol>
        },
    };
    html! {
        <div id="code-list" class="code-list">
            { body }
        </div>
    }
}
