use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Eq, Clone)]
pub struct Props {
    pub visible: bool,
    pub lang: AttrValue,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(p: &Props) -> Html {
    let style = if p.visible { "display: flex" } else { "display: none" };
    html! {
        <div id="loading" class="loading" style={style} role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>{ t("list.loading") }</span>
        </div>
    }
}
