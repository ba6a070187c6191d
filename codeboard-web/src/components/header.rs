use crate::i18n::{locales, set_lang, t};
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub clock: AttrValue,
    pub current_lang: AttrValue,
    pub on_lang_change: Callback<String>,
}

/// Page banner with the title, the live clock and the language selector.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: web_sys::Event| {
            if let Some(sel) = e
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlSelectElement>().ok())
            {
                set_lang(&sel.value());
                cb.emit(sel.value());
            }
        })
    };
    html! {
        <header role="banner">
            <div class="header-content">
                <h1 class="title">{ t("app.title") }</h1>
                <div class="clock">
                    <span class="clock-label">{ t("app.current_time") }</span>
                    <span id="current-time">{ p.clock.clone() }</span>
                </div>
                <nav aria-label={t("nav.language")} class="header-right">
                    <label for="lang-select" class="sr-only">{ t("nav.language") }</label>
                    <select id="lang-select" onchange={on_change} aria-label={t("nav.language")}>
                        { for locales().iter().map(|locale| html! {
                            <option
                                value={locale.code}
                                selected={p.current_lang.as_str() == locale.code}
                            >
                                { locale.name }
                            </option>
                        }) }
                    </select>
                </nav>
            </div>
        </header>
    }
}
