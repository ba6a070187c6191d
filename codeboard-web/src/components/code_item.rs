use crate::i18n::{t, tr};
use codeboard_core::CodeEntry;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: CodeEntry,
    pub lang: AttrValue,
    pub on_copy: Callback<AttrValue>,
}

fn or_unknown(value: Option<&str>) -> String {
    value.map_or_else(|| t("code.unknown"), str::to_string)
}

fn validity_range(entry: &CodeEntry) -> String {
    let start = or_unknown(entry.start.as_deref());
    let end = or_unknown(entry.end.as_deref());
    let mut vars = BTreeMap::new();
    vars.insert("start", start.as_str());
    vars.insert("end", end.as_str());
    tr("code.validity_range", Some(&vars))
}

fn published(entry: &CodeEntry) -> String {
    let mut vars = BTreeMap::new();
    vars.insert("date", entry.published.as_str());
    tr("code.published", Some(&vars))
}

fn source_link(url: Option<&str>) -> Html {
    match url {
        Some(url) => html! {
            <a href={url.to_string()} target="_blank" rel="noopener noreferrer">{ url.to_string() }</a>
        },
        None => html! { { t("code.unknown") } },
    }
}

/// One numbered code row with its copy control.
#[function_component(CodeItem)]
pub fn code_item(p: &Props) -> Html {
    let entry = &p.entry;
    let code = AttrValue::from(entry.code.clone());
    let onclick = {
        let on_copy = p.on_copy.clone();
        let code = code.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(code.clone()))
    };
    let copy_label = {
        let mut vars = BTreeMap::new();
        vars.insert("code", entry.code.as_str());
        tr("code.copy_label", Some(&vars))
    };
    html! {
        <li class="code-item">
            <div class="code-index">{ entry.index.to_string() }</div>
            <div class="code-text">
                <div class="code-status">
                    <strong>{ t("code.status") }</strong>{ " " }
                    <span class={entry.status.css_class()}>{ t(entry.status.label_key()) }</span>
                </div>
                <div class="code-key"><strong>{ t("code.key") }</strong>{ " " }{ entry.code.clone() }</div>
                <div class="code-reward">
                    <strong>{ t("code.reward") }</strong>{ " " }{ or_unknown(entry.reward.as_deref()) }
                </div>
                <div class="code-validity">
                    <strong>{ t("code.validity") }</strong>{ " " }
                    <span class="validity-period">{ validity_range(entry) }</span>
                </div>
                <div class="code-source">
                    <strong>{ t("code.source") }</strong>{ " " }{ source_link(entry.url.as_deref()) }
                </div>
                <div class="code-date">{ published(entry) }</div>
            </div>
            <button class="copy-btn" data-code={code} aria-label={copy_label} onclick={onclick}>
                { t("code.copy") }
            </button>
        </li>
    }
}
