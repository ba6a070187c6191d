#![cfg(target_arch = "wasm32")]

use chrono::Utc;
use codeboard_core::{RedemptionCode, ViewPhase, build_listing};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::prelude::*;
use yew::Renderer;

use codeboard_web::app::App;
use codeboard_web::app::notify::copy_to_clipboard;
use codeboard_web::app::state::ToastModel;
use codeboard_web::components::code_list::CodeList;
use codeboard_web::components::toast::Toast;
use codeboard_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

fn render_app() {
    codeboard_web::i18n::set_lang("zh");
    Renderer::<App>::with_root(ensure_app_root()).render();
}

#[function_component(CopyHarness)]
fn copy_harness() -> Html {
    let toast = use_reducer(ToastModel::default);
    let on_copy = copy_to_clipboard(&toast);
    let listing = build_listing(
        vec![RedemptionCode::new("WASMCOPY", "2024-01-01 00:00:00")],
        &Utc::now(),
    );
    html! {
        <>
            <CodeList phase={ViewPhase::Ready(listing)} lang={AttrValue::from("zh")} {on_copy} />
            <Toast
                message={AttrValue::from(toast.0.message().to_string())}
                visible={toast.0.visible()}
            />
        </>
    }
}

async fn settle(ms: i32) {
    dom::sleep_ms(ms).await.expect("timer");
}

#[wasm_bindgen_test]
async fn binds_required_regions() {
    render_app();
    settle(50).await;
    let doc = dom::document().expect("document");
    for id in [
        "code-list",
        "loading",
        "content",
        "tab-shining",
        "tab-infinity",
        "tab-deepspace",
        "current-time",
        "toast",
    ] {
        assert!(doc.get_element_by_id(id).is_some(), "missing #{id}");
    }
    let infinity = doc.get_element_by_id("tab-infinity").expect("infinity tab");
    assert!(infinity.class_list().contains("active"));
}

#[wasm_bindgen_test]
async fn clock_ticks_every_second() {
    render_app();
    let doc = dom::document().expect("document");
    let read = || {
        doc.get_element_by_id("current-time")
            .and_then(|el| el.text_content())
            .unwrap_or_default()
    };
    settle(50).await;
    let before = read();
    let (date, time) = before.split_once(' ').expect("clock has date and time");
    assert_eq!(date.split('-').count(), 3);
    assert_eq!(time.split(':').count(), 3);
    settle(1100).await;
    assert_ne!(before, read());
}

#[wasm_bindgen_test]
async fn failed_fetch_settles_on_error_placeholder() {
    // The test runner serves no /api routes, so the fetch fails with 404.
    render_app();
    settle(500).await;
    let doc = dom::document().expect("document");
    let list = doc.get_element_by_id("code-list").expect("code list");
    assert!(list.text_content().unwrap_or_default().contains("加载失败，请刷新重试"));
    let loading = doc.get_element_by_id("loading").expect("loading");
    assert!(
        loading
            .get_attribute("style")
            .unwrap_or_default()
            .contains("display: none")
    );
}

#[wasm_bindgen_test]
async fn copy_click_reports_outcome_in_toast() {
    codeboard_web::i18n::set_lang("zh");
    Renderer::<CopyHarness>::with_root(ensure_app_root()).render();
    settle(50).await;
    let doc = dom::document().expect("document");
    let toast = doc.get_element_by_id("toast").expect("toast");
    assert!(!toast.class_list().contains("show"));

    let button = doc
        .query_selector(".copy-btn")
        .expect("query")
        .expect("copy button")
        .dyn_into::<web_sys::HtmlElement>()
        .expect("button element");
    assert_eq!(button.get_attribute("data-code").as_deref(), Some("WASMCOPY"));
    button.click();
    settle(300).await;

    // Without a user gesture most browsers reject the write; either outcome
    // must surface as a visible toast.
    assert!(toast.class_list().contains("show"));
    let text = toast.text_content().unwrap_or_default();
    assert!(
        text == "复制成功!" || text == "复制失败，请手动复制",
        "unexpected toast text: {text}"
    );
}
