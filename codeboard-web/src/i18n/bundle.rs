use crate::i18n::locales::{DEFAULT_LANG, is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;

#[cfg(target_arch = "wasm32")]
const LOCALE_KEY: &str = "codeboard.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the `<html lang>` attribute.
/// Persists the choice to localStorage for future sessions. Unsupported
/// codes are ignored.
pub fn set_lang(lang: &str) {
    if let Some(bundle) = build_bundle(lang) {
        replace_bundle(bundle);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("lang", lang);
            }
            if let Ok(storage) = crate::dom::local_storage() {
                let _ = storage.set_item(LOCALE_KEY, lang);
            }
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}
