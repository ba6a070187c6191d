use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LANG: &str = "zh";

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "zh",
        name: "中文",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("zh", include_str!("../../i18n/zh.json")),
    ("en", include_str!("../../i18n/en.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

#[must_use]
pub fn is_supported(lang: &str) -> bool {
    LOCALE_META.iter().any(|m| m.code == lang)
}

pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
