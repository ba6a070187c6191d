//! Locale coverage: every bundle must define the same keys.

use serde_json::Value;
use std::collections::BTreeSet;

fn load_locale(locale: &str) -> Value {
    let path = format!("i18n/{locale}.json");
    let content =
        std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read {path}"));
    serde_json::from_str(&content).unwrap_or_else(|_| panic!("Failed to parse JSON in {path}"))
}

fn collect_keys(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let key = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            if v.is_object() {
                collect_keys(v, &key, out);
            } else {
                out.insert(key);
            }
        }
    }
}

fn keys_of(locale: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys(&load_locale(locale), "", &mut keys);
    keys
}

#[test]
fn every_locale_matches_default_keys() {
    let reference = keys_of("zh");
    for meta in crate::i18n::locales() {
        let keys = keys_of(meta.code);
        let missing: Vec<_> = reference.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&reference).collect();
        assert!(
            missing.is_empty() && extra.is_empty(),
            "{}: missing {missing:?}, extra {extra:?}",
            meta.code
        );
    }
}

#[test]
fn status_and_game_keys_resolve() {
    use codeboard_core::{CodeStatus, GameType};

    crate::i18n::set_lang("zh");
    for status in [CodeStatus::Unknown, CodeStatus::Expired, CodeStatus::Active] {
        assert_ne!(crate::i18n::t(status.label_key()), status.label_key());
    }
    for game in GameType::ALL {
        assert_ne!(crate::i18n::t(game.label_key()), game.label_key());
    }
    assert_eq!(crate::i18n::t("status.expired"), "已过期");
    assert_eq!(crate::i18n::t("status.active"), "生效中");
    assert_eq!(crate::i18n::t("status.unknown"), "未知");
}

#[test]
fn switching_language_changes_output_and_ignores_unknown_codes() {
    crate::i18n::set_lang("en");
    assert_eq!(crate::i18n::current_lang(), "en");
    assert_eq!(crate::i18n::t("toast.copied"), "Copied!");
    crate::i18n::set_lang("xx");
    assert_eq!(crate::i18n::current_lang(), "en");
    crate::i18n::set_lang("zh");
    assert_eq!(crate::i18n::t("toast.copied"), "复制成功!");
    assert_eq!(crate::i18n::t("missing.key"), "missing.key");
}
