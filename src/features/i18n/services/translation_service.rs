use serde_json::Value;

use crate::features::i18n::models::Locale;

const EN_TABLE: &str = include_str!("../locales/en.json");
const VI_TABLE: &str = include_str!("../locales/vi.json");

/// Holds the nested string tables for every supported locale.
pub struct TranslationService {
    en: Value,
    vi: Value,
    default_locale: Locale,
}

impl TranslationService {
    pub fn new(en: Value, vi: Value, default_locale: Locale) -> Self {
        Self {
            en,
            vi,
            default_locale,
        }
    }

    /// Parse the tables shipped with the binary
    pub fn bundled(default_locale: Locale) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            serde_json::from_str(EN_TABLE)?,
            serde_json::from_str(VI_TABLE)?,
            default_locale,
        ))
    }

    pub fn table(&self, locale: Locale) -> &Value {
        match locale {
            Locale::En => &self.en,
            Locale::Vi => &self.vi,
        }
    }

    /// Lookup context for the caller's preference, or the default locale.
    pub fn context(&self, preferred: Option<Locale>) -> LocaleContext<'_> {
        let locale = preferred.unwrap_or(self.default_locale);
        LocaleContext {
            locale,
            table: self.table(locale),
        }
    }
}

/// A selected locale bound to its table.
///
/// Handed to whatever renders strings instead of a process-wide language.
#[derive(Debug, Clone, Copy)]
pub struct LocaleContext<'a> {
    locale: Locale,
    table: &'a Value,
}

impl<'a> LocaleContext<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Walk `key` segment by segment; `None` unless it ends on a string.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        key.split('.')
            .try_fold(self.table, |node, segment| node.as_object()?.get(segment))?
            .as_str()
    }

    /// Resolve `key`, falling back to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> TranslationService {
        TranslationService::bundled(Locale::En).unwrap()
    }

    #[test]
    fn test_bundled_tables_share_sections() {
        let service = service();
        let en = service.table(Locale::En).as_object().unwrap();
        let vi = service.table(Locale::Vi).as_object().unwrap();
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut vi_keys: Vec<_> = vi.keys().collect();
        en_keys.sort();
        vi_keys.sort();
        assert_eq!(en_keys, vi_keys);
    }

    #[test]
    fn test_resolves_nested_key() {
        let service = service();
        assert_eq!(
            service.context(Some(Locale::En)).t("about.skill1Desc"),
            "Always looking for new ideas and unique approaches to work"
        );
        assert_eq!(
            service.context(Some(Locale::Vi)).t("navbar.home"),
            "Trang chủ"
        );
        assert_eq!(
            service.context(Some(Locale::Vi)).t("contact.form.submitBtn"),
            "Gửi tin nhắn"
        );
    }

    #[test]
    fn test_unknown_key_is_returned_unchanged() {
        let service = service();
        for locale in [Locale::En, Locale::Vi] {
            assert_eq!(service.context(Some(locale)).t("no.such.key"), "no.such.key");
        }
    }

    #[test]
    fn test_non_string_targets_fall_back_to_key() {
        let service = service();
        let ctx = service.context(None);
        // Section object, not a string
        assert_eq!(ctx.t("about"), "about");
        // Path continues past a string leaf
        assert_eq!(ctx.t("navbar.home.extra"), "navbar.home.extra");
        assert_eq!(ctx.t(""), "");
    }

    #[test]
    fn test_context_uses_default_locale() {
        let service = TranslationService::new(
            json!({ "greeting": "Hello" }),
            json!({ "greeting": "Xin chào" }),
            Locale::Vi,
        );
        let ctx = service.context(None);
        assert_eq!(ctx.locale(), Locale::Vi);
        assert_eq!(ctx.t("greeting"), "Xin chào");
        assert_eq!(service.context(Some(Locale::En)).t("greeting"), "Hello");
    }
}
