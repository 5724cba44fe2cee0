use crate::config::Language;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

const EMBEDDED: [&str; 2] = [
    include_str!("../../../translations/en.json"),
    include_str!("../../../translations/pt.json"),
];

#[derive(Debug, Deserialize)]
struct LanguageMeta {
    code: String,
}

/// Translation data loaded from JSON
#[derive(Debug, Deserialize)]
struct TranslationData {
    language: LanguageMeta,
    ui: HashMap<String, String>,
}

/// Internationalization service over the translation files compiled into the binary
pub struct I18nService {
    current_language: String,
    translations: HashMap<String, TranslationData>,
}

impl I18nService {
    pub fn new(language: Language) -> Self {
        let mut translations = HashMap::new();

        for json_content in EMBEDDED {
            match serde_json::from_str::<TranslationData>(json_content) {
                Ok(data) => {
                    translations.insert(data.language.code.clone(), data);
                }
                Err(e) => warn!("Skipping malformed translation file: {}", e),
            }
        }

        let mut service = Self {
            current_language: "en".to_string(),
            translations,
        };
        service.set_language(language.code());
        service
    }

    /// Switches language; unknown codes keep the current one
    fn set_language(&mut self, language_code: &str) -> bool {
        if self.translations.contains_key(language_code) {
            self.current_language = language_code.to_string();
            true
        } else {
            false
        }
    }

    /// Translate a UI key
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.translations
            .get(&self.current_language)
            .and_then(|data| data.ui.get(key))
            .map(|s| s.as_str())
            .unwrap_or(key)
    }

    /// Translate with format parameters
    /// Usage: i18n.tf("model_not_found", &[("path", "model.json")])
    /// Template in JSON: "Error: the file '{path}' was not found."
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.t(key);
        let mut result = template.to_string();

        for (placeholder, value) in params {
            let placeholder_pattern = format!("{{{}}}", placeholder);
            result = result.replace(&placeholder_pattern, value);
        }

        result
    }
}

impl Default for I18nService {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_languages() {
        let i18n = I18nService::default();
        let mut codes: Vec<_> = i18n.translations.keys().map(String::as_str).collect();
        codes.sort();
        assert_eq!(codes, vec!["en", "pt"]);
        assert_eq!(i18n.t("unclassified"), "Not yet classified");
    }

    #[test]
    fn test_language_switching() {
        let mut i18n = I18nService::new(Language::Pt);
        assert_eq!(i18n.t("unclassified"), "Ainda não classificado");

        assert!(i18n.set_language("en"));
        assert_eq!(i18n.t("unclassified"), "Not yet classified");

        assert!(!i18n.set_language("xx"));
        assert_eq!(i18n.current_language, "en");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let i18n = I18nService::default();
        assert_eq!(i18n.t("no_such_key"), "no_such_key");
    }

    #[test]
    fn test_format_parameters() {
        let i18n = I18nService::default();
        let msg = i18n.tf("model_load_failed", &[("error", "EOF while parsing")]);
        assert_eq!(
            msg,
            "An error occurred while loading the model: EOF while parsing"
        );
    }

    #[test]
    fn test_languages_share_keys() {
        let i18n = I18nService::default();
        let en = &i18n.translations["en"].ui;
        let pt = &i18n.translations["pt"].ui;
        for key in en.keys() {
            assert!(pt.contains_key(key), "pt is missing {}", key);
        }
    }
}
