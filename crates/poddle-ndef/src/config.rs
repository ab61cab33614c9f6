use once_cell::sync::Lazy;

/// Language used for text records when the platform locale can't be read
pub const FALLBACK_LANGUAGE: &str = "en";

/// Language of the current process locale, resolved once
pub static SYSTEM_LANGUAGE: Lazy<String> = Lazy::new(system_language_init);

/// Settings the encoder applies when a record description leaves a field out
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct CodecConfig {
    /// Language code written into text records that don't carry their own
    pub default_language_code: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { default_language_code: SYSTEM_LANGUAGE.clone() }
    }
}

impl CodecConfig {
    pub fn with_language(language: impl Into<String>) -> Self {
        Self { default_language_code: language.into() }
    }
}

fn system_language_init() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|locale| language_from_locale(&locale))
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Language part of a POSIX locale string, `"de_DE.UTF-8"` -> `"de"`
pub fn language_from_locale(locale: &str) -> Option<String> {
    let language = locale.split(['_', '.', '@', '-']).next()?.trim();

    match language {
        "" | "C" | "POSIX" => None,
        language if language.chars().all(|c| c.is_ascii_alphabetic()) => {
            Some(language.to_ascii_lowercase())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_posix_locales() {
        assert_eq!(language_from_locale("de_DE.UTF-8").as_deref(), Some("de"));
        assert_eq!(language_from_locale("en_US").as_deref(), Some("en"));
        assert_eq!(language_from_locale("fr").as_deref(), Some("fr"));
        assert_eq!(language_from_locale("sr_RS@latin").as_deref(), Some("sr"));
        assert_eq!(language_from_locale("pt-BR").as_deref(), Some("pt"));
        assert_eq!(language_from_locale("NL_nl").as_deref(), Some("nl"));
    }

    #[test]
    fn ignores_neutral_locales() {
        assert_eq!(language_from_locale(""), None);
        assert_eq!(language_from_locale("C"), None);
        assert_eq!(language_from_locale("C.UTF-8"), None);
        assert_eq!(language_from_locale("POSIX"), None);
        assert_eq!(language_from_locale("12_34"), None);
    }

    #[test]
    fn explicit_language_wins() {
        let config = CodecConfig::with_language("ja");
        assert_eq!(config.default_language_code, "ja");
        assert!(!CodecConfig::default().default_language_code.is_empty());
    }
}
