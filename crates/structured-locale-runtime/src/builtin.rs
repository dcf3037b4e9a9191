use structured_locale_core::Bundle;
use tracing::warn;

use crate::loader::add_locale_json;

/// Locale files compiled into the crate, keyed by locale.
pub const BUILTIN_LOCALES: &[(&str, &str)] = &[
    ("de", include_str!("../locales/de.json")),
    ("en", include_str!("../locales/en.json")),
    ("es", include_str!("../locales/es.json")),
    ("fr", include_str!("../locales/fr.json")),
    ("ja", include_str!("../locales/ja.json")),
    ("zh", include_str!("../locales/zh.json")),
];

/// Loads every builtin locale into `bundle`, replacing existing sets of the
/// same locale. A builtin file that fails to load is logged and skipped.
pub fn add_builtin_locales(bundle: &mut Bundle) {
    for (locale, data) in BUILTIN_LOCALES {
        if let Err(err) = add_locale_json(bundle, locale, data.as_bytes()) {
            warn!(%locale, error = %err, "skipping builtin locale");
        }
    }
}

/// A bundle with default locale `en` and the builtin translations.
pub fn default_bundle() -> Bundle {
    let mut bundle = Bundle::new("en");
    add_builtin_locales(&mut bundle);
    bundle
}

#[cfg(test)]
mod tests {
    use super::{BUILTIN_LOCALES, default_bundle};
    use structured_locale_core::Args;

    #[test]
    fn loads_every_builtin_locale() {
        let bundle = default_bundle();
        let locales: Vec<&str> = bundle.available_locales().collect();
        assert_eq!(locales, ["de", "en", "es", "fr", "ja", "zh"]);
        assert_eq!(locales.len(), BUILTIN_LOCALES.len());
        assert_eq!(bundle.default_locale(), "en");
    }

    #[test]
    fn builtin_titles() {
        let bundle = default_bundle();
        assert_eq!(bundle.localizer("en").t("changelog.title"), "Changelog");
        assert_eq!(
            bundle.localizer("fr").t("changelog.title"),
            "Journal des modifications"
        );
        assert_eq!(bundle.localizer("ja").t("changelog.title"), "変更履歴");
        assert_eq!(
            bundle.localizer("fr-CA").t("changelog.title"),
            "Journal des modifications"
        );
    }

    #[test]
    fn builtin_plurals() {
        let bundle = default_bundle();
        let en = bundle.localizer("en");
        assert_eq!(en.tn("plural.releases", 1), "1 release");
        assert_eq!(en.tn("plural.releases", 5), "5 releases");
        assert_eq!(en.tn("plural.releases", 0), "0 releases");

        let fr = bundle.localizer("fr");
        assert_eq!(fr.tn("plural.releases", 0), "0 version");
        assert_eq!(fr.tn("plural.releases", 1), "1 version");
        assert_eq!(fr.tn("plural.releases", 2), "2 versions");

        let ja = bundle.localizer("ja");
        assert_eq!(ja.tn("plural.releases", 1), "1件のリリース");
        assert_eq!(ja.tn("plural.releases", 5), "5件のリリース");
    }

    #[test]
    fn builtin_templates() {
        let bundle = default_bundle();
        let args = Args::new().with("From", "1.0.0").with("To", "1.5.0");
        assert_eq!(
            bundle.localizer("en").tf("marker.versions_range", &args),
            "Versions 1.0.0 - 1.5.0"
        );
        assert_eq!(bundle.localizer("en").t("nonexistent.key"), "nonexistent.key");
    }
}
