use alloc::string::String;

use crate::{Args, Bundle, Message, Value, plural_category, substitute};

const COUNT: &str = "Count";

/// A [`Bundle`] view bound to one requested locale.
///
/// Lookups never fail: a message missing from every locale of the fallback
/// chain renders as its id.
#[derive(Clone, Debug)]
pub struct Localizer<'a> {
    bundle: &'a Bundle,
    locale: String,
}

impl<'a> Localizer<'a> {
    pub fn new(bundle: &'a Bundle, locale: &str) -> Self {
        Self {
            bundle,
            locale: String::from(locale),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn bundle(&self) -> &'a Bundle {
        self.bundle
    }

    pub fn t(&self, id: &str) -> String {
        match self.message(id) {
            Some(message) => String::from(message.singular()),
            None => String::from(id),
        }
    }

    pub fn tf(&self, id: &str, args: &Args) -> String {
        match self.message(id) {
            Some(message) => substitute(message.singular(), args),
            None => String::from(id),
        }
    }

    pub fn tn(&self, id: &str, count: u64) -> String {
        self.tnf(id, count, &Args::new())
    }

    /// Picks the plural form for `count` under this localizer's locale and
    /// substitutes `Count` along with `args`. A `Count` entry in `args` is
    /// replaced by `count`.
    pub fn tnf(&self, id: &str, count: u64, args: &Args) -> String {
        let Some(message) = self.message(id) else {
            return String::from(id);
        };

        let mut data: Args = args
            .iter()
            .filter(|(name, _)| !name.eq_ignore_ascii_case(COUNT))
            .map(|(name, value)| (name, value.clone()))
            .collect();
        data.insert(COUNT, Value::Uint(count));

        let template = match message.plural_forms() {
            Some(forms) => forms.select(plural_category(&self.locale, count)),
            None => message.singular(),
        };
        substitute(template, &data)
    }

    fn message(&self, id: &str) -> Option<&'a Message> {
        self.bundle.get_message(&self.locale, id)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::{Args, Bundle, Message, PluralCategory, PluralForms};

    fn forms(pairs: &[(PluralCategory, &str)]) -> PluralForms {
        let mut forms = PluralForms::default();
        for (category, text) in pairs {
            forms.set(*category, *text);
        }
        forms
    }

    fn bundle() -> Bundle {
        let mut bundle = Bundle::new("en");
        bundle
            .add_locale(
                "en",
                vec![
                    Message::plain("changelog.title", "Changelog").expect("message"),
                    Message::plain("marker.versions_range", "Versions {{.From}} - {{.To}}")
                        .expect("message"),
                    Message::plain("summary.count", "{{.Count}} changes").expect("message"),
                    Message::plural(
                        "plural.releases",
                        forms(&[
                            (PluralCategory::One, "{{.Count}} release"),
                            (PluralCategory::Other, "{{.Count}} releases"),
                        ]),
                    )
                    .expect("message"),
                    Message::plural(
                        "plural.no_other",
                        forms(&[(PluralCategory::One, "{{.Count}} item")]),
                    )
                    .expect("message"),
                ],
            )
            .expect("en");
        bundle
            .add_locale(
                "fr",
                vec![
                    Message::plain("changelog.title", "Journal des modifications")
                        .expect("message"),
                    Message::plural(
                        "plural.releases",
                        forms(&[
                            (PluralCategory::One, "{{.Count}} version"),
                            (PluralCategory::Other, "{{.Count}} versions"),
                        ]),
                    )
                    .expect("message"),
                ],
            )
            .expect("fr");
        bundle
            .add_locale(
                "ru",
                vec![
                    Message::plural(
                        "plural.releases",
                        forms(&[
                            (PluralCategory::One, "{{.Count}} релиз"),
                            (PluralCategory::Few, "{{.Count}} релиза"),
                            (PluralCategory::Many, "{{.Count}} релизов"),
                            (PluralCategory::Other, "{{.Count}} релиза"),
                        ]),
                    )
                    .expect("message"),
                ],
            )
            .expect("ru");
        bundle
    }

    #[test]
    fn t_returns_translation_or_id() {
        let bundle = bundle();
        let localizer = bundle.localizer("en");
        assert_eq!(localizer.locale(), "en");
        assert_eq!(localizer.t("changelog.title"), "Changelog");
        assert_eq!(localizer.t("nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn t_on_plural_uses_other() {
        let bundle = bundle();
        assert_eq!(
            bundle.localizer("en").t("plural.releases"),
            "{{.Count}} releases"
        );
    }

    #[test]
    fn tn_selects_english_forms() {
        let bundle = bundle();
        let localizer = bundle.localizer("en");
        assert_eq!(localizer.tn("plural.releases", 1), "1 release");
        assert_eq!(localizer.tn("plural.releases", 5), "5 releases");
        assert_eq!(localizer.tn("plural.releases", 0), "0 releases");
    }

    #[test]
    fn tn_selects_french_forms() {
        let bundle = bundle();
        let localizer = bundle.localizer("fr-CA");
        assert_eq!(localizer.tn("plural.releases", 0), "0 version");
        assert_eq!(localizer.tn("plural.releases", 1), "1 version");
        assert_eq!(localizer.tn("plural.releases", 2), "2 versions");
    }

    #[test]
    fn tn_selects_slavic_forms() {
        let bundle = bundle();
        let localizer = bundle.localizer("ru");
        assert_eq!(localizer.tn("plural.releases", 21), "21 релиз");
        assert_eq!(localizer.tn("plural.releases", 3), "3 релиза");
        assert_eq!(localizer.tn("plural.releases", 11), "11 релизов");
    }

    #[test]
    fn tn_uses_localizer_locale_for_rules() {
        let bundle = bundle();
        // Japanese falls back to English text but keeps the Japanese rule.
        assert_eq!(bundle.localizer("ja").tn("plural.releases", 1), "1 releases");
    }

    #[test]
    fn tn_on_plain_message_substitutes_count() {
        let bundle = bundle();
        assert_eq!(bundle.localizer("en").tn("summary.count", 4), "4 changes");
    }

    #[test]
    fn tn_missing_category_and_other_is_empty() {
        let bundle = bundle();
        let localizer = bundle.localizer("en");
        assert_eq!(localizer.tn("plural.no_other", 1), "1 item");
        assert_eq!(localizer.tn("plural.no_other", 2), "");
    }

    #[test]
    fn tn_missing_message_is_id() {
        let bundle = bundle();
        assert_eq!(bundle.localizer("en").tn("missing", 3), "missing");
    }

    #[test]
    fn tf_substitutes_data() {
        let bundle = bundle();
        let args = Args::new().with("From", "1.0.0").with("To", "1.5.0");
        assert_eq!(
            bundle.localizer("en").tf("marker.versions_range", &args),
            "Versions 1.0.0 - 1.5.0"
        );
        assert_eq!(bundle.localizer("en").tf("missing", &args), "missing");
    }

    #[test]
    fn tf_keeps_unmatched_placeholders() {
        let bundle = bundle();
        let args = Args::new().with("From", "1.0.0");
        assert_eq!(
            bundle.localizer("en").tf("marker.versions_range", &args),
            "Versions 1.0.0 - {{.To}}"
        );
    }

    #[test]
    fn tnf_count_overrides_data() {
        let bundle = bundle();
        let args = Args::new().with("count", 99).with("Extra", "x");
        assert_eq!(
            bundle.localizer("en").tnf("plural.releases", 1, &args),
            "1 release"
        );
    }
}
