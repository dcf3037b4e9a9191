use proptest::prelude::*;
use structured_locale_core::{
    Args, LanguageTag, PluralCategory, PluralRule, fallback_chain, plural_category, substitute,
};

fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{2,3}([-_][a-zA-Z0-9]{1,8}){0,4}"
}

proptest! {
    #[test]
    fn normalization_is_idempotent(input in tag_strategy()) {
        let once = LanguageTag::parse(&input).expect("valid tag").to_string();
        let twice = LanguageTag::parse(&once).expect("normalized tag").to_string();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn parent_walk_reaches_zero_within_two_steps(input in tag_strategy()) {
        let tag = LanguageTag::parse(&input).expect("valid tag");
        prop_assert!(tag.parent().parent().parent().is_zero());
        prop_assert!(tag.ancestors().count() <= 3);
    }

    #[test]
    fn chain_length_matches_tag_levels(input in tag_strategy(), default in "(en|fr|de)?") {
        let tag = LanguageTag::parse(&input).expect("valid tag");
        let levels: Vec<String> = tag.ancestors().map(|tag| tag.to_string()).collect();
        let extra = usize::from(!default.is_empty() && !levels.contains(&default));
        let chain = fallback_chain(&input, &default);
        prop_assert_eq!(chain.len(), levels.len() + extra);
        prop_assert_eq!(&chain[..levels.len()], levels.as_slice());
        prop_assert_eq!(chain.clone(), fallback_chain(&input, &default));
    }

    #[test]
    fn plural_category_is_total(locale in "[a-z]{2,3}|.*", count in any::<u64>()) {
        let category = plural_category(&locale, count);
        prop_assert!(PluralCategory::ALL.contains(&category));
        prop_assert_eq!(category, PluralRule::for_locale(&locale).category(count));
    }

    #[test]
    fn substitution_without_placeholders_is_identity(template in "[^{]*") {
        let args = Args::new().with("Name", "value");
        prop_assert_eq!(substitute(&template, &args), template);
    }

    #[test]
    fn substitution_is_idempotent(name in "[A-Za-z][A-Za-z0-9_]{0,6}", value in "[a-z0-9 ]{0,12}") {
        let args = Args::new().with(name.clone(), value);
        let template = format!("before {{{{.{name}}}}} after {{{{.Missing_x}}}}");
        let once = substitute(&template, &args);
        prop_assert_eq!(substitute(&once, &args), once.clone());
        prop_assert!(once.ends_with("{{.Missing_x}}"));
    }
}
