//! Cross-checks integer classification against ICU4X's compiled CLDR data.

use glossa::{PluralCategory, PluralRules};
use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory as IcuCategory, PluralRuleType, PluralRules as IcuRules};

fn icu_locales() -> Vec<(&'static str, Locale)> {
    vec![
        ("ar", locale!("ar")),
        ("be", locale!("be")),
        ("cs", locale!("cs")),
        ("cy", locale!("cy")),
        ("da", locale!("da")),
        ("de", locale!("de")),
        ("en", locale!("en")),
        ("es", locale!("es")),
        ("fr", locale!("fr")),
        ("ga", locale!("ga")),
        ("gd", locale!("gd")),
        ("hi", locale!("hi")),
        ("hr", locale!("hr")),
        ("it", locale!("it")),
        ("ja", locale!("ja")),
        ("ko", locale!("ko")),
        ("lt", locale!("lt")),
        ("mk", locale!("mk")),
        ("nl", locale!("nl")),
        ("pl", locale!("pl")),
        ("pt", locale!("pt")),
        ("ru", locale!("ru")),
        ("sl", locale!("sl")),
        ("sr", locale!("sr")),
        ("sv", locale!("sv")),
        ("uk", locale!("uk")),
        ("zh", locale!("zh")),
    ]
}

/// ICU's category, by its CLDR keyword.
fn from_icu(category: IcuCategory) -> PluralCategory {
    format!("{category:?}").to_lowercase().parse().unwrap()
}

#[test]
fn integers_match_icu() {
    let rules = PluralRules::cldr();
    let extra = [1_000, 10_000, 100_000, 1_000_000, 1_000_001, 2_000_000, 21_000_000];
    for (code, loc) in icu_locales() {
        let icu = IcuRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
            .expect("ICU has plural data for locale");
        let ours = rules.get(code).expect("rule registered");
        for n in (0..=200_i64).chain(extra) {
            assert_eq!(
                ours.classify(n).unwrap(),
                from_icu(icu.category_for(n)),
                "{code}: {n}"
            );
        }
    }
}
