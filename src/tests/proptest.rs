mod prop_tests {
    use crate::{LanguageKey, LocaleInfo, RegionKey, ScriptKey, best_match, compare, is_match};
    use proptest::prelude::*;
    use std::cmp::Ordering;

    // Realistic subtag shapes: 2–3 letter language, 4-letter script,
    // 2-letter or 3-digit region. These shapes survive `from_tag`
    // classification, so display/parse round-trips are exact.
    fn arb_language() -> impl Strategy<Value = String> {
        "[a-z]{2,3}"
    }

    fn arb_script() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[A-Z][a-z]{3}"]
    }

    fn arb_region() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), "[A-Z]{2}", "[0-9]{3}"]
    }

    fn arb_locale() -> impl Strategy<Value = LocaleInfo> {
        (arb_language(), arb_script(), arb_region())
            .prop_map(|(lang, script, region)| LocaleInfo::new(&lang, &script, &region).unwrap())
    }

    proptest! {
        #[test]
        fn compare_is_antisymmetric(a in arb_locale(), b in arb_locale(), r in arb_locale()) {
            let forward = compare(Some(&a), Some(&b), &r);
            let backward = compare(Some(&b), Some(&a), &r);
            prop_assert_eq!(forward, backward.reverse());
        }

        #[test]
        fn compare_ties_only_on_identical_candidates(a in arb_locale(), b in arb_locale(), r in arb_locale()) {
            if compare(Some(&a), Some(&b), &r) == Ordering::Equal {
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn match_is_reflexive(l in arb_locale()) {
            prop_assert!(is_match(&l, &l));
        }

        #[test]
        fn match_ignores_region(lang in arb_language(), script in "[A-Z][a-z]{3}", rx in "[A-Z]{2}", ry in "[A-Z]{2}") {
            let a = LocaleInfo::new(&lang, &script, &rx).unwrap();
            let b = LocaleInfo::new(&lang, &script, &ry).unwrap();
            prop_assert!(is_match(&a, &b));
        }

        #[test]
        fn script_difference_defeats_match(lang in arb_language(), sa in "[A-Z][a-z]{3}", sb in "[A-Z][a-z]{3}", rx in "[A-Z]{2}", ry in "[A-Z]{2}") {
            prop_assume!(sa != sb);
            let a = LocaleInfo::new(&lang, &sa, &rx).unwrap();
            let b = LocaleInfo::new(&lang, &sb, &ry).unwrap();
            prop_assert!(!is_match(&a, &b));
        }

        #[test]
        fn language_key_round_trips(code in "[a-z]{1,4}") {
            let key = LanguageKey::encode(&code).unwrap();
            let decoded = key.decode();
            prop_assert_eq!(decoded.as_str(), code.as_str());
        }

        #[test]
        fn script_key_round_trips(code in "[A-Z][a-z]{0,3}") {
            let key = ScriptKey::encode(&code).unwrap();
            let decoded = key.decode();
            prop_assert_eq!(decoded.as_str(), code.as_str());
        }

        #[test]
        fn region_key_round_trips(code in prop_oneof!["[A-Z]{1,4}", "[0-9]{1,4}"]) {
            let key = RegionKey::encode(&code).unwrap();
            let decoded = key.decode();
            prop_assert_eq!(decoded.as_str(), code.as_str());
        }

        #[test]
        fn locale_key_is_injective(a in arb_locale(), b in arb_locale()) {
            prop_assert_eq!(a.key() == b.key(), a == b);
        }

        #[test]
        fn tag_display_parses_back(l in arb_locale()) {
            prop_assert_eq!(LocaleInfo::from_tag(&l.tag()).unwrap(), l);
        }

        #[test]
        fn key_decodes_back_to_the_locale(l in arb_locale()) {
            prop_assert_eq!(LocaleInfo::from_key(l.key()), l);
        }

        #[test]
        fn best_match_of_non_empty_list_is_some(pool in proptest::collection::vec(arb_locale(), 1..12), r in arb_locale()) {
            prop_assert!(best_match(&r, &pool).is_some());
        }

        #[test]
        fn track_path_ends_at_root(l in arb_locale()) {
            let path = crate::track_path(&l);
            prop_assert_eq!(*path.last().unwrap(), crate::LocaleKey::ROOT);
            prop_assert_eq!(path[0], l.key());
        }
    }
}
