//! Tests for configuration resolution

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tailcfg_core::config::{ConfigResolver, DarkModeStrategy, ImportantStrategy, ThemeTokens};
use tailcfg_core::{Configuration, Error};

fn resolve(document: Value) -> Result<Configuration, Error> {
    ConfigResolver::new().resolve(document)
}

fn tokens(value: Value) -> ThemeTokens {
    serde_json::from_value(value).expect("theme tokens must be a mapping")
}

mod defaults {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"content": ["a/*.html"]}))]
    #[case(json!({"darkMode": "class"}))]
    #[case(json!({"theme": {}}))]
    #[case(json!({"plugins": ["forms"]}))]
    fn missing_keys_fall_back_to_defaults(#[case] document: Value) {
        let has = |key: &str| document.get(key).is_some();
        let (has_content, has_dark, has_plugins) = (has("content"), has("darkMode"), has("plugins"));

        let config = resolve(document).unwrap();

        if !has_content {
            assert!(config.content_globs().is_empty());
        }
        if !has_dark {
            assert_eq!(config.dark_mode(), &DarkModeStrategy::Media);
        }
        if !has_plugins {
            assert!(config.plugins().is_empty());
        }
        assert!(config.theme().extensions().is_empty());
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let config = resolve(json!({
            "content": ["a/*.html"],
            "future": {"anything": [1, 2, 3]},
            "corePlugins": {"preflight": false}
        }))
        .unwrap();

        assert_eq!(config.content_globs(), ["a/*.html"]);
    }
}

mod dark_mode {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("media", DarkModeStrategy::Media)]
    #[case("class", DarkModeStrategy::Class)]
    #[case("selector", DarkModeStrategy::Selector(".dark".into()))]
    #[case(".theme-night", DarkModeStrategy::Selector(".theme-night".into()))]
    fn enumerated_strategies_round_trip(#[case] input: &str, #[case] expected: DarkModeStrategy) {
        let config = resolve(json!({"darkMode": input})).unwrap();
        assert_eq!(config.dark_mode(), &expected);
    }

    #[rstest]
    #[case(json!(["class"]), DarkModeStrategy::Class)]
    #[case(json!(["selector"]), DarkModeStrategy::Selector(".dark".into()))]
    #[case(json!(["class", ".night"]), DarkModeStrategy::Selector(".night".into()))]
    #[case(json!(["selector", "[data-theme=dark]"]), DarkModeStrategy::Selector("[data-theme=dark]".into()))]
    fn sequence_forms(#[case] dark_mode: Value, #[case] expected: DarkModeStrategy) {
        let config = resolve(json!({"darkMode": dark_mode})).unwrap();
        assert_eq!(config.dark_mode(), &expected);
    }

    #[rstest]
    #[case(json!(5))]
    #[case(json!(true))]
    #[case(json!(""))]
    #[case(json!({"strategy": "class"}))]
    #[case(json!(["variant", "&:is(.dark *)"]))]
    fn invalid_strategies_are_malformed(#[case] dark_mode: Value) {
        let err = resolve(json!({"darkMode": dark_mode})).unwrap_err();
        assert!(
            matches!(&err, Error::MalformedConfig { key, .. } if key == "darkMode"),
            "unexpected error: {err}"
        );
    }
}

mod malformed {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case(json!("content"), "(root)")]
    #[case(json!(42), "(root)")]
    #[case(json!({"content": "./templates/**/*.html"}), "content")]
    #[case(json!({"plugins": {}}), "plugins")]
    #[case(json!({"plugins": "forms"}), "plugins")]
    #[case(json!({"theme": []}), "theme")]
    #[case(json!({"prefix": 1}), "prefix")]
    #[case(json!({"safelist": "bg-red-500"}), "safelist")]
    #[case(json!({"content": null}), "content")]
    #[case(json!({"darkMode": null}), "darkMode")]
    #[case(json!({"plugins": null}), "plugins")]
    #[case(json!({"theme": null}), "theme")]
    #[case(json!({"theme": {"extend": null}}), "theme.extend")]
    #[case(json!({"important": null}), "important")]
    fn wrong_shapes_name_the_key(#[case] document: Value, #[case] expected_key: &str) {
        match resolve(document) {
            Err(Error::MalformedConfig { key, .. }) => assert_eq!(key, expected_key),
            other => panic!("expected MalformedConfig for {expected_key}, got {other:?}"),
        }
    }

    #[test]
    fn absent_and_malformed_are_distinct() {
        assert!(resolve(json!({})).is_ok());
        assert!(resolve(json!({"plugins": {}})).is_err());
        assert!(resolve(json!({"plugins": null})).is_err());
    }
}

mod ordering {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn content_order_is_preserved() {
        let config = resolve(json!({"content": ["a/*.html", "b/*.js"]})).unwrap();
        assert_eq!(config.content_globs(), ["a/*.html", "b/*.js"]);
    }

    #[test]
    fn duplicate_globs_are_kept() {
        let config = resolve(json!({"content": ["a/*.html", "a/*.html"]})).unwrap();
        assert_eq!(config.content_globs().len(), 2);
    }

    #[test]
    fn plugin_order_is_preserved() {
        let config = resolve(json!({
            "plugins": ["forms", {"name": "typography"}, "aspect-ratio"]
        }))
        .unwrap();

        let ids: Vec<_> = config.plugins().iter().map(|p| p.identifier()).collect();
        assert_eq!(ids, vec![Some("forms"), Some("typography"), Some("aspect-ratio")]);
    }
}

mod theme {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn redefined_token_replaces_and_siblings_survive() {
        let base = tokens(json!({"fontFamily": {"sans": ["Arial"], "serif": ["Times"]}}));
        let config = resolve(json!({
            "theme": {"extend": {"fontFamily": {"sans": ["Poppins", "sans-serif"]}}}
        }))
        .unwrap();

        let merged = config.theme().merge_onto(&base);

        assert_eq!(
            merged["fontFamily"],
            json!({"sans": ["Poppins", "sans-serif"], "serif": ["Times"]})
        );
    }

    #[test]
    fn override_lookup_hides_base_category() {
        let base = tokens(json!({"colors": {"red": "#f00", "white": "#fff"}}));
        let config = resolve(json!({
            "theme": {
                "colors": {"black": "#000"},
                "extend": {"colors": {"brand": "#123456"}}
            }
        }))
        .unwrap();

        let view = config.theme().view(&base);
        let merged = config.theme().merge_onto(&base);

        assert_eq!(view.fallbacks("colors", "black"), Some(vec!["#000"]));
        assert_eq!(view.fallbacks("colors", "brand"), Some(vec!["#123456"]));
        assert_eq!(view.lookup("colors", "red"), None);
        assert_eq!(merged["colors"], json!({"black": "#000", "brand": "#123456"}));
    }

    #[test]
    fn non_mapping_extension_never_deletes_base_tokens() {
        let base = tokens(json!({"spacing": {"1": "0.25rem", "2": "0.5rem"}}));
        let config = resolve(json!({"theme": {"extend": {"spacing": ["4rem"]}}})).unwrap();

        let merged = config.theme().merge_onto(&base);
        let view = config.theme().view(&base);

        assert_eq!(merged["spacing"], base["spacing"]);
        assert_eq!(view.lookup("spacing", "1"), Some(&json!("0.25rem")));
        assert_eq!(view.lookup("spacing", "2"), merged["spacing"].get("2"));
    }

    #[test]
    fn token_shapes_are_not_validated() {
        let config = resolve(json!({
            "theme": {"extend": {"colors": {"brand": {"light": "#eee", "dark": "#111"}}}}
        }))
        .unwrap();

        assert_eq!(
            config.theme().extension("colors", "brand"),
            Some(&json!({"light": "#eee", "dark": "#111"}))
        );
    }
}

mod extra_keys {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("tw-")]
    #[case("")]
    fn prefix_is_stored(#[case] prefix: &str) {
        let config = resolve(json!({"prefix": prefix})).unwrap();
        assert_eq!(config.prefix(), prefix);
    }

    #[rstest]
    #[case(json!(false), ImportantStrategy::Disabled)]
    #[case(json!(true), ImportantStrategy::All)]
    #[case(json!("#app"), ImportantStrategy::Selector("#app".into()))]
    fn important_strategies(#[case] important: Value, #[case] expected: ImportantStrategy) {
        let config = resolve(json!({"important": important})).unwrap();
        assert_eq!(config.important(), &expected);
    }

    #[test]
    fn safelist_order_is_preserved() {
        let config = resolve(json!({"safelist": ["text-red-500", "bg-blue-100", "text-red-500"]}))
            .unwrap();
        assert_eq!(
            config.safelist(),
            ["text-red-500", "bg-blue-100", "text-red-500"]
        );
    }

    #[test]
    fn separator_is_stored() {
        let config = resolve(json!({"separator": "_"})).unwrap();
        assert_eq!(config.separator(), "_");
    }

    #[test]
    fn absent_extra_keys_use_defaults() {
        let config = resolve(json!({})).unwrap();
        assert_eq!(config.prefix(), "");
        assert_eq!(config.separator(), ":");
        assert_eq!(config.important(), &ImportantStrategy::Disabled);
        assert!(config.safelist().is_empty());
    }
}

#[test]
fn literal_example_document() {
    let config = resolve(json!({
        "content": ["./templates/**/*.html", "./static/**/*.js"],
        "darkMode": "class",
        "theme": {"extend": {"fontFamily": {"poppins": ["Poppins", "sans-serif"]}}},
        "plugins": []
    }))
    .unwrap();

    assert_eq!(
        config.content_globs(),
        ["./templates/**/*.html", "./static/**/*.js"]
    );
    assert_eq!(config.dark_mode(), &DarkModeStrategy::Class);
    assert_eq!(
        config.theme().extensions()["fontFamily"]["poppins"],
        json!(["Poppins", "sans-serif"])
    );
    assert!(config.plugins().is_empty());
}

#[test]
fn configuration_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Configuration>();
}
