// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::typeahead::TypeaheadConfig;

fn default_min_query_len() -> usize {
    2
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_page_size() -> usize {
    10
}

fn default_blur_grace_ms() -> u64 {
    100
}

fn default_clear_on_select() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Search behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSection {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_blur_grace_ms")]
    pub blur_grace_ms: u64,
    #[serde(default = "default_clear_on_select")]
    pub clear_on_select: bool,
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchSection {
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
            blur_grace_ms: default_blur_grace_ms(),
            clear_on_select: default_clear_on_select(),
        }
    }
}

impl SearchSection {
    /// Project this section into the typeahead's tuning knobs
    pub fn typeahead_config(&self) -> TypeaheadConfig {
        TypeaheadConfig {
            min_query_len: self.min_query_len,
            debounce: Duration::from_millis(self.debounce_ms),
            page_size: self.page_size.max(1),
            blur_grace: Duration::from_millis(self.blur_grace_ms),
            clear_on_select: self.clear_on_select,
        }
    }
}

/// HTTP client section
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSection {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Fields probed for the display label; empty keeps the built-in list
    #[serde(default)]
    pub label_fields: Vec<String>,
}

impl Default for HttpSection {
    fn default() -> Self {
        HttpSection {
            timeout_ms: default_timeout_ms(),
            label_fields: Vec::new(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchSection,
    #[serde(default)]
    pub http: HttpSection,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_match_the_interaction_contract() {
        let config = Config::default();
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.page_size, 10);
        assert_eq!(config.search.blur_grace_ms, 100);
        assert!(config.search.clear_on_select);
        assert_eq!(config.http.timeout_ms, 10_000);
        assert!(config.http.label_fields.is_empty());
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.search.page_size, Config::default().search.page_size);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[search]
debounce_ms = 150
"#,
        )
        .unwrap();

        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.page_size, 10);
    }

    #[test]
    fn test_label_fields_parse() {
        let config: Config = toml::from_str(
            r#"
[http]
label_fields = ["fantasia", "razao_social"]
"#,
        )
        .unwrap();

        assert_eq!(config.http.label_fields, vec!["fantasia", "razao_social"]);
    }

    #[test]
    fn test_typeahead_config_projection() {
        let section = SearchSection {
            min_query_len: 3,
            debounce_ms: 200,
            page_size: 0,
            blur_grace_ms: 50,
            clear_on_select: false,
        };
        let config = section.typeahead_config();

        assert_eq!(config.min_query_len, 3);
        assert_eq!(config.debounce, Duration::from_millis(200));
        // Page size is floored at one
        assert_eq!(config.page_size, 1);
        assert_eq!(config.blur_grace, Duration::from_millis(50));
        assert!(!config.clear_on_select);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any numeric knob combination in a TOML file should round-trip
        // into the parsed config without errors or clamping surprises.
        #[test]
        fn prop_numeric_knobs_round_trip(
            min_len in 0usize..20,
            debounce in 0u64..5_000,
            page_size in 1usize..200,
        ) {
            let toml_content = format!(
                r#"
[search]
min_query_len = {min_len}
debounce_ms = {debounce}
page_size = {page_size}
"#
            );

            let config: Config = toml::from_str(&toml_content).unwrap();
            prop_assert_eq!(config.search.min_query_len, min_len);
            prop_assert_eq!(config.search.debounce_ms, debounce);
            prop_assert_eq!(config.search.page_size, page_size);
        }
    }
}
