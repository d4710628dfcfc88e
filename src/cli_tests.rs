//! Tests for the command line interface

use std::time::Duration;

use clap::Parser;

use crate::config::Config;
use crate::error::RestpickError;

use super::{Cli, OutputFormat, parse_header, parse_param};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("restpick").chain(args.iter().copied()))
        .expect("parse args")
}

#[test]
fn test_url_only_uses_defaults() {
    let cli = parse(&["https://api.example.com/clientes"]);

    assert_eq!(cli.url, "https://api.example.com/clientes");
    assert_eq!(cli.output, OutputFormat::Json);
    assert!(!cli.stay);
    assert!(!cli.keep_query);

    let knobs = cli.typeahead_config(&Config::default());
    assert_eq!(knobs.min_query_len, 2);
    assert_eq!(knobs.debounce, Duration::from_millis(300));
    assert_eq!(knobs.page_size, 10);
    assert!(knobs.clear_on_select);
}

#[test]
fn test_url_is_required() {
    assert!(Cli::try_parse_from(["restpick"]).is_err());
}

#[test]
fn test_flags_override_the_config_file() {
    let cli = parse(&[
        "https://api.example.com/clientes",
        "--min-len",
        "3",
        "--debounce-ms",
        "150",
        "--page-size",
        "25",
        "--blur-grace-ms",
        "50",
        "--keep-query",
    ]);

    let knobs = cli.typeahead_config(&Config::default());
    assert_eq!(knobs.min_query_len, 3);
    assert_eq!(knobs.debounce, Duration::from_millis(150));
    assert_eq!(knobs.page_size, 25);
    assert_eq!(knobs.blur_grace, Duration::from_millis(50));
    assert!(!knobs.clear_on_select);
}

#[test]
fn test_page_size_is_floored_at_one() {
    let cli = parse(&["https://api.example.com/x", "--page-size", "0"]);
    assert_eq!(cli.typeahead_config(&Config::default()).page_size, 1);
}

#[test]
fn test_timeout_falls_back_to_the_config() {
    let cli = parse(&["https://api.example.com/x"]);
    assert_eq!(cli.timeout(&Config::default()), Duration::from_millis(10_000));

    let cli = parse(&["https://api.example.com/x", "--timeout-ms", "2500"]);
    assert_eq!(cli.timeout(&Config::default()), Duration::from_millis(2_500));
}

#[test]
fn test_label_fields_prefer_the_flags() {
    let mut config = Config::default();
    config.http.label_fields = vec!["razao_social".to_string()];

    let cli = parse(&["https://api.example.com/x"]);
    assert_eq!(cli.label_fields(&config), vec!["razao_social"]);

    let cli = parse(&[
        "https://api.example.com/x",
        "--label-field",
        "fantasia",
        "--label-field",
        "nome",
    ]);
    assert_eq!(cli.label_fields(&config), vec!["fantasia", "nome"]);
}

#[test]
fn test_repeated_params_are_collected_in_order() {
    let cli = parse(&[
        "https://api.example.com/x",
        "--param",
        "somente_ativos=true",
        "--param",
        "empresa_id=7",
    ]);

    let params = cli.parsed_params().expect("params");
    assert_eq!(
        params,
        vec![
            ("somente_ativos".to_string(), "true".to_string()),
            ("empresa_id".to_string(), "7".to_string()),
        ]
    );
}

#[test]
fn test_param_without_equals_is_rejected() {
    let cli = parse(&["https://api.example.com/x", "--param", "broken"]);

    match cli.parsed_params() {
        Err(RestpickError::InvalidFlag { flag, .. }) => assert_eq!(flag, "--param"),
        other => panic!("expected InvalidFlag, got {other:?}"),
    }
}

#[test]
fn test_param_value_may_be_empty() {
    assert_eq!(
        parse_param("chave=").expect("param"),
        ("chave".to_string(), String::new())
    );
}

#[test]
fn test_header_parsing() {
    assert_eq!(
        parse_header("Authorization: Bearer abc").expect("header"),
        ("Authorization".to_string(), "Bearer abc".to_string())
    );
    assert!(parse_header("no-colon").is_err());
    assert!(parse_header(": value").is_err());
}

#[test]
fn test_url_validation() {
    assert!(parse(&["https://api.example.com/x"]).validated_url().is_ok());
    assert!(parse(&["http://localhost:3000/x"]).validated_url().is_ok());

    match parse(&["ftp://api.example.com/x"]).validated_url() {
        Err(RestpickError::InvalidUrl(url)) => assert_eq!(url, "ftp://api.example.com/x"),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[test]
fn test_output_format_values() {
    let cli = parse(&["https://api.example.com/x", "--output", "id"]);
    assert_eq!(cli.output, OutputFormat::Id);

    let cli = parse(&["https://api.example.com/x", "--output", "label"]);
    assert_eq!(cli.output, OutputFormat::Label);
}
