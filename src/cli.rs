//! Command line interface
//!
//! Flags override the config file, which overrides the built-in defaults.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::error::RestpickError;
use crate::typeahead::TypeaheadConfig;

/// What to print for the selection on exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The full selected record as JSON
    Json,
    /// Only the record id
    Id,
    /// Only the display label
    Label,
}

/// Pick a record from a paginated REST collection, interactively
#[derive(Debug, Parser)]
#[command(name = "restpick", version, about)]
pub struct Cli {
    /// Collection endpoint URL (e.g. https://api.example.com/clientes)
    pub url: String,

    /// Minimum query length before searching
    #[arg(long, value_name = "CHARS")]
    pub min_len: Option<usize>,

    /// Debounce quiet period in milliseconds
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Page size requested from the backend
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Grace period between blur and panel close, in milliseconds
    #[arg(long, value_name = "MS")]
    pub blur_grace_ms: Option<u64>,

    /// Keep the query text after a selection
    #[arg(long)]
    pub keep_query: bool,

    /// Keep running after a selection instead of exiting with it
    #[arg(long)]
    pub stay: bool,

    /// Fixed query parameter sent with every search (repeatable)
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Fixed request header sent with every search (repeatable)
    #[arg(long = "header", value_name = "NAME:VALUE")]
    pub headers: Vec<String>,

    /// Record field probed for the display label, in order (repeatable)
    #[arg(long = "label-field", value_name = "FIELD")]
    pub label_fields: Vec<String>,

    /// HTTP request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// What to print for the selection
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,
}

impl Cli {
    /// Typeahead knobs: config file values overridden by flags
    pub fn typeahead_config(&self, config: &Config) -> TypeaheadConfig {
        let mut knobs = config.search.typeahead_config();
        if let Some(min_len) = self.min_len {
            knobs.min_query_len = min_len;
        }
        if let Some(ms) = self.debounce_ms {
            knobs.debounce = Duration::from_millis(ms);
        }
        if let Some(size) = self.page_size {
            knobs.page_size = size.max(1);
        }
        if let Some(ms) = self.blur_grace_ms {
            knobs.blur_grace = Duration::from_millis(ms);
        }
        if self.keep_query {
            knobs.clear_on_select = false;
        }
        knobs
    }

    pub fn timeout(&self, config: &Config) -> Duration {
        Duration::from_millis(self.timeout_ms.unwrap_or(config.http.timeout_ms))
    }

    /// Label projection fields: flags win over the config file
    pub fn label_fields(&self, config: &Config) -> Vec<String> {
        if self.label_fields.is_empty() {
            config.http.label_fields.clone()
        } else {
            self.label_fields.clone()
        }
    }

    pub fn parsed_params(&self) -> Result<Vec<(String, String)>, RestpickError> {
        self.params.iter().map(|raw| parse_param(raw)).collect()
    }

    pub fn parsed_headers(&self) -> Result<Vec<(String, String)>, RestpickError> {
        self.headers.iter().map(|raw| parse_header(raw)).collect()
    }

    /// The endpoint URL, rejected early when it cannot be an HTTP endpoint
    pub fn validated_url(&self) -> Result<&str, RestpickError> {
        let url = self.url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(url)
        } else {
            Err(RestpickError::InvalidUrl(self.url.clone()))
        }
    }
}

/// Split one `key=value` parameter flag
fn parse_param(raw: &str) -> Result<(String, String), RestpickError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(RestpickError::InvalidFlag {
            flag: "--param",
            value: raw.to_string(),
            expected: "key=value",
        }),
    }
}

/// Split one `Name: value` header flag
fn parse_header(raw: &str) -> Result<(String, String), RestpickError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() && !value.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(RestpickError::InvalidFlag {
            flag: "--header",
            value: raw.to_string(),
            expected: "Name: value",
        }),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
