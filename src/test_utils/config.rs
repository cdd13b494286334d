//! Configuration utilities for testing.

use std::env::VarError;
use std::path::Path;

use crate::config::ScraperConfig;
use chrono::NaiveDate;

/// Scraper configuration pointing at a mock server and a scratch directory.
pub fn test_scraper_config(base_url: &str, output_dir: &Path, start: NaiveDate) -> ScraperConfig {
    ScraperConfig {
        base_url: base_url.to_string(),
        start_date: start,
        output_dir: output_dir.to_path_buf(),
        ..ScraperConfig::default()
    }
}

/// Helper to temporarily set an environment variable and restore it after
pub fn with_env_var<F, R>(key: &str, value: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let original = std::env::var(key).ok();
    std::env::set_var(key, value);
    let result = f();
    match original {
        Some(val) => std::env::set_var(key, val),
        None => std::env::remove_var(key),
    }
    result
}

/// Helper to temporarily clear environment variables and restore them after
pub fn without_env_vars<F, R>(keys: &[&str], f: F) -> R
where
    F: FnOnce() -> R,
{
    let originals: Vec<(String, Result<String, VarError>)> = keys
        .iter()
        .map(|&key| (key.to_string(), std::env::var(key)))
        .collect();

    for key in keys {
        std::env::remove_var(key);
    }

    let result = f();

    for (key, original) in originals {
        match original {
            Ok(val) => std::env::set_var(&key, val),
            Err(_) => std::env::remove_var(&key),
        }
    }

    result
}
