use crate::error::{ConfigError, Result};
use crate::model::Station;
use chrono::NaiveDate;
use serde_derive::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

/// Tokyo, the only location the scraper was built for.
pub const DEFAULT_PREC_NO: &str = "44";
pub const DEFAULT_BLOCK_NO: &str = "47662";

pub const DEFAULT_BASE_URL: &str = "https://www.data.jma.go.jp/stats/etrn/view/10min_s1.php";

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_prec_no() -> String {
    DEFAULT_PREC_NO.to_string()
}

fn default_block_no() -> String {
    DEFAULT_BLOCK_NO.to_string()
}

/// First day the 10-minute table is available for the default station.
fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2009, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

// The courtesy delay is intentionally absent here: it is not tunable.
#[derive(Deserialize, Debug, Clone)]
pub struct ScraperConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_prec_no")]
    pub prec_no: String,
    #[serde(default = "default_block_no")]
    pub block_no: String,
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            prec_no: default_prec_no(),
            block_no: default_block_no(),
            start_date: default_start_date(),
            output_dir: default_output_dir(),
        }
    }
}

impl ScraperConfig {
    pub fn station(&self) -> Station {
        Station::new(&self.prec_no, &self.block_no)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::invalid("base_url", "must not be empty"));
        }
        if self.prec_no.trim().is_empty() {
            return Err(ConfigError::invalid("prec_no", "must not be empty"));
        }
        if self.block_no.trim().is_empty() {
            return Err(ConfigError::invalid("block_no", "must not be empty"));
        }
        Ok(self)
    }
}

pub fn load_scraper_config() -> Result<ScraperConfig, ConfigError> {
    envy::prefixed("JMA_")
        .from_env::<ScraperConfig>()
        .map_err(ConfigError::env_parse)?
        .validate()
}
