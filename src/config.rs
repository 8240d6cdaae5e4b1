use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use strum::IntoEnumIterator;

use crate::{analyzer::ParserFamily, Error, InternalResult};

/// Policy a host applies when admitting parser types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceConfig {
    #[serde(default = "default_allowed_families")]
    pub allowed_families: Vec<ParserFamily>,

    #[serde(default = "default_true")]
    pub require_stateless: bool,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            allowed_families: default_allowed_families(),
            require_stateless: default_true(),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> InternalResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> InternalResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

// デフォルト値の定義
fn default_allowed_families() -> Vec<ParserFamily> {
    ParserFamily::iter().collect()
}

fn default_true() -> bool {
    true
}
