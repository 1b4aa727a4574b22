use std::fs;
use std::path::Path;

use log::LevelFilter;
use serde::Deserialize;

use crate::data::{MAX_BASE, MIN_BASE};
use crate::error::ConfigError;
use crate::platform::Platform;

/// The data set analysed by the course-1 statistics exercise.
pub const COURSE_DATA_SET: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    pub base: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self { base: 10 }
    }
}

/// Settings shared by the `course1` and `stats` programs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CourseConfig {
    pub platform: Platform,
    pub verbose: bool,
    pub log_level: String,
    pub data_set: Vec<u8>,
    pub conversion: ConversionConfig,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Host,
            verbose: true,
            log_level: "info".to_string(),
            data_set: COURSE_DATA_SET.to_vec(),
            conversion: ConversionConfig::default(),
        }
    }
}

impl CourseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CourseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, the defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BASE..=MAX_BASE).contains(&self.conversion.base) {
            return Err(ConfigError::invalid(
                "conversion.base",
                format!(
                    "{} is outside {MIN_BASE}..={MAX_BASE}",
                    self.conversion.base
                ),
            ));
        }
        if self.data_set.is_empty() {
            return Err(ConfigError::invalid("data_set", "must not be empty"));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level.parse().map_err(|_| {
            ConfigError::invalid(
                "log_level",
                format!("unknown level '{}'", self.log_level),
            )
        })
    }
}
