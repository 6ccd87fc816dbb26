//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zitox.
//! The Zitox project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Analysis Configuration
//!
//! Every knob of a run in one serde struct. Files may be JSON (`.json`) or
//! YAML (`.yaml`, `.yml`); missing keys fall back to the defaults below.
//!
//! ```yaml
//! top_n: 5
//! category: toxic
//! sentinel: END
//! output: toxic_words.svg
//! format: svg
//! log_level: info
//! layout:
//!   bar_width: 0.4
//!   language_gap: 3.0
//!   word_gap: 0.6
//! sanitizer:
//!   strip_code_fences: false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::record::ZiWordCategory;
use crate::render::ZiOutputFormat;
use crate::sanitize::ZiSanitizerConfig;

pub use crate::layout::ZiLayoutConfig;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiAnalysisConfig {
    /// Words kept per language.
    pub top_n: usize,
    /// Word list analysed.
    pub category: ZiWordCategory,
    /// Line that ends console input.
    pub sentinel: String,
    /// Chart destination; ignored by the text format, which prints.
    pub output: PathBuf,
    pub format: ZiOutputFormat,
    /// Optional JSON dump of the relative-frequency table.
    pub export: Option<PathBuf>,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub layout: ZiLayoutConfig,
    pub sanitizer: ZiSanitizerConfig,
}

impl Default for ZiAnalysisConfig {
    fn default() -> Self {
        ZiAnalysisConfig {
            top_n: 5,
            category: ZiWordCategory::Toxic,
            sentinel: "END".to_string(),
            output: PathBuf::from("toxic_words.svg"),
            format: ZiOutputFormat::Svg,
            export: None,
            log_level: "info".to_string(),
            layout: ZiLayoutConfig::default(),
            sanitizer: ZiSanitizerConfig::default(),
        }
    }
}

impl ZiAnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates a JSON or YAML file, chosen by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let text = fs::read_to_string(path)
            .map_err(|e| ZiError::Io(format!("{}: {e}", path.display())))?;
        let config = match ext.as_str() {
            "json" => Self::from_json_str(&text)?,
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            other => {
                return Err(ZiError::validation(format!(
                    "unsupported config extension '{other}' for {}",
                    path.display()
                )))
            }
        };
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: ZiAnalysisConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: ZiAnalysisConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ZiError::validation("top_n must be at least 1"));
        }
        if self.sentinel.trim().is_empty() {
            return Err(ZiError::validation("sentinel must not be blank"));
        }
        if log_level_filter(&self.log_level).is_none() {
            return Err(ZiError::validation(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        self.layout.validate()
    }

    /// Parsed `log_level`; `Info` if it is not recognised.
    pub fn level_filter(&self) -> log::LevelFilter {
        log_level_filter(&self.log_level).unwrap_or(log::LevelFilter::Info)
    }

    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn category(mut self, category: ZiWordCategory) -> Self {
        self.category = category;
        self
    }

    pub fn sentinel(mut self, sentinel: &str) -> Self {
        self.sentinel = sentinel.to_string();
        self
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn format(mut self, format: ZiOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn export(mut self, export: impl Into<PathBuf>) -> Self {
        self.export = Some(export.into());
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.log_level = level.to_string();
        self
    }

    pub fn layout(mut self, layout: ZiLayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn strip_code_fences(mut self, enabled: bool) -> Self {
        self.sanitizer.strip_code_fences = enabled;
        self
    }
}

fn log_level_filter(level: &str) -> Option<log::LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(log::LevelFilter::Off),
        "error" => Some(log::LevelFilter::Error),
        "warn" | "warning" => Some(log::LevelFilter::Warn),
        "info" => Some(log::LevelFilter::Info),
        "debug" => Some(log::LevelFilter::Debug),
        "trace" => Some(log::LevelFilter::Trace),
        _ => None,
    }
}
