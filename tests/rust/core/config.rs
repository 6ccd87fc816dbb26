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

use std::fs;

use zitox::{ZiAnalysisConfig, ZiError, ZiOutputFormat, ZiWordCategory};

#[test]
fn loads_json_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zitox.json");
    fs::write(
        &path,
        r#"{"top_n": 3, "format": "text", "layout": {"bar_width": 0.5}}"#,
    )
    .unwrap();

    let config = ZiAnalysisConfig::load(&path).unwrap();
    assert_eq!(config.top_n, 3);
    assert_eq!(config.format, ZiOutputFormat::Text);
    assert_eq!(config.layout.bar_width, 0.5);
    assert_eq!(config.layout.language_gap, 3.0);
    assert_eq!(config.sentinel, "END");
}

#[test]
fn loads_yaml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zitox.yml");
    fs::write(
        &path,
        "top_n: 7\ncategory: positive\nsentinel: DONE\nexport: table.json\nsanitizer:\n  strip_code_fences: true\n",
    )
    .unwrap();

    let config = ZiAnalysisConfig::load(&path).unwrap();
    assert_eq!(config.top_n, 7);
    assert_eq!(config.category, ZiWordCategory::Positive);
    assert_eq!(config.sentinel, "DONE");
    assert_eq!(config.export.as_deref(), Some(std::path::Path::new("table.json")));
    assert!(config.sanitizer.strip_code_fences);
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zitox.toml");
    fs::write(&path, "top_n = 3").unwrap();
    assert!(matches!(
        ZiAnalysisConfig::load(&path),
        Err(ZiError::Validation { .. })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ZiAnalysisConfig::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));
}

#[test]
fn invalid_values_fail_validation() {
    assert!(ZiAnalysisConfig::from_yaml_str("sentinel: '  '").is_err());
    assert!(ZiAnalysisConfig::from_yaml_str("log_level: loud").is_err());
    assert!(ZiAnalysisConfig::from_json_str(r#"{"layout": {"bar_width": 0}}"#).is_err());
    assert!(matches!(
        ZiAnalysisConfig::from_json_str(r#"{"top_n": "many"}"#),
        Err(ZiError::Serde(_))
    ));
}
