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

//! # Report Sanitizer
//!
//! Best-effort textual repair of language-model reports before decoding.
//!
//! The sanitizer is an ordered list of `(pattern, replacement)` rules followed
//! by a final wrap in `[ ... ]`. The built-in rules are:
//!
//! 1. `strip_non_ascii`: drop every character outside `\x00-\x7F`. Lossy: any
//!    non-ASCII word or key is destroyed.
//! 2. `collapse_whitespace`: turn each whitespace run into one space.
//! 3. `insert_separators`: put a comma between a closing `}`/`]` and a following
//!    `{`/`[`, with any spaces in between removed.
//!
//! No grammar-aware repair is attempted. Sanitizing never fails.
//!
//! ```rust
//! use zitox::sanitize::clean_and_fix_json;
//!
//! assert_eq!(clean_and_fix_json("{\"a\":1}\n\n{\"a\":2}"), "[{\"a\":1},{\"a\":2}]");
//! ```

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Optional behaviour on top of the built-in rules.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiSanitizerConfig {
    /// Remove Markdown code fences and bare `json` labels before anything else.
    pub strip_code_fences: bool,
}

/// A single rewrite applied to the whole report.
#[derive(Clone, Debug)]
pub struct ZiSanitizeRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl ZiSanitizeRule {
    pub fn new(name: impl Into<String>, pattern: Regex, replacement: impl Into<String>) -> Self {
        ZiSanitizeRule {
            name: name.into(),
            pattern,
            replacement: replacement.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}

fn builtin_rules() -> &'static [ZiSanitizeRule] {
    static RULES: OnceLock<Vec<ZiSanitizeRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ZiSanitizeRule::new(
                "strip_non_ascii",
                Regex::new(r"[^\x00-\x7F]+").expect("valid built-in pattern"),
                "",
            ),
            ZiSanitizeRule::new(
                "collapse_whitespace",
                Regex::new(r"\s+").expect("valid built-in pattern"),
                " ",
            ),
            ZiSanitizeRule::new(
                "insert_separators",
                Regex::new(r"([}\]])\s*([{\[])").expect("valid built-in pattern"),
                "${1},${2}",
            ),
        ]
    })
}

fn fence_rules() -> &'static [ZiSanitizeRule] {
    static RULES: OnceLock<Vec<ZiSanitizeRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            ZiSanitizeRule::new(
                "strip_code_fences",
                Regex::new(r"```[A-Za-z]*").expect("valid built-in pattern"),
                "",
            ),
            ZiSanitizeRule::new(
                "strip_json_labels",
                Regex::new(r"(?im)^[ \t]*json[ \t]*$").expect("valid built-in pattern"),
                "",
            ),
        ]
    })
}

/// Ordered rule list turning a raw report into decodable text.
#[derive(Clone, Debug)]
pub struct ZiSanitizer {
    rules: Vec<ZiSanitizeRule>,
}

impl Default for ZiSanitizer {
    fn default() -> Self {
        ZiSanitizer {
            rules: builtin_rules().to_vec(),
        }
    }
}

impl ZiSanitizer {
    /// Built-in rules, preceded by the fence rules when enabled.
    pub fn new(config: &ZiSanitizerConfig) -> Self {
        let mut rules = Vec::new();
        if config.strip_code_fences {
            rules.extend_from_slice(fence_rules());
        }
        rules.extend_from_slice(builtin_rules());
        ZiSanitizer { rules }
    }

    /// Appends a custom rule; it runs after the built-in ones, before wrapping.
    pub fn with_rule(mut self, name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let re = Regex::new(pattern)
            .map_err(|e| ZiError::validation(format!("invalid sanitizer pattern '{name}': {e}")))?;
        self.rules.push(ZiSanitizeRule::new(name, re, replacement));
        Ok(self)
    }

    pub fn rules(&self) -> &[ZiSanitizeRule] {
        &self.rules
    }

    /// Applies every rule in order and wraps the result as a JSON array.
    pub fn sanitize(&self, raw: &str) -> String {
        let mut text = raw.to_string();
        for rule in &self.rules {
            if let Cow::Owned(rewritten) = rule.apply(&text) {
                log::debug!(
                    "sanitizer rule '{}' rewrote report ({} -> {} bytes)",
                    rule.name(),
                    text.len(),
                    rewritten.len()
                );
                text = rewritten;
            }
        }
        format!("[{text}]")
    }
}

/// Sanitizes `raw` with the built-in rules only.
pub fn clean_and_fix_json(raw: &str) -> String {
    ZiSanitizer::default().sanitize(raw)
}
