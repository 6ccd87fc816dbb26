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

//! # Structured Parser
//!
//! Strict JSON decoding of a sanitized report. Decoding either yields the
//! sequence of values exactly as found, or a [`ZiDecodeFailure`] describing
//! where and why it stopped. The failure is logged and handed back as a value;
//! the caller decides whether to abort.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::error::Category;
use serde_json::Value;

use crate::errors::ZiError;

/// Why a sanitized report could not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiDecodeFailure {
    pub line: usize,
    pub column: usize,
    /// `syntax`, `eof`, `data` or `io`, as classified by the decoder.
    pub category: String,
    pub message: String,
}

impl ZiDecodeFailure {
    fn from_serde(err: &serde_json::Error) -> Self {
        let category = match err.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };
        ZiDecodeFailure {
            line: err.line(),
            column: err.column(),
            category: category.to_string(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ZiDecodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} error)", self.message, self.category)
    }
}

impl From<ZiDecodeFailure> for ZiError {
    fn from(failure: ZiDecodeFailure) -> Self {
        ZiError::Decode {
            line: failure.line,
            column: failure.column,
            message: failure.message,
        }
    }
}

/// Outcome of a decode attempt: the decoded sequence or the reason it failed.
pub type ZiParseOutcome = std::result::Result<Vec<Value>, ZiDecodeFailure>;

/// Decoder for sanitized reports. No schema validation happens here.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiStructuredParser;

impl ZiStructuredParser {
    pub fn new() -> Self {
        ZiStructuredParser
    }

    /// Decodes `sanitized`. A top-level value that is not an array becomes a
    /// one-element sequence.
    pub fn parse(&self, sanitized: &str) -> ZiParseOutcome {
        match serde_json::from_str::<Value>(sanitized) {
            Ok(Value::Array(values)) => Ok(values),
            Ok(other) => Ok(vec![other]),
            Err(err) => {
                let failure = ZiDecodeFailure::from_serde(&err);
                log::warn!("Failed to parse JSON: {failure}");
                Err(failure)
            }
        }
    }
}

/// Decodes `sanitized` with the default parser.
pub fn parse_json(sanitized: &str) -> ZiParseOutcome {
    ZiStructuredParser::new().parse(sanitized)
}
