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

//! # Zitox Record Module
//!
//! Typed views over the per-language reports produced by the language model.
//!
//! The parser hands out raw `serde_json::Value`s without any schema check. The
//! conversion into [`ZiLanguageRecord`] happens here, when the aggregator needs
//! the data:
//!
//! - `Language` must be a string.
//! - The word list of the analysed [`ZiWordCategory`] may be absent or `null`
//!   (the language then contributes nothing); when present it must be an array
//!   of `{"Word": string, "Frequency": non-negative integer}` objects.
//! - Every other field is optional and read leniently: a malformed value is
//!   dropped instead of failing the record.
//!
//! ## Usage Example
//!
//! ```rust
//! use serde_json::json;
//! use zitox::record::{ZiLanguageRecord, ZiWordCategory};
//!
//! let value = json!({
//!     "Language": "en",
//!     "Top_Toxic_Words": [{"Word": "bad", "Frequency": 10}]
//! });
//! let record = ZiLanguageRecord::from_value(0, &value, ZiWordCategory::Toxic).unwrap();
//! assert_eq!(record.total_frequency(ZiWordCategory::Toxic), 10);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};

/// Which word list of a record is analysed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiWordCategory {
    #[default]
    Toxic,
    Positive,
}

impl ZiWordCategory {
    /// JSON key holding the word list for this category.
    pub fn field_name(&self) -> &'static str {
        match self {
            ZiWordCategory::Toxic => "Top_Toxic_Words",
            ZiWordCategory::Positive => "Top_Positive_Words",
        }
    }

    /// Capitalized label used in chart titles and diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            ZiWordCategory::Toxic => "Toxic",
            ZiWordCategory::Positive => "Positive",
        }
    }

    fn other(&self) -> ZiWordCategory {
        match self {
            ZiWordCategory::Toxic => ZiWordCategory::Positive,
            ZiWordCategory::Positive => ZiWordCategory::Toxic,
        }
    }
}

impl fmt::Display for ZiWordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for ZiWordCategory {
    type Err = ZiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toxic" => Ok(ZiWordCategory::Toxic),
            "positive" => Ok(ZiWordCategory::Positive),
            other => Err(ZiError::validation(format!(
                "unknown word category '{other}' (expected 'toxic' or 'positive')"
            ))),
        }
    }
}

/// One word and how often the model counted it.
///
/// Entries with the same word inside one record stay distinct; nothing merges
/// them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiWordCount {
    #[serde(rename = "Word")]
    pub word: String,
    #[serde(rename = "Frequency")]
    pub frequency: u64,
}

impl ZiWordCount {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        ZiWordCount {
            word: word.into(),
            frequency,
        }
    }
}

/// Report for a single monitored language.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiLanguageRecord {
    #[serde(rename = "Language")]
    pub language: String,

    #[serde(rename = "Total_Texts", default, skip_serializing_if = "Option::is_none")]
    pub total_texts: Option<u64>,

    #[serde(rename = "Toxic_Texts", default, skip_serializing_if = "Option::is_none")]
    pub toxic_texts: Option<u64>,

    #[serde(rename = "Toxicity_Rate", default, skip_serializing_if = "Option::is_none")]
    pub toxicity_rate: Option<f64>,

    #[serde(rename = "Top_Toxic_Words", default, skip_serializing_if = "Option::is_none")]
    pub top_toxic_words: Option<Vec<ZiWordCount>>,

    #[serde(rename = "Top_Positive_Words", default, skip_serializing_if = "Option::is_none")]
    pub top_positive_words: Option<Vec<ZiWordCount>>,
}

impl ZiLanguageRecord {
    /// Creates a record holding only a toxic word list.
    pub fn new(language: impl Into<String>, top_toxic_words: Option<Vec<ZiWordCount>>) -> Self {
        ZiLanguageRecord {
            language: language.into(),
            top_toxic_words,
            ..Default::default()
        }
    }

    /// Converts one decoded JSON object into a record.
    ///
    /// `index` is the position of the value in the decoded sequence and only
    /// feeds error messages. The word list of `category` is read strictly;
    /// the other list and the summary counters are best-effort.
    pub fn from_value(index: usize, value: &Value, category: ZiWordCategory) -> Result<Self> {
        let obj = value.as_object().ok_or_else(|| {
            ZiError::schema(format!(
                "record {index}: expected an object, found {}",
                value_kind(value)
            ))
        })?;

        let language = obj
            .get("Language")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ZiError::schema(format!("record {index}: missing string field 'Language'"))
            })?
            .to_string();

        let selected = read_word_list(index, obj, category)?;
        let other = read_word_list(index, obj, category.other()).unwrap_or(None);

        let mut record = ZiLanguageRecord {
            language,
            total_texts: obj.get("Total_Texts").and_then(Value::as_u64),
            toxic_texts: obj.get("Toxic_Texts").and_then(Value::as_u64),
            toxicity_rate: obj.get("Toxicity_Rate").and_then(Value::as_f64),
            top_toxic_words: None,
            top_positive_words: None,
        };
        match category {
            ZiWordCategory::Toxic => {
                record.top_toxic_words = selected;
                record.top_positive_words = other;
            }
            ZiWordCategory::Positive => {
                record.top_positive_words = selected;
                record.top_toxic_words = other;
            }
        }
        Ok(record)
    }

    /// Word list for `category`, empty when absent.
    pub fn words(&self, category: ZiWordCategory) -> &[ZiWordCount] {
        let list = match category {
            ZiWordCategory::Toxic => &self.top_toxic_words,
            ZiWordCategory::Positive => &self.top_positive_words,
        };
        list.as_deref().unwrap_or(&[])
    }

    /// Sum of every frequency in the `category` list, before any top-N cut.
    ///
    /// Summed as `u128` so lists of `u64` counts cannot overflow.
    pub fn total_frequency(&self, category: ZiWordCategory) -> u128 {
        self.words(category)
            .iter()
            .map(|w| u128::from(w.frequency))
            .sum()
    }
}

/// Converts a decoded sequence into records.
///
/// Arrays nested inside the sequence are expanded in place, so a report that
/// was wrapped twice still yields its records in order.
pub fn records_from_values(values: &[Value], category: ZiWordCategory) -> Result<Vec<ZiLanguageRecord>> {
    let mut flat = Vec::with_capacity(values.len());
    flatten_into(values, &mut flat);
    flat.iter()
        .enumerate()
        .map(|(idx, value)| ZiLanguageRecord::from_value(idx, value, category))
        .collect()
}

fn flatten_into<'a>(values: &'a [Value], out: &mut Vec<&'a Value>) {
    for value in values {
        match value {
            Value::Array(inner) => flatten_into(inner, out),
            other => out.push(other),
        }
    }
}

fn read_word_list(
    index: usize,
    obj: &Map<String, Value>,
    category: ZiWordCategory,
) -> Result<Option<Vec<ZiWordCount>>> {
    let key = category.field_name();
    let items = match obj.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ZiError::schema(format!(
                "record {index}: '{key}' must be an array, found {}",
                value_kind(other)
            )))
        }
    };

    let mut words = Vec::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        let word = item.get("Word").and_then(Value::as_str).ok_or_else(|| {
            ZiError::schema(format!("record {index}, {key}[{pos}]: missing string field 'Word'"))
        })?;
        let frequency = item.get("Frequency").and_then(Value::as_u64).ok_or_else(|| {
            ZiError::schema(format!(
                "record {index}, {key}[{pos}]: 'Frequency' must be a non-negative integer"
            ))
        })?;
        words.push(ZiWordCount::new(word, frequency));
    }
    Ok(Some(words))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
