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

//! # Frequency Aggregator
//!
//! Turns per-language word counts into relative frequencies.
//!
//! For every record the aggregator sums all word frequencies, keeps the
//! `top_n` most frequent words (stable on ties) and stores each one as a
//! percentage of that sum under the key `(language, word)`. The sum always
//! covers the whole list, not just the kept words. A language whose sum is
//! zero gets `0.0` for every word.
//!
//! When the same `(language, word)` pair comes from more than one record the
//! values are appended to the same entry and summed when charted.
//!
//! Languages are kept in first-seen order, including those that contributed
//! no words, so the table is deterministic for a given input.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::errors::Result;
use crate::record::{records_from_values, ZiLanguageRecord, ZiWordCategory, ZiWordCount};

/// Word total of one input record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiLanguageTotal {
    pub language: String,
    pub total: u128,
}

/// Relative frequencies collected for one `(language, word)` pair.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiRelativeFrequencyEntry {
    pub language: String,
    pub word: String,
    /// Usually a single percentage; one more per duplicate record.
    pub values: Vec<f64>,
}

impl ZiRelativeFrequencyEntry {
    /// Summed percentage, as drawn on the chart.
    pub fn value(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Output of [`ZiFrequencyAggregator::aggregate`].
#[derive(Clone, Debug, Default, Serialize)]
pub struct ZiRelativeFrequencyTable {
    pub category: ZiWordCategory,
    pub top_n: usize,
    languages: Vec<String>,
    totals: Vec<ZiLanguageTotal>,
    entries: Vec<ZiRelativeFrequencyEntry>,
    #[serde(skip)]
    index: HashMap<(String, String), usize>,
}

impl ZiRelativeFrequencyTable {
    fn new(category: ZiWordCategory, top_n: usize) -> Self {
        ZiRelativeFrequencyTable {
            category,
            top_n,
            ..Default::default()
        }
    }

    fn note_language(&mut self, language: &str) {
        if !self.languages.iter().any(|l| l == language) {
            self.languages.push(language.to_string());
        }
    }

    fn push(&mut self, language: &str, word: &str, relative: f64) {
        let key = (language.to_string(), word.to_string());
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].values.push(relative),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(ZiRelativeFrequencyEntry {
                    language: language.to_string(),
                    word: word.to_string(),
                    values: vec![relative],
                });
            }
        }
    }

    /// Every language seen, in first-seen order.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Languages owning at least one entry, in first-seen order.
    pub fn charted_languages(&self) -> Vec<&str> {
        self.languages
            .iter()
            .filter(|lang| self.entries.iter().any(|e| &e.language == *lang))
            .map(String::as_str)
            .collect()
    }

    /// Per-record totals, in record order.
    pub fn totals(&self) -> &[ZiLanguageTotal] {
        &self.totals
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[ZiRelativeFrequencyEntry] {
        &self.entries
    }

    pub fn entries_for<'a>(
        &'a self,
        language: &'a str,
    ) -> impl Iterator<Item = &'a ZiRelativeFrequencyEntry> + 'a {
        self.entries.iter().filter(move |e| e.language == language)
    }

    pub fn get(&self, language: &str, word: &str) -> Option<&ZiRelativeFrequencyEntry> {
        self.index
            .get(&(language.to_string(), word.to_string()))
            .map(|&pos| &self.entries[pos])
    }

    /// Summed percentage for a pair; `0.0` when the pair was never recorded.
    pub fn value(&self, language: &str, word: &str) -> f64 {
        self.get(language, word).map_or(0.0, ZiRelativeFrequencyEntry::value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logs the whole table, one line per pair.
    pub fn log_summary(&self) {
        log::info!("Final relative frequencies by language (before plotting):");
        for entry in &self.entries {
            log::info!(
                "Language: {}, Word: {}, Frequencies: {:?}",
                entry.language,
                entry.word,
                entry.values
            );
        }
    }

    /// JSON form used by the table export.
    ///
    /// Fails when a language total does not fit a JSON number.
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Computes relative word frequencies per language.
#[derive(Clone, Copy, Debug)]
pub struct ZiFrequencyAggregator {
    top_n: usize,
    category: ZiWordCategory,
}

impl ZiFrequencyAggregator {
    pub fn new(top_n: usize) -> Self {
        ZiFrequencyAggregator {
            top_n,
            category: ZiWordCategory::Toxic,
        }
    }

    pub fn with_category(mut self, category: ZiWordCategory) -> Self {
        self.category = category;
        self
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn category(&self) -> ZiWordCategory {
        self.category
    }

    pub fn aggregate(&self, records: &[ZiLanguageRecord]) -> ZiRelativeFrequencyTable {
        let mut table = ZiRelativeFrequencyTable::new(self.category, self.top_n);
        let label = self.category.label().to_lowercase();

        for record in records {
            let language = record.language.as_str();
            table.note_language(language);

            let total = record.total_frequency(self.category);
            log::info!("Total {label} words for {language}: {total}");
            table.totals.push(ZiLanguageTotal {
                language: language.to_string(),
                total,
            });

            for word in select_top(record.words(self.category), self.top_n) {
                let relative = relative_frequency(word.frequency, total);
                log::info!(
                    "Relative frequency of '{}' in {}: {}%",
                    word.word,
                    language,
                    relative
                );
                table.push(language, &word.word, relative);
            }
        }
        table
    }

    /// Converts decoded values into records, then aggregates them.
    pub fn aggregate_values(&self, values: &[Value]) -> Result<ZiRelativeFrequencyTable> {
        let records = records_from_values(values, self.category)?;
        Ok(self.aggregate(&records))
    }
}

/// The `top_n` most frequent words; equal frequencies keep input order.
pub fn select_top(words: &[ZiWordCount], top_n: usize) -> Vec<&ZiWordCount> {
    let mut sorted: Vec<&ZiWordCount> = words.iter().collect();
    sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    sorted.truncate(top_n);
    sorted
}

/// `frequency` as a percentage of `total`; `0.0` when `total` is zero.
pub fn relative_frequency(frequency: u64, total: u128) -> f64 {
    if total == 0 {
        0.0
    } else {
        (frequency as f64 / total as f64) * 100.0
    }
}
