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

//! Instructions handed to the language model that writes the reports this
//! crate reads back.

use std::fmt::Write as _;

/// Builds the analysis prompt for a set of languages.
#[derive(Clone, Debug)]
pub struct ZiPromptBuilder {
    languages: Vec<String>,
    word_limit: usize,
}

impl Default for ZiPromptBuilder {
    fn default() -> Self {
        ZiPromptBuilder {
            languages: Vec::new(),
            word_limit: 10,
        }
    }
}

impl ZiPromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.languages.push(language.into());
        self
    }

    pub fn languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages.extend(languages.into_iter().map(Into::into));
        self
    }

    /// Maximum number of toxic and positive words requested per language.
    pub fn word_limit(mut self, limit: usize) -> Self {
        self.word_limit = limit.max(1);
        self
    }

    pub fn build(&self) -> String {
        let mut out = String::new();
        let scope = if self.languages.is_empty() {
            "every language present in the data".to_string()
        } else {
            format!("each of these languages: {}", self.languages.join(", "))
        };

        let _ = writeln!(
            out,
            "Analyze the following text data for {scope}. Detect toxic behaviour and general \
             sentiment in a social VR environment. Answer with one JSON object per language:"
        );
        out.push_str(
            r#"
{
  "Language": "language_code",
  "Total_Texts": total_number_of_texts,
  "Toxic_Texts": number_of_toxic_texts,
  "Toxicity_Rate": (Toxic_Texts / Total_Texts * 100),
  "Top_Toxic_Words": [
    {"Word": "word_1", "Frequency": count_of_word_1},
    ...
  ],
  "Top_Positive_Words": [
    {"Word": "word_1", "Frequency": count_of_word_1},
    ...
  ]
}
"#,
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Instructions:");
        let _ = writeln!(
            out,
            "- List up to {n} top toxic words and {n} top positive words, each with its frequency.",
            n = self.word_limit
        );
        let _ = writeln!(
            out,
            "- Toxic words are strongly negative only: insults, aggressive or harmful language."
        );
        let _ = writeln!(
            out,
            "- Positive words are strongly positive only: compliments, supportive or joyful language."
        );
        let _ = writeln!(
            out,
            "- Leave out neutral or filler words such as \"and\" or \"the\"."
        );
        let _ = writeln!(
            out,
            "- Frequencies are non-negative integers. Analyze each language separately."
        );
        out
    }
}
