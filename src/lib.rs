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

//! # Zitox Core Library
//!
//! Zitox reads the free-form reports a language model writes about toxic
//! language, one JSON object per monitored language, repairs the usual
//! formatting damage, turns word counts into per-language relative
//! frequencies and charts the top words of every language side by side.
//!
//! ## Module Overview
//!
//! - **sanitize**: ordered textual repair rules and array wrapping
//! - **parse**: strict JSON decoding with a soft-fail outcome
//! - **record**: typed per-language records
//! - **aggregate**: totals, top-N selection and relative frequencies
//! - **layout**: grouped bar positions, tick positions and colors
//! - **render**: SVG (plotters) and terminal renderers
//! - **pipeline**: runs the stages end to end
//! - **io**: report sources and output writing
//! - **config**: JSON/YAML run configuration
//! - **prompt**: the instructions that ask a model for these reports
//!
//! ## Quick Start
//!
//! ```rust
//! use zitox::{ZiAnalysisPipeline, ZiTextRenderer};
//!
//! let raw = r#"{"Language":"en","Top_Toxic_Words":[{"Word":"bad","Frequency":10}]}
//!              {"Language":"fr","Top_Toxic_Words":[{"Word":"mauvais","Frequency":8}]}"#;
//! let outcome = ZiAnalysisPipeline::default().run(raw).unwrap();
//! if let Some(report) = outcome.report() {
//!     println!("{}", report.render_with(&ZiTextRenderer::default()).unwrap());
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `Result<T, ZiError>`. A report that cannot be
//! decoded is not an error: the pipeline returns `ZiRunOutcome::Aborted`.

pub mod aggregate;
pub mod config;
pub mod errors;
pub mod io;
pub mod layout;
pub mod parse;
pub mod pipeline;
pub mod prompt;
pub mod record;
pub mod render;
pub mod sanitize;

pub use aggregate::{
    ZiFrequencyAggregator, ZiLanguageTotal, ZiRelativeFrequencyEntry, ZiRelativeFrequencyTable,
};
pub use config::ZiAnalysisConfig;
pub use errors::{Result, ZiError};
pub use io::{ZiFileSource, ZiReportSource, ZiSentinelReader};
pub use layout::{ZiBarPosition, ZiChartLayout, ZiColor, ZiGroupTick, ZiLayoutConfig, ZiPalette};
pub use parse::{parse_json, ZiDecodeFailure, ZiParseOutcome, ZiStructuredParser};
pub use pipeline::{visualize_relative_frequency, ZiAnalysisPipeline, ZiAnalysisReport, ZiRunOutcome};
pub use prompt::ZiPromptBuilder;
pub use record::{ZiLanguageRecord, ZiWordCategory, ZiWordCount};
pub use render::{renderer_for, ZiChartRenderer, ZiOutputFormat, ZiTextRenderer};
#[cfg(feature = "svg")]
pub use render::ZiSvgRenderer;
pub use sanitize::{clean_and_fix_json, ZiSanitizer, ZiSanitizerConfig};
