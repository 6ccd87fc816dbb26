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

//! # Analysis Pipeline
//!
//! Runs the stages in order, each to completion:
//!
//! ```text
//! raw text -> sanitize -> parse -> aggregate -> layout -> (render)
//! ```
//!
//! A decode failure ends the run early with [`ZiRunOutcome::Aborted`]; no
//! aggregation or layout happens and nothing is rendered. Records with the
//! wrong shape surface as [`ZiError::Schema`](crate::errors::ZiError).

use serde_json::Value;

use crate::aggregate::{ZiFrequencyAggregator, ZiRelativeFrequencyTable};
use crate::config::ZiAnalysisConfig;
use crate::errors::Result;
use crate::layout::{ZiChartLayout, ZiLayoutConfig};
use crate::parse::{ZiDecodeFailure, ZiStructuredParser};
use crate::record::{records_from_values, ZiLanguageRecord};
use crate::render::ZiChartRenderer;
use crate::sanitize::ZiSanitizer;

/// Everything a completed run produced.
#[derive(Clone, Debug)]
pub struct ZiAnalysisReport {
    pub sanitized: String,
    pub records: Vec<ZiLanguageRecord>,
    pub table: ZiRelativeFrequencyTable,
    pub layout: ZiChartLayout,
}

impl ZiAnalysisReport {
    pub fn render_with(&self, renderer: &dyn ZiChartRenderer) -> Result<String> {
        log::debug!("rendering with '{}' renderer", renderer.name());
        renderer.render(&self.layout)
    }
}

/// How a run ended.
#[derive(Clone, Debug)]
pub enum ZiRunOutcome {
    Completed(Box<ZiAnalysisReport>),
    /// The report could not be decoded even after sanitizing.
    Aborted(ZiDecodeFailure),
}

impl ZiRunOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ZiRunOutcome::Aborted(_))
    }

    pub fn report(&self) -> Option<&ZiAnalysisReport> {
        match self {
            ZiRunOutcome::Completed(report) => Some(report.as_ref()),
            ZiRunOutcome::Aborted(_) => None,
        }
    }

    pub fn into_report(self) -> Option<ZiAnalysisReport> {
        match self {
            ZiRunOutcome::Completed(report) => Some(*report),
            ZiRunOutcome::Aborted(_) => None,
        }
    }
}

/// Sanitize, parse, aggregate and lay out one report.
#[derive(Clone, Debug)]
pub struct ZiAnalysisPipeline {
    sanitizer: ZiSanitizer,
    parser: ZiStructuredParser,
    aggregator: ZiFrequencyAggregator,
    layout: ZiLayoutConfig,
}

impl Default for ZiAnalysisPipeline {
    fn default() -> Self {
        Self::from_config(&ZiAnalysisConfig::default())
    }
}

impl ZiAnalysisPipeline {
    pub fn from_config(config: &ZiAnalysisConfig) -> Self {
        ZiAnalysisPipeline {
            sanitizer: ZiSanitizer::new(&config.sanitizer),
            parser: ZiStructuredParser::new(),
            aggregator: ZiFrequencyAggregator::new(config.top_n).with_category(config.category),
            layout: config.layout.clone(),
        }
    }

    /// Replaces the sanitizer, e.g. one carrying custom rules.
    pub fn with_sanitizer(mut self, sanitizer: ZiSanitizer) -> Self {
        self.sanitizer = sanitizer;
        self
    }

    pub fn run(&self, raw: &str) -> Result<ZiRunOutcome> {
        self.run_with_progress(raw, |_| {})
    }

    /// Like [`run`](Self::run), calling `progress` with each stage name as it
    /// finishes.
    pub fn run_with_progress(&self, raw: &str, progress: impl Fn(&str)) -> Result<ZiRunOutcome> {
        let sanitized = self.sanitizer.sanitize(raw);
        progress("sanitize");

        let values: Vec<Value> = match self.parser.parse(&sanitized) {
            Ok(values) => values,
            Err(failure) => {
                log::warn!("Unable to parse the JSON; nothing will be rendered");
                return Ok(ZiRunOutcome::Aborted(failure));
            }
        };
        progress("parse");

        let records = records_from_values(&values, self.aggregator.category())?;
        let table = self.aggregator.aggregate(&records);
        table.log_summary();
        progress("aggregate");

        let layout = ZiChartLayout::compute(&table, self.aggregator.top_n(), &self.layout);
        progress("layout");

        Ok(ZiRunOutcome::Completed(Box::new(ZiAnalysisReport {
            sanitized,
            records,
            table,
            layout,
        })))
    }
}

/// Aggregates `records`, lays them out with the default geometry and renders
/// the chart.
pub fn visualize_relative_frequency(
    records: &[ZiLanguageRecord],
    top_n: usize,
    renderer: &dyn ZiChartRenderer,
) -> Result<String> {
    let table = ZiFrequencyAggregator::new(top_n).aggregate(records);
    table.log_summary();
    let layout = ZiChartLayout::compute(&table, top_n, &ZiLayoutConfig::default());
    renderer.render(&layout)
}
