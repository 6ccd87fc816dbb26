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

use zitox::io::write_output;
use zitox::{
    ZiAnalysisConfig, ZiAnalysisPipeline, ZiError, ZiFileSource, ZiOutputFormat, ZiReportSource,
    ZiTextRenderer, ZiWordCategory,
};

const TWO_LANGUAGES: &str = "{\"Language\":\"en\",\"Top_Toxic_Words\":[{\"Word\":\"bad\",\"Frequency\":10},{\"Word\":\"awful\",\"Frequency\":5}]}\n{\"Language\":\"fr\",\"Top_Toxic_Words\":[{\"Word\":\"mauvais\",\"Frequency\":8}]}";

#[test]
fn two_language_report_end_to_end() {
    let outcome = ZiAnalysisPipeline::default().run(TWO_LANGUAGES).unwrap();
    let report = outcome.report().expect("report decodes");

    assert_eq!(report.records.len(), 2);
    assert!((report.table.value("en", "bad") - 66.6667).abs() < 1e-3);
    assert!((report.table.value("en", "awful") - 33.3333).abs() < 1e-3);
    assert_eq!(report.table.value("fr", "mauvais"), 100.0);

    let groups = report.layout.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].language, "en");
    assert_eq!(groups[1].language, "fr");
    assert!(groups[0].position < groups[1].position);
}

#[test]
fn directly_adjacent_records_end_to_end() {
    let raw = r#"{"Language":"en","Top_Toxic_Words":[{"Word":"bad","Frequency":10},{"Word":"awful","Frequency":5}]}{"Language":"fr","Top_Toxic_Words":[{"Word":"mauvais","Frequency":8}]}"#;
    let report = ZiAnalysisPipeline::default()
        .run(raw)
        .unwrap()
        .into_report()
        .expect("adjacent records decode");

    assert_eq!(report.records.len(), 2);
    assert!((report.table.value("en", "bad") - 66.6667).abs() < 1e-3);
    assert!((report.table.value("en", "awful") - 33.3333).abs() < 1e-3);
    assert_eq!(report.table.value("fr", "mauvais"), 100.0);

    let en: Vec<f64> = report.layout.bars_in_group(0).map(|b| b.offset).collect();
    let fr: Vec<f64> = report.layout.bars_in_group(1).map(|b| b.offset).collect();
    assert_eq!(en.len(), 2);
    assert_eq!(en[0], 0.0);
    assert!((en[1] - 1.0).abs() < 1e-12);
    assert_eq!(fr.len(), 1);
    assert!((fr[0] - 18.0).abs() < 1e-12);
}

#[test]
fn broken_report_aborts_without_a_chart() {
    let outcome = ZiAnalysisPipeline::default()
        .run("{\"Language\": \"en\", \"Top_Toxic_Words\": [")
        .unwrap();
    assert!(outcome.is_aborted());
    assert!(outcome.into_report().is_none());
}

#[test]
fn wrong_field_type_is_a_schema_error() {
    let err = ZiAnalysisPipeline::default()
        .run("{\"Language\":\"en\",\"Top_Toxic_Words\":{\"Word\":\"bad\"}}")
        .unwrap_err();
    assert!(matches!(err, ZiError::Schema { .. }));
}

#[test]
fn positive_words_can_be_charted_instead() {
    let raw = "{\"Language\":\"en\",\"Top_Toxic_Words\":[],\"Top_Positive_Words\":[{\"Word\":\"kind\",\"Frequency\":3},{\"Word\":\"nice\",\"Frequency\":1}]}";
    let config = ZiAnalysisConfig::new().category(ZiWordCategory::Positive);
    let outcome = ZiAnalysisPipeline::from_config(&config).run(raw).unwrap();
    let report = outcome.into_report().unwrap();
    assert_eq!(report.table.value("en", "kind"), 75.0);
    assert!(report.layout.title().contains("Positive"));
}

#[test]
fn text_chart_lists_every_bar() {
    let outcome = ZiAnalysisPipeline::default().run(TWO_LANGUAGES).unwrap();
    let text = outcome
        .report()
        .unwrap()
        .render_with(&ZiTextRenderer::default())
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Top 5 Toxic Words by Language (Relative Frequency)");
    assert_eq!(lines[1], "en");
    assert!(lines[2].starts_with("  bad"));
    assert!(lines[2].ends_with("66.7%"));
    assert!(lines[3].starts_with("  awful"));
    assert_eq!(lines[4], "fr");
    assert!(lines[5].ends_with("100.0%"));
}

#[test]
fn report_file_to_chart_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    std::fs::write(&input, TWO_LANGUAGES).unwrap();

    let raw = ZiFileSource::new(&input).read_report().unwrap();
    let config = ZiAnalysisConfig::new()
        .format(ZiOutputFormat::Text)
        .output(dir.path().join("charts/out.txt"));
    let report = ZiAnalysisPipeline::from_config(&config)
        .run(&raw)
        .unwrap()
        .into_report()
        .unwrap();
    let renderer = zitox::renderer_for(config.format).unwrap();
    write_output(&config.output, &report.render_with(renderer.as_ref()).unwrap()).unwrap();

    let written = std::fs::read_to_string(dir.path().join("charts/out.txt")).unwrap();
    assert!(written.contains("mauvais"));
}

#[cfg(feature = "svg")]
#[test]
fn svg_chart_carries_labels() {
    let outcome = ZiAnalysisPipeline::default().run(TWO_LANGUAGES).unwrap();
    let svg = outcome
        .report()
        .unwrap()
        .render_with(&zitox::ZiSvgRenderer::new())
        .unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("bad (66.7%)"));
    assert!(svg.contains("mauvais (100.0%)"));
}
