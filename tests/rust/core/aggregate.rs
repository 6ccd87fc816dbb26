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

use proptest::prelude::*;
use serde_json::json;
use zitox::{ZiAnalysisPipeline, ZiError, ZiFrequencyAggregator, ZiLanguageRecord, ZiWordCount};

fn words(pairs: &[(&str, u64)]) -> Vec<ZiWordCount> {
    pairs.iter().map(|(w, f)| ZiWordCount::new(*w, *f)).collect()
}

#[test]
fn top_n_uses_total_over_all_words() {
    let record = ZiLanguageRecord::new("en", Some(words(&[("a", 10), ("b", 30), ("c", 5), ("d", 20)])));
    let table = ZiFrequencyAggregator::new(2).aggregate(&[record]);

    let picked: Vec<_> = table.entries().iter().map(|e| e.word.as_str()).collect();
    assert_eq!(picked, vec!["b", "d"]);
    assert!((table.value("en", "b") - 46.153846).abs() < 1e-4);
    assert!((table.value("en", "d") - 30.769230).abs() < 1e-4);
    assert_eq!(table.totals()[0].total, 65);
}

#[test]
fn empty_or_zero_lists_never_fail() {
    let records = vec![
        ZiLanguageRecord::new("en", Some(vec![])),
        ZiLanguageRecord::new("fr", None),
        ZiLanguageRecord::new("ar", Some(words(&[("x", 0), ("y", 0)]))),
    ];
    let table = ZiFrequencyAggregator::new(5).aggregate(&records);
    assert_eq!(table.value("en", "anything"), 0.0);
    assert_eq!(table.value("ar", "x"), 0.0);
    assert_eq!(table.value("ar", "y"), 0.0);
    assert_eq!(table.len(), 2);
    assert_eq!(table.languages().len(), 3);
}

#[test]
fn top_n_larger_than_list_keeps_everything() {
    let record = ZiLanguageRecord::new("en", Some(words(&[("a", 1), ("b", 3)])));
    let table = ZiFrequencyAggregator::new(50).aggregate(&[record]);
    assert_eq!(table.len(), 2);
}

#[test]
fn repeated_words_inside_one_record_stay_distinct_values() {
    let record = ZiLanguageRecord::new("en", Some(words(&[("bad", 1), ("bad", 3)])));
    let table = ZiFrequencyAggregator::new(5).aggregate(&[record]);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get("en", "bad").unwrap().values, vec![75.0, 25.0]);
    assert_eq!(table.value("en", "bad"), 100.0);
}

#[test]
fn malformed_values_surface_as_schema_errors() {
    let values = vec![json!({"Language": "en", "Top_Toxic_Words": [{"Word": "bad", "Frequency": "ten"}]})];
    let err = ZiFrequencyAggregator::new(5).aggregate_values(&values).unwrap_err();
    assert!(matches!(err, ZiError::Schema { .. }));

    let values = vec![json!("not a record")];
    assert!(ZiFrequencyAggregator::new(5).aggregate_values(&values).is_err());
}

#[test]
fn largest_frequencies_do_not_overflow_the_total() {
    let raw = r#"{"Language":"en","Top_Toxic_Words":[{"Word":"a","Frequency":18446744073709551615},{"Word":"b","Frequency":18446744073709551615}]}"#;
    let report = ZiAnalysisPipeline::default()
        .run(raw)
        .unwrap()
        .into_report()
        .unwrap();

    assert_eq!(report.table.totals()[0].total, 2 * u128::from(u64::MAX));
    assert!((report.table.value("en", "a") - 50.0).abs() < 1e-9);
    assert!((report.table.value("en", "b") - 50.0).abs() < 1e-9);
}

#[test]
fn json_export_reports_totals_it_cannot_represent() {
    let small = ZiLanguageRecord::new("en", Some(words(&[("bad", 2)])));
    let json = ZiFrequencyAggregator::new(1).aggregate(&[small]).to_json().unwrap();
    assert_eq!(json["totals"][0]["total"], 2);

    let huge = ZiLanguageRecord::new("en", Some(words(&[("a", u64::MAX), ("b", u64::MAX)])));
    let table = ZiFrequencyAggregator::new(2).aggregate(&[huge]);
    assert!(matches!(table.to_json(), Err(ZiError::Serde(_))));
}

proptest! {
    #[test]
    fn full_coverage_sums_to_one_hundred(freqs in proptest::collection::vec(0u64..10_000, 1..20)) {
        let list: Vec<ZiWordCount> = freqs
            .iter()
            .enumerate()
            .map(|(i, f)| ZiWordCount::new(format!("w{i}"), *f))
            .collect();
        let record = ZiLanguageRecord::new("en", Some(list));
        let table = ZiFrequencyAggregator::new(freqs.len()).aggregate(&[record]);
        let sum: f64 = table.entries().iter().map(|e| e.value()).sum();
        if freqs.iter().sum::<u64>() == 0 {
            prop_assert_eq!(sum, 0.0);
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn partial_coverage_stays_within_bounds(
        freqs in proptest::collection::vec(0u64..10_000, 1..20),
        top_n in 1usize..25,
    ) {
        let list: Vec<ZiWordCount> = freqs
            .iter()
            .enumerate()
            .map(|(i, f)| ZiWordCount::new(format!("w{i}"), *f))
            .collect();
        let record = ZiLanguageRecord::new("en", Some(list));
        let table = ZiFrequencyAggregator::new(top_n).aggregate(&[record]);
        prop_assert_eq!(table.len(), top_n.min(freqs.len()));
        let mut sum = 0.0;
        for entry in table.entries() {
            prop_assert!((0.0..=100.0).contains(&entry.value()));
            sum += entry.value();
        }
        prop_assert!(sum <= 100.0 + 1e-9);
    }
}
