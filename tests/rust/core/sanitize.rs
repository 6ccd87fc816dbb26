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
use zitox::sanitize::{clean_and_fix_json, ZiSanitizer, ZiSanitizerConfig};
use zitox::parse_json;

#[test]
fn adjacent_objects_get_a_separator() {
    assert_eq!(clean_and_fix_json(r#"{"a":1}{"b":2}"#), r#"[{"a":1},{"b":2}]"#);
    assert_eq!(clean_and_fix_json(r#"{"a":1} {"b":2}"#), r#"[{"a":1},{"b":2}]"#);
    assert_eq!(clean_and_fix_json("{\"a\":1}\n\n  {\"b\":2}"), r#"[{"a":1},{"b":2}]"#);
}

#[test]
fn model_chatter_around_records_stays_invalid() {
    let raw = "Here is the analysis:\n{\"Language\":\"en\"}";
    assert!(parse_json(&clean_and_fix_json(raw)).is_err());
}

#[test]
fn emoji_and_accents_are_dropped_before_decoding() {
    let raw = "{\"Language\":\"fr\",\"Top_Toxic_Words\":[{\"Word\":\"d\u{e9}bile \u{1F621}\",\"Frequency\":3}]}";
    let values = parse_json(&clean_and_fix_json(raw)).unwrap();
    assert_eq!(values[0]["Top_Toxic_Words"][0]["Word"], "dbile ");
}

#[test]
fn fenced_report_decodes_with_fence_rules() {
    let raw = "```json\n{\"Language\":\"en\"}\n```\n```json\n{\"Language\":\"pt\"}\n```";
    assert!(parse_json(&clean_and_fix_json(raw)).is_err());

    let sanitizer = ZiSanitizer::new(&ZiSanitizerConfig { strip_code_fences: true });
    let values = parse_json(&sanitizer.sanitize(raw)).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1]["Language"], "pt");
}

#[test]
fn fence_rules_run_before_the_builtin_ones() {
    let names: Vec<_> = ZiSanitizer::new(&ZiSanitizerConfig { strip_code_fences: true })
        .rules()
        .iter()
        .map(|r| r.name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "strip_code_fences",
            "strip_json_labels",
            "strip_non_ascii",
            "collapse_whitespace",
            "insert_separators",
        ]
    );
}

proptest! {
    #[test]
    fn output_is_ascii_and_wrapped(raw in any::<String>()) {
        let out = clean_and_fix_json(&raw);
        prop_assert!(out.is_ascii());
        prop_assert!(out.starts_with('['));
        prop_assert!(out.ends_with(']'));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn resanitizing_only_adds_one_nesting_level(raw in any::<String>()) {
        let once = clean_and_fix_json(&raw);
        let twice = clean_and_fix_json(&once);
        prop_assert_eq!(twice, format!("[{once}]"));
    }

    #[test]
    fn concatenated_objects_always_decode(ids in proptest::collection::vec(0u32..1000, 1..8), sep in "[ \n\t]{0,3}") {
        let raw = ids
            .iter()
            .map(|id| format!("{{\"Language\":\"l{id}\"}}"))
            .collect::<Vec<_>>()
            .join(&sep);
        let values = parse_json(&clean_and_fix_json(&raw)).unwrap();
        prop_assert_eq!(values.len(), ids.len());
    }
}
