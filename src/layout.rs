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

//! # Chart Layout
//!
//! Positions every `(language, word)` bar of a grouped horizontal bar chart.
//!
//! Each charted language is a group. Group `i` starts at
//! `i * language_gap * (top_n + 1)` and its bars follow one another every
//! `bar_width + word_gap`. The language label sits at the mean offset of its
//! bars. Bars inside a group are ordered by descending percentage, ties in
//! insertion order, and colored by their index in the group from a tab20
//! palette resampled to the number of pairs in the table.
//!
//! The layout is plain data; renderers in [`crate::render`] turn it into an
//! image or text.

use serde::{Deserialize, Serialize};

use crate::aggregate::ZiRelativeFrequencyTable;
use crate::errors::{Result, ZiError};
use crate::record::ZiWordCategory;

/// Geometry of the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiLayoutConfig {
    /// Bar thickness along the language axis.
    pub bar_width: f64,
    /// Spacing factor between language groups.
    pub language_gap: f64,
    /// Extra space between bars of one group.
    pub word_gap: f64,
    /// Distance between a bar end and its label, in percent units.
    pub label_offset: f64,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl Default for ZiLayoutConfig {
    fn default() -> Self {
        ZiLayoutConfig {
            bar_width: 0.4,
            language_gap: 3.0,
            word_gap: 0.6,
            label_offset: 1.0,
            width: 1600,
            height: 1000,
        }
    }
}

impl ZiLayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.bar_width > 0.0) {
            return Err(ZiError::validation("layout.bar_width must be positive"));
        }
        if !(self.language_gap > 0.0) {
            return Err(ZiError::validation("layout.language_gap must be positive"));
        }
        if !(self.word_gap >= 0.0) {
            return Err(ZiError::validation("layout.word_gap must not be negative"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ZiError::validation("layout width and height must be non-zero"));
        }
        Ok(())
    }

    /// Distance between consecutive bars of a group.
    pub fn bar_step(&self) -> f64 {
        self.bar_width + self.word_gap
    }

    /// Offset of the first bar of group `group_index`.
    pub fn group_base(&self, group_index: usize, top_n: usize) -> f64 {
        group_index as f64 * self.language_gap * (top_n as f64 + 1.0)
    }
}

/// An sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ZiColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ZiColor { r, g, b }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

const TAB20: [ZiColor; 20] = [
    ZiColor::new(0x1f, 0x77, 0xb4),
    ZiColor::new(0xae, 0xc7, 0xe8),
    ZiColor::new(0xff, 0x7f, 0x0e),
    ZiColor::new(0xff, 0xbb, 0x78),
    ZiColor::new(0x2c, 0xa0, 0x2c),
    ZiColor::new(0x98, 0xdf, 0x8a),
    ZiColor::new(0xd6, 0x27, 0x28),
    ZiColor::new(0xff, 0x98, 0x96),
    ZiColor::new(0x94, 0x67, 0xbd),
    ZiColor::new(0xc5, 0xb0, 0xd5),
    ZiColor::new(0x8c, 0x56, 0x4b),
    ZiColor::new(0xc4, 0x9c, 0x94),
    ZiColor::new(0xe3, 0x77, 0xc2),
    ZiColor::new(0xf7, 0xb6, 0xd2),
    ZiColor::new(0x7f, 0x7f, 0x7f),
    ZiColor::new(0xc7, 0xc7, 0xc7),
    ZiColor::new(0xbc, 0xbd, 0x22),
    ZiColor::new(0xdb, 0xdb, 0x8d),
    ZiColor::new(0x17, 0xbe, 0xcf),
    ZiColor::new(0x9e, 0xda, 0xe5),
];

/// Categorical palette of a fixed size, sampled evenly from tab20.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiPalette {
    colors: Vec<ZiColor>,
}

impl ZiPalette {
    pub fn tab20(size: usize) -> Self {
        let colors = (0..size)
            .map(|i| {
                if size <= 1 {
                    return TAB20[0];
                }
                let x = i as f64 / (size - 1) as f64;
                let idx = ((x * TAB20.len() as f64) as usize).min(TAB20.len() - 1);
                TAB20[idx]
            })
            .collect();
        ZiPalette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color `index`, wrapping around past the end.
    pub fn color(&self, index: usize) -> ZiColor {
        if self.colors.is_empty() {
            return TAB20[0];
        }
        self.colors[index % self.colors.len()]
    }
}

/// Placement of one bar.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiBarPosition {
    pub language: String,
    pub word: String,
    /// Summed relative frequency in percent; the bar length.
    pub value: f64,
    /// Position along the language axis.
    pub offset: f64,
    pub group_index: usize,
    pub index_in_group: usize,
    pub color: ZiColor,
}

impl ZiBarPosition {
    /// `word (12.3%)`, or nothing for a zero-length bar.
    pub fn label(&self) -> Option<String> {
        if self.value > 0.0 {
            Some(format!("{} ({:.1}%)", self.word, self.value))
        } else {
            None
        }
    }
}

/// Placement of a language label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiGroupTick {
    pub language: String,
    pub group_index: usize,
    pub base_offset: f64,
    /// Mean offset of the group's bars.
    pub position: f64,
    pub bar_count: usize,
}

/// Complete chart geometry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ZiChartLayout {
    pub top_n: usize,
    pub category: ZiWordCategory,
    pub config: ZiLayoutConfig,
    bars: Vec<ZiBarPosition>,
    groups: Vec<ZiGroupTick>,
    palette_size: usize,
}

impl ZiChartLayout {
    pub fn compute(table: &ZiRelativeFrequencyTable, top_n: usize, config: &ZiLayoutConfig) -> Self {
        let palette = ZiPalette::tab20(table.len());
        let step = config.bar_step();
        let mut bars = Vec::with_capacity(table.len());
        let mut groups = Vec::new();

        for (group_index, language) in table.charted_languages().into_iter().enumerate() {
            let base = config.group_base(group_index, top_n);

            let mut members: Vec<(String, f64)> = table
                .entries_for(language)
                .map(|e| (e.word.clone(), e.value()))
                .collect();
            members.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

            let mut offset_sum = 0.0;
            for (idx, (word, value)) in members.iter().enumerate() {
                let offset = idx as f64 * step + base;
                offset_sum += offset;
                log::debug!("bar {language}/{word}: offset {offset:.2}, value {value:.2}");
                bars.push(ZiBarPosition {
                    language: language.to_string(),
                    word: word.clone(),
                    value: *value,
                    offset,
                    group_index,
                    index_in_group: idx,
                    color: palette.color(idx),
                });
            }

            if members.len() > top_n {
                log::warn!(
                    "{language} has {} bars but groups are spaced for {top_n}; it may overlap the next group",
                    members.len()
                );
            }

            groups.push(ZiGroupTick {
                language: language.to_string(),
                group_index,
                base_offset: base,
                position: offset_sum / members.len() as f64,
                bar_count: members.len(),
            });
        }

        ZiChartLayout {
            top_n,
            category: table.category,
            config: config.clone(),
            bars,
            groups,
            palette_size: palette.len(),
        }
    }

    pub fn bars(&self) -> &[ZiBarPosition] {
        &self.bars
    }

    pub fn groups(&self) -> &[ZiGroupTick] {
        &self.groups
    }

    pub fn bars_in_group(&self, group_index: usize) -> impl Iterator<Item = &ZiBarPosition> {
        self.bars.iter().filter(move |b| b.group_index == group_index)
    }

    /// Groups holding more bars than `top_n`, which the spacing does not allow for.
    pub fn crowded_groups(&self) -> impl Iterator<Item = &ZiGroupTick> {
        self.groups.iter().filter(move |g| g.bar_count > self.top_n)
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Longest bar, `0.0` for an empty chart.
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    /// Lowest and highest bar offsets, `None` for an empty chart.
    pub fn offset_span(&self) -> Option<(f64, f64)> {
        let first = self.bars.first()?.offset;
        Some(self.bars.iter().fold((first, first), |(lo, hi), b| {
            (lo.min(b.offset), hi.max(b.offset))
        }))
    }

    pub fn title(&self) -> String {
        format!(
            "Top {} {} Words by Language (Relative Frequency)",
            self.top_n,
            self.category.label()
        )
    }

    pub fn value_axis_label(&self) -> String {
        format!("Relative Frequency (%) of {} Words", self.category.label())
    }
}
