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

//! # Chart Renderers
//!
//! Renderers draw a [`ZiChartLayout`] into a document:
//!
//! - [`ZiSvgRenderer`] (feature `svg`): the grouped horizontal bar chart, drawn
//!   with plotters into an SVG string.
//! - [`ZiTextRenderer`]: one line per bar for terminals.
//!
//! Both draw every bar, including zero-length ones, and label only bars with a
//! positive length.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};
use crate::layout::ZiChartLayout;

/// Something that turns a layout into a displayable document.
pub trait ZiChartRenderer: std::fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Renders `layout` and returns the document text.
    fn render(&self, layout: &ZiChartLayout) -> Result<String>;
}

/// Supported document kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZiOutputFormat {
    #[default]
    Svg,
    Text,
}

impl FromStr for ZiOutputFormat {
    type Err = ZiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ZiOutputFormat::Svg),
            "text" | "txt" => Ok(ZiOutputFormat::Text),
            other => Err(ZiError::validation(format!(
                "unknown output format '{other}' (expected 'svg' or 'text')"
            ))),
        }
    }
}

/// Builds the renderer for `format`.
pub fn renderer_for(format: ZiOutputFormat) -> Result<Box<dyn ZiChartRenderer>> {
    match format {
        #[cfg(feature = "svg")]
        ZiOutputFormat::Svg => Ok(Box::new(ZiSvgRenderer::new())),
        #[cfg(not(feature = "svg"))]
        ZiOutputFormat::Svg => Err(ZiError::validation(
            "svg output requires the 'svg' feature",
        )),
        ZiOutputFormat::Text => Ok(Box::new(ZiTextRenderer::default())),
    }
}

/// Terminal rendition: `#` runs scaled to the percentage.
#[derive(Clone, Debug)]
pub struct ZiTextRenderer {
    /// Characters drawn for 100%.
    pub width: usize,
}

impl Default for ZiTextRenderer {
    fn default() -> Self {
        ZiTextRenderer { width: 50 }
    }
}

impl ZiChartRenderer for ZiTextRenderer {
    fn name(&self) -> &'static str {
        "text"
    }

    fn render(&self, layout: &ZiChartLayout) -> Result<String> {
        let mut out = String::new();
        let word_width = layout
            .bars()
            .iter()
            .map(|b| b.word.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(out, "{}", layout.title()).map_err(fmt_err)?;
        for group in layout.groups() {
            writeln!(out, "{}", group.language).map_err(fmt_err)?;
            for bar in layout.bars_in_group(group.group_index) {
                let cells = ((bar.value / 100.0) * self.width as f64).round().max(0.0) as usize;
                let mut line = format!("  {:<word_width$} |{}", bar.word, "#".repeat(cells));
                if bar.label().is_some() {
                    write!(line, " {:.1}%", bar.value).map_err(fmt_err)?;
                }
                writeln!(out, "{}", line.trim_end()).map_err(fmt_err)?;
            }
        }
        Ok(out)
    }
}

fn fmt_err(err: std::fmt::Error) -> ZiError {
    ZiError::render(err.to_string())
}

#[cfg(feature = "svg")]
pub use svg::ZiSvgRenderer;

#[cfg(feature = "svg")]
mod svg {
    use plotters::prelude::*;
    use plotters::style::text_anchor::{HPos, Pos, VPos};

    use super::ZiChartRenderer;
    use crate::errors::{Result, ZiError};
    use crate::layout::{ZiChartLayout, ZiColor};

    /// Grouped horizontal bar chart as SVG.
    #[derive(Clone, Debug, Default)]
    pub struct ZiSvgRenderer;

    impl ZiSvgRenderer {
        pub fn new() -> Self {
            ZiSvgRenderer
        }
    }

    fn rgb(color: ZiColor) -> RGBColor {
        RGBColor(color.r, color.g, color.b)
    }

    fn render_err<E: std::fmt::Display>(err: E) -> ZiError {
        ZiError::render(err.to_string())
    }

    impl ZiChartRenderer for ZiSvgRenderer {
        fn name(&self) -> &'static str {
            "svg"
        }

        fn render(&self, layout: &ZiChartLayout) -> Result<String> {
            let config = &layout.config;
            let half = config.bar_width / 2.0;
            let x_max = (layout.max_value() * 1.25 + 5.0).max(10.0);
            let (y_min, y_max) = match layout.offset_span() {
                Some((lo, hi)) => (lo - config.bar_step(), hi + config.bar_step()),
                None => (0.0, 1.0),
            };

            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
                    .into_drawing_area();
                root.fill(&WHITE).map_err(render_err)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(layout.title(), ("sans-serif", 28))
                    .margin(20)
                    .x_label_area_size(50)
                    .y_label_area_size(140)
                    .build_cartesian_2d(0f64..x_max, y_min..y_max)
                    .map_err(render_err)?;

                chart
                    .configure_mesh()
                    .disable_y_mesh()
                    .y_label_formatter(&|_: &f64| String::new())
                    .bold_line_style(&BLACK.mix(0.2))
                    .light_line_style(&TRANSPARENT)
                    .x_desc(layout.value_axis_label())
                    .y_desc("Languages")
                    .axis_desc_style(("sans-serif", 18))
                    .draw()
                    .map_err(render_err)?;

                chart
                    .draw_series(layout.bars().iter().map(|bar| {
                        Rectangle::new(
                            [(0.0, bar.offset - half), (bar.value, bar.offset + half)],
                            rgb(bar.color).filled(),
                        )
                    }))
                    .map_err(render_err)?;

                let label_style = TextStyle::from(("sans-serif", 14).into_font())
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center));
                chart
                    .draw_series(layout.bars().iter().filter_map(|bar| {
                        bar.label().map(|text| {
                            Text::new(
                                text,
                                (bar.value + config.label_offset, bar.offset),
                                label_style.clone(),
                            )
                        })
                    }))
                    .map_err(render_err)?;

                let tick_style = TextStyle::from(("sans-serif", 16).into_font())
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Right, VPos::Center));
                for group in layout.groups() {
                    let (px, py) = chart.backend_coord(&(0.0, group.position));
                    root.draw(&Text::new(group.language.clone(), (px - 8, py), tick_style.clone()))
                        .map_err(render_err)?;
                }

                root.present().map_err(render_err)?;
            }
            log::debug!("rendered {} bars into {} bytes of SVG", layout.bars().len(), svg.len());
            Ok(svg)
        }
    }
}
