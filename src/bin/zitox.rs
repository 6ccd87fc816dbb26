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

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use zitox::io::write_output;
use zitox::{
    renderer_for, ZiAnalysisConfig, ZiAnalysisPipeline, ZiFileSource, ZiOutputFormat,
    ZiPromptBuilder, ZiReportSource, ZiRunOutcome, ZiSentinelReader, ZiWordCategory,
};

/// Zitox - chart the toxic words a language model reported per language
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON or YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read the report from a file instead of the console
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Words kept per language
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Word list to analyse: toxic or positive
    #[arg(long)]
    category: Option<ZiWordCategory>,

    /// Chart destination
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chart format: svg or text
    #[arg(short, long)]
    format: Option<ZiOutputFormat>,

    /// Also write the relative-frequency table as JSON
    #[arg(long)]
    export: Option<PathBuf>,

    /// Strip Markdown code fences before repairing the report
    #[arg(long)]
    strip_fences: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the prompt that asks a model for reports in the expected format
    Prompt {
        /// Languages to analyse (all languages in the data when omitted)
        languages: Vec<String>,

        /// Words requested per list
        #[arg(long, default_value_t = 10)]
        word_limit: usize,
    },
}

fn configure_logging(level: LevelFilter, json: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    if json {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "{}",
                serde_json::json!({
                    "ts": chrono::Utc::now().to_rfc3339(),
                    "lvl": record.level().to_string(),
                    "msg": record.args().to_string(),
                })
            )
        });
    }
    builder.init();
}

fn resolve_config(args: &Args) -> Result<ZiAnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => ZiAnalysisConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ZiAnalysisConfig::default(),
    };
    if let Some(top_n) = args.top_n {
        config = config.top_n(top_n);
    }
    if let Some(category) = args.category {
        config = config.category(category);
    }
    if let Some(output) = &args.output {
        config = config.output(output);
    }
    if let Some(format) = args.format {
        config = config.format(format);
    }
    if let Some(export) = &args.export {
        config = config.export(export);
    }
    if args.strip_fences {
        config = config.strip_code_fences(true);
    }
    if let Some(level) = &args.log_level {
        config = config.log_level(level);
    }
    config.validate()?;
    Ok(config)
}

fn read_report(args: &Args, config: &ZiAnalysisConfig) -> Result<String> {
    match &args.input {
        Some(path) => Ok(ZiFileSource::new(path).read_report()?),
        None => {
            println!(
                "Please input the response including structured JSON data. Type '{}' when done:",
                config.sentinel
            );
            Ok(ZiSentinelReader::stdin(config.sentinel.as_str()).read_report()?)
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    configure_logging(config.level_filter(), args.log_json);

    if let Some(Command::Prompt { languages, word_limit }) = &args.command {
        let prompt = ZiPromptBuilder::new()
            .languages(languages.iter().cloned())
            .word_limit(*word_limit)
            .build();
        print!("{prompt}");
        return Ok(ExitCode::SUCCESS);
    }

    let raw = read_report(&args, &config)?;
    let pipeline = ZiAnalysisPipeline::from_config(&config);

    let report = match pipeline.run(&raw)? {
        ZiRunOutcome::Completed(report) => report,
        ZiRunOutcome::Aborted(failure) => {
            eprintln!("Unable to parse the JSON: {failure}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Some(export) = &config.export {
        let json = serde_json::to_string_pretty(&report.table)?;
        write_output(export, &json)?;
        info!("Relative frequency table written to {}", export.display());
    }

    let renderer = renderer_for(config.format)?;
    let document = report.render_with(renderer.as_ref())?;
    match config.format {
        ZiOutputFormat::Text => print!("{document}"),
        ZiOutputFormat::Svg => {
            write_output(&config.output, &document)?;
            info!("Chart written to {}", config.output.display());
        }
    }
    Ok(ExitCode::SUCCESS)
}
