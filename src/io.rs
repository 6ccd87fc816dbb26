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

use std::fs;
use std::io::{self, BufRead, StdinLock};
use std::path::{Path, PathBuf};

use crate::errors::{Result, ZiError};

/// Anything that yields one block of report text.
pub trait ZiReportSource {
    fn read_report(&mut self) -> Result<String>;
}

/// Reads lines until a sentinel line or end of input.
///
/// The sentinel matches after trimming, ignoring ASCII case, and is not part
/// of the returned text. Lines are joined with `\n`.
#[derive(Debug)]
pub struct ZiSentinelReader<R> {
    reader: R,
    sentinel: String,
}

impl<R: BufRead> ZiSentinelReader<R> {
    pub fn new(reader: R, sentinel: impl Into<String>) -> Self {
        ZiSentinelReader {
            reader,
            sentinel: sentinel.into(),
        }
    }

    fn is_sentinel(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case(self.sentinel.trim())
    }
}

impl ZiSentinelReader<StdinLock<'static>> {
    /// Console reader over the process's standard input.
    pub fn stdin(sentinel: impl Into<String>) -> Self {
        ZiSentinelReader::new(io::stdin().lock(), sentinel)
    }
}

impl<R: BufRead> ZiReportSource for ZiSentinelReader<R> {
    fn read_report(&mut self) -> Result<String> {
        let mut lines = Vec::new();
        let mut buf = String::new();
        loop {
            buf.clear();
            if self.reader.read_line(&mut buf)? == 0 {
                break;
            }
            let line = buf.trim_end_matches(['\n', '\r']);
            if self.is_sentinel(line) {
                break;
            }
            lines.push(line.to_string());
        }
        log::debug!("read {} report line(s)", lines.len());
        Ok(lines.join("\n"))
    }
}

/// Reads a whole file as the report.
#[derive(Clone, Debug)]
pub struct ZiFileSource {
    path: PathBuf,
}

impl ZiFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ZiFileSource { path: path.into() }
    }
}

impl ZiReportSource for ZiFileSource {
    fn read_report(&mut self) -> Result<String> {
        fs::read_to_string(&self.path)
            .map_err(|e| ZiError::Io(format!("{}: {e}", self.path.display())))
    }
}

/// Writes `content` to `path`, creating missing parent directories.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).map_err(|e| ZiError::Io(format!("{}: {e}", path.display())))
}
