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

//! # Zitox Error Module
//!
//! This module defines the error types used throughout Zitox.
//!
//! ## Error Categories
//!
//! - **Io**: Reading reports, configuration files or writing charts
//! - **Decode**: The repaired report still is not valid JSON
//! - **Schema**: A decoded record does not have the expected shape
//! - **Validation**: Invalid configuration values or arguments
//! - **Render**: Failures raised by the chart backend
//! - **Serde**: Serialization/deserialization errors
//!
//! Sanitization never fails. Stripping non-ASCII text is lossy but silent, so
//! there is no variant for it.
//!
//! ## Usage
//!
//! ```rust
//! use zitox::errors::{Result, ZiError};
//!
//! fn check_top_n(top_n: usize) -> Result<usize> {
//!     if top_n == 0 {
//!         return Err(ZiError::validation("top_n must be at least 1"));
//!     }
//!     Ok(top_n)
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zitox.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zitox.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Errors originating from filesystem or console IO.
    #[error("io error: {0}")]
    Io(String),

    /// The sanitized report could not be decoded.
    #[error("decode error at line {line}, column {column}: {message}")]
    Decode {
        line: usize,
        column: usize,
        message: String,
    },

    /// A decoded record is missing a required field or has the wrong type.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures reported by the chart backend.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        ZiError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct render errors.
    pub fn render<T: Into<String>>(message: T) -> Self {
        ZiError::Render(message.into())
    }
}
