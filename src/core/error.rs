// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Simulator error types
//!
//! These errors cover host-side failures only: file I/O, malformed hex
//! images, and invalid configuration. Guest-visible conditions such as
//! illegal instructions or `ECALL`/`EBREAK` are not errors; they are
//! reported through [`crate::core::cpu::StepResult`].

use thiserror::Error;

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

/// Simulator error types
#[derive(Debug, Error)]
pub enum SimulatorError {
    /// I/O error (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed hex image input
    #[error("image format error at line {line}: {message}")]
    ImageFormat {
        /// 1-based line number in the image file
        line: usize,
        /// What went wrong on that line
        message: String,
    },

    /// Invalid configuration file
    #[error("configuration error: {0}")]
    Config(String),
}
