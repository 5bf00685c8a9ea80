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

//! Simulator configuration
//!
//! Run parameters can be supplied through a small TOML file instead of
//! command line flags, e.g.:
//!
//! ```toml
//! entry_pc = 0x100DC
//! max_steps = 100000
//! trace_file = "trace.log"
//! trace_regs = [1, 2, 10]
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use super::error::{Result, SimulatorError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Simulation run parameters
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Initial program counter after reset
    pub entry_pc: u32,

    /// Step budget for `run`; `None` runs until a halt
    pub max_steps: Option<u64>,

    /// Trace output file; `None` disables the file tracer
    pub trace_file: Option<PathBuf>,

    /// Registers appended to each trace line
    pub trace_regs: Vec<u8>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            entry_pc: 0,
            max_steps: None,
            trace_file: None,
            trace_regs: Vec::new(),
        }
    }
}

impl SimConfig {
    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use rvsim::core::config::SimConfig;
    ///
    /// let config = SimConfig::parse("entry_pc = 0x100DC\n").unwrap();
    /// assert_eq!(config.entry_pc, 0x100DC);
    /// assert_eq!(config.max_steps, None);
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| SimulatorError::Config(e.to_string()))
    }

    /// Read and parse a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }
}
