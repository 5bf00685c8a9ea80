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

//! Core simulation components
//!
//! This module contains all simulator components:
//! - CPU (RV32I execution engine)
//! - Memory (sparse paged word store)
//! - Hex image loader
//! - Configuration
//! - System integration

pub mod config;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod system;

// Re-export commonly used types
pub use config::SimConfig;
pub use cpu::{Cpu, HaltReason, StepResult};
pub use error::{Result, SimulatorError};
pub use loader::HexImage;
pub use memory::{AccessWidth, Memory};
pub use system::{RunOutcome, System};
