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

use clap::Parser;
use log::{error, info};
use rvsim::core::cpu::HaltReason;
use rvsim::core::error::Result;
use rvsim::core::system::System;
use rvsim::core::SimConfig;
use std::path::PathBuf;

/// Parse a PC value given as decimal or 0x-prefixed hex
fn parse_pc(s: &str) -> std::result::Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid address '{}': {}", s, e))
}

/// RV32I instruction set simulator
#[derive(Parser)]
#[command(name = "rvsim")]
#[command(about = "RV32I instruction set simulator", long_about = None)]
struct Args {
    /// Path to the hex image file to execute
    image_file: String,

    /// Entry point PC (decimal or 0x-prefixed hex)
    #[arg(short = 'e', long, value_parser = parse_pc)]
    entry_pc: Option<u32>,

    /// Maximum number of instructions to execute
    #[arg(short = 'n', long)]
    max_steps: Option<u64>,

    /// Write a per-instruction trace to this file
    #[arg(short = 't', long)]
    trace: Option<PathBuf>,

    /// Optional TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Pick up RUST_LOG overrides from a .env file if one exists
    let _ = dotenvy::dotenv();

    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("rvsim v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    // Configuration file first, CLI flags on top
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path).inspect_err(|e| {
            error!("Failed to load config: {}", e);
        })?,
        None => SimConfig::default(),
    };
    if let Some(entry_pc) = args.entry_pc {
        config.entry_pc = entry_pc;
    }
    if let Some(max_steps) = args.max_steps {
        config.max_steps = Some(max_steps);
    }
    if let Some(trace) = args.trace {
        config.trace_file = Some(trace);
    }

    let mut system = System::with_config(config)?;

    info!("Loading image from: {}", args.image_file);
    if let Err(e) = system.load(&args.image_file) {
        error!("Failed to load image: {}", e);
        return Err(e);
    }

    info!("Starting simulation...");
    system.reset();

    let outcome = system.run(None)?;

    match outcome.halt {
        Some(HaltReason::EnvironmentCall) => info!("Halted on ecall"),
        Some(HaltReason::Breakpoint) => info!("Halted on ebreak"),
        Some(HaltReason::IllegalInstruction(inst)) => {
            error!("Halted on illegal instruction 0x{:08X}", inst);
            system.cpu().dump_registers();
        }
        None => info!("Step budget exhausted"),
    }

    info!("Total instructions: {}", outcome.steps);
    info!("Final PC: 0x{:08X}", outcome.pc);

    Ok(())
}
