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

//! System integration module
//!
//! Ties the CPU and memory together and provides the main simulation
//! loop: reset, image loading, single stepping, and bounded runs.

use super::config::SimConfig;
use super::cpu::{Cpu, CpuTracer, Disassembler, HaltReason, StepResult};
use super::error::Result;
use super::loader::HexImage;
use super::memory::Memory;

/// Outcome of a bounded run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Instructions executed during this run
    pub steps: u64,
    /// Why the run stopped; `None` means the step budget was exhausted
    pub halt: Option<HaltReason>,
    /// Program counter after the final step
    pub pc: u32,
}

/// RV32I simulator system
///
/// Owns the CPU and memory, counts executed instructions, and emits one
/// trace line per step in the form `[<hex PC>]<hex INST>: <disassembly>`
/// via `log::trace!` and, if configured, a file tracer.
///
/// # Example
/// ```
/// use rvsim::core::system::System;
///
/// let mut system = System::new();
/// system.memory_mut().write_word(0, 0x0000_0013); // NOP
/// system.reset();
///
/// let outcome = system.run(Some(10)).unwrap();
/// // One NOP, then a halt on the all-zero word that follows
/// assert_eq!(outcome.steps, 2);
/// ```
pub struct System {
    /// CPU instance
    cpu: Cpu,
    /// Memory
    mem: Memory,
    /// Run parameters
    config: SimConfig,
    /// Instructions executed since the last reset
    steps: u64,
    /// File tracer (optional)
    tracer: Option<CpuTracer>,
}

impl System {
    /// Create a new system with default configuration
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mem: Memory::new(),
            config: SimConfig::default(),
            steps: 0,
            tracer: None,
        }
    }

    /// Create a new system from a configuration
    ///
    /// Opens the trace file if one is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the trace file cannot be created.
    pub fn with_config(config: SimConfig) -> Result<Self> {
        let tracer = match &config.trace_file {
            Some(path) => Some(CpuTracer::new(path)?),
            None => None,
        };

        Ok(Self {
            cpu: Cpu::new(),
            mem: Memory::new(),
            config,
            steps: 0,
            tracer,
        })
    }

    /// Reset the processor state
    ///
    /// Zeroes all registers, sets the PC to the configured entry point,
    /// and resets the step counter. Memory contents are preserved so a
    /// loaded image survives the reset.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.set_pc(self.config.entry_pc);
        self.steps = 0;
        log::info!("reset: entry PC = 0x{:08X}", self.config.entry_pc);
    }

    /// Reset the processor and clear memory
    ///
    /// Like `reset`, but also drops every memory page, as if the machine
    /// was power-cycled before loading a new image.
    pub fn power_cycle(&mut self) {
        self.mem.clear();
        self.reset();
    }

    /// Load a hex image file into memory
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is malformed.
    pub fn load(&mut self, path: &str) -> Result<()> {
        let image = HexImage::from_file(path)?;
        image.load_into(&mut self.mem);
        Ok(())
    }

    /// Execute one instruction
    ///
    /// Emits the trace line for the instruction about to execute, then
    /// steps the CPU.
    ///
    /// # Returns
    ///
    /// The CPU's [`StepResult`]; errors only arise from trace I/O.
    pub fn step(&mut self) -> Result<StepResult> {
        if let Some(tracer) = &mut self.tracer {
            if self.config.trace_regs.is_empty() {
                tracer.trace(&self.cpu, &self.mem)?;
            } else {
                tracer.trace_with_regs(&self.cpu, &self.mem, &self.config.trace_regs)?;
            }
        }

        let pc = self.cpu.pc();
        let result = self.cpu.step(&mut self.mem);
        self.steps += 1;

        log::trace!(
            "[{:08x}]{:08x}: {}",
            pc,
            self.cpu.current_instruction(),
            Disassembler::disassemble(self.cpu.current_instruction())
        );

        Ok(result)
    }

    /// Run until a halt or until the step budget is exhausted
    ///
    /// # Arguments
    ///
    /// * `max_steps` - Step budget; `None` falls back to the configured
    ///   budget, which itself defaults to unbounded
    ///
    /// # Returns
    ///
    /// A [`RunOutcome`] with the number of steps executed, the halt
    /// reason (if any), and the final PC.
    pub fn run(&mut self, max_steps: Option<u64>) -> Result<RunOutcome> {
        let budget = max_steps.or(self.config.max_steps);
        let mut executed = 0u64;
        let mut halt = None;

        while budget.is_none_or(|limit| executed < limit) {
            executed += 1;
            if let StepResult::Halt(reason) = self.step()? {
                halt = Some(reason);
                break;
            }
        }

        if let Some(tracer) = &mut self.tracer {
            tracer.flush()?;
        }

        log::info!("Core paused at 0x{:08x}", self.cpu.pc());
        Ok(RunOutcome {
            steps: executed,
            halt,
            pc: self.cpu.pc(),
        })
    }

    /// Instructions executed since the last reset
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Current program counter
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// CPU accessor
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable CPU accessor (e.g. to bump the PC past an `EBREAK`)
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Memory accessor
    pub fn memory(&self) -> &Memory {
        &self.mem
    }

    /// Mutable memory accessor
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.mem
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
