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

//! CPU execution tracer for debugging
//!
//! Logs one line per executed instruction to a file for analysis.

use super::{Cpu, Disassembler};
use crate::core::error::Result;
use crate::core::memory::{AccessWidth, Memory};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// CPU execution tracer
///
/// Records the state at each step in the form
/// `[<hex PC>]<hex INST>: <disassembly>`, optionally followed by
/// selected register values.
///
/// # Example
/// ```no_run
/// use rvsim::core::cpu::{Cpu, CpuTracer};
/// use rvsim::core::memory::Memory;
///
/// let mut cpu = Cpu::new();
/// let mut mem = Memory::new();
/// let mut tracer = CpuTracer::new("trace.log").unwrap();
///
/// tracer.trace(&cpu, &mem).unwrap();
/// cpu.step(&mut mem);
/// ```
pub struct CpuTracer {
    /// Enable/disable tracing
    enabled: bool,
    /// Output file handle
    output: File,
}

impl CpuTracer {
    /// Create a new CPU tracer
    ///
    /// Opens a file for writing trace output. An existing file is
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the output trace file
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let output = File::create(path)?;
        Ok(Self {
            enabled: true,
            output,
        })
    }

    /// Enable or disable tracing
    ///
    /// When disabled, trace() calls return immediately without writing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if tracing is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Trace the instruction about to execute
    ///
    /// Writes a single `[<hex PC>]<hex INST>: <disassembly>` line. The
    /// instruction is fetched from memory at the current PC, so this is
    /// called before `step()`.
    ///
    /// # Arguments
    ///
    /// * `cpu` - CPU instance to trace
    /// * `mem` - Memory for fetching the instruction word
    pub fn trace(&mut self, cpu: &Cpu, mem: &Memory) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let pc = cpu.pc();
        let inst = mem.read(pc, AccessWidth::Word);
        writeln!(
            self.output,
            "[{:08x}]{:08x}: {}",
            pc,
            inst,
            Disassembler::disassemble(inst)
        )?;

        Ok(())
    }

    /// Trace with register columns appended
    ///
    /// Like `trace()`, but appends up to 8 selected register values to
    /// the line.
    ///
    /// # Arguments
    ///
    /// * `regs` - Register numbers to display
    pub fn trace_with_regs(&mut self, cpu: &Cpu, mem: &Memory, regs: &[u8]) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let pc = cpu.pc();
        let inst = mem.read(pc, AccessWidth::Word);
        write!(
            self.output,
            "[{:08x}]{:08x}: {:24} |",
            pc,
            inst,
            Disassembler::disassemble(inst)
        )?;

        for &reg in regs.iter().take(8) {
            write!(self.output, " x{}={:08X}", reg, cpu.reg(reg))?;
        }

        writeln!(self.output)?;

        Ok(())
    }

    /// Flush the output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
