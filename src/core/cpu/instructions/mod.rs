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

//! CPU instruction implementations
//!
//! This module contains all RV32I instruction implementations, organized
//! by instruction class for better maintainability.

use super::decode::{imm_decode, op_decode};
use super::{Cpu, HaltReason, StepResult};
use crate::core::memory::Memory;

// Instruction modules organized by class
mod arithmetic;
mod branch;
mod jump;
mod load;
mod store;
mod system;

/// RV32I opcodes (instruction bits [6:0])
pub(super) mod opcodes {
    pub const LOAD: u8 = 0b000_0011;
    pub const MISC_MEM: u8 = 0b000_1111;
    pub const OP_IMM: u8 = 0b001_0011;
    pub const AUIPC: u8 = 0b001_0111;
    pub const STORE: u8 = 0b010_0011;
    pub const OP: u8 = 0b011_0011;
    pub const LUI: u8 = 0b011_0111;
    pub const BRANCH: u8 = 0b110_0011;
    pub const JALR: u8 = 0b110_0111;
    pub const JAL: u8 = 0b110_1111;
    pub const SYSTEM: u8 = 0b111_0011;
}

impl Cpu {
    /// Decode and execute one instruction word
    ///
    /// Splits the word into its fields, reconstructs the immediates, and
    /// dispatches on the opcode. The immediate kind is a function of the
    /// opcode class: I for LOAD/JALR/OP-IMM, S for STORE, B for BRANCH,
    /// J for JAL, U for LUI/AUIPC.
    ///
    /// # Returns
    ///
    /// [`StepResult::Halt`] for an unsupported opcode, an illegal
    /// funct3/funct7 combination, or a SYSTEM instruction; otherwise
    /// [`StepResult::Continue`].
    pub(super) fn execute_instruction(&mut self, inst: u32, mem: &mut Memory) -> StepResult {
        let (opcode, rd, rs1, rs2, funct3, funct7) = op_decode(inst);
        let imm = imm_decode(inst);

        match opcode {
            opcodes::LOAD => self.execute_load(rd, rs1, imm.i, funct3, mem),
            opcodes::STORE => self.execute_store(rs1, rs2, imm.s, funct3, mem),
            opcodes::BRANCH => self.execute_branch(rs1, rs2, imm.b, funct3),
            opcodes::JALR => self.op_jalr(rd, rs1, imm.i),
            opcodes::JAL => self.op_jal(rd, imm.j),
            opcodes::OP_IMM => self.execute_op_imm(rd, rs1, imm.i, funct3, funct7),
            opcodes::OP => self.execute_op(rd, rs1, rs2, funct3, funct7),
            opcodes::LUI => self.op_lui(rd, imm.u),
            opcodes::AUIPC => self.op_auipc(rd, imm.u),
            opcodes::MISC_MEM => self.op_fence(),
            opcodes::SYSTEM => self.execute_system(funct3, inst),
            _ => {
                log::debug!(
                    "Illegal opcode 0b{:07b} at PC=0x{:08X}",
                    opcode,
                    self.pc()
                );
                StepResult::Halt(HaltReason::IllegalInstruction(inst))
            }
        }
    }

    /// Halt on an illegal funct3/funct7 combination under a known opcode
    pub(in crate::core::cpu) fn illegal(&self) -> StepResult {
        let inst = self.current_instruction();
        log::debug!(
            "Illegal field combination in 0x{:08X} at PC=0x{:08X}",
            inst,
            self.pc()
        );
        StepResult::Halt(HaltReason::IllegalInstruction(inst))
    }
}
