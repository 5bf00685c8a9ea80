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

use super::super::alu::alu;
use super::super::{Cpu, StepResult};

impl Cpu {
    // === Register-immediate and register-register computation ===

    /// OP-IMM: ADDI/SLTI/SLTIU/XORI/ORI/ANDI/SLLI/SRLI/SRAI
    ///
    /// The second ALU operand is the sign-extended I-immediate. For the
    /// shift encodings the shift amount is `imm[4:0]` and `funct7`
    /// doubles as the upper immediate bits, so it must be one of the two
    /// architected values: 0x00, or 0x20 selecting SRAI.
    ///
    /// Operation: rd = alu(rs1, imm)
    pub(in crate::core::cpu) fn execute_op_imm(
        &mut self,
        rd: u8,
        rs1: u8,
        imm: i32,
        funct3: u8,
        funct7: u8,
    ) -> StepResult {
        let alt = match funct3 {
            // SLLI admits only funct7 = 0x00
            1 if funct7 != 0x00 => return self.illegal(),
            // SRLI/SRAI
            5 => match funct7 {
                0x00 => false,
                0x20 => true,
                _ => return self.illegal(),
            },
            // For every other funct3 the upper bits are immediate bits
            _ => false,
        };

        let result = alu(funct3, alt, self.reg(rs1) as i32, imm);
        self.set_reg(rd, result as u32);
        StepResult::Continue
    }

    /// OP: ADD/SUB/SLL/SLT/SLTU/XOR/SRL/SRA/OR/AND
    ///
    /// Register-register computation. `funct7 = 0x00` selects the base
    /// operation, `funct7 = 0x20` the alternate one (SUB for funct3 0,
    /// SRA for funct3 5); every other combination is illegal.
    ///
    /// Operation: rd = alu(rs1, rs2)
    pub(in crate::core::cpu) fn execute_op(
        &mut self,
        rd: u8,
        rs1: u8,
        rs2: u8,
        funct3: u8,
        funct7: u8,
    ) -> StepResult {
        let alt = match funct7 {
            0x00 => false,
            // Only ADD and SRL have alternate forms
            0x20 if funct3 == 0 || funct3 == 5 => true,
            _ => return self.illegal(),
        };

        let result = alu(funct3, alt, self.reg(rs1) as i32, self.reg(rs2) as i32);
        self.set_reg(rd, result as u32);
        StepResult::Continue
    }

    /// LUI: Load Upper Immediate
    ///
    /// Operation: rd = imm[31:12] << 12
    pub(in crate::core::cpu) fn op_lui(&mut self, rd: u8, imm: i32) -> StepResult {
        self.set_reg(rd, imm as u32);
        StepResult::Continue
    }

    /// AUIPC: Add Upper Immediate to PC
    ///
    /// Operation: rd = PC + (imm[31:12] << 12)
    pub(in crate::core::cpu) fn op_auipc(&mut self, rd: u8, imm: i32) -> StepResult {
        self.set_reg(rd, self.pc().wrapping_add(imm as u32));
        StepResult::Continue
    }
}
