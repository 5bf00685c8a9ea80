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

use super::super::alu::bru;
use super::super::{Cpu, StepResult};

impl Cpu {
    // === Conditional branches ===

    /// BRANCH: BEQ/BNE/BLT/BGE/BLTU/BGEU
    ///
    /// BLT/BGE compare as signed, BLTU/BGEU as unsigned, BEQ/BNE compare
    /// bit patterns. A taken branch sets the next PC to `PC + B-imm`;
    /// otherwise execution falls through to `PC + 4`. funct3 values 2
    /// and 3 are not branch encodings and halt the run.
    ///
    /// Operation: if cond(rs1, rs2) PC = PC + imm
    pub(in crate::core::cpu) fn execute_branch(
        &mut self,
        rs1: u8,
        rs2: u8,
        imm: i32,
        funct3: u8,
    ) -> StepResult {
        if funct3 == 2 || funct3 == 3 {
            return self.illegal();
        }

        if bru(funct3, self.reg(rs1) as i32, self.reg(rs2) as i32) {
            self.next_pc = self.pc().wrapping_add(imm as u32);
        }
        StepResult::Continue
    }
}
