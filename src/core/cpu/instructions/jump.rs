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

use super::super::{Cpu, StepResult};

impl Cpu {
    // === Unconditional jumps ===

    /// JAL: Jump And Link
    ///
    /// Stores the return address (PC + 4) in rd, then transfers control
    /// to `PC + J-imm`.
    ///
    /// Operation: rd = PC + 4; PC = PC + imm
    pub(in crate::core::cpu) fn op_jal(&mut self, rd: u8, imm: i32) -> StepResult {
        self.set_reg(rd, self.pc().wrapping_add(4));
        self.next_pc = self.pc().wrapping_add(imm as u32);
        StepResult::Continue
    }

    /// JALR: Jump And Link Register
    ///
    /// The target is `rs1 + I-imm` with the least significant bit
    /// cleared, as the architecture mandates. rs1 is read before rd is
    /// written so `jalr x1, x1, 0` behaves.
    ///
    /// Operation: rd = PC + 4; PC = (rs1 + imm) & !1
    pub(in crate::core::cpu) fn op_jalr(&mut self, rd: u8, rs1: u8, imm: i32) -> StepResult {
        let target = self.reg(rs1).wrapping_add(imm as u32) & !1;
        self.set_reg(rd, self.pc().wrapping_add(4));
        self.next_pc = target;
        StepResult::Continue
    }
}
