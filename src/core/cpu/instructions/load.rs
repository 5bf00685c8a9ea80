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
use crate::core::memory::{AccessWidth, Memory};

impl Cpu {
    // === Load Instructions ===

    /// LOAD: LB/LH/LW/LBU/LHU
    ///
    /// The effective address is `rs1 + I-imm` with wrapping addition.
    /// Misaligned addresses are serviced by the memory model's unaligned
    /// path and never trap. The memory read comes back sign-extended, so
    /// the signed variants store it directly; the unsigned variants mask
    /// off the extension.
    ///
    /// Operation: rd = mem[rs1 + imm]
    pub(in crate::core::cpu) fn execute_load(
        &mut self,
        rd: u8,
        rs1: u8,
        imm: i32,
        funct3: u8,
        mem: &Memory,
    ) -> StepResult {
        let addr = self.reg(rs1).wrapping_add(imm as u32);

        let value = match funct3 {
            0 => mem.read(addr, AccessWidth::Byte),                       // LB
            1 => mem.read(addr, AccessWidth::Half),                       // LH
            2 => mem.read(addr, AccessWidth::Word),                       // LW
            4 => mem.read(addr, AccessWidth::Byte) & AccessWidth::Byte.mask(), // LBU
            5 => mem.read(addr, AccessWidth::Half) & AccessWidth::Half.mask(), // LHU
            _ => return self.illegal(),
        };

        log::trace!("load 0x{:08X} -> x{}", addr, rd);
        self.set_reg(rd, value);
        StepResult::Continue
    }
}
