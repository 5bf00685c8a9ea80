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
    // === Store Instructions ===

    /// STORE: SB/SH/SW
    ///
    /// The effective address is `rs1 + S-imm` with wrapping addition.
    /// Stores the low 1/2/4 bytes of rs2; bytes outside the selected
    /// range are preserved by the memory model's masked writes, and
    /// misaligned addresses never trap.
    ///
    /// Operation: mem[rs1 + imm] = rs2
    pub(in crate::core::cpu) fn execute_store(
        &mut self,
        rs1: u8,
        rs2: u8,
        imm: i32,
        funct3: u8,
        mem: &mut Memory,
    ) -> StepResult {
        let addr = self.reg(rs1).wrapping_add(imm as u32);

        let width = match funct3 {
            0 => AccessWidth::Byte, // SB
            1 => AccessWidth::Half, // SH
            2 => AccessWidth::Word, // SW
            _ => return self.illegal(),
        };

        log::trace!("store x{} -> 0x{:08X}", rs2, addr);
        mem.write(addr, self.reg(rs2), width);
        StepResult::Continue
    }
}
