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

use super::super::{Cpu, HaltReason, StepResult};

impl Cpu {
    // === FENCE and SYSTEM ===

    /// FENCE (MISC-MEM)
    ///
    /// Memory ordering is trivial in a single-threaded simulator, so the
    /// instruction is decoded and has no observable effect.
    pub(in crate::core::cpu) fn op_fence(&mut self) -> StepResult {
        log::trace!("fence at PC=0x{:08X} (no effect)", self.pc());
        StepResult::Continue
    }

    /// SYSTEM: ECALL/EBREAK
    ///
    /// Both stop the run; the host decides whether to dump state or to
    /// resume. imm[11:0] distinguishes ECALL (0) from EBREAK (1); any
    /// other SYSTEM encoding is illegal here since CSRs are not
    /// implemented.
    pub(in crate::core::cpu) fn execute_system(&mut self, funct3: u8, inst: u32) -> StepResult {
        let imm12 = inst >> 20;

        match (funct3, imm12) {
            (0, 0) => {
                log::debug!("ecall at PC=0x{:08X}", self.pc());
                StepResult::Halt(HaltReason::EnvironmentCall)
            }
            (0, 1) => {
                log::debug!("ebreak at PC=0x{:08X}", self.pc());
                StepResult::Halt(HaltReason::Breakpoint)
            }
            _ => self.illegal(),
        }
    }
}
