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

//! RV32I instruction disassembler for debugging
//!
//! Converts binary instruction encodings to human-readable assembly
//! mnemonics. The output is debug text for trace lines, not a wire
//! contract; anything the engine would reject renders as
//! `Illegal instruction`.

use super::decode::{imm_decode, op_decode};
use super::instructions::opcodes;

/// Instruction disassembler
///
/// # Example
/// ```
/// use rvsim::core::cpu::Disassembler;
///
/// let instruction = 0x00000013; // ADDI x0, x0, 0
/// assert_eq!(Disassembler::disassemble(instruction), "nop");
/// ```
pub struct Disassembler;

impl Disassembler {
    /// Disassemble a single instruction to human-readable format
    ///
    /// # Arguments
    ///
    /// * `inst` - The 32-bit instruction to disassemble
    ///
    /// # Returns
    ///
    /// String containing the disassembled instruction
    ///
    /// # Example
    /// ```
    /// use rvsim::core::cpu::Disassembler;
    ///
    /// let instruction = 0xFFF00213; // ADDI x4, x0, -1
    /// assert_eq!(Disassembler::disassemble(instruction), "addi x4, x0, -1");
    /// ```
    pub fn disassemble(inst: u32) -> String {
        let (opcode, rd, rs1, rs2, funct3, funct7) = op_decode(inst);
        let imm = imm_decode(inst);

        match opcode {
            opcodes::LOAD => {
                let mnemonic = match funct3 {
                    0 => "lb",
                    1 => "lh",
                    2 => "lw",
                    4 => "lbu",
                    5 => "lhu",
                    _ => return Self::illegal(),
                };
                format!("{} x{}, {}(x{})", mnemonic, rd, imm.i, rs1)
            }
            opcodes::STORE => {
                let mnemonic = match funct3 {
                    0 => "sb",
                    1 => "sh",
                    2 => "sw",
                    _ => return Self::illegal(),
                };
                format!("{} x{}, {}(x{})", mnemonic, rs2, imm.s, rs1)
            }
            opcodes::BRANCH => {
                let mnemonic = match funct3 {
                    0 => "beq",
                    1 => "bne",
                    4 => "blt",
                    5 => "bge",
                    6 => "bltu",
                    7 => "bgeu",
                    _ => return Self::illegal(),
                };
                format!("{} x{}, x{}, {}", mnemonic, rs1, rs2, imm.b)
            }
            opcodes::JALR => format!("jalr x{}, x{}, {}", rd, rs1, imm.i),
            opcodes::JAL => format!("jal x{}, {}", rd, imm.j),
            opcodes::OP_IMM => Self::disasm_op_imm(inst, rd, rs1, funct3, funct7, imm.i),
            opcodes::OP => Self::disasm_op(rd, rs1, rs2, funct3, funct7),
            opcodes::LUI => format!("lui x{}, {}", rd, imm.u),
            opcodes::AUIPC => format!("auipc x{}, {}", rd, imm.u),
            opcodes::MISC_MEM => "fence".to_string(),
            opcodes::SYSTEM => match (funct3, inst >> 20) {
                (0, 0) => "ecall".to_string(),
                (0, 1) => "ebreak".to_string(),
                _ => Self::illegal(),
            },
            _ => Self::illegal(),
        }
    }

    /// Disassemble an OP-IMM (register-immediate) instruction
    fn disasm_op_imm(inst: u32, rd: u8, rs1: u8, funct3: u8, funct7: u8, imm: i32) -> String {
        // Canonical NOP alias
        if inst == 0x0000_0013 {
            return "nop".to_string();
        }

        let shamt = imm & 0x1F;
        match (funct3, funct7) {
            (0, _) => format!("addi x{}, x{}, {}", rd, rs1, imm),
            (1, 0x00) => format!("slli x{}, x{}, {}", rd, rs1, shamt),
            (2, _) => format!("slti x{}, x{}, {}", rd, rs1, imm),
            (3, _) => format!("sltiu x{}, x{}, {}", rd, rs1, imm),
            (4, _) => format!("xori x{}, x{}, {}", rd, rs1, imm),
            (5, 0x00) => format!("srli x{}, x{}, {}", rd, rs1, shamt),
            (5, 0x20) => format!("srai x{}, x{}, {}", rd, rs1, shamt),
            (6, _) => format!("ori x{}, x{}, {}", rd, rs1, imm),
            (7, _) => format!("andi x{}, x{}, {}", rd, rs1, imm),
            _ => Self::illegal(),
        }
    }

    /// Disassemble an OP (register-register) instruction
    fn disasm_op(rd: u8, rs1: u8, rs2: u8, funct3: u8, funct7: u8) -> String {
        let mnemonic = match (funct3, funct7) {
            (0, 0x00) => "add",
            (0, 0x20) => "sub",
            (1, 0x00) => "sll",
            (2, 0x00) => "slt",
            (3, 0x00) => "sltu",
            (4, 0x00) => "xor",
            (5, 0x00) => "srl",
            (5, 0x20) => "sra",
            (6, 0x00) => "or",
            (7, 0x00) => "and",
            _ => return Self::illegal(),
        };
        format!("{} x{}, x{}, x{}", mnemonic, rd, rs1, rs2)
    }

    fn illegal() -> String {
        "Illegal instruction".to_string()
    }
}
