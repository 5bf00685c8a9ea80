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

//! Test fixtures: instruction encoders and image-file helpers

use rvsim::core::system::System;
use std::io::Write;
use tempfile::NamedTempFile;

/// Load a program into a fresh system at the given address and reset
#[allow(dead_code)]
pub fn system_with_program(start_addr: u32, program: &[u32]) -> System {
    let mut system = System::new();
    for (i, &instruction) in program.iter().enumerate() {
        let addr = start_addr.wrapping_add(i as u32 * 4);
        system.memory_mut().write_word(addr, instruction);
    }
    system.reset();
    system
}

/// Write a program out as a hex image file, one word per line
#[allow(dead_code)]
pub fn write_hex_image(start_addr: u32, program: &[u32]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp image");
    writeln!(file, "@{:X}", start_addr).expect("failed to write image");
    for word in program {
        let b = word.to_le_bytes();
        writeln!(file, "{:02X} {:02X} {:02X} {:02X}", b[0], b[1], b[2], b[3])
            .expect("failed to write image");
    }
    file.flush().expect("failed to flush image");
    file
}

// Hand-assembled RV32I encodings used by the integration tests.

/// ADDI rd, rs1, imm
#[allow(dead_code)]
pub fn addi(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(0x13, rd, 0, rs1, imm)
}

/// ADD rd, rs1, rs2
#[allow(dead_code)]
pub fn add(rd: u8, rs1: u8, rs2: u8) -> u32 {
    r_type(rd, 0, rs1, rs2, 0x00)
}

/// LW rd, imm(rs1)
#[allow(dead_code)]
pub fn lw(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(0x03, rd, 2, rs1, imm)
}

/// LBU rd, imm(rs1)
#[allow(dead_code)]
pub fn lbu(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(0x03, rd, 4, rs1, imm)
}

/// SW rs2, imm(rs1)
#[allow(dead_code)]
pub fn sw(rs1: u8, rs2: u8, imm: i32) -> u32 {
    s_type(rs1, rs2, 2, imm)
}

/// SB rs2, imm(rs1)
#[allow(dead_code)]
pub fn sb(rs1: u8, rs2: u8, imm: i32) -> u32 {
    s_type(rs1, rs2, 0, imm)
}

/// BNE rs1, rs2, offset
#[allow(dead_code)]
pub fn bne(rs1: u8, rs2: u8, offset: i32) -> u32 {
    b_type(rs1, rs2, 1, offset)
}

/// BLT rs1, rs2, offset
#[allow(dead_code)]
pub fn blt(rs1: u8, rs2: u8, offset: i32) -> u32 {
    b_type(rs1, rs2, 4, offset)
}

/// JAL rd, offset
#[allow(dead_code)]
pub fn jal(rd: u8, offset: i32) -> u32 {
    let imm = offset as u32 & 0x1F_FFFF;
    (((imm >> 20) & 1) << 31)
        | (((imm >> 1) & 0x3FF) << 21)
        | (((imm >> 11) & 1) << 20)
        | (((imm >> 12) & 0xFF) << 12)
        | ((rd as u32) << 7)
        | 0x6F
}

/// JALR rd, rs1, imm
#[allow(dead_code)]
pub fn jalr(rd: u8, rs1: u8, imm: i32) -> u32 {
    i_type(0x67, rd, 0, rs1, imm)
}

/// ECALL
#[allow(dead_code)]
pub fn ecall() -> u32 {
    0x0000_0073
}

/// EBREAK
#[allow(dead_code)]
pub fn ebreak() -> u32 {
    0x0010_0073
}

fn i_type(opcode: u8, rd: u8, funct3: u8, rs1: u8, imm: i32) -> u32 {
    ((imm as u32 & 0xFFF) << 20)
        | ((rs1 as u32) << 15)
        | ((funct3 as u32) << 12)
        | ((rd as u32) << 7)
        | opcode as u32
}

fn r_type(rd: u8, funct3: u8, rs1: u8, rs2: u8, funct7: u8) -> u32 {
    ((funct7 as u32) << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | ((funct3 as u32) << 12)
        | ((rd as u32) << 7)
        | 0x33
}

fn s_type(rs1: u8, rs2: u8, funct3: u8, imm: i32) -> u32 {
    let imm = imm as u32 & 0xFFF;
    ((imm >> 5) << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | ((funct3 as u32) << 12)
        | ((imm & 0x1F) << 7)
        | 0x23
}

fn b_type(rs1: u8, rs2: u8, funct3: u8, offset: i32) -> u32 {
    let imm = offset as u32 & 0x1FFF;
    (((imm >> 12) & 1) << 31)
        | (((imm >> 5) & 0x3F) << 25)
        | ((rs2 as u32) << 20)
        | ((rs1 as u32) << 15)
        | ((funct3 as u32) << 12)
        | (((imm >> 1) & 0xF) << 8)
        | (((imm >> 11) & 1) << 7)
        | 0x63
}
