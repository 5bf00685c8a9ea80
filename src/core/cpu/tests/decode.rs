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

use super::super::decode::{imm_decode, op_decode};

#[test]
fn test_op_decode_fields() {
    // ADDI x3, x3, -836
    let (opcode, rd, rs1, rs2, funct3, funct7) = op_decode(0xCBC18193);
    assert_eq!(opcode, 0b0010011);
    assert_eq!(rd, 3);
    assert_eq!(rs1, 3);
    assert_eq!(funct3, 0);
    // rs2 and funct7 overlap the immediate; they still decode
    assert_eq!(rs2, 0x1C);
    assert_eq!(funct7, 0x65);
}

#[test]
fn test_op_decode_all_ones() {
    let (opcode, rd, rs1, rs2, funct3, funct7) = op_decode(0xFFFFFFFF);
    assert_eq!(opcode, 0x7F);
    assert_eq!(rd, 0x1F);
    assert_eq!(rs1, 0x1F);
    assert_eq!(rs2, 0x1F);
    assert_eq!(funct3, 0x7);
    assert_eq!(funct7, 0x7F);
}

#[test]
fn test_imm_decode_i() {
    assert_eq!(imm_decode(0xFFF00000).i, -1);
    assert_eq!(imm_decode(0x7FF00000).i, 2047);
    assert_eq!(imm_decode(0x80000000).i, -2048);
}

#[test]
fn test_imm_decode_s_and_b() {
    let imm = imm_decode(0xFE000F80);
    assert_eq!(imm.s, -1);
    assert_eq!(imm.b, -2);
}

#[test]
fn test_imm_decode_j_and_u() {
    let imm = imm_decode(0xFFFFF000);
    assert_eq!(imm.j, -2);
    assert_eq!(imm.u, -4096);
}

#[test]
fn test_imm_decode_zero() {
    let imm = imm_decode(0);
    assert_eq!(imm.i, 0);
    assert_eq!(imm.s, 0);
    assert_eq!(imm.b, 0);
    assert_eq!(imm.j, 0);
    assert_eq!(imm.u, 0);
}

#[test]
fn test_b_imm_bit_placement() {
    // Only inst[7] set: imm[11]
    assert_eq!(imm_decode(0x0000_0080).b, 0x800);
    // Only inst[11:8] set: imm[4:1]
    assert_eq!(imm_decode(0x0000_0F00).b, 0x1E);
    // Only inst[30:25] set: imm[10:5]
    assert_eq!(imm_decode(0x7E00_0000).b, 0x7E0);
}

#[test]
fn test_j_imm_bit_placement() {
    // Only inst[20] set: imm[11]
    assert_eq!(imm_decode(0x0010_0000).j, 0x800);
    // Only inst[19:12] set: imm[19:12]
    assert_eq!(imm_decode(0x000F_F000).j, 0xFF000);
    // Only inst[30:21] set: imm[10:1]
    assert_eq!(imm_decode(0x7FE0_0000).j, 0x7FE);
}

#[test]
fn test_u_imm_low_bits_zero() {
    assert_eq!(imm_decode(0xFFFFFFFF).u as u32 & 0xFFF, 0);
    assert_eq!(imm_decode(0x12345FFF).u, 0x12345000);
}
