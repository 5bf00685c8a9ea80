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

//! Hex image loading for the RV32I simulator
//!
//! Images are ASCII and line-oriented, in the style of Verilog
//! `$readmemh` output:
//!
//! ```text
//! @100DC
//! 93 01 C1 CB
//! 13 00 00 00
//! ```
//!
//! - A line beginning with `@` sets the current byte address from the
//!   hexadecimal digits that follow.
//! - Any other line is whitespace-separated 2-digit hex bytes. Bytes
//!   accumulate LSB-first into 32-bit words; each completed word is
//!   written to memory and the address advances by 4.
//! - A trailing partial group on a line (fewer than 4 bytes) is dropped.
//!
//! Malformed input is a fatal [`SimulatorError::ImageFormat`] carrying
//! the offending line number.
//!
//! # Example
//!
//! ```
//! use rvsim::core::loader::HexImage;
//!
//! let image = HexImage::parse("@10\n13 00 00 00\n").unwrap();
//! assert_eq!(image.entries(), &[(0x10, 0x0000_0013)]);
//! ```

use super::error::{Result, SimulatorError};
use super::memory::Memory;
use std::fs;
use std::path::Path;

/// A parsed hex image: an ordered list of `(address, word)` writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexImage {
    entries: Vec<(u32, u32)>,
}

impl HexImage {
    /// Parse hex image data from a string
    ///
    /// # Arguments
    ///
    /// * `data` - Image file contents
    ///
    /// # Returns
    ///
    /// - `Ok(HexImage)` if parsing succeeds
    /// - `Err(SimulatorError::ImageFormat)` on malformed input
    ///
    /// # Example
    ///
    /// ```
    /// use rvsim::core::loader::HexImage;
    ///
    /// let image = HexImage::parse("@100DC\n93 01 C1 CB\n").unwrap();
    /// assert_eq!(image.entries(), &[(0x100DC, 0xCBC10193)]);
    /// ```
    pub fn parse(data: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut addr: u32 = 0;

        for (idx, line) in data.lines().enumerate() {
            let lineno = idx + 1;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(digits) = line.strip_prefix('@') {
                addr = u32::from_str_radix(digits.trim(), 16).map_err(|e| {
                    SimulatorError::ImageFormat {
                        line: lineno,
                        message: format!("invalid address '{}': {}", digits.trim(), e),
                    }
                })?;
                continue;
            }

            // Accumulate bytes LSB-first into words; the accumulator
            // does not carry across lines
            let mut word: u32 = 0;
            let mut k: u32 = 0;
            for token in line.split_whitespace() {
                let byte =
                    u8::from_str_radix(token, 16).map_err(|e| SimulatorError::ImageFormat {
                        line: lineno,
                        message: format!("invalid byte '{}': {}", token, e),
                    })?;

                word |= (byte as u32) << (k * 8);
                if k == 3 {
                    entries.push((addr, word));
                    addr = addr.wrapping_add(4);
                    word = 0;
                    k = 0;
                } else {
                    k += 1;
                }
            }

            if k != 0 {
                log::warn!(
                    "hex image line {}: dropping trailing group of {} byte(s)",
                    lineno,
                    k
                );
            }
        }

        Ok(Self { entries })
    }

    /// Read and parse a hex image file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    /// The parsed `(address, word)` writes, in file order
    pub fn entries(&self) -> &[(u32, u32)] {
        &self.entries
    }

    /// Write every word of the image into memory
    pub fn load_into(&self, mem: &mut Memory) {
        for &(addr, word) in &self.entries {
            mem.write_word(addr, word);
        }
        log::info!("loaded {} words into memory", self.entries.len());
    }
}
