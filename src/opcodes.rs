//! # Opcode Metadata Table
//!
//! A 256-entry table indexed by opcode byte. Implemented opcodes map to their
//! mnemonic, addressing mode and instruction size; every other entry is `None`
//! and decodes as an illegal opcode.
//!
//! Adding an instruction means adding a [`Mnemonic`] variant, a row in
//! [`OPCODE_ROWS`] and a match arm in the executor.

use crate::addressing::AddressingMode;

/// Closed set of instructions the executor knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add with carry.
    Adc,
    /// Branch if carry clear.
    Bcc,
    /// Break. Halts the emulator.
    Brk,
    /// Clear carry.
    Clc,
    /// Compare accumulator.
    Cmp,
    /// Load accumulator.
    Lda,
    /// No operation.
    Nop,
    /// Store accumulator.
    Sta,
}

impl Mnemonic {
    /// Three-letter assembler name.
    pub const fn name(self) -> &'static str {
        match self {
            Mnemonic::Adc => "ADC",
            Mnemonic::Bcc => "BCC",
            Mnemonic::Brk => "BRK",
            Mnemonic::Clc => "CLC",
            Mnemonic::Cmp => "CMP",
            Mnemonic::Lda => "LDA",
            Mnemonic::Nop => "NOP",
            Mnemonic::Sta => "STA",
        }
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for a single opcode.
///
/// # Examples
///
/// ```
/// use mini6502::{opcodes::lookup, AddressingMode, Mnemonic};
///
/// let lda = lookup(0xA9).unwrap();
/// assert_eq!(lda.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda.size_bytes, 2);
///
/// assert!(lookup(0x02).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction this opcode encodes.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,
}

impl OpcodeMetadata {
    const fn new(mnemonic: Mnemonic, addressing_mode: AddressingMode) -> Self {
        Self {
            mnemonic,
            addressing_mode,
            size_bytes: addressing_mode.instruction_size(),
        }
    }
}

/// Implemented opcodes as `(opcode, mnemonic, mode)` rows.
pub const OPCODE_ROWS: &[(u8, Mnemonic, AddressingMode)] = &[
    (0x00, Mnemonic::Brk, AddressingMode::Implicit),
    (0x18, Mnemonic::Clc, AddressingMode::Implicit),
    (0x69, Mnemonic::Adc, AddressingMode::Immediate),
    (0x8D, Mnemonic::Sta, AddressingMode::Absolute),
    (0x90, Mnemonic::Bcc, AddressingMode::Relative),
    (0xA9, Mnemonic::Lda, AddressingMode::Immediate),
    (0xC9, Mnemonic::Cmp, AddressingMode::Immediate),
    (0xEA, Mnemonic::Nop, AddressingMode::Implicit),
];

/// Opcode table indexed by opcode byte.
pub static OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = build_table();

const fn build_table() -> [Option<OpcodeMetadata>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < OPCODE_ROWS.len() {
        let (opcode, mnemonic, mode) = OPCODE_ROWS[i];
        table[opcode as usize] = Some(OpcodeMetadata::new(mnemonic, mode));
        i += 1;
    }
    table
}

/// Looks up the metadata for `opcode`, or `None` if it is not implemented.
pub fn lookup(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_rows() {
        let implemented = OPCODE_TABLE.iter().filter(|m| m.is_some()).count();
        assert_eq!(implemented, OPCODE_ROWS.len());
    }

    #[test]
    fn test_rows_have_unique_opcodes() {
        for (i, (a, _, _)) in OPCODE_ROWS.iter().enumerate() {
            for (b, _, _) in &OPCODE_ROWS[i + 1..] {
                assert_ne!(a, b, "opcode 0x{:02X} listed twice", a);
            }
        }
    }

    #[test]
    fn test_sta_absolute_is_three_bytes() {
        let sta = lookup(0x8D).unwrap();
        assert_eq!(sta.mnemonic, Mnemonic::Sta);
        assert_eq!(sta.size_bytes, 3);
    }
}
