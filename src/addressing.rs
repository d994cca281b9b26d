//! # Addressing Modes
//!
//! The 13 addressing modes of the NMOS 6502. The mode of an instruction is implied
//! by its opcode byte and fixes how many operand bytes follow the opcode.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, BRK, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BCC label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: STA $C000
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }

    /// Total instruction size in bytes, opcode included.
    pub const fn instruction_size(self) -> u8 {
        1 + self.operand_bytes()
    }
}
