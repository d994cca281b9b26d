//! Per-instruction execution trace.
//!
//! Each executed instruction yields one [`TraceRecord`]: the program counter and
//! opcode as fetched, followed by the register file after execution. The CPU logs
//! records at `trace` level under the [`TRACE_TARGET`] target, so they end up on
//! the logger's stream (stderr in the CLI) and never mix with program output.

use std::fmt;

/// Log target used for trace records.
pub const TRACE_TARGET: &str = "mini6502::trace";

/// Snapshot of one executed instruction.
///
/// ```
/// use mini6502::TraceRecord;
///
/// let record = TraceRecord {
///     pc: 0x0000,
///     opcode: 0xA9,
///     a: 0x41,
///     x: 0,
///     y: 0,
///     sp: 0,
///     status: 0x00,
/// };
/// assert_eq!(
///     record.to_string(),
///     "PC: 0000 opcode = a9 a: 41 x: 00 y: 00 s: 0100 p: 00"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRecord {
    /// Address the opcode was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    /// Packed status register.
    pub status: u8,
}

impl fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The stack pointer is shown as its page-1 address.
        write!(
            f,
            "PC: {:04x} opcode = {:02x} a: {:02x} x: {:02x} y: {:02x} s: 01{:02x} p: {:02x}",
            self.pc, self.opcode, self.a, self.x, self.y, self.sp, self.status
        )
    }
}
