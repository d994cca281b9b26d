//! # Status Flag Manipulation Instructions
//!
//! - CLC: Clear Carry Flag

use crate::cpu::StepOutcome;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// Opcode: 0x18, implied, 1 byte.
///
/// # Examples
///
/// ```
/// use mini6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x8000);
/// memory.write(0x8000, 0x18); // CLC
///
/// let mut cpu = CPU::new(memory);
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert!(!cpu.flag_c());
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    cpu.flags.clear_carry();

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    Ok(StepOutcome::Continue)
}
