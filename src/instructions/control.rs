//! # Control Flow Instructions
//!
//! - BRK: halts the emulator
//! - NOP: does nothing
//!
//! On hardware BRK pushes PC and status and jumps through the IRQ vector. Here it
//! ends execution instead, leaving PC pointing at the BRK.

use crate::cpu::StepOutcome;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the BRK instruction. No state changes.
pub(crate) fn execute_brk<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    _metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    Ok(StepOutcome::Halted)
}

/// Executes the NOP instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);
    Ok(StepOutcome::Continue)
}
