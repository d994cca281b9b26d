//! # Load and Store Instructions
//!
//! - LDA: Load Accumulator
//! - STA: Store Accumulator

use crate::cpu::StepOutcome;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte into the accumulator.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    let value = cpu.operand_value(metadata.addressing_mode)?;

    cpu.a = value;
    cpu.flags.update_zn(value);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    Ok(StepOutcome::Continue)
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Stores the accumulator at the effective address. The write goes through the
/// memory bus, so storing to the output port emits a character.
///
/// No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    let addr = cpu.operand_address(metadata.addressing_mode)?;

    cpu.memory.write(addr, cpu.a);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    Ok(StepOutcome::Continue)
}
