//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! - ADC: Add with Carry
//! - CMP: Compare Accumulator

use crate::cpu::StepOutcome;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator, wrapping at 8 bits.
///
/// # Flag Behavior
///
/// - Zero (Z), Negative (N): recomputed from the new accumulator
/// - Carry (C), Overflow (V): not computed, left unchanged
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    let value = cpu.operand_value(metadata.addressing_mode)?;

    let result = cpu.a.wrapping_add(value).wrapping_add(cpu.flags.carry());

    cpu.a = result;
    cpu.flags.update_zn(result);

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    Ok(StepOutcome::Continue)
}

/// Executes the CMP (Compare Accumulator) instruction.
///
/// Compares the accumulator with the operand without changing it.
///
/// # Flag Behavior
///
/// | Comparison | Z | C |
/// |------------|---|---|
/// | A == M     | 1 | 1 |
/// | A < M      | 0 | 0 |
/// | A > M      | 0 | 1 |
///
/// Negative (N) is not computed.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    let value = cpu.operand_value(metadata.addressing_mode)?;

    match cpu.a.cmp(&value) {
        std::cmp::Ordering::Equal => {
            cpu.flags.set_zero();
            cpu.flags.set_carry();
        }
        std::cmp::Ordering::Less => {
            cpu.flags.clear_zero();
            cpu.flags.clear_carry();
        }
        std::cmp::Ordering::Greater => {
            cpu.flags.clear_zero();
            cpu.flags.set_carry();
        }
    }

    cpu.pc = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    Ok(StepOutcome::Continue)
}
