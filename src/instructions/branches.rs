//! # Branch Instructions
//!
//! - BCC: Branch if Carry Clear
//!
//! Branches use relative addressing: the operand byte is a two's-complement
//! displacement from the address of the next instruction (PC + 2).

use crate::cpu::StepOutcome;
use crate::opcodes::OpcodeMetadata;
use crate::{ExecutionError, MemoryBus, CPU};

/// Executes the BCC (Branch if Carry Clear) instruction.
///
/// If C = 0 the PC becomes PC + 2 + offset, otherwise PC + 2. The target wraps
/// around the 16-bit address space. No flags are affected.
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    let offset = cpu.branch_offset(metadata.addressing_mode)?;
    let taken = !cpu.flags.carry;
    branch(cpu, metadata, offset, taken);
    Ok(StepOutcome::Continue)
}

/// Shared tail of every conditional branch.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, metadata: &OpcodeMetadata, offset: i8, taken: bool) {
    let next = cpu.pc.wrapping_add(metadata.size_bytes as u16);

    cpu.pc = if taken {
        next.wrapping_add_signed(offset as i16)
    } else {
        next
    };
}
