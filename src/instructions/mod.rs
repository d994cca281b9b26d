//! # 6502 Instruction Implementations
//!
//! Each instruction is a standalone function taking the CPU and the decoded opcode
//! metadata. [`execute`] dispatches with an exhaustive match over [`Mnemonic`], so a
//! new variant does not compile until it has a handler.
//!
//! ## Categories
//!
//! - **alu**: ADC, CMP
//! - **branches**: BCC
//! - **control**: BRK, NOP
//! - **flags**: CLC
//! - **load_store**: LDA, STA

use crate::cpu::StepOutcome;
use crate::opcodes::{Mnemonic, OpcodeMetadata};
use crate::{ExecutionError, MemoryBus, CPU};

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod load_store;

/// Runs one decoded instruction.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    metadata: &OpcodeMetadata,
) -> Result<StepOutcome, ExecutionError> {
    match metadata.mnemonic {
        Mnemonic::Adc => alu::execute_adc(cpu, metadata),
        Mnemonic::Bcc => branches::execute_bcc(cpu, metadata),
        Mnemonic::Brk => control::execute_brk(cpu, metadata),
        Mnemonic::Clc => flags::execute_clc(cpu, metadata),
        Mnemonic::Cmp => alu::execute_cmp(cpu, metadata),
        Mnemonic::Lda => load_store::execute_lda(cpu, metadata),
        Mnemonic::Nop => control::execute_nop(cpu, metadata),
        Mnemonic::Sta => load_store::execute_sta(cpu, metadata),
    }
}
