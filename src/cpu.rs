//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: a [`StatusFlags`] value
//! - **Instruction counter**: number of instructions executed since reset
//!
//! ## Execution Model
//!
//! - `step()`: fetch, decode and execute one instruction atomically
//! - `run()`: step until BRK or an illegal opcode
//! - `run_for()`: like `run()` with an upper bound on instructions
//!
//! BRK stops the emulator rather than entering the IRQ handler.

use crate::addressing::AddressingMode;
use crate::flags::StatusFlags;
use crate::instructions;
use crate::opcodes;
use crate::trace::{TraceRecord, TRACE_TARGET};
use crate::{ExecutionError, MemoryBus};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// What happened during a single `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction executed; the CPU is ready for the next fetch.
    Continue,
    /// BRK was executed. The CPU stays halted until `reset()`.
    Halted,
}

/// How a call to `run()` or `run_for()` ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// BRK was reached after executing `instructions` instructions (BRK included).
    Halted { instructions: u64 },
    /// The instruction budget ran out before BRK.
    StepLimit { instructions: u64 },
}

/// A decoded operand, as selected by the addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// No operand.
    Implied,
    /// The accumulator itself.
    Accumulator,
    /// Constant following the opcode.
    Immediate(u8),
    /// Effective memory address.
    Address(u16),
    /// Signed branch displacement.
    Relative(i8),
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait. The CPU owns
/// its bus, so independent machines never share state.
///
/// # Examples
///
/// ```
/// use mini6502::{CPU, FlatMemory, MemoryBus, StepOutcome};
///
/// let mut memory = FlatMemory::new();
/// memory.write_word(0xFFFC, 0x0200);
/// memory.load(0x0200, &[0xA9, 0x2A, 0x00]); // LDA #$2A; BRK
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x0200);
///
/// assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
/// assert_eq!(cpu.a(), 0x2A);
/// assert_eq!(cpu.step(), Ok(StepOutcome::Halted));
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) a: u8,
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) pc: u16,
    pub(crate) sp: u8,
    pub(crate) flags: StatusFlags,

    /// Instructions executed since reset
    instructions: u64,

    halted: bool,
    trace: bool,
    last_trace: Option<TraceRecord>,

    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus.
    ///
    /// Reset state: PC is loaded from the reset vector at 0xFFFC/0xFFFD, all other
    /// registers and every status flag are zero.
    pub fn new(memory: M) -> Self {
        let pc = memory.read_word(RESET_VECTOR);

        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc,
            sp: 0x00,
            flags: StatusFlags::default(),
            instructions: 0,
            halted: false,
            trace: false,
            last_trace: None,
            memory,
        }
    }

    /// Returns the CPU to reset state, re-reading the reset vector.
    ///
    /// Memory is left as it is.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0;
        self.flags = StatusFlags::default();
        self.pc = self.memory.read_word(RESET_VECTOR);
        self.instructions = 0;
        self.halted = false;
        self.last_trace = None;
        log::debug!("reset, pc = 0x{:04X}", self.pc);
    }

    /// Executes one instruction.
    ///
    /// Fetches the opcode at PC, looks it up in the opcode table and runs it. Flag
    /// and PC updates happen before this returns.
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Continue)` after a normal instruction
    /// - `Ok(StepOutcome::Halted)` on BRK, and on every call after that
    /// - `Err(ExecutionError::IllegalOpcode { .. })` if the opcode is not defined;
    ///   CPU state is left untouched
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        if self.halted {
            return Ok(StepOutcome::Halted);
        }

        let pc = self.pc;
        let opcode = self.memory.read(pc);

        let Some(metadata) = opcodes::lookup(opcode) else {
            if self.trace {
                log::trace!(target: TRACE_TARGET, "PC: {:04x} opcode = {:02x}", pc, opcode);
            }
            return Err(ExecutionError::IllegalOpcode {
                opcode,
                address: pc,
            });
        };

        let outcome = instructions::execute(self, metadata)?;
        self.instructions += 1;
        if outcome == StepOutcome::Halted {
            self.halted = true;
        }

        let record = self.trace_record(pc, opcode);
        if self.trace {
            log::trace!(target: TRACE_TARGET, "{}", record);
        }
        self.last_trace = Some(record);

        Ok(outcome)
    }

    /// Runs until BRK or an illegal opcode.
    ///
    /// The instruction count in the result covers this call only.
    pub fn run(&mut self) -> Result<RunOutcome, ExecutionError> {
        let start = self.instructions;
        loop {
            if self.step()? == StepOutcome::Halted {
                return Ok(RunOutcome::Halted {
                    instructions: self.instructions - start,
                });
            }
        }
    }

    /// Runs until BRK, an illegal opcode, or `max_instructions` executed.
    pub fn run_for(&mut self, max_instructions: u64) -> Result<RunOutcome, ExecutionError> {
        let start = self.instructions;
        while self.instructions - start < max_instructions {
            if self.step()? == StepOutcome::Halted {
                return Ok(RunOutcome::Halted {
                    instructions: self.instructions - start,
                });
            }
        }
        Ok(RunOutcome::StepLimit {
            instructions: self.instructions - start,
        })
    }

    fn trace_record(&self, pc: u16, opcode: u8) -> TraceRecord {
        TraceRecord {
            pc,
            opcode,
            a: self.a,
            x: self.x,
            y: self.y,
            sp: self.sp,
            status: self.flags.bits(),
        }
    }

    // ========== Operand Decoding ==========

    /// Decodes the operand of the instruction at PC for the given mode.
    ///
    /// Zero page indexing wraps within page zero. `Indirect` reproduces the NMOS
    /// page-wrap bug: a pointer at 0xXXFF takes its high byte from 0xXX00.
    pub fn decode_operand(&self, mode: AddressingMode) -> Operand {
        let arg = self.pc.wrapping_add(1);
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.memory.read(arg)),
            AddressingMode::Relative => Operand::Relative(self.memory.read(arg) as i8),
            AddressingMode::ZeroPage => Operand::Address(self.memory.read(arg) as u16),
            AddressingMode::ZeroPageX => {
                Operand::Address(self.memory.read(arg).wrapping_add(self.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                Operand::Address(self.memory.read(arg).wrapping_add(self.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.memory.read_word(arg)),
            AddressingMode::AbsoluteX => {
                Operand::Address(self.memory.read_word(arg).wrapping_add(self.x as u16))
            }
            AddressingMode::AbsoluteY => {
                Operand::Address(self.memory.read_word(arg).wrapping_add(self.y as u16))
            }
            AddressingMode::Indirect => {
                let ptr = self.memory.read_word(arg);
                let lo = self.memory.read(ptr) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.memory.read(hi_addr) as u16;
                Operand::Address((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let zp = self.memory.read(arg).wrapping_add(self.x);
                Operand::Address(self.read_zero_page_word(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.memory.read(arg);
                Operand::Address(self.read_zero_page_word(zp).wrapping_add(self.y as u16))
            }
        }
    }

    fn read_zero_page_word(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Value an instruction reads: the immediate byte or the byte at the
    /// effective address.
    pub(crate) fn operand_value(&self, mode: AddressingMode) -> Result<u8, ExecutionError> {
        match self.decode_operand(mode) {
            Operand::Immediate(value) => Ok(value),
            Operand::Address(addr) => Ok(self.memory.read(addr)),
            Operand::Accumulator => Ok(self.a),
            Operand::Implied | Operand::Relative(_) => Err(self.illegal_opcode()),
        }
    }

    /// Effective address an instruction writes to.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> Result<u16, ExecutionError> {
        match self.decode_operand(mode) {
            Operand::Address(addr) => Ok(addr),
            _ => Err(self.illegal_opcode()),
        }
    }

    /// Signed displacement of a relative branch.
    pub(crate) fn branch_offset(&self, mode: AddressingMode) -> Result<i8, ExecutionError> {
        match self.decode_operand(mode) {
            Operand::Relative(offset) => Ok(offset),
            _ => Err(self.illegal_opcode()),
        }
    }

    /// Error for the opcode at PC, used when a table entry pairs an instruction
    /// with a mode it has no behavior for.
    pub(crate) fn illegal_opcode(&self) -> ExecutionError {
        ExecutionError::IllegalOpcode {
            opcode: self.memory.read(self.pc),
            address: self.pc,
        }
    }

    // ========== Register Access ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.flags.bits()
    }

    /// Replaces every flag from a packed status byte.
    pub fn set_status(&mut self, bits: u8) {
        self.flags = StatusFlags::from_bits(bits);
    }

    /// Returns a copy of the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Number of instructions executed since construction or reset.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// True once BRK has executed.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Enables logging a [`TraceRecord`] per instruction at `trace` level.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// Trace record of the most recently executed instruction.
    pub fn last_trace(&self) -> Option<TraceRecord> {
        self.last_trace
    }

    // ========== Status Flags ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flags.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    /// Sets or clears the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flags.negative = value;
    }

    /// Sets or clears the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flags.overflow = value;
    }

    /// Sets or clears the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flags.break_command = value;
    }

    /// Sets or clears the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flags.decimal = value;
    }

    /// Sets or clears the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flags.interrupt_disable = value;
    }

    /// Sets or clears the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Sets or clears the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }

    // ========== Memory Access ==========

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU, returning its memory bus.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_with(program: &[u8]) -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write_word(RESET_VECTOR, 0x8000);
        mem.load(0x8000, program);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = cpu_with(&[]);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0x00);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.instructions(), 0);
        assert!(!cpu.is_halted());
    }

    #[test]
    fn test_illegal_opcode_leaves_state() {
        let mut cpu = cpu_with(&[0x02]);

        let err = cpu.step().unwrap_err();

        assert_eq!(
            err,
            ExecutionError::IllegalOpcode {
                opcode: 0x02,
                address: 0x8000
            }
        );
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.instructions(), 0);
    }

    #[test]
    fn test_halted_cpu_stays_halted() {
        let mut cpu = cpu_with(&[0x00]);

        assert_eq!(cpu.step(), Ok(StepOutcome::Halted));
        assert_eq!(cpu.step(), Ok(StepOutcome::Halted));
        assert_eq!(cpu.instructions(), 1);
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_reset_clears_halt_and_registers() {
        let mut cpu = cpu_with(&[0xA9, 0x80, 0x00]);
        cpu.run().unwrap();
        assert!(cpu.is_halted());

        cpu.reset();

        assert!(!cpu.is_halted());
        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.last_trace(), None);
    }

    #[test]
    fn test_run_for_stops_at_limit() {
        // NOP; BCC -3 (back to the NOP)
        let mut cpu = cpu_with(&[0xEA, 0x90, 0xFD]);

        let outcome = cpu.run_for(10).unwrap();

        assert_eq!(outcome, RunOutcome::StepLimit { instructions: 10 });
        assert_eq!(cpu.pc(), 0x8000);
    }

    #[test]
    fn test_trace_record_after_step() {
        let mut cpu = cpu_with(&[0xA9, 0x41]);
        cpu.step().unwrap();

        let record = cpu.last_trace().unwrap();
        assert_eq!(record.pc, 0x8000);
        assert_eq!(record.opcode, 0xA9);
        assert_eq!(record.a, 0x41);
    }

    #[test]
    fn test_decode_zero_page_x_wraps() {
        let mut cpu = cpu_with(&[0xEA, 0xF0]);
        cpu.set_x(0x20);
        assert_eq!(
            cpu.decode_operand(AddressingMode::ZeroPageX),
            Operand::Address(0x0010)
        );
    }

    #[test]
    fn test_decode_indirect_page_bug() {
        let mut cpu = cpu_with(&[0x6C, 0xFF, 0x10]);
        cpu.memory_mut().write(0x10FF, 0x34);
        cpu.memory_mut().write(0x1000, 0x12);
        cpu.memory_mut().write(0x1100, 0x56);

        assert_eq!(
            cpu.decode_operand(AddressingMode::Indirect),
            Operand::Address(0x1234)
        );
    }

    #[test]
    fn test_decode_indirect_indexed() {
        let mut cpu = cpu_with(&[0xB1, 0x40]);
        cpu.memory_mut().write_word(0x0040, 0x2000);
        cpu.set_y(0x05);

        assert_eq!(
            cpu.decode_operand(AddressingMode::IndirectY),
            Operand::Address(0x2005)
        );
    }

    #[test]
    fn test_decode_indexed_indirect_wraps_in_zero_page() {
        let mut cpu = cpu_with(&[0xA1, 0xFE]);
        cpu.set_x(0x01);
        cpu.memory_mut().write(0x00FF, 0x00);
        cpu.memory_mut().write(0x0000, 0x30);

        assert_eq!(
            cpu.decode_operand(AddressingMode::IndirectX),
            Operand::Address(0x3000)
        );
    }
}
