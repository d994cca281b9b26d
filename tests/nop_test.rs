//! Tests for the NOP (No Operation) instruction.
//!
//! Tests cover:
//! - PC advances by one
//! - Registers and flags remain unchanged
//! - Consecutive NOPs

use mini6502::{FlatMemory, MemoryBus, StepOutcome, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_nop_changes_only_pc() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x8000, 0xEA);
    cpu.set_a(0x12);
    cpu.set_x(0x34);
    cpu.set_y(0x56);
    cpu.set_sp(0x78);
    cpu.set_status(0xC3);

    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));

    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.x(), 0x34);
    assert_eq!(cpu.y(), 0x56);
    assert_eq!(cpu.sp(), 0x78);
    assert_eq!(cpu.status(), 0xC3);
}

#[test]
fn test_nop_sequence() {
    let mut cpu = setup_cpu();
    for addr in 0x8000..0x8004 {
        cpu.memory_mut().write(addr, 0xEA);
    }

    for _ in 0..4 {
        cpu.step().unwrap();
    }

    assert_eq!(cpu.pc(), 0x8004);
    assert_eq!(cpu.instructions(), 4);
}
