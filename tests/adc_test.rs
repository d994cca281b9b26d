//! Tests for the ADC (Add with Carry) immediate instruction.
//!
//! Only Z and N are computed; C and V pass through unchanged.

use mini6502::{FlatMemory, MemoryBus, CPU};

fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn adc(cpu: &mut CPU<FlatMemory>, operand: u8) {
    cpu.memory_mut().write(0x8000, 0x69);
    cpu.memory_mut().write(0x8001, operand);
    cpu.step().unwrap();
}

#[test]
fn test_adc_simple_addition() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);

    adc(&mut cpu, 0x20);

    assert_eq!(cpu.a(), 0x30);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_adc_adds_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x10);
    cpu.set_flag_c(true);

    adc(&mut cpu, 0x20);

    assert_eq!(cpu.a(), 0x31);
}

#[test]
fn test_adc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(false);

    adc(&mut cpu, 0x01);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_adc_wraps_with_carry_in() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(true);

    adc(&mut cpu, 0xFF);

    // 0xFF + 0xFF + 1 = 0x1FF
    assert_eq!(cpu.a(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_adc_sets_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x7F);

    adc(&mut cpu, 0x01);

    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_adc_leaves_carry_and_overflow() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_c(true);
    cpu.set_flag_v(false);

    adc(&mut cpu, 0x80);

    assert!(cpu.flag_c(), "carry-out is not computed");
    assert!(!cpu.flag_v(), "overflow is not computed");
}
