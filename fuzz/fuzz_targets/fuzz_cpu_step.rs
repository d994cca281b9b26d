//! Fuzz target for CPU step execution.
//!
//! Starts the CPU from an arbitrary register file and instruction bytes, runs a
//! few steps over the system bus, and checks the step contract.

#![no_main]

use arbitrary::Arbitrary;
use mini6502::{ExecutionError, MemoryBus, PortMode, StepOutcome, SystemBus, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
    start: u16,
    write_through: bool,
    /// Bytes placed at the start address
    program: [u8; 16],
}

fuzz_target!(|input: FuzzInput| {
    let mode = if input.write_through {
        PortMode::WriteThrough
    } else {
        PortMode::WriteOnly
    };
    let mut bus = SystemBus::new(0xC000, mode);
    bus.ram_mut().load(input.start, &input.program);
    bus.ram_mut().write_word(0xFFFC, input.start);

    let mut cpu = CPU::new(bus);
    cpu.set_a(input.a);
    cpu.set_x(input.x);
    cpu.set_y(input.y);
    cpu.set_sp(input.sp);
    cpu.set_status(input.status);

    for _ in 0..16 {
        let pc = cpu.pc();
        let before = cpu.status();
        match cpu.step() {
            Ok(StepOutcome::Continue) => {}
            Ok(StepOutcome::Halted) => {
                assert_eq!(cpu.pc(), pc);
                assert_eq!(cpu.status(), before);
                break;
            }
            Err(ExecutionError::IllegalOpcode { address, .. }) => {
                // Illegal opcodes leave the CPU where it faulted
                assert_eq!(address, pc);
                assert_eq!(cpu.pc(), pc);
                break;
            }
        }
    }
});
