//! # mini6502
//!
//! A small NMOS 6502 emulator. It runs an opcode subset (BRK, NOP, CLC, LDA #,
//! STA abs, ADC #, CMP #, BCC) over a flat 64KB address space with one
//! memory-mapped output port.
//!
//! ## Quick Start
//!
//! ```rust
//! use mini6502::{CPU, FlatMemory, MemoryBus, RunOutcome};
//!
//! let mut memory = FlatMemory::new();
//! memory.write_word(0xFFFC, 0x0000);
//! // LDA #$FF; CLC; ADC #$01; BRK
//! memory.load(0x0000, &[0xA9, 0xFF, 0x18, 0x69, 0x01, 0x00]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.run(), Ok(RunOutcome::Halted { instructions: 4 }));
//! assert_eq!(cpu.a(), 0x00);
//! assert!(cpu.flag_z());
//! ```
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and flat RAM
//! - `devices` - output port and the system bus
//! - `flags` - status register model
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `loader` - program image loading
//! - `trace` - per-instruction trace records

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod devices;
pub mod emulator;
pub mod error;
pub mod flags;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod trace;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use addressing::AddressingMode;
pub use config::EmulatorConfig;
pub use cpu::{Operand, RunOutcome, StepOutcome, CPU};
pub use devices::{Device, OutputPort, PortMode, SystemBus};
pub use emulator::Emulator;
pub use error::{EmulatorError, ExecutionError, LoadError};
pub use flags::StatusFlags;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use trace::TraceRecord;
