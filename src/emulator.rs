//! High-level machine: a CPU on a [`SystemBus`] built from an [`EmulatorConfig`].

use crate::config::EmulatorConfig;
use crate::cpu::{RunOutcome, CPU};
use crate::devices::SystemBus;
use crate::error::EmulatorError;
use crate::loader;

/// A ready-to-run machine.
///
/// # Examples
///
/// ```
/// use mini6502::{Emulator, EmulatorConfig, RunOutcome};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let out = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&out);
///
/// // LDA #$41; STA $C000; BRK
/// let image = [0xA9, 0x41, 0x8D, 0x00, 0xC0, 0x00];
/// let mut emu = Emulator::from_image(&image, EmulatorConfig::default(), move |byte| {
///     sink.borrow_mut().push(byte)
/// });
///
/// assert_eq!(emu.run().unwrap(), RunOutcome::Halted { instructions: 3 });
/// assert_eq!(out.borrow().as_slice(), b"A");
/// ```
pub struct Emulator {
    config: EmulatorConfig,
    cpu: CPU<SystemBus>,
}

impl Emulator {
    /// Reads `config.image` from disk and builds the machine.
    pub fn from_config<F>(config: EmulatorConfig, on_output: F) -> Result<Self, EmulatorError>
    where
        F: Fn(u8) + 'static,
    {
        let image = loader::read_image(&config.image)?;
        Ok(Self::from_image(&image, config, on_output))
    }

    /// Builds the machine from an in-memory image. `config.image` is ignored.
    pub fn from_image<F>(image: &[u8], config: EmulatorConfig, on_output: F) -> Self
    where
        F: Fn(u8) + 'static,
    {
        let mut bus = SystemBus::new(config.port_address, config.port_mode);
        bus.port_mut().set_transmit_callback(on_output);

        loader::load_image(bus.ram_mut(), config.load_address, image);
        if !config.keep_vector {
            loader::install_reset_vector(bus.ram_mut(), config.entry);
        }

        let mut cpu = CPU::new(bus);
        cpu.set_trace(config.trace);
        log::debug!("starting at 0x{:04X}", cpu.pc());

        Self { config, cpu }
    }

    /// Runs until BRK, an illegal opcode, or the configured step limit.
    pub fn run(&mut self) -> Result<RunOutcome, EmulatorError> {
        let outcome = match self.config.max_steps {
            Some(limit) => self.cpu.run_for(limit)?,
            None => self.cpu.run()?,
        };
        Ok(outcome)
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    pub fn cpu(&self) -> &CPU<SystemBus> {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU<SystemBus> {
        &mut self.cpu
    }
}
