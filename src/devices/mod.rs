//! Memory-mapped device support.
//!
//! The emulated machine has 64KB of flat RAM with one memory-mapped output port
//! overlaid on it (0xC000 by default). [`SystemBus`] routes CPU accesses: the port
//! address goes to the [`OutputPort`], everything else to [`FlatMemory`].
//!
//! # Example
//!
//! ```rust
//! use mini6502::{MemoryBus, PortMode, SystemBus};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let out = Rc::new(RefCell::new(String::new()));
//! let sink = Rc::clone(&out);
//!
//! let mut bus = SystemBus::new(0xC000, PortMode::WriteOnly);
//! bus.port_mut()
//!     .set_transmit_callback(move |byte| sink.borrow_mut().push(byte as char));
//!
//! bus.write(0xC000, b'A');
//! assert_eq!(out.borrow().as_str(), "A");
//! assert_eq!(bus.read(0xC000), 0x00); // write-only: RAM untouched
//! ```

use crate::{FlatMemory, MemoryBus};

pub mod output_port;

pub use output_port::OutputPort;

/// Default address of the output port.
pub const DEFAULT_PORT_ADDRESS: u16 = 0xC000;

/// Abstract interface for memory-mapped hardware devices.
///
/// Devices receive an offset relative to their base address (0 to size-1) rather
/// than the absolute bus address.
pub trait Device {
    /// Read byte from device at offset relative to device base address.
    fn read(&self, offset: u16) -> u8;

    /// Write byte to device at offset relative to device base address.
    fn write(&mut self, offset: u16, value: u8);

    /// Return size of device's address space in bytes.
    fn size(&self) -> u16;
}

/// What a write to the output port does to the RAM underneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PortMode {
    /// The byte is emitted and not stored. Reads of the port address return the
    /// RAM contents, which port writes never change.
    #[default]
    WriteOnly,

    /// The byte is emitted and latched by the port. Reads of the port address
    /// return the latch (zero until the first write) instead of RAM.
    WriteThrough,
}

/// The machine's memory bus: flat RAM plus the output port.
pub struct SystemBus {
    ram: FlatMemory,
    port: OutputPort,
    port_addr: u16,
    mode: PortMode,
}

impl SystemBus {
    /// Create a zeroed bus with the port mapped at `port_addr`.
    pub fn new(port_addr: u16, mode: PortMode) -> Self {
        Self {
            ram: FlatMemory::new(),
            port: OutputPort::new(),
            port_addr,
            mode,
        }
    }

    /// Address the output port is mapped at.
    pub fn port_address(&self) -> u16 {
        self.port_addr
    }

    pub fn port_mode(&self) -> PortMode {
        self.mode
    }

    pub fn port(&self) -> &OutputPort {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut OutputPort {
        &mut self.port
    }

    /// Offset into the port's register window if `addr` falls inside it.
    fn port_offset(&self, addr: u16) -> Option<u16> {
        let offset = addr.wrapping_sub(self.port_addr);
        (offset < self.port.size()).then_some(offset)
    }

    /// Backing RAM, bypassing the port.
    pub fn ram(&self) -> &FlatMemory {
        &self.ram
    }

    /// Mutable backing RAM, bypassing the port. Used by the loader.
    pub fn ram_mut(&mut self) -> &mut FlatMemory {
        &mut self.ram
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new(DEFAULT_PORT_ADDRESS, PortMode::default())
    }
}

impl MemoryBus for SystemBus {
    fn read(&self, addr: u16) -> u8 {
        match (self.mode, self.port_offset(addr)) {
            (PortMode::WriteThrough, Some(offset)) => self.port.read(offset),
            _ => self.ram.read(addr),
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match self.port_offset(addr) {
            Some(offset) => self.port.write(offset, value),
            None => self.ram.write(addr, value),
        }
    }
}
