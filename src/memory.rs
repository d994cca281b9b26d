//! # Memory Bus Abstraction
//!
//! The `MemoryBus` trait decouples the CPU from the memory behind it. `FlatMemory`
//! is plain 64KB RAM; `SystemBus` (in `devices`) overlays the output port on it.
//!
//! Following 6502 hardware there are no bus errors: every 16-bit address is valid
//! and reads/writes always succeed.

/// Memory bus trait for CPU to read/write bytes.
///
/// # Examples
///
/// ```
/// use mini6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write_word(0xFFFC, 0x8000);
/// assert_eq!(mem.read(0xFFFC), 0x00);
/// assert_eq!(mem.read(0xFFFD), 0x80);
/// assert_eq!(mem.read_word(0xFFFC), 0x8000);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Implementations may attach side effects to particular addresses.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word as two byte writes, low byte first.
    fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }
}

/// Simple 64KB flat memory.
///
/// All 65536 addresses are writable RAM initialized to 0x00.
pub struct FlatMemory {
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Copies `bytes` into memory starting at `offset`.
    ///
    /// Addresses wrap past 0xFFFF. At most 65536 bytes are copied; the number of
    /// bytes actually copied is returned.
    ///
    /// ```
    /// use mini6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// assert_eq!(mem.load(0xFFFF, &[0x11, 0x22]), 2);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, offset: u16, bytes: &[u8]) -> usize {
        let count = bytes.len().min(self.data.len());
        let mut addr = offset;
        for &byte in &bytes[..count] {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
        count
    }

    /// Returns the whole address space as a slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
