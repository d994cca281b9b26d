//! Write-triggered console output port.
//!
//! A single-register device: every byte written to it is handed to a transmit
//! callback. The CLI's callback prints the byte to stdout.

use super::Device;

/// Memory-mapped output port.
///
/// The port occupies one address. Writes invoke the transmit callback immediately;
/// there is no buffering. Reads return the last byte written. The
/// [`SystemBus`](super::SystemBus) routes CPU reads of the port address here only
/// in [`PortMode::WriteThrough`](super::PortMode::WriteThrough); in write-only
/// mode they see RAM.
///
/// # Example
///
/// ```rust
/// use mini6502::{Device, OutputPort};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let sent = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&sent);
///
/// let mut port = OutputPort::new();
/// port.set_transmit_callback(move |byte| sink.borrow_mut().push(byte));
///
/// port.write(0, b'O');
/// port.write(0, b'K');
/// assert_eq!(sent.borrow().as_slice(), b"OK");
/// ```
#[derive(Default)]
pub struct OutputPort {
    last_written: u8,
    transmitted: u64,
    on_transmit: Option<Box<dyn Fn(u8)>>,
}

impl OutputPort {
    /// Create a port with no transmit callback. Written bytes are dropped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback invoked with each written byte.
    pub fn set_transmit_callback<F>(&mut self, callback: F)
    where
        F: Fn(u8) + 'static,
    {
        self.on_transmit = Some(Box::new(callback));
    }

    /// Number of bytes written to the port so far.
    pub fn transmitted(&self) -> u64 {
        self.transmitted
    }
}

impl Device for OutputPort {
    fn read(&self, _offset: u16) -> u8 {
        self.last_written
    }

    fn write(&mut self, _offset: u16, value: u8) {
        self.last_written = value;
        self.transmitted += 1;

        if let Some(ref callback) = self.on_transmit {
            callback(value);
        }
    }

    fn size(&self) -> u16 {
        1
    }
}

impl std::fmt::Debug for OutputPort {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("OutputPort")
            .field("last_written", &self.last_written)
            .field("transmitted", &self.transmitted)
            .field("on_transmit", &self.on_transmit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_write_invokes_callback() {
        let transmitted = Rc::new(RefCell::new(Vec::new()));
        let transmitted_clone = Rc::clone(&transmitted);

        let mut port = OutputPort::new();
        port.set_transmit_callback(move |byte| {
            transmitted_clone.borrow_mut().push(byte);
        });

        port.write(0, 0x42);
        port.write(0, 0x43);

        assert_eq!(*transmitted.borrow(), vec![0x42, 0x43]);
        assert_eq!(port.transmitted(), 2);
        assert_eq!(port.read(0), 0x43);
    }

    #[test]
    fn test_write_without_callback_is_dropped() {
        let mut port = OutputPort::new();
        port.write(0, 0x41);
        assert_eq!(port.transmitted(), 1);
    }
}
