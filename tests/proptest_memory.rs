//! Property-based tests for memory and the system bus.

use mini6502::{FlatMemory, MemoryBus, PortMode, SystemBus};
use proptest::prelude::*;

const PORT: u16 = 0xC000;

proptest! {
    /// Property: a byte written to any non-port address reads back unchanged
    #[test]
    fn prop_byte_round_trip(addr in any::<u16>(), value in any::<u8>()) {
        prop_assume!(addr != PORT);
        let mut bus = SystemBus::new(PORT, PortMode::WriteOnly);

        bus.write(addr, value);

        prop_assert_eq!(bus.read(addr), value);
    }

    /// Property: a little-endian word round-trips when neither byte is the port
    #[test]
    fn prop_word_round_trip(addr in any::<u16>(), value in any::<u16>()) {
        prop_assume!(addr != PORT && addr.wrapping_add(1) != PORT);
        let mut bus = SystemBus::new(PORT, PortMode::WriteOnly);

        bus.write_word(addr, value);

        prop_assert_eq!(bus.read_word(addr), value);
        prop_assert_eq!(bus.read(addr), (value & 0xFF) as u8);
        prop_assert_eq!(bus.read(addr.wrapping_add(1)), (value >> 8) as u8);
    }

    /// Property: a write touches exactly one address
    #[test]
    fn prop_write_is_local(addr in any::<u16>(), other in any::<u16>(), value in 1u8..=255) {
        prop_assume!(addr != other);
        let mut memory = FlatMemory::new();

        memory.write(addr, value);

        prop_assert_eq!(memory.read(other), 0);
    }

    /// Property: write-only port writes never reach RAM
    #[test]
    fn prop_port_write_only(preloaded in any::<u8>(), value in any::<u8>()) {
        let mut bus = SystemBus::new(PORT, PortMode::WriteOnly);
        bus.ram_mut().write(PORT, preloaded);

        bus.write(PORT, value);

        prop_assert_eq!(bus.read(PORT), preloaded);
        prop_assert_eq!(bus.port().transmitted(), 1);
    }
}
