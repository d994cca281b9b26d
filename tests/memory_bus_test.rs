//! Memory bus trait tests

use mini6502::{FlatMemory, MemoryBus, PortMode, SystemBus};

#[test]
fn test_flat_memory_initialization() {
    let memory = FlatMemory::new();

    for addr in [0x0000, 0x1234, 0x8000, 0xFFFF].iter() {
        assert_eq!(
            memory.read(*addr),
            0x00,
            "Memory at 0x{:04X} should be initialized to 0",
            addr
        );
    }
}

#[test]
fn test_flat_memory_read_write_round_trip() {
    let mut memory = FlatMemory::new();

    let test_data = [
        (0x0000, 0x01),
        (0x00FF, 0xFF),
        (0x0100, 0x7F),
        (0x1234, 0x42),
        (0x8000, 0xAB),
        (0xFFFF, 0xCD),
    ];

    for &(addr, value) in &test_data {
        memory.write(addr, value);
        assert_eq!(
            memory.read(addr),
            value,
            "Memory at 0x{:04X} should contain 0x{:02X}",
            addr,
            value
        );
    }
}

#[test]
fn test_word_is_little_endian() {
    let mut memory = FlatMemory::new();

    memory.write_word(0x1000, 0xABCD);

    assert_eq!(memory.read(0x1000), 0xCD);
    assert_eq!(memory.read(0x1001), 0xAB);
    assert_eq!(memory.read_word(0x1000), 0xABCD);
}

#[test]
fn test_system_bus_behaves_like_ram_off_port() {
    let mut bus = SystemBus::new(0xC000, PortMode::WriteOnly);

    bus.write(0x1234, 0x42);
    bus.write_word(0xFFFC, 0x0600);

    assert_eq!(bus.read(0x1234), 0x42);
    assert_eq!(bus.read_word(0xFFFC), 0x0600);
    assert_eq!(bus.port().transmitted(), 0);
}

#[test]
fn test_port_read_in_write_only_mode_sees_ram() {
    let mut bus = SystemBus::new(0xC000, PortMode::WriteOnly);
    bus.ram_mut().write(0xC000, 0x7F);

    bus.write(0xC000, 0x41);

    assert_eq!(bus.read(0xC000), 0x7F);
    assert_eq!(bus.port().transmitted(), 1);
}

#[test]
fn test_port_read_in_write_through_mode_sees_latch() {
    let mut bus = SystemBus::new(0xC000, PortMode::WriteThrough);
    bus.ram_mut().write(0xC000, 0x7F);

    assert_eq!(bus.read(0xC000), 0x00);

    bus.write(0xC000, 0x41);
    bus.write(0xC000, 0x42);

    assert_eq!(bus.read(0xC000), 0x42);
    assert_eq!(bus.ram().read(0xC000), 0x7F);
    assert_eq!(bus.port().transmitted(), 2);
}
