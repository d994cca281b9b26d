//! # Processor Status Flags
//!
//! The 6502 status register (P) holds eight independent condition bits. They are
//! kept here as named booleans; [`StatusFlags::bits`] and
//! [`StatusFlags::from_bits`] convert to and from the packed byte.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag |
//! |-----|------|
//! | 7   | N (Negative) |
//! | 6   | V (Overflow) |
//! | 5   | unused |
//! | 4   | B (Break) |
//! | 3   | D (Decimal) |
//! | 2   | I (Interrupt Disable) |
//! | 1   | Z (Zero) |
//! | 0   | C (Carry) |

pub const CARRY: u8 = 1 << 0;
pub const ZERO: u8 = 1 << 1;
pub const INTERRUPT_DISABLE: u8 = 1 << 2;
pub const DECIMAL: u8 = 1 << 3;
pub const BREAK: u8 = 1 << 4;
pub const UNUSED: u8 = 1 << 5;
pub const OVERFLOW: u8 = 1 << 6;
pub const NEGATIVE: u8 = 1 << 7;

/// Returns true if `value` should set the Zero flag.
pub const fn is_zero(value: u8) -> bool {
    value == 0
}

/// Returns true if `value` should set the Negative flag (bit 7 set).
pub const fn is_negative(value: u8) -> bool {
    value & 0x80 != 0
}

/// Named view of the packed status register.
///
/// # Examples
///
/// ```
/// use mini6502::StatusFlags;
///
/// let mut p = StatusFlags::default();
/// p.set_carry();
/// p.update_zn(0x80);
/// assert_eq!(p.carry(), 1);
/// assert_eq!(p.bits(), 0b1000_0001);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusFlags {
    pub negative: bool,
    pub overflow: bool,
    /// Bit 5 has no hardware meaning but is stored so that the byte round-trips.
    pub unused: bool,
    pub break_command: bool,
    pub decimal: bool,
    pub interrupt_disable: bool,
    pub zero: bool,
    pub carry: bool,
}

impl StatusFlags {
    /// Unpacks a status byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            negative: bits & NEGATIVE != 0,
            overflow: bits & OVERFLOW != 0,
            unused: bits & UNUSED != 0,
            break_command: bits & BREAK != 0,
            decimal: bits & DECIMAL != 0,
            interrupt_disable: bits & INTERRUPT_DISABLE != 0,
            zero: bits & ZERO != 0,
            carry: bits & CARRY != 0,
        }
    }

    /// Packs the flags into a status byte.
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.negative {
            bits |= NEGATIVE;
        }
        if self.overflow {
            bits |= OVERFLOW;
        }
        if self.unused {
            bits |= UNUSED;
        }
        if self.break_command {
            bits |= BREAK;
        }
        if self.decimal {
            bits |= DECIMAL;
        }
        if self.interrupt_disable {
            bits |= INTERRUPT_DISABLE;
        }
        if self.zero {
            bits |= ZERO;
        }
        if self.carry {
            bits |= CARRY;
        }
        bits
    }

    pub fn set_zero(&mut self) {
        self.zero = true;
    }

    pub fn clear_zero(&mut self) {
        self.zero = false;
    }

    pub fn set_negative(&mut self) {
        self.negative = true;
    }

    pub fn clear_negative(&mut self) {
        self.negative = false;
    }

    pub fn set_carry(&mut self) {
        self.carry = true;
    }

    pub fn clear_carry(&mut self) {
        self.carry = false;
    }

    /// Carry as 0 or 1, ready to be added into a result.
    pub fn carry(&self) -> u8 {
        self.carry as u8
    }

    /// Recomputes Z and N from a result byte.
    pub fn update_zn(&mut self, value: u8) {
        if is_zero(value) {
            self.set_zero();
        } else {
            self.clear_zero();
        }
        if is_negative(value) {
            self.set_negative();
        } else {
            self.clear_negative();
        }
    }
}

impl From<u8> for StatusFlags {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions() {
        let mut p = StatusFlags::default();
        p.set_carry();
        assert_eq!(p.bits(), 0x01);
        p.clear_carry();
        p.set_zero();
        assert_eq!(p.bits(), 0x02);
        p.clear_zero();
        p.set_negative();
        assert_eq!(p.bits(), 0x80);
    }

    #[test]
    fn test_every_byte_round_trips() {
        for bits in 0..=255u8 {
            assert_eq!(StatusFlags::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_mutators_leave_other_bits_alone() {
        let mut p = StatusFlags::from_bits(0xFF);
        p.clear_carry();
        assert_eq!(p.bits(), 0xFE);
        p.clear_zero();
        assert_eq!(p.bits(), 0xFC);
        p.clear_negative();
        assert_eq!(p.bits(), 0x7C);
    }

    #[test]
    fn test_carry_is_numeric() {
        let mut p = StatusFlags::default();
        assert_eq!(p.carry(), 0);
        p.set_carry();
        assert_eq!(p.carry(), 1);
    }

    #[test]
    fn test_update_zn() {
        let mut p = StatusFlags::default();
        p.update_zn(0x00);
        assert!(p.zero && !p.negative);
        p.update_zn(0x80);
        assert!(!p.zero && p.negative);
        p.update_zn(0x7F);
        assert!(!p.zero && !p.negative);
    }
}
