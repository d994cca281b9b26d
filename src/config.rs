//! Emulator configuration.

use crate::devices::{PortMode, DEFAULT_PORT_ADDRESS};
use std::path::PathBuf;

/// Image file loaded when none is given.
pub const DEFAULT_IMAGE: &str = "o6502.bin";

/// Everything needed to build and run an [`Emulator`](crate::Emulator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmulatorConfig {
    /// Program image to load.
    pub image: PathBuf,
    /// Address the first image byte is loaded at.
    pub load_address: u16,
    /// Address written into the reset vector before the CPU starts.
    pub entry: u16,
    /// Leave the reset vector as the image left it instead of writing `entry`.
    pub keep_vector: bool,
    /// Address of the output port.
    pub port_address: u16,
    pub port_mode: PortMode,
    /// Stop after this many instructions. `None` runs until BRK.
    pub max_steps: Option<u64>,
    /// Log a trace record for every instruction.
    pub trace: bool,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            image: PathBuf::from(DEFAULT_IMAGE),
            load_address: 0x0000,
            entry: 0x0000,
            keep_vector: false,
            port_address: DEFAULT_PORT_ADDRESS,
            port_mode: PortMode::WriteOnly,
            max_steps: None,
            trace: false,
        }
    }
}

/// Parses an address or count written as decimal, `0x` hex or `$` hex.
///
/// ```
/// use mini6502::config::parse_number;
///
/// assert_eq!(parse_number("49152"), Ok(0xC000));
/// assert_eq!(parse_number("0xC000"), Ok(0xC000));
/// assert_eq!(parse_number("$c000"), Ok(0xC000));
/// assert!(parse_number("0x").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('$'))
    {
        (hex, 16)
    } else {
        (text, 10)
    };
    u64::from_str_radix(digits, radix).map_err(|e| format!("invalid number `{}`: {}", text, e))
}

/// Parses a 16-bit address in any form accepted by [`parse_number`].
pub fn parse_address(text: &str) -> Result<u16, String> {
    let value = parse_number(text)?;
    u16::try_from(value).map_err(|_| format!("address `{}` is outside 0x0000-0xFFFF", text))
}
