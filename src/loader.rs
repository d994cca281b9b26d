//! Program image loading.
//!
//! An image is a raw binary copied into RAM at a load address (0 by default).
//! There is no ROM, so the loader also writes the reset vector the CPU starts from.

use crate::cpu::RESET_VECTOR;
use crate::error::LoadError;
use crate::{FlatMemory, MemoryBus};
use std::path::Path;

/// Size of the address space; longer images are truncated.
pub const MAX_IMAGE_SIZE: usize = 0x10000;

/// Reads a program image from disk.
pub fn read_image(path: &Path) -> Result<Vec<u8>, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Copies `image` into `ram` starting at `load_address`.
///
/// Returns the number of bytes copied. Bytes past the 64KB limit are dropped
/// with a warning.
pub fn load_image(ram: &mut FlatMemory, load_address: u16, image: &[u8]) -> usize {
    if image.len() > MAX_IMAGE_SIZE {
        log::warn!(
            "program image is {} bytes, only the first {} are loaded",
            image.len(),
            MAX_IMAGE_SIZE
        );
    }
    let loaded = ram.load(load_address, image);
    log::debug!("loaded {} bytes at 0x{:04X}", loaded, load_address);
    loaded
}

/// Points the reset vector at `entry`.
pub fn install_reset_vector<M: MemoryBus>(memory: &mut M, entry: u16) {
    memory.write_word(RESET_VECTOR, entry);
}
