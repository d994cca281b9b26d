//! WebAssembly bindings for the emulator.
//!
//! JavaScript drives a [`WasmEmulator`]: load an image, step or run it, and
//! receive port output through a callback.

pub mod api;

pub use api::WasmEmulator;
