//! WASM API for the emulator.

use crate::{Emulator, EmulatorConfig, RunOutcome, StepOutcome};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Browser-facing emulator.
///
/// Bytes written to the output port are passed to `on_transmit` as one-character
/// strings.
#[wasm_bindgen]
pub struct WasmEmulator {
    emulator: Emulator,
    image: Vec<u8>,
    on_transmit: js_sys::Function,
}

fn build(image: &[u8], on_transmit: &js_sys::Function) -> Emulator {
    let callback = on_transmit.clone();
    Emulator::from_image(image, EmulatorConfig::default(), move |byte| {
        let text = (byte as char).to_string();
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&text));
    })
}

#[wasm_bindgen]
impl WasmEmulator {
    /// Create an emulator with empty memory.
    #[wasm_bindgen(constructor)]
    pub fn new(on_transmit: js_sys::Function) -> Self {
        let emulator = build(&[], &on_transmit);
        WasmEmulator {
            emulator,
            image: Vec::new(),
            on_transmit,
        }
    }

    /// Load a program image at address 0 and reset.
    pub fn load(&mut self, image: &[u8]) {
        self.image = image.to_vec();
        self.emulator = build(&self.image, &self.on_transmit);
    }

    /// Reload the current image and reset the CPU.
    pub fn reset(&mut self) {
        self.emulator = build(&self.image, &self.on_transmit);
    }

    /// Execute one instruction. Returns true once the program has halted.
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.emulator
            .cpu_mut()
            .step()
            .map(|outcome| outcome == StepOutcome::Halted)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Run at most `max_steps` instructions. Returns true if BRK was reached.
    pub fn run(&mut self, max_steps: u32) -> Result<bool, JsError> {
        self.emulator
            .cpu_mut()
            .run_for(max_steps as u64)
            .map(|outcome| matches!(outcome, RunOutcome::Halted { .. }))
            .map_err(|e| JsError::new(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.emulator.cpu().a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.emulator.cpu().x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.emulator.cpu().y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.emulator.cpu().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.emulator.cpu().sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.emulator.cpu().status()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.emulator.cpu().is_halted()
    }
}
