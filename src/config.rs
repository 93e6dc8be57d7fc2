//! Hardware configuration for the button → LED firmware
//! RP2040 (Raspberry Pi Pico) with one push button and one LED

// ===================================================================
// Firmware Identification
// ===================================================================

pub const FIRMWARE_NAME: &str = "Button LED Queue";
pub const TARGET_NAME: &str = "RP2040 (Raspberry Pi Pico)";

// ===================================================================
// GPIO Pin Assignments - Raspberry Pi Pico
// ===================================================================

pub const BUTTON_PIN: u8 = 5; // Push button to GND, internal pull-up
pub const LED_PIN: u8 = 12; // Red LED, active high

// ===================================================================
// Task Configuration
// ===================================================================

pub const SAMPLE_PERIOD_MS: u32 = 100; // Button sampling period
pub const QUEUE_DEPTH: usize = 5; // Sampled states buffered between tasks

// Both tasks run at the same priority on a single thread-mode executor.
pub const TASK_PRIORITY: u8 = 1;
// Stack budget of the reference design. Embassy tasks are statically
// sized futures, so this is reported in the banner only.
pub const TASK_STACK_WORDS: usize = 128;
