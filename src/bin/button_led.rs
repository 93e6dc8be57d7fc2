//! Button LED Queue - RP2040 firmware
//!
//! Samples the button on GPIO 5 every 100 ms and mirrors it onto the LED on
//! GPIO 12 through a five-entry queue:
//! - pressed (line low) → LED on
//! - released (line high) → LED off

#![no_std]
#![no_main]

use defmt::*;
use embassy_time::Delay;
use panic_halt as _;
use defmt_rtt as _;
use static_cell::StaticCell;

use button_led_queue::channels::StateQueue;
use button_led_queue::hardware::{self, Board, RpScheduler};
use button_led_queue::startup;

static STATE_QUEUE: StaticCell<StateQueue> = StaticCell::new();

/// Main application entry point
#[cortex_m_rt::entry]
fn main() -> ! {
    // Initialize hardware
    let p = embassy_rp::init(Default::default());

    startup::print_startup_banner();

    let board = Board::new(p);
    let mut scheduler = RpScheduler::new();

    // Only returns if the queue or a task could not be set up
    if let Err(e) = startup::launch(&mut scheduler, &STATE_QUEUE, board.button, board.led, Delay) {
        error!("Startup failed: {}", e);
    }

    hardware::idle()
}
