//! Display scan task
//!
//! Multiplexes the 4-digit panel at 1 kHz, one position per tick, so a
//! full rotation completes every 4 ms. Runs on its own ticker and keeps
//! the display alive with the last published digits even when the sensor
//! link stalls.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Ticker};

use konis_core::panel::{ScanCursor, SCAN_INTERVAL_MS};
use konis_drivers::SegmentPanel;

use crate::channels::current_digits;

/// Display scan task - renders one digit position per tick
#[embassy_executor::task]
pub async fn scan_task(mut panel: SegmentPanel<Output<'static>>) {
    info!("Display scan task started");

    let mut cursor = ScanCursor::new();
    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));

    loop {
        ticker.next().await;

        // Snapshot the digits inside the critical section, render outside
        let digits = current_digits();
        let frame = cursor.step(&digits);

        // RP2040 GPIO writes are infallible
        let _ = panel.apply(&frame);
    }
}
