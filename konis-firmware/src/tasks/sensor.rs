//! Sensor polling task
//!
//! The only writer of the digit buffer. Reads one measurement per cycle
//! in the active mode, publishes it, and sounds the warning tone at or
//! above the alarm threshold. A rejected frame leaves the display on its
//! previous value and skips the alarm check for that cycle.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Delay, Timer};

use konis_core::alarm::{alarm_required, TonePlan};
use konis_core::panel::MAX_DISPLAY_VALUE;
use konis_drivers::{Buzzer, LinkError, Pms7003};

use crate::channels::{active_mode, publish_value, REFRESH};

/// Interval between sensor polls in milliseconds
pub const POLL_INTERVAL_MS: u64 = 500;

/// Sensor task - polls the PMS7003 and publishes readings
#[embassy_executor::task]
pub async fn sensor_task(rx: BufferedUartRx, buzzer_pin: Output<'static>) {
    info!("Sensor task started");

    let mut link = Pms7003::new(rx);
    let mut buzzer = Buzzer::new(buzzer_pin, Delay);
    let warning = TonePlan::warning();

    loop {
        let mode = active_mode();

        // Blocks until a frame arrives; a silent sensor stalls this task
        // while the scan task keeps the display alive with stale digits
        match link.read_measurement(mode).await {
            Ok(raw) => {
                let value = raw.min(MAX_DISPLAY_VALUE);
                publish_value(value);
                debug!("Reading {} ({:?})", value, mode);

                if alarm_required(value) {
                    warn!("Reading {} at or above threshold, sounding alarm", value);
                    // Holds this task for the tone's full duration
                    let _ = buzzer.play(&warning).await;
                }
            }
            // Keep the previous display value; no retry, no backoff
            Err(LinkError::Frame(_)) => debug!("Out-of-sync frame header, skipping cycle"),
            Err(_) => warn!("Sensor link read error"),
        }

        // Wait out the poll interval unless a mode change requests an
        // immediate refresh
        match select(Timer::after_millis(POLL_INTERVAL_MS), REFRESH.wait()).await {
            Either::First(()) | Either::Second(()) => {}
        }
    }
}
