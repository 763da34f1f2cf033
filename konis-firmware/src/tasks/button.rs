//! Mode button task
//!
//! Waits for a falling edge, debounces, and on a confirmed press advances
//! the mode, rewrites the indicator LEDs, and asks the sensor task for an
//! immediate refresh. The sensor read stays out of the edge path so the
//! display scan's latency budget is never at risk.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::Timer;

use konis_core::button::{ButtonAction, LineLevel, ModeButton, DEBOUNCE_MS, RELEASE_POLL_MS};
use konis_core::indicator::indicator_lines;
use konis_drivers::IndicatorLeds;

use crate::channels::{advance_mode, REFRESH};

fn level_of(button: &Input<'_>) -> LineLevel {
    if button.is_low() {
        LineLevel::Low
    } else {
        LineLevel::High
    }
}

/// Button task - cycles the measurement mode on debounced presses
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, mut leds: IndicatorLeds<Output<'static>>) {
    info!("Button task started");

    let mut handler = ModeButton::new();

    loop {
        button.wait_for_falling_edge().await;
        if !handler.edge() {
            continue;
        }

        // Debounce window, then confirm the line is still held
        Timer::after_millis(DEBOUNCE_MS).await;
        match handler.debounce_sample(level_of(&button)) {
            Some(ButtonAction::AdvanceMode) => {
                let mode = advance_mode();
                info!("Mode -> {:?}", mode);

                // RP2040 GPIO writes are infallible
                let _ = leds.show(indicator_lines(mode));
                REFRESH.signal(());

                // Hold here until the button is released
                while !handler.release_sample(level_of(&button)) {
                    Timer::after_millis(RELEASE_POLL_MS).await;
                }
                debug!("Button released");
            }
            None => {
                trace!("Spurious edge ignored");
            }
        }
    }
}
