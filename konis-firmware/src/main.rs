//! Konis - Particulate-Matter Indicator Firmware
//!
//! Main firmware binary for RP2040-based indicator boards: reads a
//! PMS7003 particulate sensor over UART, multiplexes a 4-digit
//! seven-segment panel, shows the active mode on three LEDs, and sounds
//! a buzzer above the alarm threshold.
//!
//! Named after the Greek "konis" (κόνις) meaning "dust" - the airborne
//! particulate matter this device measures.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART1;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use konis_core::indicator::indicator_lines;
use konis_drivers::{IndicatorLeds, SegmentPanel};

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART1_IRQ => BufferedInterruptHandler<UART1>;
});

// Static cells for UART buffers (must live forever)
// The sensor link is receive-only; the TX buffer stays minimal
static TX_BUF: StaticCell<[u8; 16]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Konis firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sensor UART: 9600 baud, receive-only (the PMS7003 pushes frames
    // unprompted)
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = 9_600;
        cfg
    };

    let tx_buf = TX_BUF.init([0u8; 16]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART1, p.PIN_4, p.PIN_5, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (_tx, rx) = uart.split();

    info!("Sensor UART initialized");

    // Segment bus on GPIO2-9, digit-select lines on GPIO10-13
    let segments = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_21, Level::Low),
        Output::new(p.PIN_22, Level::Low),
    ];
    let selects = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];
    let panel = SegmentPanel::new(segments, selects).unwrap();

    info!("Display panel initialized");

    // Indicator LEDs on GPIO16-18, lit for the power-on mode before the
    // first frame arrives
    let mut leds = IndicatorLeds::new([
        Output::new(p.PIN_16, Level::Low),
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
    ]);
    leds.show(indicator_lines(channels::active_mode())).unwrap();

    // Buzzer on GPIO20, mode button on GPIO15 (active-low, pulled up)
    let buzzer_pin = Output::new(p.PIN_20, Level::Low);
    let button = Input::new(p.PIN_15, Pull::Up);

    info!("Indicator LEDs, buzzer and button initialized");

    // Spawn tasks
    spawner.spawn(tasks::scan_task(panel)).unwrap();
    spawner.spawn(tasks::sensor_task(rx, buzzer_pin)).unwrap();
    spawner.spawn(tasks::button_task(button, leds)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
