//! Hardware driver implementations
//!
//! This crate provides generic drivers for the indicator's peripherals,
//! written against the embedded-hal / embedded-io traits so they stay
//! testable on the host:
//!
//! - PMS7003 sensor link (receive-only UART)
//! - Multiplexed 4-digit seven-segment panel output stage
//! - Indicator LED bank
//! - Buzzer tone output

#![no_std]
#![deny(unsafe_code)]

pub mod buzzer;
pub mod display;
pub mod indicator;
pub mod sensor;

pub use buzzer::Buzzer;
pub use display::SegmentPanel;
pub use indicator::IndicatorLeds;
pub use sensor::{LinkError, Pms7003};
