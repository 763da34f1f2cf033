//! Board-agnostic core logic for the particulate indicator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Digit buffer and multiplexed display scan logic
//! - Mode-button state machine (debounce + release tracking)
//! - Indicator-line pattern for the active mode
//! - Alarm threshold and tone timing

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod button;
pub mod indicator;
pub mod panel;
