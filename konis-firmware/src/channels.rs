//! Cross-task shared state
//!
//! One explicitly owned record per shared field, each with a single
//! designated writer enforced by task ownership:
//! - digit buffer: written by the sensor task, read by the 1 kHz scan task
//! - measurement mode: written by the button task, read by the sensor task
//!
//! Every multi-byte digit update happens inside a bounded critical
//! section, so the scan task can never observe a half-written buffer.

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use konis_core::panel::DigitBuffer;
use konis_protocol::PmMode;

/// Digits currently published for display
static DIGITS: Mutex<CriticalSectionRawMutex, Cell<DigitBuffer>> =
    Mutex::new(Cell::new(DigitBuffer::new()));

/// Active measurement mode; the device powers on showing PM2.5
static MODE: Mutex<CriticalSectionRawMutex, Cell<PmMode>> = Mutex::new(Cell::new(PmMode::Pm2_5));

/// Raised by the button task so the sensor task polls again immediately
/// instead of waiting out the remainder of the poll interval
pub static REFRESH: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Publish a saturated reading to the display
pub fn publish_value(value: u16) {
    DIGITS.lock(|digits| {
        let mut buffer = digits.get();
        buffer.set_value(value);
        digits.set(buffer);
    });
}

/// Snapshot of the published digits
pub fn current_digits() -> DigitBuffer {
    DIGITS.lock(|digits| digits.get())
}

/// The mode measurements are currently taken in
pub fn active_mode() -> PmMode {
    MODE.lock(|mode| mode.get())
}

/// Advance the mode to its cyclic successor and return the new mode
pub fn advance_mode() -> PmMode {
    MODE.lock(|mode| {
        let next = mode.get().next();
        mode.set(next);
        next
    })
}
