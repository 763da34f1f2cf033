//! Alarm threshold and tone timing.
//!
//! Readings at or above the threshold (after saturation to the display
//! range) sound a fixed warning tone. Tone timing is precomputed as a
//! half-period plus cycle count using the same integer arithmetic the
//! buzzer driver replays.

/// Concentration threshold, in the displayed (saturated) unit
pub const ALARM_THRESHOLD: u16 = 75;

/// Warning tone frequency in hertz
pub const WARNING_TONE_HZ: u32 = 2_000;

/// Warning tone duration in milliseconds
pub const WARNING_TONE_MS: u32 = 300;

/// Whether a saturated reading must sound the alarm
pub fn alarm_required(saturated: u16) -> bool {
    saturated >= ALARM_THRESHOLD
}

/// Precomputed square-wave timing for one tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TonePlan {
    /// Half of the square-wave period, in microseconds
    pub half_period_us: u32,
    /// Number of full high/low cycles to emit
    pub cycles: u32,
}

impl TonePlan {
    /// Plan a tone of the given frequency and total duration
    pub const fn new(freq_hz: u32, duration_ms: u32) -> Self {
        let half_period_us = 500_000 / freq_hz;
        let cycles = duration_ms * 1_000 / (2 * half_period_us);
        Self {
            half_period_us,
            cycles,
        }
    }

    /// The fixed warning tone (~2 kHz for ~300 ms)
    pub const fn warning() -> Self {
        Self::new(WARNING_TONE_HZ, WARNING_TONE_MS)
    }
}
