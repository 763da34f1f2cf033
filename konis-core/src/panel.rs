//! Digit buffer and multiplexed display scan logic.
//!
//! The panel is a 4-digit seven-segment display driven one position at a
//! time: each scan tick blanks the panel, puts one digit's segment pattern
//! on the segment bus, and raises that digit's select line. At the 1 ms
//! scan interval a full rotation completes every 4 ms, fast enough for
//! persistence of vision.

/// Seven-segment patterns for the decimal digits 0-9
pub const SEGMENTS: [u8; 10] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F,
];

/// Digit-select line mask per position, most-significant digit first
pub const DIGIT_SELECT: [u8; 4] = [0x08, 0x04, 0x02, 0x01];

/// Number of digit positions on the panel
pub const DIGIT_COUNT: usize = 4;

/// Largest value the panel can show; readings saturate here
pub const MAX_DISPLAY_VALUE: u16 = 999;

/// Interval between scan ticks in milliseconds
pub const SCAN_INTERVAL_MS: u64 = 1;

/// The four decimal digits currently published for display
///
/// The first position is a fixed zero placeholder: values are capped at
/// 999, so a true thousands digit is never produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer {
    digits: [u8; DIGIT_COUNT],
}

impl DigitBuffer {
    /// An all-zero buffer (panel blank until the first reading arrives)
    pub const fn new() -> Self {
        Self {
            digits: [0; DIGIT_COUNT],
        }
    }

    /// Decompose a value into display digits, saturating at 999
    ///
    /// The result is `[0, v/100, (v/10)%10, v%10]`.
    pub fn set_value(&mut self, value: u16) {
        let v = value.min(MAX_DISPLAY_VALUE);
        self.digits = [
            0,
            ((v / 100) % 10) as u8,
            ((v / 10) % 10) as u8,
            (v % 10) as u8,
        ];
    }

    /// Current digit values, most-significant first
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.digits
    }
}

impl Default for DigitBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Output of one scan tick: what to put on the two buses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanFrame {
    /// Segment bus pattern for the active position
    pub segments: u8,
    /// Digit-select mask with exactly the active position's bit set
    pub select: u8,
}

/// Round-robin position tracker for the display scanner
///
/// Exclusively owned by the scan task; nothing else reads or advances it.
#[derive(Debug, Clone)]
pub struct ScanCursor {
    position: usize,
}

impl ScanCursor {
    /// Start scanning at the most-significant position
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Produce the bus patterns for the current position and advance
    ///
    /// Position 0 renders blank exactly when the first three digits are
    /// all zero. The first digit is the fixed thousands placeholder, so in
    /// practice only values below 10 blank this position; the hundreds and
    /// tens positions always render their digits, zeros included.
    pub fn step(&mut self, buffer: &DigitBuffer) -> ScanFrame {
        let idx = self.position;
        let digits = buffer.digits;

        let segments = if idx == 0 && digits[0] == 0 && digits[1] == 0 && digits[2] == 0 {
            0x00
        } else {
            SEGMENTS[digits[idx] as usize]
        };

        self.position = (self.position + 1) % DIGIT_COUNT;

        ScanFrame {
            segments,
            select: DIGIT_SELECT[idx],
        }
    }
}

impl Default for ScanCursor {
    fn default() -> Self {
        Self::new()
    }
}
