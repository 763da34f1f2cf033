//! Output stage for the multiplexed seven-segment panel.
//!
//! Eight segment lines and four digit-select lines, driven from the
//! `ScanFrame` the core scan logic produces each tick. The select lines
//! are dropped before the segment bus changes so the outgoing digit never
//! ghosts onto the incoming position.

use embedded_hal::digital::OutputPin;

use konis_core::panel::{ScanFrame, DIGIT_COUNT, DIGIT_SELECT};

/// Number of segment bus lines
pub const SEGMENT_LINES: usize = 8;

/// Multiplexed 4-digit seven-segment panel
pub struct SegmentPanel<P> {
    segments: [P; SEGMENT_LINES],
    selects: [P; DIGIT_COUNT],
}

impl<P: OutputPin> SegmentPanel<P> {
    /// Take ownership of the bus pins, starting with the panel dark
    pub fn new(
        segments: [P; SEGMENT_LINES],
        selects: [P; DIGIT_COUNT],
    ) -> Result<Self, P::Error> {
        let mut panel = Self { segments, selects };
        panel.blank()?;
        Ok(panel)
    }

    /// Drop every select line, turning the panel fully dark
    pub fn blank(&mut self) -> Result<(), P::Error> {
        for select in &mut self.selects {
            select.set_low()?;
        }
        Ok(())
    }

    /// Drive one scan tick: blank, set the segment bus, raise one select
    pub fn apply(&mut self, frame: &ScanFrame) -> Result<(), P::Error> {
        self.blank()?;

        for (bit, segment) in self.segments.iter_mut().enumerate() {
            if frame.segments & (1 << bit) != 0 {
                segment.set_high()?;
            } else {
                segment.set_low()?;
            }
        }

        for (idx, select) in self.selects.iter_mut().enumerate() {
            if frame.select & DIGIT_SELECT[idx] != 0 {
                select.set_high()?;
            }
        }

        Ok(())
    }
}
